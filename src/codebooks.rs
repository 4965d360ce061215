//! Spectral and scale-factor codebook catalogues
//!
//! Source data is stored as canonical code lengths per symbol. A `None`
//! source means the format defines no codebook for that slot; the built
//! catalogue keeps that distinction so callers get
//! [`TableError::AbsentCodebook`] instead of an empty table.

use std::collections::BTreeMap;

use crate::config::BuildConfig;
use crate::error::{TableError, TableResult};
use crate::huffman::{CodebookDesc, HuffmanCodebook, Signedness};

/// Spectral precisions indexed by the codebook tables (0..=7)
pub const SPECTRUM_PRECISIONS: usize = 8;
/// Codebook groups per precision
pub const SPECTRUM_GROUPS: usize = 4;
/// Unsigned scale-factor precisions (0..=6)
pub const SCALE_FACTOR_UNSIGNED_PRECISIONS: usize = 7;
/// Signed scale-factor precisions (0..=5)
pub const SCALE_FACTOR_SIGNED_PRECISIONS: usize = 6;

/// Spectral codebook family, selected per block by a bitstream flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "diagnostics", derive(serde::Serialize))]
pub enum SpectrumFamily {
    A,
    B,
}

/// Scale-factor codebook set
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "diagnostics", derive(serde::Serialize))]
pub enum ScaleFactorSet {
    /// Absolute scale factors
    Unsigned,
    /// Delta-coded scale factors
    Signed,
}

/// Compiled-in description of one codebook
#[derive(Debug, Clone, Copy)]
pub(crate) struct CodebookSource {
    pub name: &'static str,
    pub lengths: &'static [u8],
    pub group_size: u8,
}

const fn book(name: &'static str, lengths: &'static [u8], group_size: u8) -> Option<CodebookSource> {
    Some(CodebookSource {
        name,
        lengths,
        group_size,
    })
}

// TODO: the flat lengths below stand in for the reference codeword lengths of
// the higher-precision scale-factor books and every spectral book; they keep
// the alphabet sizes and grouping exact but must be replaced with the
// reference data before bit-exact decoding.

pub(crate) const SCALE_FACTORS_UNSIGNED: [Option<CodebookSource>; SCALE_FACTOR_UNSIGNED_PRECISIONS] = [
    None,
    book("sf_unsigned_1", &[1, 1], 0),
    book("sf_unsigned_2", &[1, 3, 3, 2], 0),
    book("sf_unsigned_3", &[2, 2, 4, 6, 6, 5, 3, 2], 0),
    book("sf_unsigned_4", &[4; 16], 0),
    book("sf_unsigned_5", &[5; 32], 0),
    book("sf_unsigned_6", &[6; 64], 0),
];

pub(crate) const SCALE_FACTORS_SIGNED: [Option<CodebookSource>; SCALE_FACTOR_SIGNED_PRECISIONS] = [
    None,
    None,
    book("sf_signed_2", &[2; 4], 0),
    book("sf_signed_3", &[3; 8], 0),
    book("sf_signed_4", &[4; 16], 0),
    book("sf_signed_5", &[5; 32], 0),
];

type SpectrumSources = [[Option<CodebookSource>; SPECTRUM_GROUPS]; SPECTRUM_PRECISIONS];

pub(crate) const SPECTRUM_A: SpectrumSources = [
    [None, None, None, None],
    [None, None, None, None],
    [
        book("spectrum_a_2_0", &[4; 16], 1),
        book("spectrum_a_2_1", &[8; 256], 2),
        book("spectrum_a_2_2", &[8; 256], 2),
        book("spectrum_a_2_3", &[8; 256], 2),
    ],
    [
        book("spectrum_a_3_0", &[6; 64], 1),
        book("spectrum_a_3_1", &[6; 64], 1),
        book("spectrum_a_3_2", &[6; 64], 1),
        book("spectrum_a_3_3", &[6; 64], 1),
    ],
    [
        book("spectrum_a_4_0", &[8; 256], 1),
        book("spectrum_a_4_1", &[8; 256], 1),
        book("spectrum_a_4_2", &[8; 256], 1),
        book("spectrum_a_4_3", &[8; 256], 1),
    ],
    [
        book("spectrum_a_5_0", &[5; 32], 0),
        book("spectrum_a_5_1", &[5; 32], 0),
        book("spectrum_a_5_2", &[5; 32], 0),
        book("spectrum_a_5_3", &[5; 32], 0),
    ],
    [
        book("spectrum_a_6_0", &[6; 64], 0),
        book("spectrum_a_6_1", &[6; 64], 0),
        book("spectrum_a_6_2", &[6; 64], 0),
        book("spectrum_a_6_3", &[6; 64], 0),
    ],
    [
        book("spectrum_a_7_0", &[7; 128], 0),
        book("spectrum_a_7_1", &[7; 128], 0),
        book("spectrum_a_7_2", &[7; 128], 0),
        book("spectrum_a_7_3", &[7; 128], 0),
    ],
];

pub(crate) const SPECTRUM_B: SpectrumSources = [
    [None, None, None, None],
    [None, None, None, None],
    [
        None,
        book("spectrum_b_2_1", &[8; 256], 2),
        book("spectrum_b_2_2", &[8; 256], 2),
        book("spectrum_b_2_3", &[8; 256], 2),
    ],
    [
        None,
        book("spectrum_b_3_1", &[6; 64], 1),
        book("spectrum_b_3_2", &[6; 64], 1),
        book("spectrum_b_3_3", &[6; 64], 1),
    ],
    [
        None,
        book("spectrum_b_4_1", &[8; 256], 1),
        book("spectrum_b_4_2", &[8; 256], 1),
        book("spectrum_b_4_3", &[8; 256], 1),
    ],
    [
        None,
        book("spectrum_b_5_1", &[5; 32], 0),
        book("spectrum_b_5_2", &[5; 32], 0),
        book("spectrum_b_5_3", &[5; 32], 0),
    ],
    [
        None,
        book("spectrum_b_6_1", &[6; 64], 0),
        book("spectrum_b_6_2", &[6; 64], 0),
        book("spectrum_b_6_3", &[6; 64], 0),
    ],
    [
        None,
        book("spectrum_b_7_1", &[7; 128], 0),
        book("spectrum_b_7_2", &[7; 128], 0),
        book("spectrum_b_7_3", &[7; 128], 0),
    ],
];

fn build_source(
    source: &CodebookSource,
    signedness: Signedness,
    config: &BuildConfig,
) -> TableResult<HuffmanCodebook> {
    let desc = CodebookDesc::new(source.name, source.group_size, signedness)
        .with_max_code_length(config.max_code_length);
    let codebook = HuffmanCodebook::from_lengths(&desc, source.lengths)?;
    if config.require_complete_codes && !codebook.is_complete() {
        return Err(TableError::malformed(
            source.name,
            format!("incomplete prefix code (Kraft sum {})", codebook.kraft_sum()),
        ));
    }
    Ok(codebook)
}

/// Spectral codebooks keyed by (family, precision, group)
#[derive(Debug, Clone, PartialEq)]
pub struct SpectrumCodebooks {
    books: BTreeMap<(SpectrumFamily, usize, usize), HuffmanCodebook>,
}

impl SpectrumCodebooks {
    pub(crate) fn build(config: &BuildConfig) -> TableResult<Self> {
        let mut books = BTreeMap::new();
        for (family, sources) in [(SpectrumFamily::A, &SPECTRUM_A), (SpectrumFamily::B, &SPECTRUM_B)] {
            for (precision, row) in sources.iter().enumerate() {
                for (group, slot) in row.iter().enumerate() {
                    if let Some(source) = slot {
                        let codebook = build_source(source, Signedness::Signed, config)?;
                        books.insert((family, precision, group), codebook);
                    }
                }
            }
        }
        log::debug!("Built {} spectral codebooks", books.len());
        Ok(Self { books })
    }

    /// Codebook for a quantization unit's precision and codebook group
    pub fn get(
        &self,
        family: SpectrumFamily,
        precision: usize,
        group: usize,
    ) -> TableResult<&HuffmanCodebook> {
        if precision >= SPECTRUM_PRECISIONS {
            return Err(TableError::out_of_range("spectrum codebook precision", precision, "0..8"));
        }
        if group >= SPECTRUM_GROUPS {
            return Err(TableError::out_of_range("spectrum codebook group", group, "0..4"));
        }
        self.books
            .get(&(family, precision, group))
            .ok_or(TableError::AbsentCodebook {
                set: match family {
                    SpectrumFamily::A => "spectrum A",
                    SpectrumFamily::B => "spectrum B",
                },
                precision,
                group,
            })
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// All present codebooks with their keys
    pub fn iter(&self) -> impl Iterator<Item = ((SpectrumFamily, usize, usize), &HuffmanCodebook)> {
        self.books.iter().map(|(&key, book)| (key, book))
    }
}

/// Scale-factor codebooks keyed by (set, precision)
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleFactorCodebooks {
    books: BTreeMap<(ScaleFactorSet, usize), HuffmanCodebook>,
}

impl ScaleFactorCodebooks {
    pub(crate) fn build(config: &BuildConfig) -> TableResult<Self> {
        let mut books = BTreeMap::new();
        let sets: [(ScaleFactorSet, &[Option<CodebookSource>], Signedness); 2] = [
            (ScaleFactorSet::Unsigned, &SCALE_FACTORS_UNSIGNED, Signedness::Unsigned),
            (ScaleFactorSet::Signed, &SCALE_FACTORS_SIGNED, Signedness::Signed),
        ];
        for (set, sources, signedness) in sets {
            for (precision, slot) in sources.iter().enumerate() {
                if let Some(source) = slot {
                    books.insert((set, precision), build_source(source, signedness, config)?);
                }
            }
        }
        log::debug!("Built {} scale factor codebooks", books.len());
        Ok(Self { books })
    }

    pub fn get(&self, set: ScaleFactorSet, precision: usize) -> TableResult<&HuffmanCodebook> {
        let (limit, name, label) = match set {
            ScaleFactorSet::Unsigned => (SCALE_FACTOR_UNSIGNED_PRECISIONS, "scale factor unsigned", "0..7"),
            ScaleFactorSet::Signed => (SCALE_FACTOR_SIGNED_PRECISIONS, "scale factor signed", "0..6"),
        };
        if precision >= limit {
            return Err(TableError::out_of_range(name, precision, label));
        }
        self.books.get(&(set, precision)).ok_or(TableError::AbsentCodebook {
            set: name,
            precision,
            group: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ((ScaleFactorSet, usize), &HuffmanCodebook)> {
        self.books.iter().map(|(&key, book)| (key, book))
    }
}
