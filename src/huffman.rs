//! Canonical Huffman codebooks for ATRAC9 decoding
//!
//! A codebook is built from compiled-in code data, either explicit
//! `(code, length)` pairs or bare code lengths that are assigned canonically
//! in `(length, symbol)` order. Construction fails fast on any data that
//! would make the resulting table ambiguous.
//!
//! Lookups go through a direct table of `2^max_bits` slots: the caller peeks
//! `max_bits` upcoming bits (MSB first) and [`HuffmanCodebook::resolve`]
//! returns the symbol whose codeword prefixes that window.
//!
//! Grouped codebooks pack several elementary values into one symbol. The
//! symbol index is a positional number in radix `2^value_bits`; value `j`
//! is digit `j` counted from the least significant end.

use crate::config::MAX_CODE_LENGTH;
use crate::error::{TableError, TableResult};

/// Largest number of elementary values one grouped symbol carries
pub const MAX_ARITY: usize = 4;

const NO_SYMBOL: u16 = u16::MAX;

/// How a decoded symbol maps to elementary values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "diagnostics", derive(serde::Serialize))]
pub enum Grouping {
    /// One symbol is one value
    Direct,
    /// One symbol is `arity` values of `radix_bits` bits each
    Grouped { radix_bits: u8, arity: u8 },
}

impl Grouping {
    /// Grouping for a format group size `g`, which packs `2^g` values
    pub fn from_group_size(symbol_count: usize, group_size: u8) -> TableResult<Self> {
        if group_size == 0 {
            return Ok(Grouping::Direct);
        }
        let arity = 1usize << group_size;
        if arity > MAX_ARITY || !symbol_count.is_power_of_two() {
            return Err(TableError::malformed(
                "huffman",
                format!("group size {} cannot pack {} symbols", group_size, symbol_count),
            ));
        }
        let total_bits = symbol_count.trailing_zeros() as usize;
        if total_bits % arity != 0 {
            return Err(TableError::malformed(
                "huffman",
                format!("{} symbols do not split into {} equal digits", symbol_count, arity),
            ));
        }
        Ok(Grouping::Grouped {
            radix_bits: (total_bits / arity) as u8,
            arity: arity as u8,
        })
    }

    pub fn arity(&self) -> usize {
        match *self {
            Grouping::Direct => 1,
            Grouping::Grouped { arity, .. } => arity as usize,
        }
    }
}

/// Whether elementary values are two's-complement in `value_bits` bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "diagnostics", derive(serde::Serialize))]
pub enum Signedness {
    Unsigned,
    Signed,
}

/// Static description of a codebook being built
#[derive(Debug, Clone, Copy)]
pub struct CodebookDesc {
    /// Name used in diagnostics
    pub name: &'static str,
    pub group_size: u8,
    pub signedness: Signedness,
    /// Longest codeword accepted
    pub max_code_length: u8,
}

impl CodebookDesc {
    pub fn new(name: &'static str, group_size: u8, signedness: Signedness) -> Self {
        Self {
            name,
            group_size,
            signedness,
            max_code_length: MAX_CODE_LENGTH,
        }
    }

    pub fn with_max_code_length(mut self, bits: u8) -> Self {
        self.max_code_length = bits;
        self
    }
}

/// One codeword of a built codebook
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeEntry {
    pub code: u16,
    pub length: u8,
    pub symbol: u16,
}

/// Elementary values of one decoded symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupValues {
    values: [i32; MAX_ARITY],
    len: usize,
}

impl GroupValues {
    pub fn as_slice(&self) -> &[i32] {
        &self.values[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Immutable canonical prefix-code table
#[derive(Debug, Clone, PartialEq)]
pub struct HuffmanCodebook {
    name: &'static str,
    /// Codewords indexed by symbol; unused symbols have length 0
    entries: Vec<CodeEntry>,
    /// Symbol per `max_bits` window, `NO_SYMBOL` where no codeword matches
    lookup: Vec<u16>,
    max_bits: u8,
    value_bits: u8,
    grouping: Grouping,
    signedness: Signedness,
}

impl HuffmanCodebook {
    /// Build a codebook from explicit codewords, one per symbol
    ///
    /// A length of zero marks a symbol that is never coded.
    pub fn from_codes(desc: &CodebookDesc, codes: &[u16], lengths: &[u8]) -> TableResult<Self> {
        if codes.len() != lengths.len() {
            return Err(TableError::malformed(
                desc.name,
                format!("{} codes but {} lengths", codes.len(), lengths.len()),
            ));
        }
        let symbol_count = codes.len();
        if symbol_count == 0 || symbol_count > NO_SYMBOL as usize {
            return Err(TableError::malformed(
                desc.name,
                format!("unsupported symbol count {}", symbol_count),
            ));
        }
        if !symbol_count.is_power_of_two() {
            return Err(TableError::malformed(
                desc.name,
                format!("symbol count {} is not a power of two", symbol_count),
            ));
        }

        let grouping = Grouping::from_group_size(symbol_count, desc.group_size)
            .map_err(|err| rename(err, desc.name))?;
        let value_bits = (symbol_count.trailing_zeros() as usize / grouping.arity()) as u8;

        let limit = desc.max_code_length.min(MAX_CODE_LENGTH);
        let mut max_bits = 0u8;
        for (symbol, (&code, &length)) in codes.iter().zip(lengths).enumerate() {
            if length > limit {
                return Err(TableError::malformed(
                    desc.name,
                    format!("symbol {} has length {} (limit {})", symbol, length, limit),
                ));
            }
            if length > 0 && (code as u32) >> length != 0 {
                return Err(TableError::malformed(
                    desc.name,
                    format!("symbol {} code {:#x} does not fit in {} bits", symbol, code, length),
                ));
            }
            max_bits = max_bits.max(length);
        }
        if max_bits == 0 {
            return Err(TableError::malformed(desc.name, "no symbol has a codeword"));
        }

        let mut lookup = vec![NO_SYMBOL; 1 << max_bits];
        let mut entries = Vec::with_capacity(symbol_count);
        for (symbol, (&code, &length)) in codes.iter().zip(lengths).enumerate() {
            entries.push(CodeEntry {
                code,
                length,
                symbol: symbol as u16,
            });
            if length == 0 {
                continue;
            }
            let unused_bits = max_bits - length;
            let start = (code as usize) << unused_bits;
            let end = start + (1 << unused_bits);
            for slot in &mut lookup[start..end] {
                if *slot != NO_SYMBOL {
                    let other = entries[*slot as usize];
                    return Err(TableError::malformed(
                        desc.name,
                        format!(
                            "codeword {:0w1$b} (symbol {}) collides with {:0w2$b} (symbol {})",
                            code,
                            symbol,
                            other.code,
                            other.symbol,
                            w1 = length as usize,
                            w2 = other.length as usize,
                        ),
                    ));
                }
                *slot = symbol as u16;
            }
        }

        log::trace!(
            "Built codebook {}: {} symbols, max {} bits, {:?}",
            desc.name,
            symbol_count,
            max_bits,
            grouping
        );

        Ok(Self {
            name: desc.name,
            entries,
            lookup,
            max_bits,
            value_bits,
            grouping,
            signedness: desc.signedness,
        })
    }

    /// Build a codebook from code lengths with canonical code assignment
    pub fn from_lengths(desc: &CodebookDesc, lengths: &[u8]) -> TableResult<Self> {
        let codes = canonical_codes(desc.name, lengths)?;
        Self::from_codes(desc, &codes, lengths)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Width of the lookup window in bits
    pub fn max_bits(&self) -> u8 {
        self.max_bits
    }

    pub fn symbol_count(&self) -> usize {
        self.entries.len()
    }

    pub fn grouping(&self) -> Grouping {
        self.grouping
    }

    pub fn signedness(&self) -> Signedness {
        self.signedness
    }

    /// Bits per elementary value
    pub fn value_bits(&self) -> u8 {
        self.value_bits
    }

    /// Elementary values per symbol
    pub fn arity(&self) -> usize {
        self.grouping.arity()
    }

    /// Alphabet size of one elementary value
    pub fn radix(&self) -> usize {
        1 << self.value_bits
    }

    pub fn entries(&self) -> &[CodeEntry] {
        &self.entries
    }

    /// Codeword for `symbol`, `None` for unused or out-of-range symbols
    pub fn code(&self, symbol: usize) -> Option<CodeEntry> {
        self.entries.get(symbol).copied().filter(|entry| entry.length > 0)
    }

    /// Resolve the codeword at the head of a `max_bits` wide window
    ///
    /// Bits of `window` above `max_bits` are ignored. The returned entry's
    /// `length` is the number of bits the caller must consume.
    pub fn resolve(&self, window: u32) -> Option<CodeEntry> {
        let index = (window & ((1u32 << self.max_bits) - 1)) as usize;
        match self.lookup[index] {
            NO_SYMBOL => None,
            symbol => Some(self.entries[symbol as usize]),
        }
    }

    /// Split a symbol into its unsigned digits
    pub fn decompose(&self, symbol: usize) -> TableResult<GroupValues> {
        if symbol >= self.symbol_count() {
            return Err(TableError::OutOfRange {
                table: self.name,
                index: symbol,
                limit: "symbol count",
            });
        }
        let arity = self.arity();
        let mask = (1usize << self.value_bits) - 1;
        let mut values = [0i32; MAX_ARITY];
        let mut rest = symbol;
        for value in values.iter_mut().take(arity) {
            *value = (rest & mask) as i32;
            rest >>= self.value_bits;
        }
        Ok(GroupValues { values, len: arity })
    }

    /// Inverse of [`decompose`](Self::decompose)
    pub fn compose(&self, digits: &[u32]) -> TableResult<usize> {
        if digits.len() != self.arity() {
            return Err(TableError::OutOfRange {
                table: self.name,
                index: digits.len(),
                limit: "arity",
            });
        }
        let mut symbol = 0usize;
        for (position, &digit) in digits.iter().enumerate() {
            if digit as usize >= self.radix() {
                return Err(TableError::OutOfRange {
                    table: self.name,
                    index: digit as usize,
                    limit: "radix",
                });
            }
            symbol |= (digit as usize) << (position * self.value_bits as usize);
        }
        Ok(symbol)
    }

    /// Elementary values of a symbol, sign-extended for signed codebooks
    pub fn values(&self, symbol: usize) -> TableResult<GroupValues> {
        let mut group = self.decompose(symbol)?;
        if self.signedness == Signedness::Signed {
            for value in group.values.iter_mut().take(group.len) {
                *value = sign_extend(*value, self.value_bits);
            }
        }
        Ok(group)
    }

    /// Kraft sum of the code lengths; exactly 1.0 for a complete code
    pub fn kraft_sum(&self) -> f64 {
        self.kraft_units() as f64 / (1u64 << self.max_bits) as f64
    }

    /// True when every bit pattern of `max_bits` bits decodes to a symbol
    pub fn is_complete(&self) -> bool {
        self.kraft_units() == 1u64 << self.max_bits
    }

    fn kraft_units(&self) -> u64 {
        self.entries
            .iter()
            .filter(|entry| entry.length > 0)
            .map(|entry| 1u64 << (self.max_bits - entry.length))
            .sum()
    }
}

/// Assign canonical codewords to code lengths
///
/// Symbols are ordered by length and then by symbol index; each codeword
/// is the previous one plus one, shifted left when the length grows.
pub fn canonical_codes(name: &'static str, lengths: &[u8]) -> TableResult<Vec<u16>> {
    let mut order: Vec<usize> = (0..lengths.len()).filter(|&s| lengths[s] > 0).collect();
    order.sort_by_key(|&symbol| (lengths[symbol], symbol));

    let mut codes = vec![0u16; lengths.len()];
    let mut next: u32 = 0;
    let mut current_length = 0u8;
    for symbol in order {
        let length = lengths[symbol];
        if length > MAX_CODE_LENGTH {
            return Err(TableError::malformed(
                name,
                format!("symbol {} has length {} (limit {})", symbol, length, MAX_CODE_LENGTH),
            ));
        }
        next <<= length - current_length;
        current_length = length;
        if next >> length != 0 {
            return Err(TableError::malformed(
                name,
                format!("code lengths oversubscribe the code space at symbol {}", symbol),
            ));
        }
        codes[symbol] = next as u16;
        next += 1;
    }
    Ok(codes)
}

fn sign_extend(value: i32, bits: u8) -> i32 {
    if bits == 0 {
        return 0;
    }
    let shift = 32 - bits as u32;
    (value << shift) >> shift
}

fn rename(err: TableError, table: &'static str) -> TableError {
    match err {
        TableError::Malformed { reason, .. } => TableError::Malformed { table, reason },
        other => other,
    }
}
