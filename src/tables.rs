//! Static parameter tables for ATRAC9 decoding
//!
//! This module contains the constant tables indexed directly by bitstream
//! fields: sample-rate profiles, the quantization-unit layout, channel
//! configurations, scale-factor weighting curves and the band-extension
//! group layout. Lookup helpers check the index and hand back a typed row.

use crate::error::{TableError, TableResult};
use crate::types::BlockType::{Lfe, Mono, Stereo};
use crate::types::{
    ChannelConfig, QuantizationUnit, SampleRateProfile, CHANNEL_CONFIG_COUNT,
    MAX_BAND_COUNT, MAX_QUANT_UNITS, SAMPLE_RATE_INDEX_COUNT,
};

/// Sample rate in Hz per sample-rate index
pub const SAMPLE_RATES: [u32; SAMPLE_RATE_INDEX_COUNT] = [
    11025, 12000, 16000, 22050, 24000, 32000, 44100, 48000, // standard
    44100, 48000, 64000, 88200, 96000, 128000, 176400, 192000, // high
];

/// log2 of the frame length per sample-rate index
pub const SAMPLE_RATE_INDEX_TO_FRAME_SIZE_POWER: [u8; SAMPLE_RATE_INDEX_COUNT] =
    [6, 6, 7, 7, 7, 8, 8, 8, 6, 6, 7, 7, 7, 8, 8, 8];

/// Maximum band count per sample-rate index
pub const MAX_BAND_COUNTS: [u8; SAMPLE_RATE_INDEX_COUNT] =
    [8, 8, 12, 12, 12, 18, 18, 18, 8, 8, 12, 12, 12, 16, 16, 16];

/// Quantization units covered by the first `n` bands
pub const BAND_TO_QUANT_UNIT_COUNT: [u8; MAX_BAND_COUNT + 1] = [
    0, 4, 8, 10, 12, 13, 14, 15, 16, 18, 20, 21, 22, 23, 24, 25, 26, 28, 30,
];

pub const QUANT_UNIT_TO_COEFF_COUNT: [u8; MAX_QUANT_UNITS] = [
    2, 2, 2, 2, 2, 2, 2, 2, 4, 4, 4, 4, 8, 8, 8, //
    8, 8, 8, 8, 8, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16,
];

/// First coefficient of each unit; the last entry is the block length
pub const QUANT_UNIT_TO_COEFF_INDEX: [u16; MAX_QUANT_UNITS + 1] = [
    0, 2, 4, 6, 8, 10, 12, 14, 16, 20, 24, 28, 32, 40, 48, 56, //
    64, 72, 80, 88, 96, 112, 128, 144, 160, 176, 192, 208, 224, 240, 256,
];

pub const QUANT_UNIT_TO_CODEBOOK_INDEX: [u8; MAX_QUANT_UNITS] = [
    0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, //
    2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3,
];

/// Block layouts per channel-configuration index
pub const CHANNEL_CONFIGS: [ChannelConfig; CHANNEL_CONFIG_COUNT] = [
    ChannelConfig { blocks: &[Mono] },
    ChannelConfig { blocks: &[Mono, Mono] },
    ChannelConfig { blocks: &[Stereo] },
    ChannelConfig { blocks: &[Stereo, Mono, Lfe, Stereo] },
    ChannelConfig { blocks: &[Stereo, Mono, Lfe, Stereo, Stereo] },
    ChannelConfig { blocks: &[Stereo, Stereo] },
];

/// Scale-factor weighting curves, selected by the weighting mode field
pub static SCALE_FACTOR_WEIGHTS: [[u8; 32]; 8] = [
    [
        0, 0, 0, 1, 1, 2, 2, 2, 2, 2, 2, 3, 2, 3, 3, 4, 4, 4, 4, 4, 4, 5, 5, 6, 6, 7, 7, 8, 10, 12, 12, 12,
    ],
    [
        3, 2, 2, 1, 1, 1, 1, 1, 0, 1, 1, 1, 0, 0, 0, 1, 0, 1, 1, 1, 1, 1, 1, 2, 3, 3, 4, 5, 7, 10, 10, 10,
    ],
    [
        0, 2, 4, 5, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 7, 7, 7, 7, 8, 9, 12, 12, 12,
    ],
    [
        0, 1, 1, 2, 2, 2, 3, 3, 3, 3, 3, 4, 4, 4, 5, 5, 5, 6, 6, 6, 6, 7, 8, 8, 10, 11, 11, 12, 13, 13, 13, 13,
    ],
    [
        0, 2, 2, 3, 3, 4, 4, 5, 4, 5, 5, 5, 5, 6, 7, 8, 8, 8, 8, 9, 9, 9, 10, 10, 11, 12, 12, 13, 13, 14, 14, 14,
    ],
    [
        1, 1, 0, 0, 0, 0, 1, 0, 0, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 3, 3, 3, 4, 4, 5, 6, 7, 7, 9, 11, 11, 11,
    ],
    [
        0, 5, 8, 10, 11, 11, 12, 12, 12, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 12, 12, 12,
        12, 13, 15, 15, 15,
    ],
    [
        0, 2, 3, 4, 5, 6, 6, 7, 7, 8, 8, 8, 9, 9, 10, 10, 10, 11, 11, 11, 11, 11, 11, 12, 12, 12, 12, 13, 13,
        15, 15, 15,
    ],
];

/// Smallest quantization unit count that carries band extension
pub const BEX_MIN_QUANT_UNITS: usize = 13;

/// Band-extension layout per quantization unit count 13..20:
/// (group A start unit, group B start unit, band-count bucket)
pub const BEX_GROUP_INFO: [[u8; 3]; 8] = [
    [16, 21, 0],
    [18, 22, 1],
    [20, 22, 2],
    [21, 22, 3],
    [21, 22, 3],
    [23, 24, 4],
    [23, 24, 4],
    [24, 24, 5],
];

pub fn max_huffman_precision(high_sample_rate: bool) -> u8 {
    if high_sample_rate {
        1
    } else {
        7
    }
}

pub fn min_band_count(high_sample_rate: bool) -> u8 {
    if high_sample_rate {
        1
    } else {
        3
    }
}

pub fn max_extension_band(high_sample_rate: bool) -> u8 {
    if high_sample_rate {
        16
    } else {
        18
    }
}

/// Look up the profile for a sample-rate index
pub fn sample_rate_profile(index: usize) -> TableResult<SampleRateProfile> {
    if index >= SAMPLE_RATE_INDEX_COUNT {
        return Err(TableError::out_of_range("sample rate", index, "0..16"));
    }
    Ok(SampleRateProfile {
        index,
        sample_rate: SAMPLE_RATES[index],
        frame_size_power: SAMPLE_RATE_INDEX_TO_FRAME_SIZE_POWER[index],
        max_band_count: MAX_BAND_COUNTS[index],
    })
}

/// Look up the layout of one quantization unit
pub fn quant_unit(index: usize) -> TableResult<QuantizationUnit> {
    if index >= MAX_QUANT_UNITS {
        return Err(TableError::out_of_range("quantization unit", index, "0..30"));
    }
    Ok(QuantizationUnit {
        index,
        coeff_count: QUANT_UNIT_TO_COEFF_COUNT[index],
        coeff_offset: QUANT_UNIT_TO_COEFF_INDEX[index],
        codebook_group: QUANT_UNIT_TO_CODEBOOK_INDEX[index],
    })
}

/// Quantization units in use for a given band count
pub fn quant_unit_count(band_count: usize) -> TableResult<usize> {
    BAND_TO_QUANT_UNIT_COUNT
        .get(band_count)
        .map(|&count| count as usize)
        .ok_or_else(|| TableError::out_of_range("band count", band_count, "0..=18"))
}

pub fn channel_config(index: usize) -> TableResult<ChannelConfig> {
    CHANNEL_CONFIGS
        .get(index)
        .copied()
        .ok_or_else(|| TableError::out_of_range("channel config", index, "0..6"))
}

pub fn scale_factor_weights(mode: usize) -> TableResult<&'static [u8; 32]> {
    SCALE_FACTOR_WEIGHTS
        .get(mode)
        .ok_or_else(|| TableError::out_of_range("scale factor weights", mode, "0..8"))
}

/// Band-extension group layout for a block with `quant_unit_count` units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BexGroup {
    pub group_a_unit: u8,
    pub group_b_unit: u8,
    /// Band-count bucket used to index the parameter set
    pub band_bucket: u8,
}

pub fn bex_group(quant_unit_count: usize) -> TableResult<BexGroup> {
    let row = quant_unit_count
        .checked_sub(BEX_MIN_QUANT_UNITS)
        .and_then(|offset| BEX_GROUP_INFO.get(offset))
        .ok_or_else(|| TableError::out_of_range("bex group", quant_unit_count, "13..=20"))?;
    Ok(BexGroup {
        group_a_unit: row[0],
        group_b_unit: row[1],
        band_bucket: row[2],
    })
}

/// Check the cross-table invariants of the layout constants
pub(crate) fn validate_layout() -> TableResult<()> {
    let mut offset = 0u16;
    for (unit, &count) in QUANT_UNIT_TO_COEFF_COUNT.iter().enumerate() {
        if QUANT_UNIT_TO_COEFF_INDEX[unit] != offset {
            return Err(TableError::malformed(
                "quantization unit",
                format!("unit {} starts at {}, expected {}", unit, QUANT_UNIT_TO_COEFF_INDEX[unit], offset),
            ));
        }
        offset += count as u16;
    }
    if QUANT_UNIT_TO_COEFF_INDEX[MAX_QUANT_UNITS] != offset {
        return Err(TableError::malformed(
            "quantization unit",
            format!("final offset {} does not close the layout at {}", QUANT_UNIT_TO_COEFF_INDEX[MAX_QUANT_UNITS], offset),
        ));
    }
    if QUANT_UNIT_TO_CODEBOOK_INDEX.windows(2).any(|pair| pair[0] > pair[1]) {
        return Err(TableError::malformed("quantization unit", "codebook group decreases"));
    }
    if BAND_TO_QUANT_UNIT_COUNT[MAX_BAND_COUNT] as usize != MAX_QUANT_UNITS {
        return Err(TableError::malformed("band count", "widest band count must cover every unit"));
    }
    for half in SAMPLE_RATE_INDEX_TO_FRAME_SIZE_POWER.chunks(8).zip(MAX_BAND_COUNTS.chunks(8)) {
        let (powers, bands) = half;
        if powers.windows(2).any(|p| p[0] > p[1]) || bands.windows(2).any(|b| b[0] > b[1]) {
            return Err(TableError::malformed("sample rate", "profile is not monotone within its half"));
        }
    }
    Ok(())
}
