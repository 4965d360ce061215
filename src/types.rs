//! Type definitions for the ATRAC9 parameter tables
//!
//! Plain value types describing one row of a static table. Rows are built
//! on demand from the constants in [`crate::tables`] and are cheap to copy.

#[cfg(feature = "diagnostics")]
use serde::Serialize;

/// Number of sample-rate indices signalled in the config word
pub const SAMPLE_RATE_INDEX_COUNT: usize = 16;
/// Indices at or above this value select the high sample rate classes
pub const HIGH_SAMPLE_RATE_INDEX: usize = 8;
/// Number of quantization units in the widest band configuration
pub const MAX_QUANT_UNITS: usize = 30;
/// Largest band count any sample rate allows
pub const MAX_BAND_COUNT: usize = 18;
/// Coefficients per block at the largest frame size
pub const MAX_FRAME_SAMPLES: usize = 256;
/// Number of channel configurations
pub const CHANNEL_CONFIG_COUNT: usize = 6;
/// Frame-size powers the transform supports
pub const FRAME_SIZE_POWERS: [u8; 3] = [6, 7, 8];

/// Per sample-rate-index decoding parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "diagnostics", derive(Serialize))]
pub struct SampleRateProfile {
    /// Sample-rate index 0..15
    pub index: usize,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// log2 of the frame length
    pub frame_size_power: u8,
    /// Maximum band count for this rate
    pub max_band_count: u8,
}

impl SampleRateProfile {
    /// Samples per frame (64, 128 or 256)
    pub fn frame_samples(&self) -> usize {
        1 << self.frame_size_power
    }

    pub fn is_high_sample_rate(&self) -> bool {
        self.index >= HIGH_SAMPLE_RATE_INDEX
    }

    pub fn max_huffman_precision(&self) -> u8 {
        crate::tables::max_huffman_precision(self.is_high_sample_rate())
    }

    pub fn min_band_count(&self) -> u8 {
        crate::tables::min_band_count(self.is_high_sample_rate())
    }

    pub fn max_extension_band(&self) -> u8 {
        crate::tables::max_extension_band(self.is_high_sample_rate())
    }
}

/// Layout of one quantization unit within a block's coefficient array
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "diagnostics", derive(Serialize))]
pub struct QuantizationUnit {
    /// Unit index 0..29
    pub index: usize,
    /// Coefficients covered by the unit (2, 4, 8 or 16)
    pub coeff_count: u8,
    /// Offset of the first coefficient
    pub coeff_offset: u16,
    /// Spectral codebook group 0..3
    pub codebook_group: u8,
}

impl QuantizationUnit {
    /// Coefficient index range covered by the unit
    pub fn coeff_range(&self) -> std::ops::Range<usize> {
        let start = self.coeff_offset as usize;
        start..start + self.coeff_count as usize
    }
}

/// Role of an encoded block within a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "diagnostics", derive(Serialize))]
pub enum BlockType {
    /// Single full-band channel
    Mono,
    /// Channel pair, optionally intensity-coded
    Stereo,
    /// Low-frequency effects channel
    Lfe,
}

impl BlockType {
    /// Output channels carried by a block of this type
    pub fn channel_count(self) -> usize {
        match self {
            BlockType::Mono | BlockType::Lfe => 1,
            BlockType::Stereo => 2,
        }
    }
}

/// Block layout of a frame for one channel-configuration index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "diagnostics", derive(Serialize))]
pub struct ChannelConfig {
    /// Block types in bitstream order
    pub blocks: &'static [BlockType],
}

impl ChannelConfig {
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Total output channels across all blocks
    pub fn channel_count(&self) -> usize {
        self.blocks.iter().map(|block| block.channel_count()).sum()
    }
}
