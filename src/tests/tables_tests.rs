//! Unit tests for tables module
//!
//! These tests validate the static stream-layout tables and their lookup
//! helpers.

use crate::error::TableError;
use crate::tables::*;
use crate::types::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_invariants_hold() {
        validate_layout().unwrap();
    }

    #[test]
    fn test_coeff_offsets_are_prefix_sums() {
        let mut offset = 0usize;
        for unit in 0..MAX_QUANT_UNITS {
            let row = quant_unit(unit).unwrap();
            assert_eq!(row.coeff_offset as usize, offset, "unit {}", unit);
            assert_eq!(row.coeff_range(), offset..offset + row.coeff_count as usize);
            offset += row.coeff_count as usize;
        }
        assert_eq!(offset, MAX_FRAME_SAMPLES);
        assert_eq!(QUANT_UNIT_TO_COEFF_INDEX[MAX_QUANT_UNITS] as usize, MAX_FRAME_SAMPLES);
    }

    #[test]
    fn test_quant_unit_codebook_groups() {
        assert_eq!(quant_unit(0).unwrap().codebook_group, 0);
        assert_eq!(quant_unit(8).unwrap().codebook_group, 1);
        assert_eq!(quant_unit(12).unwrap().codebook_group, 2);
        assert_eq!(quant_unit(29).unwrap().codebook_group, 3);
        assert!(matches!(quant_unit(30), Err(TableError::OutOfRange { index: 30, .. })));
    }

    #[test]
    fn test_sample_rate_profiles() {
        let profile = sample_rate_profile(7).unwrap();
        assert_eq!(profile.sample_rate, 48000);
        assert_eq!(profile.frame_samples(), 256);
        assert_eq!(profile.max_band_count, 18);
        assert!(!profile.is_high_sample_rate());
        assert_eq!(profile.max_huffman_precision(), 7);
        assert_eq!(profile.min_band_count(), 3);
        assert_eq!(profile.max_extension_band(), 18);

        let profile = sample_rate_profile(0).unwrap();
        assert_eq!(profile.sample_rate, 11025);
        assert_eq!(profile.frame_samples(), 64);

        let profile = sample_rate_profile(HIGH_SAMPLE_RATE_INDEX).unwrap();
        assert!(profile.is_high_sample_rate());
        assert_eq!(profile.max_huffman_precision(), 1);
        assert_eq!(profile.min_band_count(), 1);
        assert_eq!(profile.max_extension_band(), 16);

        assert_eq!(sample_rate_profile(15).unwrap().sample_rate, 192000);
        assert!(matches!(sample_rate_profile(16), Err(TableError::OutOfRange { .. })));
    }

    #[test]
    fn test_high_rate_switches() {
        assert_eq!(max_huffman_precision(false), 7);
        assert_eq!(max_huffman_precision(true), 1);
        assert_eq!(min_band_count(false), 3);
        assert_eq!(min_band_count(true), 1);
        assert_eq!(max_extension_band(false), 18);
        assert_eq!(max_extension_band(true), 16);
    }

    #[test]
    fn test_band_to_quant_unit_count() {
        assert_eq!(quant_unit_count(0).unwrap(), 0);
        assert_eq!(quant_unit_count(8).unwrap(), 16);
        assert_eq!(quant_unit_count(18).unwrap(), 30);
        assert!(matches!(quant_unit_count(19), Err(TableError::OutOfRange { .. })));
    }

    #[test]
    fn test_channel_configs() {
        assert_eq!(channel_config(0).unwrap().blocks, &[BlockType::Mono]);
        assert_eq!(
            channel_config(3).unwrap().blocks,
            &[BlockType::Stereo, BlockType::Mono, BlockType::Lfe, BlockType::Stereo]
        );
        assert_eq!(channel_config(3).unwrap().channel_count(), 6);
        assert_eq!(channel_config(4).unwrap().channel_count(), 8);
        assert_eq!(channel_config(5).unwrap().block_count(), 2);
        assert!(matches!(channel_config(6), Err(TableError::OutOfRange { .. })));
    }

    #[test]
    fn test_scale_factor_weights() {
        assert_eq!(scale_factor_weights(0).unwrap()[31], 12);
        assert_eq!(scale_factor_weights(6).unwrap()[1], 5);
        assert!(matches!(scale_factor_weights(8), Err(TableError::OutOfRange { .. })));
    }

    #[test]
    fn test_bex_group_lookup() {
        let group = bex_group(13).unwrap();
        assert_eq!(group, BexGroup { group_a_unit: 16, group_b_unit: 21, band_bucket: 0 });
        assert_eq!(bex_group(20).unwrap().band_bucket, 5);
        assert!(matches!(bex_group(12), Err(TableError::OutOfRange { .. })));
        assert!(matches!(bex_group(21), Err(TableError::OutOfRange { .. })));
        assert!(bex_group(0).is_err());
    }
}
