//! Unit tests for bex module
//!
//! These tests validate the band-extension value layout per mode and bucket
//! and the curves each transmitted value indexes.

use crate::bex::*;
use crate::error::TableError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_sets_validate() {
        validate().unwrap();
    }

    #[test]
    fn test_mode1_is_empty() {
        for bucket in 0..BEX_BUCKETS {
            let params = bex_parameters(1, bucket).unwrap();
            assert_eq!(params.value_count(), 0);
            assert!(params.is_noop());
            assert_eq!(params.envelope, BexEnvelope::None);
            assert!(params.curves().is_empty());
        }
    }

    #[test]
    fn test_value_counts_match_table() {
        for mode in 0..BEX_MODES {
            for bucket in 0..BEX_BUCKETS {
                let params = bex_parameters(mode, bucket).unwrap();
                assert_eq!(params.value_count(), BEX_ENCODED_VALUE_COUNTS[mode][bucket] as usize);
                assert_eq!(params.mode, mode);
                assert_eq!(params.bucket, bucket);
            }
        }
    }

    #[test]
    fn test_mode0_three_band_layout() {
        let params = bex_parameters(0, 3).unwrap();
        assert_eq!(params.envelope, BexEnvelope::Interpolated);
        assert_eq!(params.value_bits(), &[5, 4, 3, 3]);
        assert_eq!(params.total_bits(), 15);
        // The first value drives two tables
        assert_eq!(params.curves_for_value(0).count(), 2);
        assert!(params.curves_for_value(0).all(|curve| curve.len() == 32));
        assert_eq!(params.curves_for_value(3).next().unwrap().len(), 8);
    }

    #[test]
    fn test_mode0_five_band_layout() {
        let params = bex_parameters(0, 5).unwrap();
        assert_eq!(params.value_bits(), &[4, 5]);
        assert_eq!(params.curves().len(), 3);
        assert_eq!(params.curves_for_value(1).count(), 2);
    }

    #[test]
    fn test_mode0_low_buckets_are_empty() {
        for bucket in 0..3 {
            assert!(bex_parameters(0, bucket).unwrap().is_noop());
        }
    }

    #[test]
    fn test_mode2_scale_curve() {
        let params = bex_parameters(2, 4).unwrap();
        assert_eq!(params.envelope, BexEnvelope::Scaled);
        assert_eq!(params.value_bits(), &[6, 6]);
        assert!(BEX_MODE2_SCALE.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(bex_parameters(2, 5).unwrap().curves().len(), 1);
    }

    #[test]
    fn test_mode3_decay_curves() {
        let params = bex_parameters(3, 5).unwrap();
        assert_eq!(params.envelope, BexEnvelope::Decaying);
        assert_eq!(params.curves_for_value(0).next().unwrap(), &BEX_MODE3_INITIAL[..]);
        assert_eq!(params.curves_for_value(1).next().unwrap(), &BEX_MODE3_RATE[..]);
    }

    #[test]
    fn test_mode4_multiplier() {
        let params = bex_parameters(4, 0).unwrap();
        assert_eq!(params.envelope, BexEnvelope::Multiplied);
        assert_eq!(params.value_bits(), &[3]);
        assert_eq!(params.curves_for_value(0).next().unwrap().len(), 8);
        assert!(bex_parameters(4, 3).unwrap().is_noop());
    }

    #[test]
    fn test_curves_cover_value_range() {
        for mode in 0..BEX_MODES {
            for bucket in 0..BEX_BUCKETS {
                let params = bex_parameters(mode, bucket).unwrap();
                for (value, &bits) in params.value_bits().iter().enumerate() {
                    for curve in params.curves_for_value(value) {
                        assert!(curve.len() >= 1 << bits, "mode {} bucket {} value {}", mode, bucket, value);
                    }
                }
            }
        }
    }

    #[test]
    fn test_out_of_range() {
        assert!(matches!(bex_parameters(5, 0), Err(TableError::OutOfRange { table: "bex mode", .. })));
        assert!(matches!(
            bex_parameters(0, 6),
            Err(TableError::OutOfRange { table: "bex band bucket", .. })
        ));
    }
}
