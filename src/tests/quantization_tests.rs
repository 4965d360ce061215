//! Unit tests for quantization module
//!
//! These tests validate the closed-form step sizes and the bounds checks of
//! the precomputed tables.

use crate::error::TableError;
use crate::quantization::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coarse_step_endpoints() {
        let tables = QuantizerTables::new();
        assert_eq!(tables.step(0).unwrap(), 2.0);
        assert_eq!(tables.step(1).unwrap(), 2.0 / 3.0);
        assert!((tables.step(15).unwrap() - 2.0 / 65535.0).abs() < 1e-18);
    }

    #[test]
    fn test_fine_step_is_coarse_over_range() {
        let tables = QuantizerTables::new();
        for precision in 0..PRECISION_COUNT {
            assert_eq!(
                tables.fine_step(precision).unwrap(),
                tables.step(precision).unwrap() / 65535.0
            );
        }
    }

    #[test]
    fn test_inverse_step() {
        let tables = QuantizerTables::new();
        for precision in 0..PRECISION_COUNT {
            let product = tables.step(precision).unwrap() * tables.inverse_step(precision).unwrap();
            assert!((product - 1.0).abs() < 1e-12, "precision {}", precision);
        }
        assert_eq!(tables.inverse_step(2).unwrap(), 3.5);
    }

    #[test]
    fn test_steps_decrease_with_precision() {
        let tables = QuantizerTables::default();
        assert!(tables.step_size.windows(2).all(|pair| pair[0] > pair[1]));
    }

    #[test]
    fn test_spectrum_scale() {
        let tables = QuantizerTables::new();
        assert_eq!(tables.scale(15).unwrap(), 1.0);
        assert_eq!(tables.scale(0).unwrap(), 1.0 / 32768.0);
        assert_eq!(tables.scale(31).unwrap(), 65536.0);
        for i in 1..SPECTRUM_SCALE_COUNT {
            assert_eq!(tables.spectrum_scale[i], tables.spectrum_scale[i - 1] * 2.0);
        }
    }

    #[test]
    fn test_regeneration_is_bit_identical() {
        let first = QuantizerTables::new();
        let second = QuantizerTables::new();
        for precision in 0..PRECISION_COUNT {
            assert_eq!(first.step_size[precision].to_bits(), second.step_size[precision].to_bits());
            assert_eq!(
                first.fine_step_size[precision].to_bits(),
                second.fine_step_size[precision].to_bits()
            );
        }
    }

    #[test]
    fn test_out_of_range() {
        let tables = QuantizerTables::new();
        assert!(matches!(tables.step(16), Err(TableError::OutOfRange { index: 16, .. })));
        assert!(matches!(tables.fine_step(99), Err(TableError::OutOfRange { .. })));
        assert!(matches!(tables.inverse_step(16), Err(TableError::OutOfRange { .. })));
        assert!(matches!(tables.scale(32), Err(TableError::OutOfRange { .. })));
    }
}
