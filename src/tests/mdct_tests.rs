//! Unit tests for mdct module
//!
//! These tests validate the window shapes and the reconstruction identity
//! between the analysis and synthesis windows.

use crate::error::TableError;
use crate::mdct::*;

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_window_lengths() {
        for power in [6u8, 7, 8] {
            let pair = WindowPair::new(power).unwrap();
            assert_eq!(pair.len(), 1 << power);
            assert_eq!(pair.synthesis.len(), 1 << power);
            assert!(!pair.is_empty());
        }
    }

    #[test]
    fn test_analysis_window_endpoints() {
        let window = mdct_window(8).unwrap();
        assert!(window[0] < 1e-4, "first sample {} should be near 0", window[0]);
        assert!(window[255] > 1.0 - 1e-4, "last sample {} should be near 1", window[255]);
        assert!(window.windows(2).all(|pair| pair[0] < pair[1]), "window must rise");
    }

    #[test]
    fn test_analysis_window_is_power_complementary_shape() {
        // w[i] + w[N-1-i] == 1 for the raised half-sine
        for power in [6u8, 7, 8] {
            let window = mdct_window(power).unwrap();
            let n = window.len();
            for i in 0..n {
                assert!((window[i] + window[n - 1 - i] - 1.0).abs() < EPSILON);
            }
        }
    }

    #[test]
    fn test_overlap_add_reconstruction() {
        for power in [6u8, 7, 8] {
            let analysis = mdct_window(power).unwrap();
            let synthesis = imdct_window(power).unwrap();
            let n = analysis.len();
            for i in 0..n {
                let sum = synthesis[i] * analysis[i] + synthesis[n - 1 - i] * analysis[n - 1 - i];
                assert!((sum - 1.0).abs() < EPSILON, "power {} index {}: {}", power, i, sum);
            }
        }
    }

    #[test]
    fn test_synthesis_reciprocal_identity() {
        let analysis = mdct_window(7).unwrap();
        let synthesis = imdct_window(7).unwrap();
        let n = analysis.len();
        for i in 0..n {
            let denom = analysis[n - 1 - i].powi(2) + analysis[i].powi(2);
            assert!((synthesis[i] * denom - analysis[i]).abs() < EPSILON);
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        assert_eq!(mdct_window(8).unwrap(), mdct_window(8).unwrap());
        assert_eq!(WindowPair::new(6).unwrap(), WindowPair::new(6).unwrap());
    }

    #[test]
    fn test_unsupported_power_rejected() {
        for power in [0u8, 5, 9, 16] {
            assert!(matches!(
                mdct_window(power),
                Err(TableError::OutOfRange { table: "frame size power", .. })
            ));
            assert!(imdct_window(power).is_err());
        }
    }
}
