//! Unit tests for gradient module

use crate::error::TableError;
use crate::gradient::*;

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_standard_curve_shapes() {
        let curves = StandardGradientCurves.generate();
        assert_eq!(curves.len(), GRADIENT_CURVE_COUNT);
        for (index, curve) in curves.iter().enumerate() {
            assert_eq!(curve.len(), index + 1);
            assert!(curve.windows(2).all(|pair| pair[0] <= pair[1]), "curve {}", index + 1);
        }
        assert_eq!(curves[GRADIENT_CURVE_COUNT - 1], GRADIENT_BASE_CURVE.to_vec());
        assert_eq!(curves[0], vec![1u8]);
        assert_eq!(curves[1], vec![1u8, 16]);
    }

    #[test]
    fn test_lookup_by_length() {
        let curves = GradientCurves::from_source(&StandardGradientCurves).unwrap();
        assert_eq!(curves.len(), 48);
        assert_eq!(curves.get(2).unwrap(), &[1u8, 16]);
        assert_eq!(curves.get(48).unwrap().len(), 48);
        assert!(matches!(curves.get(0), Err(TableError::OutOfRange { .. })));
        assert!(matches!(curves.get(49), Err(TableError::OutOfRange { .. })));
    }

    #[test]
    fn test_source_called_once() {
        let calls = Cell::new(0);
        let source = || {
            calls.set(calls.get() + 1);
            vec![vec![3u8], vec![4, 5]]
        };
        let curves = GradientCurves::from_source(&source).unwrap();
        assert_eq!(calls.get(), 1);
        assert_eq!(curves.all(), &[vec![3u8], vec![4u8, 5]]);
    }

    #[test]
    fn test_malformed_source_rejected() {
        let empty = || Vec::<Vec<u8>>::new();
        assert!(matches!(
            GradientCurves::from_source(&empty),
            Err(TableError::Malformed { .. })
        ));

        let misshapen = || vec![vec![1u8], vec![1u8]];
        assert!(matches!(
            GradientCurves::from_source(&misshapen),
            Err(TableError::Malformed { .. })
        ));
    }
}
