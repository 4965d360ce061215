//! Gradient curves for bit allocation
//!
//! The curves are owned by the bit-allocation stage; the registry only asks
//! a [`GradientCurveSource`] for them once per build and keeps the result.

use crate::error::{TableError, TableResult};

/// Number of curves, one per gradient length 1..=48
pub const GRADIENT_CURVE_COUNT: usize = 48;

/// Base curve every standard gradient is resampled from
pub const GRADIENT_BASE_CURVE: [u8; GRADIENT_CURVE_COUNT] = [
    1, 1, 1, 1, 2, 2, 2, 2, 3, 3, 3, 4, 4, 5, 5, 6, 7, 8, 9, 10, 11, 12, 13, 15, //
    16, 18, 19, 20, 21, 22, 23, 24, 25, 26, 26, 27, 27, 28, 28, 28, 29, 29, 29, 29, 30, 30, 30, 30,
];

/// Producer of the gradient curve family
///
/// `generate` must return one curve per length starting at 1, so entry `n`
/// holds `n + 1` values.
pub trait GradientCurveSource {
    fn generate(&self) -> Vec<Vec<u8>>;
}

/// The format's standard gradient curves
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardGradientCurves;

impl GradientCurveSource for StandardGradientCurves {
    fn generate(&self) -> Vec<Vec<u8>> {
        (1..=GRADIENT_CURVE_COUNT)
            .map(|length| {
                (0..length)
                    .map(|i| GRADIENT_BASE_CURVE[i * GRADIENT_CURVE_COUNT / length])
                    .collect()
            })
            .collect()
    }
}

impl<F> GradientCurveSource for F
where
    F: Fn() -> Vec<Vec<u8>>,
{
    fn generate(&self) -> Vec<Vec<u8>> {
        self()
    }
}

/// Immutable set of gradient curves
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradientCurves {
    curves: Vec<Vec<u8>>,
}

impl GradientCurves {
    /// Invoke the source once and check the shape of what it returned
    pub(crate) fn from_source(source: &dyn GradientCurveSource) -> TableResult<Self> {
        let curves = source.generate();
        if curves.is_empty() {
            return Err(TableError::malformed("gradient curve", "source produced no curves"));
        }
        for (index, curve) in curves.iter().enumerate() {
            if curve.len() != index + 1 {
                return Err(TableError::malformed(
                    "gradient curve",
                    format!("curve {} has {} entries, expected {}", index, curve.len(), index + 1),
                ));
            }
        }
        log::debug!("Generated {} gradient curves", curves.len());
        Ok(Self { curves })
    }

    pub fn all(&self) -> &[Vec<u8>] {
        &self.curves
    }

    /// Curve for a gradient spanning `length` units
    pub fn get(&self, length: usize) -> TableResult<&[u8]> {
        length
            .checked_sub(1)
            .and_then(|index| self.curves.get(index))
            .map(Vec::as_slice)
            .ok_or_else(|| TableError::out_of_range("gradient curve", length, "1..=curve count"))
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }
}
