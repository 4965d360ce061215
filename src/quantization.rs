//! Quantizer step sizes and spectrum scale factors
//!
//! Every value is a closed-form function of its index, computed with plain
//! IEEE double arithmetic so repeated generation is bit-identical.

use crate::error::{TableError, TableResult};

/// Quantization precisions 0..15
pub const PRECISION_COUNT: usize = 16;
/// Scale factor values 0..31
pub const SPECTRUM_SCALE_COUNT: usize = 32;
/// Full-scale range of the fine quantizer sub-index
pub const FINE_STEP_RANGE: f64 = u16::MAX as f64;

/// Coarse step size for precision `p`: `2 / (2^(p+1) - 1)`
pub fn quantizer_step_size(precision: usize) -> f64 {
    2.0 / ((1u32 << (precision + 1)) - 1) as f64
}

/// Fine step size: the coarse step divided by 65535
pub fn quantizer_fine_step_size(precision: usize) -> f64 {
    quantizer_step_size(precision) / FINE_STEP_RANGE
}

/// Reciprocal of the coarse step: `(2^(p+1) - 1) / 2`
pub fn quantizer_inverse_step_size(precision: usize) -> f64 {
    ((1u32 << (precision + 1)) - 1) as f64 / 2.0
}

/// Gain for scale factor `x`: `2^(x - 15)`
pub fn spectrum_scale(scale_factor: usize) -> f64 {
    2f64.powi(scale_factor as i32 - 15)
}

/// Step-size tables indexed by precision
#[derive(Debug, Clone, PartialEq)]
pub struct QuantizerTables {
    pub step_size: [f64; PRECISION_COUNT],
    pub fine_step_size: [f64; PRECISION_COUNT],
    pub inverse_step_size: [f64; PRECISION_COUNT],
    pub spectrum_scale: [f64; SPECTRUM_SCALE_COUNT],
}

impl QuantizerTables {
    pub fn new() -> Self {
        Self {
            step_size: std::array::from_fn(quantizer_step_size),
            fine_step_size: std::array::from_fn(quantizer_fine_step_size),
            inverse_step_size: std::array::from_fn(quantizer_inverse_step_size),
            spectrum_scale: std::array::from_fn(spectrum_scale),
        }
    }

    pub fn step(&self, precision: usize) -> TableResult<f64> {
        lookup(&self.step_size, "quantizer step", precision, "0..16")
    }

    pub fn fine_step(&self, precision: usize) -> TableResult<f64> {
        lookup(&self.fine_step_size, "quantizer fine step", precision, "0..16")
    }

    pub fn inverse_step(&self, precision: usize) -> TableResult<f64> {
        lookup(&self.inverse_step_size, "quantizer inverse step", precision, "0..16")
    }

    pub fn scale(&self, scale_factor: usize) -> TableResult<f64> {
        lookup(&self.spectrum_scale, "spectrum scale", scale_factor, "0..32")
    }
}

impl Default for QuantizerTables {
    fn default() -> Self {
        Self::new()
    }
}

fn lookup(table: &[f64], name: &'static str, index: usize, limit: &'static str) -> TableResult<f64> {
    table
        .get(index)
        .copied()
        .ok_or_else(|| TableError::out_of_range(name, index, limit))
}
