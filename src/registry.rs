//! Process-wide table registry
//!
//! [`Atrac9Tables`] bundles every generated and static table behind a single
//! read-only value. The global instance is built on first use through
//! `lazy_static!`; callers that want their own configuration or gradient
//! source can build an owned bundle and share it with `Arc`.

use lazy_static::lazy_static;

use crate::bex::{self, BexParameterSet, BEX_BUCKETS, BEX_MODES};
use crate::codebooks::{ScaleFactorCodebooks, ScaleFactorSet, SpectrumCodebooks, SpectrumFamily};
use crate::config::BuildConfig;
use crate::error::{TableError, TableResult};
use crate::gradient::{GradientCurveSource, GradientCurves, StandardGradientCurves};
use crate::huffman::HuffmanCodebook;
use crate::mdct::{self, WindowPair};
use crate::quantization::QuantizerTables;
use crate::tables::{self, BexGroup};
use crate::types::{ChannelConfig, QuantizationUnit, SampleRateProfile};

lazy_static! {
    static ref TABLES: Atrac9Tables = Atrac9Tables::build().unwrap_or_else(|err| {
        log::error!("ATRAC9 table construction failed: {}", err);
        panic!("ATRAC9 table construction failed: {}", err)
    });
}

/// Shared table bundle, built on first access
pub fn tables() -> &'static Atrac9Tables {
    &TABLES
}

/// Force construction of the shared bundle now instead of on first lookup
pub fn initialize() {
    lazy_static::initialize(&TABLES);
}

/// Every table an ATRAC9 decoder needs, built once and never mutated
#[derive(Debug, Clone, PartialEq)]
pub struct Atrac9Tables {
    spectrum: SpectrumCodebooks,
    scale_factors: ScaleFactorCodebooks,
    windows: Vec<WindowPair>,
    quantizer: QuantizerTables,
    gradient: GradientCurves,
}

impl Atrac9Tables {
    /// Build with the default configuration and the standard gradient curves
    pub fn build() -> TableResult<Self> {
        Self::build_with(&BuildConfig::default(), &StandardGradientCurves)
    }

    pub fn build_with(config: &BuildConfig, gradient: &dyn GradientCurveSource) -> TableResult<Self> {
        config.validate()?;
        tables::validate_layout()?;
        bex::validate()?;

        let tables = Self {
            spectrum: SpectrumCodebooks::build(config)?,
            scale_factors: ScaleFactorCodebooks::build(config)?,
            windows: mdct::build_windows()?,
            quantizer: QuantizerTables::new(),
            gradient: GradientCurves::from_source(gradient)?,
        };

        if config.log_summary {
            let summary = tables.summary();
            log::info!(
                "ATRAC9 tables ready: {} spectral and {} scale factor codebooks, {} windows, {} gradient curves",
                summary.spectrum_codebooks,
                summary.scale_factor_codebooks,
                summary.window_sizes.len(),
                summary.gradient_curves
            );
        }
        Ok(tables)
    }

    pub fn sample_rate_profile(&self, index: usize) -> TableResult<SampleRateProfile> {
        tables::sample_rate_profile(index)
    }

    pub fn quant_unit(&self, index: usize) -> TableResult<QuantizationUnit> {
        tables::quant_unit(index)
    }

    pub fn quant_unit_count(&self, band_count: usize) -> TableResult<usize> {
        tables::quant_unit_count(band_count)
    }

    pub fn channel_config(&self, index: usize) -> TableResult<ChannelConfig> {
        tables::channel_config(index)
    }

    pub fn spectrum_codebook(
        &self,
        family: SpectrumFamily,
        precision: usize,
        group: usize,
    ) -> TableResult<&HuffmanCodebook> {
        self.spectrum.get(family, precision, group)
    }

    pub fn scale_factor_codebook(&self, set: ScaleFactorSet, precision: usize) -> TableResult<&HuffmanCodebook> {
        self.scale_factors.get(set, precision)
    }

    pub fn spectrum_codebooks(&self) -> &SpectrumCodebooks {
        &self.spectrum
    }

    pub fn scale_factor_codebooks(&self) -> &ScaleFactorCodebooks {
        &self.scale_factors
    }

    fn window_pair(&self, frame_size_power: u8) -> TableResult<&WindowPair> {
        self.windows
            .iter()
            .find(|pair| pair.frame_size_power == frame_size_power)
            .ok_or_else(|| TableError::out_of_range("frame size power", frame_size_power as usize, "6, 7 or 8"))
    }

    /// MDCT analysis window for a frame of `2^frame_size_power` samples
    pub fn analysis_window(&self, frame_size_power: u8) -> TableResult<&[f64]> {
        Ok(&self.window_pair(frame_size_power)?.analysis)
    }

    /// IMDCT synthesis window for a frame of `2^frame_size_power` samples
    pub fn synthesis_window(&self, frame_size_power: u8) -> TableResult<&[f64]> {
        Ok(&self.window_pair(frame_size_power)?.synthesis)
    }

    pub fn quantizer_step(&self, precision: usize) -> TableResult<f64> {
        self.quantizer.step(precision)
    }

    pub fn quantizer_fine_step(&self, precision: usize) -> TableResult<f64> {
        self.quantizer.fine_step(precision)
    }

    pub fn quantizer_inverse_step(&self, precision: usize) -> TableResult<f64> {
        self.quantizer.inverse_step(precision)
    }

    pub fn spectrum_scale(&self, scale_factor: usize) -> TableResult<f64> {
        self.quantizer.scale(scale_factor)
    }

    pub fn scale_factor_weights(&self, mode: usize) -> TableResult<&'static [u8; 32]> {
        tables::scale_factor_weights(mode)
    }

    pub fn gradient_curves(&self) -> &[Vec<u8>] {
        self.gradient.all()
    }

    /// Gradient curve spanning `length` quantization units
    pub fn gradient_curve(&self, length: usize) -> TableResult<&[u8]> {
        self.gradient.get(length)
    }

    pub fn bex_parameters(&self, mode: usize, bucket: usize) -> TableResult<BexParameterSet> {
        bex::bex_parameters(mode, bucket)
    }

    pub fn bex_group(&self, quant_unit_count: usize) -> TableResult<BexGroup> {
        tables::bex_group(quant_unit_count)
    }

    pub fn max_huffman_precision(&self, high_sample_rate: bool) -> u8 {
        tables::max_huffman_precision(high_sample_rate)
    }

    pub fn min_band_count(&self, high_sample_rate: bool) -> u8 {
        tables::min_band_count(high_sample_rate)
    }

    pub fn max_extension_band(&self, high_sample_rate: bool) -> u8 {
        tables::max_extension_band(high_sample_rate)
    }

    /// Counts and sizes of everything in the bundle
    pub fn summary(&self) -> TableSummary {
        let incomplete_codebooks = self
            .spectrum
            .iter()
            .map(|(_, book)| book)
            .chain(self.scale_factors.iter().map(|(_, book)| book))
            .filter(|book| !book.is_complete())
            .map(|book| book.name())
            .collect();
        let active_bex_sets = (0..BEX_MODES)
            .flat_map(|mode| (0..BEX_BUCKETS).map(move |bucket| (mode, bucket)))
            .filter_map(|(mode, bucket)| bex::bex_parameters(mode, bucket).ok())
            .filter(|params| !params.is_noop())
            .count();

        TableSummary {
            spectrum_codebooks: self.spectrum.len(),
            scale_factor_codebooks: self.scale_factors.len(),
            longest_code_bits: self
                .spectrum
                .iter()
                .map(|(_, book)| book.max_bits())
                .chain(self.scale_factors.iter().map(|(_, book)| book.max_bits()))
                .max()
                .unwrap_or(0),
            incomplete_codebooks,
            window_sizes: self.windows.iter().map(WindowPair::len).collect(),
            gradient_curves: self.gradient.len(),
            active_bex_sets,
        }
    }
}

/// Overview of a built table bundle
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "diagnostics", derive(serde::Serialize))]
pub struct TableSummary {
    pub spectrum_codebooks: usize,
    pub scale_factor_codebooks: usize,
    pub longest_code_bits: u8,
    pub incomplete_codebooks: Vec<&'static str>,
    pub window_sizes: Vec<usize>,
    pub gradient_curves: usize,
    pub active_bex_sets: usize,
}
