//! # ATRAC9 decoder tables
//!
//! Construction and lookup of every table an ATRAC9 decoder consults:
//! canonical Huffman codebooks for spectra and scale factors, MDCT/IMDCT
//! windows, quantizer step sizes, the static stream-layout tables, the
//! band-extension parameter set and the bit-allocation gradient curves.
//!
//! Most callers only need [`tables()`], which builds the bundle once per
//! process and hands out a shared reference:
//!
//! ```no_run
//! use atrac9_tables::{tables, SpectrumFamily};
//!
//! let tables = tables();
//! let window = tables.synthesis_window(8)?;
//! let book = tables.spectrum_codebook(SpectrumFamily::A, 3, 1)?;
//! assert_eq!(window.len(), 256);
//! assert_eq!(book.arity(), 2);
//! # Ok::<(), atrac9_tables::TableError>(())
//! ```

pub mod bex;
pub mod codebooks;
pub mod config;
pub mod error;
pub mod gradient;
pub mod huffman;
pub mod mdct;
pub mod quantization;
pub mod registry;
pub mod tables;
pub mod types;

#[cfg(test)]
mod tests;

pub use bex::{bex_parameters, BexCurve, BexEnvelope, BexParameterSet};
pub use codebooks::{ScaleFactorSet, SpectrumFamily};
pub use config::BuildConfig;
pub use error::{ConfigError, TableError, TableResult};
pub use gradient::{GradientCurveSource, StandardGradientCurves};
pub use huffman::{CodeEntry, Grouping, HuffmanCodebook, Signedness};
pub use registry::{initialize, tables, Atrac9Tables, TableSummary};
pub use tables::BexGroup;
pub use types::{BlockType, ChannelConfig, QuantizationUnit, SampleRateProfile};
