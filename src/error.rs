//! Error types for table construction and lookup
//!
//! Construction errors mean the compiled-in constant data is wrong and are
//! fatal. Lookup errors are reported to the caller unchanged; no index is
//! ever clamped or defaulted.

use thiserror::Error;

/// Main error type for table construction and lookup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// Constant data violates a structural invariant (bad code lengths,
    /// colliding codewords, mismatched dimensions)
    #[error("Malformed {table} table: {reason}")]
    Malformed { table: &'static str, reason: String },

    /// Index outside the domain of a table
    #[error("Index {index} out of range for {table} (valid: {limit})")]
    OutOfRange {
        table: &'static str,
        index: usize,
        limit: &'static str,
    },

    /// The format defines no codebook for this combination
    #[error("No {set} codebook defined for precision {precision}, group {group}")]
    AbsentCodebook {
        set: &'static str,
        precision: usize,
        group: usize,
    },

    /// Invalid build configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl TableError {
    pub(crate) fn malformed(table: &'static str, reason: impl Into<String>) -> Self {
        TableError::Malformed {
            table,
            reason: reason.into(),
        }
    }

    pub(crate) fn out_of_range(table: &'static str, index: usize, limit: &'static str) -> Self {
        TableError::OutOfRange {
            table,
            index,
            limit,
        }
    }

    /// True for errors that can only come from defective constant data
    pub fn is_fatal(&self) -> bool {
        matches!(self, TableError::Malformed { .. } | TableError::Config(_))
    }
}

/// Build configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Longest codeword the lookup tables are allowed to index
    #[error("Unsupported maximum code length: {0} bits (1..=16)")]
    UnsupportedMaxCodeLength(u8),
}

pub type TableResult<T> = std::result::Result<T, TableError>;
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
