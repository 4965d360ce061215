//! Build configuration for the table registry
//!
//! The tables themselves have no parameters; the configuration only controls
//! how strictly the compiled-in codebook data is checked while it is turned
//! into lookup tables, and what gets logged.

use crate::error::{ConfigError, ConfigResult};

/// Longest codeword any ATRAC9 codebook may use
pub const MAX_CODE_LENGTH: u8 = 16;

/// Options for [`Atrac9Tables::build_with`](crate::registry::Atrac9Tables::build_with)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    /// Reject compiled-in codebooks whose Kraft sum is below one
    pub require_complete_codes: bool,
    /// Longest codeword accepted; also bounds the direct lookup table size
    pub max_code_length: u8,
    /// Log a one-line summary per table family once construction finishes
    pub log_summary: bool,
}

impl BuildConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self {
            require_complete_codes: true,
            max_code_length: MAX_CODE_LENGTH,
            log_summary: true,
        }
    }

    pub fn with_complete_codes(mut self, required: bool) -> Self {
        self.require_complete_codes = required;
        self
    }

    pub fn with_max_code_length(mut self, bits: u8) -> Self {
        self.max_code_length = bits;
        self
    }

    pub fn with_log_summary(mut self, enabled: bool) -> Self {
        self.log_summary = enabled;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_code_length == 0 || self.max_code_length > MAX_CODE_LENGTH {
            return Err(ConfigError::UnsupportedMaxCodeLength(self.max_code_length));
        }
        Ok(())
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self::new()
    }
}
