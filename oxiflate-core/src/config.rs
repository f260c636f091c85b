//! Decompressor configuration.

use crate::error::{OxiflateError, Result};
use crate::growth::DEFAULT_MAX_DECOMPRESSION_FACTOR;

/// Settings for a decompressor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DecompressorConfig {
    /// Largest `output / input` size ratio the auto-sizing path will
    /// allocate for before giving up.
    ///
    /// Inputs that legitimately decompress beyond this ratio must be
    /// decompressed with an exact-size output buffer instead.
    pub max_decompression_factor: usize,
}

impl DecompressorConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self {
            max_decompression_factor: DEFAULT_MAX_DECOMPRESSION_FACTOR,
        }
    }

    /// Set the growth ceiling.
    pub fn with_max_decompression_factor(mut self, factor: usize) -> Self {
        self.max_decompression_factor = factor;
        self
    }

    /// Check that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if self.max_decompression_factor == 0 {
            return Err(OxiflateError::invalid_factor(self.max_decompression_factor));
        }
        Ok(())
    }
}

impl Default for DecompressorConfig {
    fn default() -> Self {
        Self::new()
    }
}
