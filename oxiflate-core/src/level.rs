//! Compression levels.
//!
//! libdeflate accepts levels `0..=12`. Levels 1-9 match the zlib scale;
//! 10-12 trade a lot of speed for slightly better ratios, and 0 emits stored
//! blocks only.

use crate::error::{OxiflateError, Result};

/// Lowest legal compression level (stored blocks, no compression).
pub const MIN_COMPRESSION_LEVEL: i32 = 0;

/// Highest level that is also valid for standard zlib.
pub const MAX_STD_ZLIB_COMPRESSION_LEVEL: i32 = 9;

/// Highest legal compression level.
pub const MAX_COMPRESSION_LEVEL: i32 = 12;

/// Level used when none is given.
pub const DEFAULT_COMPRESSION_LEVEL: i32 = 6;

/// A validated compression level in
/// `[MIN_COMPRESSION_LEVEL, MAX_COMPRESSION_LEVEL]`.
///
/// Unlike a clamping level type, out-of-range values are rejected with
/// [`OxiflateError::InvalidLevel`] so a typo never silently changes the
/// compression behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i32", into = "i32"))]
pub struct CompressionLevel(i32);

impl CompressionLevel {
    /// Stored blocks only.
    pub const NONE: Self = Self(MIN_COMPRESSION_LEVEL);
    /// Fastest compression.
    pub const FAST: Self = Self(1);
    /// Default compression (balanced).
    pub const DEFAULT: Self = Self(DEFAULT_COMPRESSION_LEVEL);
    /// Best compression that standard zlib also offers.
    pub const BEST_STD_ZLIB: Self = Self(MAX_STD_ZLIB_COMPRESSION_LEVEL);
    /// Best compression (slowest).
    pub const BEST: Self = Self(MAX_COMPRESSION_LEVEL);

    /// Create a level, rejecting values outside the legal range.
    pub fn new(level: i32) -> Result<Self> {
        if (MIN_COMPRESSION_LEVEL..=MAX_COMPRESSION_LEVEL).contains(&level) {
            Ok(Self(level))
        } else {
            Err(OxiflateError::invalid_level(level))
        }
    }

    /// Get the level value.
    pub fn get(self) -> i32 {
        self.0
    }

    /// Iterate over every legal level, lowest first.
    pub fn all() -> impl Iterator<Item = Self> {
        (MIN_COMPRESSION_LEVEL..=MAX_COMPRESSION_LEVEL).map(Self)
    }
}

impl Default for CompressionLevel {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i32> for CompressionLevel {
    type Error = OxiflateError;

    fn try_from(level: i32) -> Result<Self> {
        Self::new(level)
    }
}

impl From<CompressionLevel> for i32 {
    fn from(level: CompressionLevel) -> Self {
        level.0
    }
}

impl std::fmt::Display for CompressionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
