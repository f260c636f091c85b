//! Error types for OxiFlate operations.
//!
//! Every data-dependent failure (bad input, buffer sizing, configuration) is a
//! recoverable [`OxiflateError`]. Lifecycle violations such as using a handle
//! after it was closed are not represented here: they are programmer errors
//! and panic at the call site.

use crate::level::{MAX_COMPRESSION_LEVEL, MIN_COMPRESSION_LEVEL};
use thiserror::Error;

/// The main error type for OxiFlate operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OxiflateError {
    /// Compression level outside `[MIN_COMPRESSION_LEVEL, MAX_COMPRESSION_LEVEL]`.
    #[error(
        "Invalid compression level {level}: must be between {min} and {max}",
        min = MIN_COMPRESSION_LEVEL,
        max = MAX_COMPRESSION_LEVEL
    )]
    InvalidLevel {
        /// The rejected level.
        level: i32,
    },

    /// The engine could not allocate a handle or an output buffer.
    #[error("Out of memory")]
    OutOfMemory,

    /// Zero-length input passed to a compress or decompress call.
    #[error("Empty input")]
    EmptyInput,

    /// The caller-supplied compression buffer is too short.
    #[error("Short buffer: output buffer too small for compressed data")]
    ShortBuffer,

    /// The caller-supplied decompression buffer does not match the
    /// decompressed length.
    #[error("Short output: decompressed size does not match output buffer length")]
    ShortOutput,

    /// Input is not valid data for the requested framing mode.
    #[error("Bad data: input is not valid for the requested mode")]
    BadData,

    /// Auto-sized decompression hit the growth ceiling without succeeding.
    #[error(
        "Maximum decompression factor exceeded: multiplier {multiplier} > {max_factor}x input length"
    )]
    InsufficientDecompressionFactor {
        /// Multiplier the growth loop would have needed next.
        multiplier: usize,
        /// Configured ceiling.
        max_factor: usize,
    },

    /// Engine returned an outcome code outside the known set.
    #[error("Unknown engine result code: {code}")]
    UnknownEngineResult {
        /// Raw engine code.
        code: u32,
    },

    /// A decompressor was configured with an unusable growth ceiling.
    #[error("Invalid maximum decompression factor {factor}: must be at least 1")]
    InvalidDecompressionFactor {
        /// The rejected factor.
        factor: usize,
    },
}

/// Result type alias for OxiFlate operations.
pub type Result<T> = std::result::Result<T, OxiflateError>;

impl OxiflateError {
    /// Create an invalid level error.
    pub fn invalid_level(level: i32) -> Self {
        Self::InvalidLevel { level }
    }

    /// Create a decompression factor exceeded error.
    pub fn insufficient_factor(multiplier: usize, max_factor: usize) -> Self {
        Self::InsufficientDecompressionFactor {
            multiplier,
            max_factor,
        }
    }

    /// Create an unknown engine result error.
    pub fn unknown_result(code: u32) -> Self {
        Self::UnknownEngineResult { code }
    }

    /// Create an invalid decompression factor error.
    pub fn invalid_factor(factor: usize) -> Self {
        Self::InvalidDecompressionFactor { factor }
    }

    /// Whether the error is caused by the output buffer size rather than the
    /// input data.
    pub fn is_buffer_size(&self) -> bool {
        matches!(
            self,
            Self::ShortBuffer | Self::ShortOutput | Self::InsufficientDecompressionFactor { .. }
        )
    }
}
