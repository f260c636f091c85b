//! # OxiFlate Core
//!
//! Core components for the OxiFlate compression library.
//!
//! This crate holds everything that does not touch native code:
//!
//! - [`error`]: Error types
//! - [`level`]: Compression level constants and validation
//! - [`mode`]: Framing modes (raw DEFLATE, zlib, gzip)
//! - [`engine`]: Engine capability traits and the result translator
//! - [`growth`]: Output buffer growth for auto-sized decompression
//! - [`config`]: Decompressor configuration
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ Façade                                                  │
//! │     one-shot compress/decompress functions              │
//! ├─────────────────────────────────────────────────────────┤
//! │ Handles                                                 │
//! │     Compressor / Decompressor lifecycle, buffer sizing  │
//! ├─────────────────────────────────────────────────────────┤
//! │ Engine (this crate: traits only)                        │
//! │     mode dispatch, result codes -> OxiflateError        │
//! ├─────────────────────────────────────────────────────────┤
//! │ libdeflate                                              │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxiflate_core::{CompressionLevel, GrowthSchedule, Mode};
//!
//! let level = CompressionLevel::new(9).unwrap();
//! assert_eq!(level.get(), 9);
//! assert!(CompressionLevel::new(13).is_err());
//!
//! let mode: Mode = "gzip".parse().unwrap();
//! assert_eq!(mode, Mode::Gzip);
//!
//! let mut schedule = GrowthSchedule::default();
//! assert_eq!(schedule.capacity(100), Some(600));
//! assert_eq!(schedule.grow().unwrap(), 11);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod engine;
pub mod error;
pub mod growth;
pub mod level;
pub mod mode;

// Re-exports for convenience
pub use config::DecompressorConfig;
pub use engine::{CompressEngine, DecompressEngine, EngineResult, Fit, Outcome, translate};
pub use error::{OxiflateError, Result};
pub use growth::{DEFAULT_MAX_DECOMPRESSION_FACTOR, GrowthSchedule};
pub use level::{
    CompressionLevel, DEFAULT_COMPRESSION_LEVEL, MAX_COMPRESSION_LEVEL,
    MAX_STD_ZLIB_COMPRESSION_LEVEL, MIN_COMPRESSION_LEVEL,
};
pub use mode::{Mode, ParseModeError};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::DecompressorConfig;
    pub use crate::engine::{CompressEngine, DecompressEngine, EngineResult};
    pub use crate::error::{OxiflateError, Result};
    pub use crate::level::CompressionLevel;
    pub use crate::mode::Mode;
}
