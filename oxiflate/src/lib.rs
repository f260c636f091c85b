//! # OxiFlate
//!
//! Safe, reusable compressor and decompressor handles for raw DEFLATE
//! (RFC 1951), zlib (RFC 1950) and gzip (RFC 1952), backed by libdeflate.
//!
//! libdeflate works on whole buffers rather than streams, which makes it
//! fast but leaves the caller with two problems: sizing the output buffer
//! and managing the native handles. This crate solves both:
//!
//! - **Handles**: [`Compressor`] and [`Decompressor`] each own one native
//!   engine, are reusable across calls and modes, and release the engine
//!   exactly once, on [`close`](Compressor::close) or drop. Using a handle
//!   after closing it panics.
//! - **Sizing**: compression guesses the output size and falls back to the
//!   exact worst-case bound; decompression either fills a caller buffer of
//!   the exact decompressed size or grows its own buffer up to a
//!   configurable maximum decompression factor, which rejects
//!   decompression bombs.
//!
//! ## Example
//!
//! ```rust
//! use oxiflate::{Compressor, Decompressor, Mode};
//!
//! let original = b"hello, world\n".repeat(11);
//!
//! let mut c = Compressor::with_level(9).unwrap();
//! let compressed = c.compress_zlib(&original).unwrap();
//! assert!(compressed.len() < original.len());
//!
//! let mut dc = Decompressor::new().unwrap();
//! let decompressed = dc.decompress(&compressed, Mode::Zlib).unwrap();
//! assert_eq!(decompressed, original);
//! ```
//!
//! For a single operation the [`oneshot`] functions create and release
//! the handle for you:
//!
//! ```rust
//! let compressed = oxiflate::compress_zlib(b"one shot, one shot, one shot").unwrap();
//! let decompressed = oxiflate::decompress_zlib(&compressed).unwrap();
//! assert_eq!(decompressed, b"one shot, one shot, one shot");
//! ```
//!
//! ## Concurrency
//!
//! Handles are `Send` but not `Sync`: create one per thread. With the
//! `parallel` feature, [`parallel`] applies exactly that to batches.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

mod buffer;
mod compressor;
mod decompressor;
mod handle;
pub mod native;
pub mod oneshot;
#[cfg(feature = "parallel")]
pub mod parallel;

pub use compressor::Compressor;
pub use decompressor::Decompressor;
pub use native::{NativeCompressor, NativeDecompressor};
pub use oneshot::{
    compress, compress_with_level, compress_zlib, decompress, decompress_into, decompress_zlib,
    decompress_zlib_into,
};
pub use oxiflate_core::{
    CompressEngine, CompressionLevel, DEFAULT_COMPRESSION_LEVEL, DEFAULT_MAX_DECOMPRESSION_FACTOR,
    DecompressEngine, DecompressorConfig, EngineResult, MAX_COMPRESSION_LEVEL,
    MAX_STD_ZLIB_COMPRESSION_LEVEL, MIN_COMPRESSION_LEVEL, Mode, OxiflateError, Result,
};
