//! One-shot convenience functions.
//!
//! Every function here allocates a fresh handle, performs a single operation
//! and releases the handle again. That allocation is paid on every call, so
//! code that compresses or decompresses repeatedly should keep a
//! [`Compressor`] or [`Decompressor`] around instead.

use crate::{Compressor, Decompressor};
use oxiflate_core::error::Result;
use oxiflate_core::mode::Mode;

/// Compress `input` in zlib format at the default level.
pub fn compress_zlib(input: &[u8]) -> Result<Vec<u8>> {
    compress(input, Mode::Zlib)
}

/// Compress `input` in `mode` at the default level.
pub fn compress(input: &[u8], mode: Mode) -> Result<Vec<u8>> {
    let mut c = Compressor::new()?;
    let result = c.compress(input, mode);
    c.close();
    result
}

/// Compress `input` in `mode` at `level`.
pub fn compress_with_level(input: &[u8], level: i32, mode: Mode) -> Result<Vec<u8>> {
    let mut c = Compressor::with_level(level)?;
    let result = c.compress(input, mode);
    c.close();
    result
}

/// Decompress zlib data into a newly allocated buffer.
pub fn decompress_zlib(input: &[u8]) -> Result<Vec<u8>> {
    decompress(input, Mode::Zlib)
}

/// Decompress zlib data into `output`, whose length must equal the
/// decompressed length.
pub fn decompress_zlib_into(input: &[u8], output: &mut [u8]) -> Result<usize> {
    decompress_into(input, output, Mode::Zlib)
}

/// Decompress `input` in `mode` into a newly allocated buffer.
///
/// Uses the default maximum decompression factor; see
/// [`Decompressor::decompress`].
pub fn decompress(input: &[u8], mode: Mode) -> Result<Vec<u8>> {
    let mut dc = Decompressor::new()?;
    let result = dc.decompress(input, mode);
    dc.close();
    result
}

/// Decompress `input` in `mode` into `output`, whose length must equal the
/// decompressed length.
pub fn decompress_into(input: &[u8], output: &mut [u8], mode: Mode) -> Result<usize> {
    let mut dc = Decompressor::new()?;
    let result = dc.decompress_into(input, output, mode);
    dc.close();
    result
}
