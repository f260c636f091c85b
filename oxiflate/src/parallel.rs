//! Parallel batch compression (requires the `parallel` feature).
//!
//! Handles must not be shared between threads, so each rayon worker creates
//! its own compressor or decompressor on first use and reuses it for every
//! item it processes.

use crate::{Compressor, Decompressor};
use oxiflate_core::config::DecompressorConfig;
use oxiflate_core::error::Result;
use oxiflate_core::level::CompressionLevel;
use oxiflate_core::mode::Mode;
use rayon::prelude::*;

/// Compress every input independently, in parallel.
///
/// The output order matches `inputs`. The first error aborts the batch.
pub fn compress_batch<T>(inputs: &[T], level: CompressionLevel, mode: Mode) -> Result<Vec<Vec<u8>>>
where
    T: AsRef<[u8]> + Sync,
{
    inputs
        .par_iter()
        .map_init(
            || Compressor::with_compression_level(level),
            |compressor, input| match compressor {
                Ok(c) => c.compress(input.as_ref(), mode),
                Err(e) => Err(e.clone()),
            },
        )
        .collect()
}

/// Decompress every input independently, in parallel, with automatic
/// output sizing bounded by `config`.
///
/// The output order matches `inputs`. The first error aborts the batch.
pub fn decompress_batch<T>(
    inputs: &[T],
    mode: Mode,
    config: DecompressorConfig,
) -> Result<Vec<Vec<u8>>>
where
    T: AsRef<[u8]> + Sync,
{
    inputs
        .par_iter()
        .map_init(
            || Decompressor::with_config(config),
            |decompressor, input| match decompressor {
                Ok(dc) => dc.decompress(input.as_ref(), mode),
                Err(e) => Err(e.clone()),
            },
        )
        .collect()
}
