//! Decompressor handles.
//!
//! Decompression has two sizing paths:
//!
//! - **Exact fit** ([`Decompressor::decompress_into`]): the caller knows the
//!   decompressed length and passes a buffer of exactly that size. Any
//!   mismatch is an error; nothing is truncated or overrun.
//! - **Auto size** ([`Decompressor::decompress`]): the buffer is grown
//!   following a [`GrowthSchedule`] until the stream fits or the configured
//!   maximum decompression factor is exceeded.

use crate::buffer;
use crate::handle::Handle;
use crate::native::NativeDecompressor;
use oxiflate_core::config::DecompressorConfig;
use oxiflate_core::engine::{DecompressEngine, Fit, Outcome, translate};
use oxiflate_core::error::{OxiflateError, Result};
use oxiflate_core::growth::GrowthSchedule;
use oxiflate_core::mode::Mode;
use std::fmt;

/// Decompresses DEFLATE, zlib or gzip data produced at any level.
///
/// A decompressor owns one native engine. It can be reused for any number of
/// calls and must not be shared between threads at the same time: create one
/// decompressor per thread instead. The engine is released by
/// [`close`](Self::close) or when the decompressor is dropped.
pub struct Decompressor<E: DecompressEngine = NativeDecompressor> {
    handle: Handle<E>,
    config: DecompressorConfig,
}

impl Decompressor {
    /// Create a decompressor with the default configuration.
    pub fn new() -> Result<Self> {
        Self::with_engine(DecompressorConfig::default())
    }

    /// Create a decompressor whose auto-sizing path allocates at most
    /// `factor` times the input length.
    pub fn with_max_decompression_factor(factor: usize) -> Result<Self> {
        Self::with_engine(DecompressorConfig::new().with_max_decompression_factor(factor))
    }

    /// Create a decompressor from `config`.
    pub fn with_config(config: DecompressorConfig) -> Result<Self> {
        Self::with_engine(config)
    }
}

impl<E: DecompressEngine> Decompressor<E> {
    /// Create a decompressor from `config` whose engine is allocated by `E`.
    ///
    /// The engine is chosen by the type parameter, not passed in:
    /// `Decompressor::<MyEngine>::with_engine(config)`. The configuration is
    /// validated before the engine is allocated.
    pub fn with_engine(config: DecompressorConfig) -> Result<Self> {
        config.validate()?;
        let engine = E::allocate().ok_or(OxiflateError::OutOfMemory)?;
        Ok(Self {
            handle: Handle::new(engine, "decompressor"),
            config,
        })
    }

    /// Active configuration.
    pub fn config(&self) -> &DecompressorConfig {
        &self.config
    }

    /// Ceiling of the auto-sizing growth multiplier.
    pub fn max_decompression_factor(&self) -> usize {
        self.config.max_decompression_factor
    }

    /// Whether [`close`](Self::close) has been called.
    pub fn is_closed(&self) -> bool {
        self.handle.is_closed()
    }

    /// Decompress zlib data into a newly allocated buffer.
    #[track_caller]
    pub fn decompress_zlib(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        self.decompress(input, Mode::Zlib)
    }

    /// Decompress zlib data into `output`, whose length must equal the
    /// decompressed length.
    #[track_caller]
    pub fn decompress_zlib_into(&mut self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        self.decompress_into(input, output, Mode::Zlib)
    }

    /// Decompress `input` into a newly allocated buffer sized automatically.
    ///
    /// The buffer starts at 6 times the input length and grows until the
    /// stream fits. If the data needs more than
    /// [`max_decompression_factor`](Self::max_decompression_factor) times
    /// the input length, the call fails with
    /// [`OxiflateError::InsufficientDecompressionFactor`] instead of
    /// allocating further; decompress such data with
    /// [`decompress_into`](Self::decompress_into) if its size is known.
    ///
    /// # Panics
    ///
    /// Panics if the decompressor was closed.
    #[track_caller]
    pub fn decompress(&mut self, input: &[u8], mode: Mode) -> Result<Vec<u8>> {
        let mut schedule = GrowthSchedule::new(self.config.max_decompression_factor);
        let engine = self.handle.engine();
        if input.is_empty() {
            return Err(OxiflateError::EmptyInput);
        }

        let mut output = Vec::new();
        loop {
            let capacity = schedule
                .capacity(input.len())
                .ok_or(OxiflateError::OutOfMemory)?;
            // Drop the failed attempt so growing does not copy it.
            output.clear();
            buffer::resize_zeroed(&mut output, capacity)?;

            let mut written = 0usize;
            let result = engine.decompress(mode, input, &mut output, Some(&mut written));
            match translate(result, Fit::Auto)? {
                Outcome::Done => {
                    debug_assert!(written <= capacity);
                    output.truncate(written);
                    return Ok(output);
                }
                Outcome::Grow => {
                    schedule.grow()?;
                }
            }
        }
    }

    /// Decompress `input` into `output` and return the number of bytes
    /// written, which always equals `output.len()`.
    ///
    /// `output` must be exactly as long as the decompressed data. A shorter
    /// or longer buffer fails with [`OxiflateError::ShortOutput`] (or
    /// [`OxiflateError::BadData`] if the stream is corrupt); the contents of
    /// `output` are unspecified after an error.
    ///
    /// # Panics
    ///
    /// Panics if the decompressor was closed.
    #[track_caller]
    pub fn decompress_into(&mut self, input: &[u8], output: &mut [u8], mode: Mode) -> Result<usize> {
        let engine = self.handle.engine();
        if input.is_empty() {
            return Err(OxiflateError::EmptyInput);
        }

        let result = engine.decompress(mode, input, output, None);
        match translate(result, Fit::Exact)? {
            Outcome::Done => Ok(output.len()),
            Outcome::Grow => Err(OxiflateError::ShortOutput),
        }
    }

    /// Release the native engine.
    ///
    /// # Panics
    ///
    /// Panics if the decompressor was already closed.
    #[track_caller]
    pub fn close(&mut self) {
        self.handle.close();
    }
}

impl<E: DecompressEngine> fmt::Debug for Decompressor<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decompressor")
            .field("config", &self.config)
            .field("closed", &self.is_closed())
            .finish()
    }
}
