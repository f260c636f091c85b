//! Compressor handles.

use crate::buffer;
use crate::handle::Handle;
use crate::native::NativeCompressor;
use oxiflate_core::engine::CompressEngine;
use oxiflate_core::error::{OxiflateError, Result};
use oxiflate_core::level::CompressionLevel;
use oxiflate_core::mode::Mode;
use std::fmt;

/// Compresses data at a fixed compression level.
///
/// A compressor owns one native engine. It can be reused for any number of
/// calls, in any [`Mode`], and must not be shared between threads at the
/// same time: create one compressor per thread instead. The engine is
/// released by [`close`](Self::close) or when the compressor is dropped.
///
/// # Example
///
/// ```
/// use oxiflate::{Compressor, Decompressor, Mode};
///
/// let data = b"hello, world\n".repeat(11);
///
/// let mut c = Compressor::new().unwrap();
/// let compressed = c.compress(&data, Mode::Gzip).unwrap();
/// c.close();
///
/// let mut dc = Decompressor::new().unwrap();
/// let mut out = vec![0u8; data.len()];
/// dc.decompress_into(&compressed, &mut out, Mode::Gzip).unwrap();
/// assert_eq!(out, data);
/// ```
pub struct Compressor<E: CompressEngine = NativeCompressor> {
    handle: Handle<E>,
    level: CompressionLevel,
}

impl Compressor {
    /// Create a compressor at [`DEFAULT_COMPRESSION_LEVEL`](crate::DEFAULT_COMPRESSION_LEVEL).
    pub fn new() -> Result<Self> {
        Self::with_compression_level(CompressionLevel::DEFAULT)
    }

    /// Create a compressor at `level`.
    ///
    /// Fails with [`OxiflateError::InvalidLevel`] unless
    /// `MIN_COMPRESSION_LEVEL <= level <= MAX_COMPRESSION_LEVEL`; nothing is
    /// allocated in that case.
    pub fn with_level(level: i32) -> Result<Self> {
        Self::with_compression_level(CompressionLevel::new(level)?)
    }

    /// Create a compressor at an already validated `level`.
    pub fn with_compression_level(level: CompressionLevel) -> Result<Self> {
        Self::with_engine(level)
    }
}

impl<E: CompressEngine> Compressor<E> {
    /// Create a compressor at `level` whose engine is allocated by `E`.
    ///
    /// The engine is chosen by the type parameter, not passed in:
    /// `Compressor::<MyEngine>::with_engine(level)`. Use this to run the
    /// handle over an engine other than [`NativeCompressor`].
    pub fn with_engine(level: CompressionLevel) -> Result<Self> {
        let engine = E::allocate(level).ok_or(OxiflateError::OutOfMemory)?;
        Ok(Self {
            handle: Handle::new(engine, "compressor"),
            level,
        })
    }

    /// Compression level this compressor was created with.
    ///
    /// Still available after [`close`](Self::close).
    pub fn level(&self) -> CompressionLevel {
        self.level
    }

    /// Whether [`close`](Self::close) has been called.
    pub fn is_closed(&self) -> bool {
        self.handle.is_closed()
    }

    /// Compress `input` in zlib format into a newly allocated buffer.
    #[track_caller]
    pub fn compress_zlib(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        self.compress(input, Mode::Zlib)
    }

    /// Compress `input` in zlib format into `output`.
    #[track_caller]
    pub fn compress_zlib_into(&mut self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        self.compress_into(input, output, Mode::Zlib)
    }

    /// Compress `input` into a newly allocated buffer, trimmed to the
    /// compressed length.
    ///
    /// The first attempt uses a buffer as long as `input`, which is enough
    /// for anything compressible. Incompressible or tiny inputs are retried
    /// once with the worst-case bound for `mode`.
    ///
    /// # Panics
    ///
    /// Panics if the compressor was closed.
    #[track_caller]
    pub fn compress(&mut self, input: &[u8], mode: Mode) -> Result<Vec<u8>> {
        let engine = self.handle.engine();
        if input.is_empty() {
            return Err(OxiflateError::EmptyInput);
        }

        let mut output = buffer::zeroed(input.len())?;
        let mut written = engine.compress(mode, input, &mut output);
        if written == 0 {
            let bound = engine.compress_bound(mode, input.len());
            buffer::resize_zeroed(&mut output, bound)?;
            written = engine.compress(mode, input, &mut output);
            if written == 0 {
                return Err(OxiflateError::ShortBuffer);
            }
        }

        output.truncate(written);
        Ok(output)
    }

    /// Compress `input` into `output` and return the number of bytes
    /// written.
    ///
    /// Fails with [`OxiflateError::ShortBuffer`] if `output` is too small;
    /// the required size is not known in that case, so use
    /// [`compress`](Self::compress) or size `output` with
    /// [`compress_bound`](Self::compress_bound).
    ///
    /// # Panics
    ///
    /// Panics if the compressor was closed.
    #[track_caller]
    pub fn compress_into(&mut self, input: &[u8], output: &mut [u8], mode: Mode) -> Result<usize> {
        let engine = self.handle.engine();
        if input.is_empty() {
            return Err(OxiflateError::EmptyInput);
        }
        match engine.compress(mode, input, output) {
            0 => Err(OxiflateError::ShortBuffer),
            written => Ok(written),
        }
    }

    /// Worst-case compressed size of `input_len` bytes in `mode`.
    ///
    /// # Panics
    ///
    /// Panics if the compressor was closed.
    #[track_caller]
    pub fn compress_bound(&mut self, input_len: usize, mode: Mode) -> usize {
        self.handle.engine().compress_bound(mode, input_len)
    }

    /// Release the native engine.
    ///
    /// # Panics
    ///
    /// Panics if the compressor was already closed.
    #[track_caller]
    pub fn close(&mut self) {
        self.handle.close();
    }
}

impl<E: CompressEngine> fmt::Debug for Compressor<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Compressor")
            .field("level", &self.level)
            .field("closed", &self.is_closed())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Decompressor;

    const SHORT_STRING: &[u8] = b"hello, world\nhello, world\nhello, world\nhello, world\nhello, world\nhello, world\nhello, world\nhello, world\nhello, world\nhello, world\nhello, world\n";

    #[test]
    fn test_new_compressor() {
        let c = Compressor::new().unwrap();
        assert_eq!(c.level(), CompressionLevel::DEFAULT);

        assert_eq!(
            Compressor::with_level(30).unwrap_err(),
            OxiflateError::InvalidLevel { level: 30 }
        );
    }

    #[test]
    fn test_compress_meta() {
        let mut c = Compressor::new().unwrap();

        assert_eq!(c.compress_zlib(&[]), Err(OxiflateError::EmptyInput));

        let out = c.compress_zlib(SHORT_STRING).unwrap();
        assert!(!out.is_empty());
        assert!(out.len() < SHORT_STRING.len());

        let mut out2 = vec![0u8; SHORT_STRING.len()];
        let n = c.compress_zlib_into(SHORT_STRING, &mut out2).unwrap();
        assert_eq!(&out2[..n], &out[..]);
    }

    #[test]
    fn test_compress_into_short_buffer() {
        let mut c = Compressor::new().unwrap();
        let mut out = [0u8; 3];
        assert_eq!(
            c.compress_into(SHORT_STRING, &mut out, Mode::Zlib),
            Err(OxiflateError::ShortBuffer)
        );
        let mut empty: [u8; 0] = [];
        assert_eq!(
            c.compress_into(SHORT_STRING, &mut empty, Mode::Deflate),
            Err(OxiflateError::ShortBuffer)
        );
    }

    #[test]
    fn test_incompressible_input_falls_back_to_bound() {
        // Too short to shrink: the framing alone is larger than the input.
        let mut c = Compressor::new().unwrap();
        for mode in Mode::ALL {
            let out = c.compress(b"x", mode).unwrap();
            assert!(out.len() > 1);
            assert!(out.len() <= c.compress_bound(1, mode));

            let mut dc = Decompressor::new().unwrap();
            assert_eq!(dc.decompress(&out, mode).unwrap(), b"x");
        }
    }

    #[test]
    fn test_level_after_close() {
        let mut c = Compressor::with_level(9).unwrap();
        c.close();
        assert!(c.is_closed());
        assert_eq!(c.level().get(), 9);
    }

    #[test]
    #[should_panic(expected = "compressor already closed")]
    fn test_compress_after_close_panics() {
        let mut c = Compressor::new().unwrap();
        c.close();
        let _ = c.compress_zlib(SHORT_STRING);
    }

    #[test]
    #[should_panic(expected = "compressor already closed")]
    fn test_double_close_panics() {
        let mut c = Compressor::new().unwrap();
        c.close();
        c.close();
    }

    #[test]
    fn test_debug_output() {
        let c = Compressor::with_level(3).unwrap();
        let s = format!("{c:?}");
        assert!(s.contains("Compressor"));
        assert!(s.contains("closed: false"));
    }
}
