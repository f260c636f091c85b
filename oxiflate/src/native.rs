//! libdeflate-backed engines.
//!
//! Each engine owns one native libdeflate object. The pointer is checked for
//! null once at allocation and freed exactly once in `Drop`, so a live engine
//! always refers to valid native memory.

use core::ffi::c_void;
use core::ptr::{self, NonNull};
use libdeflate_sys::{
    libdeflate_alloc_compressor, libdeflate_alloc_decompressor, libdeflate_compressor,
    libdeflate_decompressor, libdeflate_deflate_compress, libdeflate_deflate_compress_bound,
    libdeflate_deflate_decompress, libdeflate_free_compressor, libdeflate_free_decompressor,
    libdeflate_gzip_compress, libdeflate_gzip_compress_bound, libdeflate_gzip_decompress,
    libdeflate_result, libdeflate_result_LIBDEFLATE_BAD_DATA,
    libdeflate_result_LIBDEFLATE_INSUFFICIENT_SPACE, libdeflate_result_LIBDEFLATE_SHORT_OUTPUT,
    libdeflate_result_LIBDEFLATE_SUCCESS, libdeflate_zlib_compress,
    libdeflate_zlib_compress_bound, libdeflate_zlib_decompress,
};
use oxiflate_core::engine::{CompressEngine, DecompressEngine, EngineResult};
use oxiflate_core::level::CompressionLevel;
use oxiflate_core::mode::Mode;

/// A native libdeflate compressor.
#[derive(Debug)]
pub struct NativeCompressor {
    raw: NonNull<libdeflate_compressor>,
}

// SAFETY: libdeflate compressors carry no thread affinity; they only must not
// be used concurrently, which `&mut self` guarantees.
unsafe impl Send for NativeCompressor {}

impl CompressEngine for NativeCompressor {
    fn allocate(level: CompressionLevel) -> Option<Self> {
        // SAFETY: `level` is validated to lie in libdeflate's accepted range.
        let raw = unsafe { libdeflate_alloc_compressor(level.get()) };
        NonNull::new(raw).map(|raw| Self { raw })
    }

    fn compress(&mut self, mode: Mode, input: &[u8], output: &mut [u8]) -> usize {
        let c = self.raw.as_ptr();
        let in_ptr = input.as_ptr() as *const c_void;
        let out_ptr = output.as_mut_ptr() as *mut c_void;

        // SAFETY: `c` is a live compressor owned by `self`; both buffers are
        // valid for their lengths for the duration of the call.
        let written = unsafe {
            match mode {
                Mode::Deflate => {
                    libdeflate_deflate_compress(c, in_ptr, input.len(), out_ptr, output.len())
                }
                Mode::Zlib => {
                    libdeflate_zlib_compress(c, in_ptr, input.len(), out_ptr, output.len())
                }
                Mode::Gzip => {
                    libdeflate_gzip_compress(c, in_ptr, input.len(), out_ptr, output.len())
                }
            }
        };
        debug_assert!(written <= output.len());
        written
    }

    fn compress_bound(&mut self, mode: Mode, input_len: usize) -> usize {
        let c = self.raw.as_ptr();
        // SAFETY: `c` is a live compressor owned by `self`.
        unsafe {
            match mode {
                Mode::Deflate => libdeflate_deflate_compress_bound(c, input_len),
                Mode::Zlib => libdeflate_zlib_compress_bound(c, input_len),
                Mode::Gzip => libdeflate_gzip_compress_bound(c, input_len),
            }
        }
    }
}

impl Drop for NativeCompressor {
    fn drop(&mut self) {
        // SAFETY: allocated by `libdeflate_alloc_compressor` and freed only here.
        unsafe { libdeflate_free_compressor(self.raw.as_ptr()) }
    }
}

/// A native libdeflate decompressor.
#[derive(Debug)]
pub struct NativeDecompressor {
    raw: NonNull<libdeflate_decompressor>,
}

// SAFETY: see `NativeCompressor`.
unsafe impl Send for NativeDecompressor {}

impl DecompressEngine for NativeDecompressor {
    fn allocate() -> Option<Self> {
        // SAFETY: no preconditions.
        let raw = unsafe { libdeflate_alloc_decompressor() };
        NonNull::new(raw).map(|raw| Self { raw })
    }

    fn decompress(
        &mut self,
        mode: Mode,
        input: &[u8],
        output: &mut [u8],
        written: Option<&mut usize>,
    ) -> EngineResult {
        let d = self.raw.as_ptr();
        let in_ptr = input.as_ptr() as *const c_void;
        let out_ptr = output.as_mut_ptr() as *mut c_void;
        // A null written-length pointer asks libdeflate for an exact fit.
        let written_ptr = written.map_or(ptr::null_mut(), |w| w as *mut usize);

        // SAFETY: `d` is a live decompressor owned by `self`; both buffers are
        // valid for their lengths and `written_ptr` is null or points to a
        // live `usize` for the duration of the call.
        let code = unsafe {
            match mode {
                Mode::Deflate => libdeflate_deflate_decompress(
                    d,
                    in_ptr,
                    input.len(),
                    out_ptr,
                    output.len(),
                    written_ptr,
                ),
                Mode::Zlib => libdeflate_zlib_decompress(
                    d,
                    in_ptr,
                    input.len(),
                    out_ptr,
                    output.len(),
                    written_ptr,
                ),
                Mode::Gzip => libdeflate_gzip_decompress(
                    d,
                    in_ptr,
                    input.len(),
                    out_ptr,
                    output.len(),
                    written_ptr,
                ),
            }
        };
        engine_result(code)
    }
}

impl Drop for NativeDecompressor {
    fn drop(&mut self) {
        // SAFETY: allocated by `libdeflate_alloc_decompressor` and freed only here.
        unsafe { libdeflate_free_decompressor(self.raw.as_ptr()) }
    }
}

#[allow(clippy::unnecessary_cast)]
fn engine_result(code: libdeflate_result) -> EngineResult {
    match code {
        libdeflate_result_LIBDEFLATE_SUCCESS => EngineResult::Success,
        libdeflate_result_LIBDEFLATE_BAD_DATA => EngineResult::BadData,
        libdeflate_result_LIBDEFLATE_SHORT_OUTPUT => EngineResult::ShortOutput,
        libdeflate_result_LIBDEFLATE_INSUFFICIENT_SPACE => EngineResult::InsufficientSpace,
        other => EngineResult::Unknown(other as u32),
    }
}
