//! Engine capability traits and the result translator.
//!
//! A compression engine is an opaque object that performs the actual byte
//! transformation. The handle types in `oxiflate` own exactly one engine
//! each and never look inside it; releasing the engine's native resources is
//! the engine's `Drop`.

use crate::error::{OxiflateError, Result};
use crate::level::CompressionLevel;
use crate::mode::Mode;

/// Outcome of a single decompression call as reported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineResult {
    /// Data decompressed successfully.
    Success,
    /// Input is corrupt or not in the requested format.
    BadData,
    /// Fewer bytes were produced than the output buffer asserted.
    ShortOutput,
    /// The output buffer filled up before the stream ended.
    InsufficientSpace,
    /// A code outside the known set.
    Unknown(u32),
}

/// How the output buffer of a decompression call was sized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fit {
    /// The buffer length is the asserted decompressed length.
    Exact,
    /// The buffer is a capacity guess; the engine reports the written length.
    Auto,
}

/// What the auto-size loop should do after an engine call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The call succeeded.
    Done,
    /// The buffer was too small; grow it and try again.
    Grow,
}

/// Translate an engine outcome into the error taxonomy.
///
/// `InsufficientSpace` means different things depending on the sizing mode:
/// in exact-fit mode the caller asserted a wrong size ([`OxiflateError::ShortOutput`]),
/// in auto mode it is the growth signal consumed by the decompressor and
/// never reaches the caller.
pub fn translate(result: EngineResult, fit: Fit) -> Result<Outcome> {
    match (result, fit) {
        (EngineResult::Success, _) => Ok(Outcome::Done),
        (EngineResult::BadData, _) => Err(OxiflateError::BadData),
        (EngineResult::ShortOutput, _) => Err(OxiflateError::ShortOutput),
        (EngineResult::InsufficientSpace, Fit::Exact) => Err(OxiflateError::ShortOutput),
        (EngineResult::InsufficientSpace, Fit::Auto) => Ok(Outcome::Grow),
        (EngineResult::Unknown(code), _) => Err(OxiflateError::unknown_result(code)),
    }
}

/// A compression engine.
///
/// One engine holds mutable scratch state and must only be driven by one
/// caller at a time; the `&mut self` receivers encode that.
pub trait CompressEngine: Sized {
    /// Allocate an engine for `level`, or `None` if allocation failed.
    fn allocate(level: CompressionLevel) -> Option<Self>;

    /// Compress `input` into `output` using `mode` framing.
    ///
    /// Returns the number of bytes written, or 0 if `output` was too short.
    fn compress(&mut self, mode: Mode, input: &[u8], output: &mut [u8]) -> usize;

    /// Worst-case compressed size of `input_len` bytes in `mode`.
    fn compress_bound(&mut self, mode: Mode, input_len: usize) -> usize;
}

/// A decompression engine.
pub trait DecompressEngine: Sized {
    /// Allocate an engine, or `None` if allocation failed.
    fn allocate() -> Option<Self>;

    /// Decompress `input` into `output` using `mode` framing.
    ///
    /// With `written == None` the engine requires the stream to fill
    /// `output` exactly. With `Some`, it stores the number of bytes produced.
    fn decompress(
        &mut self,
        mode: Mode,
        input: &[u8],
        output: &mut [u8],
        written: Option<&mut usize>,
    ) -> EngineResult;
}
