//! Fallible output buffer allocation.

use oxiflate_core::error::{OxiflateError, Result};

/// Allocate `len` zeroed bytes, reporting allocation failure as an error.
pub(crate) fn zeroed(len: usize) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    resize_zeroed(&mut buf, len)?;
    Ok(buf)
}

/// Resize `buf` to `len` bytes, zero-filling any new tail.
pub(crate) fn resize_zeroed(buf: &mut Vec<u8>, len: usize) -> Result<()> {
    if len > buf.len() {
        buf.try_reserve_exact(len - buf.len())
            .map_err(|_| OxiflateError::OutOfMemory)?;
    }
    buf.resize(len, 0);
    Ok(())
}
