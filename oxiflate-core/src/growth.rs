//! Output buffer growth for auto-sized decompression.
//!
//! The decompressed size of a DEFLATE stream is not stored anywhere reliable,
//! so the decompressor guesses `input_len * multiplier` and grows the
//! multiplier whenever the engine runs out of space. Growth slows down once
//! the multiplier reaches [`SLOW_GROWTH_THRESHOLD`] and stops for good at the
//! configured ceiling, which is what keeps a decompression bomb from
//! allocating unbounded memory.
//!
//! With the default ceiling of 30 the multipliers are
//! `6, 11, 16, 19, 22, 25, 28`; the next step (31) is refused.

use crate::error::{OxiflateError, Result};

/// Default ceiling for the growth multiplier.
pub const DEFAULT_MAX_DECOMPRESSION_FACTOR: usize = 30;

/// Multiplier used for the first attempt.
pub const INITIAL_MULTIPLIER: usize = 6;

/// Below this multiplier growth uses [`FAST_GROWTH_STEP`].
pub const SLOW_GROWTH_THRESHOLD: usize = 16;

/// Step while the multiplier is below [`SLOW_GROWTH_THRESHOLD`].
pub const FAST_GROWTH_STEP: usize = 5;

/// Step once the multiplier has reached [`SLOW_GROWTH_THRESHOLD`].
pub const SLOW_GROWTH_STEP: usize = 3;

/// State of the growth multiplier for one auto-sized decompression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowthSchedule {
    multiplier: usize,
    max_factor: usize,
}

impl GrowthSchedule {
    /// Start a schedule bounded by `max_factor`.
    ///
    /// The first multiplier is [`INITIAL_MULTIPLIER`], lowered to
    /// `max_factor` if the ceiling is smaller so no attempt ever exceeds it.
    pub fn new(max_factor: usize) -> Self {
        Self {
            multiplier: INITIAL_MULTIPLIER.min(max_factor),
            max_factor,
        }
    }

    /// Current multiplier.
    pub fn multiplier(&self) -> usize {
        self.multiplier
    }

    /// Configured ceiling.
    pub fn max_factor(&self) -> usize {
        self.max_factor
    }

    /// Buffer size for the current attempt, `None` on overflow.
    pub fn capacity(&self, input_len: usize) -> Option<usize> {
        input_len.checked_mul(self.multiplier)
    }

    /// Advance to the next multiplier.
    ///
    /// Fails with [`OxiflateError::InsufficientDecompressionFactor`] when the
    /// next multiplier would exceed the ceiling; the schedule is left
    /// unchanged in that case.
    pub fn grow(&mut self) -> Result<usize> {
        let step = if self.multiplier < SLOW_GROWTH_THRESHOLD {
            FAST_GROWTH_STEP
        } else {
            SLOW_GROWTH_STEP
        };
        let next = self.multiplier + step;
        if next > self.max_factor {
            return Err(OxiflateError::insufficient_factor(next, self.max_factor));
        }
        self.multiplier = next;
        Ok(next)
    }
}

impl Default for GrowthSchedule {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DECOMPRESSION_FACTOR)
    }
}
