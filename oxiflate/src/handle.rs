//! Open/closed state of an engine handle.
//!
//! A [`Handle`] owns at most one engine. Closing it drops the engine, which
//! frees the native resource; after that the slot is empty and every access
//! panics instead of reaching freed memory. Dropping an open handle releases
//! the engine the same way, so the resource is freed exactly once on every
//! path.

use std::fmt;

pub(crate) struct Handle<E> {
    engine: Option<E>,
    kind: &'static str,
}

impl<E> Handle<E> {
    pub(crate) fn new(engine: E, kind: &'static str) -> Self {
        Self {
            engine: Some(engine),
            kind,
        }
    }

    /// Borrow the engine, panicking if the handle was closed.
    #[track_caller]
    pub(crate) fn engine(&mut self) -> &mut E {
        match self.engine.as_mut() {
            Some(engine) => engine,
            None => already_closed(self.kind),
        }
    }

    /// Release the engine, panicking if it was already released.
    #[track_caller]
    pub(crate) fn close(&mut self) {
        match self.engine.take() {
            Some(engine) => drop(engine),
            None => already_closed(self.kind),
        }
    }

    pub(crate) fn is_closed(&self) -> bool {
        self.engine.is_none()
    }
}

impl<E> fmt::Debug for Handle<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle")
            .field("kind", &self.kind)
            .field("closed", &self.is_closed())
            .finish()
    }
}

#[cold]
#[track_caller]
fn already_closed(kind: &str) -> ! {
    panic!("oxiflate: {kind} already closed")
}
