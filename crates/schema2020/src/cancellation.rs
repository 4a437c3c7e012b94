//! A cooperative cancellation handle for long-running compilation.
//!
//! Compilation is the only step that may block (an external `$ref`/`$dynamicRef` target is
//! fetched over HTTP or from disk). A [`CancellationToken`] lets a caller abort that work from
//! another thread; it carries no payload and is cheap to clone and share.
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// A handle that can be flipped to request cancellation of an in-flight compilation.
///
/// Cloning shares the same underlying flag: cancel any clone, and every clone (and the
/// [`Validator`](crate::Validator) built with it) observes the cancellation.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    canceled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Create a new, not-yet-canceled token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.canceled.store(true, Ordering::Release);
    }

    /// Returns `true` once [`CancellationToken::cancel`] has been called on this token or any of
    /// its clones.
    #[must_use]
    pub fn is_canceled(&self) -> bool {
        self.canceled.load(Ordering::Acquire)
    }
}
