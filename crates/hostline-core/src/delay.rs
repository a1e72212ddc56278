//! Delay Primitive
//!
//! The wait between load attempts goes through this trait so the loader
//! stays runtime-agnostic: tokio on the server, `setTimeout` in the browser,
//! and a recording stub in tests.

use std::future::Future;
use std::time::Duration;

/// Source of inter-attempt waits
///
/// A zero duration is still a call to `sleep`, never a skipped branch.
pub trait Delay {
    /// Future that completes once the duration has elapsed
    type Sleep: Future<Output = ()>;

    fn sleep(&self, duration: Duration) -> Self::Sleep;
}

impl<D: Delay + ?Sized> Delay for &D {
    type Sleep = D::Sleep;

    fn sleep(&self, duration: Duration) -> Self::Sleep {
        (**self).sleep(duration)
    }
}

/// Tokio-backed delay
#[cfg(feature = "tokio")]
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioDelay;

#[cfg(feature = "tokio")]
impl Delay for TokioDelay {
    type Sleep = tokio::time::Sleep;

    fn sleep(&self, duration: Duration) -> Self::Sleep {
        tokio::time::sleep(duration)
    }
}
