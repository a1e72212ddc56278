//! Suspension Boundary
//!
//! Runtime-agnostic form of "show a fallback while something is pending".
//! The boundary is a [`Stream`] of frames: at most one fallback, then the
//! content exactly once. The frontend has its own Leptos adapter with the
//! same contract.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::stream::{FusedStream, Stream};

/// Placeholder used when the caller does not supply a fallback
pub trait DefaultFallback {
    fn default_fallback() -> Self;
}

impl DefaultFallback for String {
    fn default_fallback() -> Self {
        "⠋ Loading...".into()
    }
}

/// One rendered state of a boundary
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Frame<V> {
    /// Content is still pending
    Fallback(V),
    /// Content resolved; no further frames follow
    Content(V),
}

/// Fallback-then-content stream over a content future
///
/// Errors from the content are yielded as-is and end the stream; the
/// boundary does not catch them.
pub struct SuspenseBoundary<Fut, V> {
    content: Option<Pin<Box<Fut>>>,
    fallback: Option<V>,
}

// The fallback is only ever moved out, never pinned.
impl<Fut, V> Unpin for SuspenseBoundary<Fut, V> {}

impl<Fut, V, E> SuspenseBoundary<Fut, V>
where
    Fut: Future<Output = Result<V, E>>,
{
    /// Boundary with the default spinner fallback
    pub fn new(content: Fut) -> Self
    where
        V: DefaultFallback,
    {
        Self::with_fallback(V::default_fallback(), content)
    }

    pub fn with_fallback(fallback: V, content: Fut) -> Self {
        Self {
            content: Some(Box::pin(content)),
            fallback: Some(fallback),
        }
    }
}

impl<Fut, V, E> Stream for SuspenseBoundary<Fut, V>
where
    Fut: Future<Output = Result<V, E>>,
{
    type Item = Result<Frame<V>, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        let Some(content) = this.content.as_mut() else {
            return Poll::Ready(None);
        };

        match content.as_mut().poll(cx) {
            Poll::Ready(result) => {
                this.content = None;
                this.fallback = None;
                Poll::Ready(Some(result.map(Frame::Content)))
            }
            Poll::Pending => match this.fallback.take() {
                Some(fallback) => Poll::Ready(Some(Ok(Frame::Fallback(fallback)))),
                None => Poll::Pending,
            },
        }
    }
}

impl<Fut, V, E> FusedStream for SuspenseBoundary<Fut, V>
where
    Fut: Future<Output = Result<V, E>>,
{
    fn is_terminated(&self) -> bool {
        self.content.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use futures::channel::oneshot;
    use futures::{FutureExt, StreamExt};

    use crate::config::LoaderConfig;
    use crate::delay::Delay;
    use crate::loader::lazy_with_retry;

    #[derive(Clone, Copy)]
    struct TokioSleep;

    impl Delay for TokioSleep {
        type Sleep = tokio::time::Sleep;

        fn sleep(&self, duration: Duration) -> Self::Sleep {
            tokio::time::sleep(duration)
        }
    }

    #[test]
    fn test_pending_content_shows_default_fallback_once() {
        let (tx, rx) = oneshot::channel::<String>();
        let mut boundary = SuspenseBoundary::new(rx.map(|r| r.map_err(|_| "cancelled")));

        let first = boundary.next().now_or_never().flatten();
        assert_eq!(first, Some(Ok(Frame::Fallback("⠋ Loading...".to_string()))));
        assert!(boundary.next().now_or_never().is_none());

        tx.send("pricing".into()).unwrap();

        let second = boundary.next().now_or_never().flatten();
        assert_eq!(second, Some(Ok(Frame::Content("pricing".to_string()))));
        assert_eq!(boundary.next().now_or_never(), Some(None));
        assert!(boundary.is_terminated());
    }

    #[test]
    fn test_ready_content_skips_fallback() {
        let boundary = SuspenseBoundary::with_fallback(
            "skeleton",
            futures::future::ready(Ok::<_, ()>("features")),
        );

        let frames: Vec<_> = futures::executor::block_on(boundary.collect());
        assert_eq!(frames, vec![Ok(Frame::Content("features"))]);
    }

    #[test]
    fn test_failure_propagates_and_ends() {
        let boundary = SuspenseBoundary::with_fallback(
            "spinner",
            futures::future::ready(Err::<&str, _>("network down")),
        );

        let frames: Vec<_> = futures::executor::block_on(boundary.collect());
        assert_eq!(frames, vec![Err("network down")]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_boundary_over_retrying_handle() {
        let mut n = 0;
        let handle = lazy_with_retry(
            move || {
                n += 1;
                futures::future::ready(if n < 3 { Err("flaky") } else { Ok("about") })
            },
            LoaderConfig::new(3, 1000),
            TokioSleep,
        );

        let content = handle.clone().map(|r| r.map(|m| format!("<main>{m}</main>")));
        let frames: Vec<_> = SuspenseBoundary::new(content).collect().await;

        assert_eq!(
            frames,
            vec![
                Ok(Frame::Fallback("⠋ Loading...".to_string())),
                Ok(Frame::Content("<main>about</main>".to_string())),
            ]
        );
        assert_eq!(handle.attempts(), 3);
    }
}
