//! Retry Loader
//!
//! Wraps a deferred factory with bounded retry-with-delay and hands out a
//! memoized [`ModuleHandle`] to the eventual module.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use hostline_core::{lazy_with_retry, LoaderConfig};
//!
//! let handle = lazy_with_retry(|| fetch_bundle("pricing"), LoaderConfig::default(), BrowserDelay);
//!
//! // Nothing has been fetched yet. The first await drives the attempts,
//! // every later await sees the same outcome.
//! let bundle = handle.clone().await?;
//! ```

use std::cell::Cell;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures::future::{FutureExt, LocalBoxFuture, Shared};

use crate::config::LoaderConfig;
use crate::delay::Delay;

/// Settled result of a handle, shared by every consumer
pub type Outcome<M, E> = Result<Arc<M>, Arc<E>>;

/// Observable state of a [`ModuleHandle`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModuleStatus {
    Pending,
    Resolved,
    Failed,
}

/// Run `factory` until it succeeds or the retry budget is spent.
///
/// Returns the first success, or the error of the final attempt untouched.
pub async fn load_with_retry<M, E, F, Fut, D>(
    factory: F,
    config: &LoaderConfig,
    delay: &D,
) -> Result<M, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<M, E>>,
    D: Delay + ?Sized,
{
    retry_loop(factory, *config, delay, |_| {}).await
}

async fn retry_loop<M, E, F, Fut, D, A>(
    mut factory: F,
    config: LoaderConfig,
    delay: &D,
    mut on_attempt: A,
) -> Result<M, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<M, E>>,
    D: Delay + ?Sized,
    A: FnMut(u32),
{
    let mut attempt: u32 = 0;

    loop {
        let number = attempt.saturating_add(1);
        on_attempt(number);

        match factory().await {
            Ok(module) => {
                if attempt > 0 {
                    tracing::debug!(attempts = number, "module loaded after retry");
                }
                return Ok(module);
            }
            Err(_) if attempt < config.retries => {
                tracing::debug!(
                    attempt = number,
                    remaining = config.retries - attempt,
                    interval_ms = config.interval_ms,
                    "load attempt failed, retrying"
                );
                delay.sleep(config.interval()).await;
                attempt += 1;
            }
            Err(err) => {
                tracing::warn!(
                    attempts = config.max_attempts(),
                    "module load failed, retries exhausted"
                );
                return Err(err);
            }
        }
    }
}

type SharedLoad<M, E> = Shared<LocalBoxFuture<'static, Outcome<M, E>>>;

/// Lazily resolved, memoized module
///
/// Clones share one outcome. The factory runs on the first poll of any clone
/// and never again afterwards. Dropping every clone drops the in-flight
/// attempt along with its timer.
pub struct ModuleHandle<M, E> {
    /// Polled by this handle; `Shared` gives up its state once it has
    /// returned `Ready`
    driver: SharedLoad<M, E>,
    /// Never polled, so it keeps the settled outcome readable
    observer: SharedLoad<M, E>,
    attempts: Rc<Cell<u32>>,
}

impl<M, E> ModuleHandle<M, E> {
    fn from_load(load: SharedLoad<M, E>, attempts: Rc<Cell<u32>>) -> Self {
        Self {
            driver: load.clone(),
            observer: load,
            attempts,
        }
    }

    /// Current state without driving the load
    pub fn status(&self) -> ModuleStatus {
        match self.observer.peek() {
            None => ModuleStatus::Pending,
            Some(Ok(_)) => ModuleStatus::Resolved,
            Some(Err(_)) => ModuleStatus::Failed,
        }
    }

    /// Settled outcome, if any
    pub fn peek(&self) -> Option<&Outcome<M, E>> {
        self.observer.peek()
    }

    /// Factory invocations made so far for this handle
    pub fn attempts(&self) -> u32 {
        self.attempts.get()
    }
}

impl<M, E> Clone for ModuleHandle<M, E> {
    fn clone(&self) -> Self {
        Self::from_load(self.observer.clone(), Rc::clone(&self.attempts))
    }
}

impl<M, E> Future for ModuleHandle<M, E> {
    type Output = Outcome<M, E>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        if let Some(settled) = self.observer.peek() {
            return Poll::Ready(settled.clone());
        }
        self.driver.poll_unpin(cx)
    }
}

impl<M, E> fmt::Debug for ModuleHandle<M, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleHandle")
            .field("status", &self.status())
            .field("attempts", &self.attempts())
            .finish()
    }
}

/// Create a handle that loads through `factory` with the given policy.
///
/// Each call owns a fresh attempt counter; handles never share a budget.
pub fn lazy_with_retry<M, E, F, Fut, D>(
    factory: F,
    config: LoaderConfig,
    delay: D,
) -> ModuleHandle<M, E>
where
    M: 'static,
    E: 'static,
    F: FnMut() -> Fut + 'static,
    Fut: Future<Output = Result<M, E>> + 'static,
    D: Delay + 'static,
    D::Sleep: 'static,
{
    let attempts = Rc::new(Cell::new(0));
    let counter = Rc::clone(&attempts);

    let load = async move {
        retry_loop(factory, config, &delay, move |n| counter.set(n))
            .await
            .map(Arc::new)
            .map_err(Arc::new)
    };

    ModuleHandle::from_load(load.boxed_local().shared(), attempts)
}

/// Wait for every handle; fails with the first terminal error observed
pub async fn join_all<M, E, I>(handles: I) -> Result<Vec<Arc<M>>, Arc<E>>
where
    I: IntoIterator<Item = ModuleHandle<M, E>>,
{
    futures::future::try_join_all(handles).await
}

/// A retry policy bound to a delay source
#[derive(Clone, Debug)]
pub struct RetryLoader<D> {
    config: LoaderConfig,
    delay: D,
}

impl<D: Delay> RetryLoader<D> {
    pub const fn new(config: LoaderConfig, delay: D) -> Self {
        Self { config, delay }
    }

    /// Load eagerly, returning the module or the final error
    pub async fn load<M, E, F, Fut>(&self, factory: F) -> Result<M, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<M, E>>,
    {
        load_with_retry(factory, &self.config, &self.delay).await
    }

    /// Create a lazily resolved handle
    pub fn lazy<M, E, F, Fut>(&self, factory: F) -> ModuleHandle<M, E>
    where
        M: 'static,
        E: 'static,
        F: FnMut() -> Fut + 'static,
        Fut: Future<Output = Result<M, E>> + 'static,
        D: Clone + 'static,
        D::Sleep: 'static,
    {
        lazy_with_retry(factory, self.config, self.delay.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::time::Duration;

    use futures::future::{ready, Ready};

    #[derive(Debug, PartialEq, Eq)]
    struct Failure {
        attempt: u32,
        message: String,
    }

    #[derive(Clone, Default)]
    struct RecordingDelay {
        waits: Rc<RefCell<Vec<Duration>>>,
    }

    impl Delay for RecordingDelay {
        type Sleep = Ready<()>;

        fn sleep(&self, duration: Duration) -> Self::Sleep {
            self.waits.borrow_mut().push(duration);
            ready(())
        }
    }

    #[derive(Clone, Copy)]
    struct TokioSleep;

    impl Delay for TokioSleep {
        type Sleep = tokio::time::Sleep;

        fn sleep(&self, duration: Duration) -> Self::Sleep {
            tokio::time::sleep(duration)
        }
    }

    /// Fails the first `fail_first` calls, then returns the attempt number
    fn scripted(
        fail_first: u32,
        calls: Rc<Cell<u32>>,
    ) -> impl FnMut() -> Ready<Result<u32, Failure>> {
        move || {
            let n = calls.get() + 1;
            calls.set(n);
            if n <= fail_first {
                ready(Err(Failure { attempt: n, message: "network down".into() }))
            } else {
                ready(Ok(n))
            }
        }
    }

    #[tokio::test]
    async fn test_always_failing_factory_runs_retries_plus_one() {
        for retries in 0..=4 {
            let calls = Rc::new(Cell::new(0));
            let delay = RecordingDelay::default();
            let config = LoaderConfig::new(retries, 50);

            let result = load_with_retry(scripted(u32::MAX, calls.clone()), &config, &delay).await;

            assert!(result.is_err());
            assert_eq!(calls.get(), retries + 1);
            assert_eq!(delay.waits.borrow().len(), retries as usize);
        }
    }

    #[tokio::test]
    async fn test_success_on_attempt_k_stops_there() {
        for k in 1..=4 {
            let calls = Rc::new(Cell::new(0));
            let delay = RecordingDelay::default();

            let config = LoaderConfig::new(3, 10);

            let module = load_with_retry(scripted(k - 1, calls.clone()), &config, &delay)
                .await
                .unwrap();

            assert_eq!(module, k);
            assert_eq!(calls.get(), k);
            assert_eq!(delay.waits.borrow().len(), (k - 1) as usize);
        }
    }

    #[tokio::test]
    async fn test_first_attempt_success_has_no_delay() {
        let delay = RecordingDelay::default();
        let calls = Rc::new(Cell::new(0));

        let module = load_with_retry(scripted(0, calls), &LoaderConfig::default(), &delay).await;

        assert_eq!(module, Ok(1));
        assert!(delay.waits.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_zero_interval_still_uses_delay() {
        let delay = RecordingDelay::default();
        let calls = Rc::new(Cell::new(0));

        let _ = load_with_retry(scripted(2, calls), &LoaderConfig::new(3, 0), &delay).await;

        assert_eq!(*delay.waits.borrow(), vec![Duration::ZERO, Duration::ZERO]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_attempts_are_spaced_by_interval() {
        let started = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&started);
        let mut n = 0;
        let factory = move || {
            log.borrow_mut().push(tokio::time::Instant::now());
            n += 1;
            ready(if n < 4 { Err(n) } else { Ok(n) })
        };

        let module = load_with_retry(factory, &LoaderConfig::new(3, 1000), &TokioSleep).await;

        assert_eq!(module, Ok(4));
        let started = started.borrow();
        assert_eq!(started.len(), 4);
        for pair in started.windows(2) {
            assert!(pair[1] - pair[0] >= Duration::from_millis(1000));
        }
    }

    #[tokio::test]
    async fn test_retries_then_resolves_on_fourth_attempt() {
        let calls = Rc::new(Cell::new(0));
        let delay = RecordingDelay::default();

        let handle =
            lazy_with_retry(scripted(3, calls.clone()), LoaderConfig::new(3, 1000), delay.clone());
        let module = handle.clone().await.unwrap();

        assert_eq!(*module, 4);
        assert_eq!(calls.get(), 4);
        assert_eq!(handle.attempts(), 4);
        assert_eq!(*delay.waits.borrow(), vec![Duration::from_millis(1000); 3]);
    }

    #[tokio::test]
    async fn test_zero_retries_fails_immediately() {
        let calls = Rc::new(Cell::new(0));
        let delay = RecordingDelay::default();

        let handle =
            lazy_with_retry(scripted(1, calls.clone()), LoaderConfig::new(0, 1000), delay.clone());
        let err = handle.clone().await.unwrap_err();

        assert_eq!(err.attempt, 1);
        assert_eq!(calls.get(), 1);
        assert!(delay.waits.borrow().is_empty());
        assert_eq!(handle.status(), ModuleStatus::Failed);
    }

    #[tokio::test]
    async fn test_terminal_error_is_final_attempt_error() {
        let calls = Rc::new(Cell::new(0));
        let handle = lazy_with_retry(
            scripted(u32::MAX, calls.clone()),
            LoaderConfig::new(3, 0),
            RecordingDelay::default(),
        );

        let first = handle.clone().await.unwrap_err();
        let second = handle.clone().await.unwrap_err();

        assert_eq!(first.message, "network down");
        assert_eq!(first.attempt, 4);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(calls.get(), 4);
    }

    #[tokio::test]
    async fn test_handle_is_lazy_and_memoized() {
        let calls = Rc::new(Cell::new(0));
        let delay = RecordingDelay::default();
        let handle = lazy_with_retry(scripted(0, calls.clone()), LoaderConfig::default(), delay);

        assert_eq!(calls.get(), 0);
        assert_eq!(handle.status(), ModuleStatus::Pending);

        let a = handle.clone().await.unwrap();
        let b = handle.clone().await.unwrap();

        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(calls.get(), 1);
        assert_eq!(handle.status(), ModuleStatus::Resolved);
        assert!(matches!(handle.peek(), Some(Ok(m)) if **m == 1));
    }

    #[tokio::test]
    async fn test_same_handle_awaited_twice_stays_settled() {
        let calls = Rc::new(Cell::new(0));
        let delay = RecordingDelay::default();
        let config = LoaderConfig::new(2, 0);
        let mut handle = lazy_with_retry(scripted(1, calls.clone()), config, delay);

        let first = (&mut handle).await.unwrap();
        assert_eq!(handle.status(), ModuleStatus::Resolved);
        assert!(handle.peek().is_some());

        let second = (&mut handle).await.unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(handle.status(), ModuleStatus::Resolved);
        assert_eq!(calls.get(), 2);

        let late = handle.clone().await.unwrap();
        assert!(Arc::ptr_eq(&first, &late));
    }

    #[tokio::test]
    async fn test_failed_handle_awaited_twice_keeps_error() {
        let mut handle = lazy_with_retry(
            scripted(u32::MAX, Rc::default()),
            LoaderConfig::new(1, 0),
            RecordingDelay::default(),
        );

        let first = (&mut handle).await.unwrap_err();
        assert_eq!(handle.status(), ModuleStatus::Failed);

        let second = (&mut handle).await.unwrap_err();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(handle.attempts(), 2);
    }

    #[tokio::test]
    async fn test_unbounded_budget_stops_at_first_success() {
        let calls = Rc::new(Cell::new(0));
        let mut remaining = 3;
        let delay = RecordingDelay::default();
        // Succeeds after a few failures; the budget itself is the largest possible
        let factory = {
            let calls = calls.clone();
            move || {
                calls.set(calls.get() + 1);
                remaining -= 1;
                ready(if remaining > 0 { Err(()) } else { Ok(()) })
            }
        };

        let result = load_with_retry(factory, &LoaderConfig::new(u32::MAX, 0), &delay).await;

        assert_eq!(result, Ok(()));
        assert_eq!(calls.get(), 3);
        assert_eq!(LoaderConfig::new(u32::MAX, 0).max_attempts(), u32::MAX);
    }

    #[tokio::test]
    async fn test_handles_do_not_share_attempt_counters() {
        let calls = Rc::new(Cell::new(0));
        let loader = RetryLoader::new(LoaderConfig::new(3, 0), RecordingDelay::default());

        let first = loader.lazy(scripted(u32::MAX, calls.clone()));
        let _ = first.clone().await;
        assert_eq!(first.attempts(), 4);

        let second = loader.lazy(scripted(u32::MAX, calls.clone()));
        assert_eq!(second.attempts(), 0);
        let _ = second.clone().await;

        assert_eq!(second.attempts(), 4);
        assert_eq!(calls.get(), 8);
    }

    #[tokio::test]
    async fn test_join_all_reports_first_failure() {
        let delay = RecordingDelay::default();
        let ok =
            lazy_with_retry(scripted(0, Rc::default()), LoaderConfig::new(0, 0), delay.clone());
        let bad = lazy_with_retry(scripted(9, Rc::default()), LoaderConfig::new(1, 0), delay);

        let err = join_all([ok.clone(), bad]).await.unwrap_err();
        assert_eq!(err.attempt, 2);

        let modules = join_all([ok.clone(), ok]).await.unwrap();
        assert_eq!(modules.len(), 2);
    }

    #[tokio::test]
    async fn test_dropping_handle_releases_pending_load() {
        let guard = Rc::new(());
        let held = Rc::clone(&guard);
        let factory = move || {
            let held = Rc::clone(&held);
            async move {
                let _held = held;
                futures::future::pending::<Result<(), ()>>().await
            }
        };

        let handle = lazy_with_retry(factory, LoaderConfig::default(), RecordingDelay::default());
        assert!(handle.clone().now_or_never().is_none());
        assert_eq!(handle.status(), ModuleStatus::Pending);
        assert!(Rc::strong_count(&guard) > 1);

        drop(handle);
        assert_eq!(Rc::strong_count(&guard), 1);
    }
}
