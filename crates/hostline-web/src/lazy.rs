//! Lazy loading in the browser
//!
//! [`BrowserDelay`] backs the retry loader with `setTimeout`, and [`Lazy`]
//! is the suspension boundary for a [`ModuleHandle`].

use std::sync::Arc;
use std::time::Duration;

use futures::future::{abortable, FutureExt, LocalBoxFuture};
use hostline_core::{Delay, ModuleHandle, Outcome};
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use crate::components::Spinner;

/// `setTimeout`-backed delay
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDelay;

impl Delay for BrowserDelay {
    type Sleep = LocalBoxFuture<'static, ()>;

    fn sleep(&self, duration: Duration) -> Self::Sleep {
        let ms = i32::try_from(duration.as_millis()).unwrap_or(i32::MAX);

        let promise = js_sys::Promise::new(&mut |resolve, _reject| {
            let scheduled = web_sys::window().is_some_and(|window| {
                window
                    .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
                    .is_ok()
            });
            if !scheduled {
                let _ = resolve.call0(&JsValue::NULL);
            }
        });

        async move {
            let _ = JsFuture::from(promise).await;
        }
        .boxed_local()
    }
}

/// Render `fallback` (a spinner by default) until `handle` settles, then the
/// module. A terminal load error is returned into the view tree for the
/// nearest `<ErrorBoundary>` to report.
///
/// Unmounting abandons the wait, so a page left mid-load stops retrying once
/// no other clone of the handle is alive.
#[component]
pub fn Lazy<M, E, R>(
    handle: ModuleHandle<M, E>,
    render: R,
    #[prop(optional, into)] fallback: Option<ViewFn>,
) -> impl IntoView
where
    M: Send + Sync + 'static,
    E: std::error::Error + Send + Sync + 'static,
    R: Fn(Arc<M>) -> AnyView + Send + Sync + 'static,
{
    let outcome: RwSignal<Option<Outcome<M, E>>> = RwSignal::new(handle.peek().cloned());

    if outcome.get_untracked().is_none() {
        let (wait, abort) = abortable(handle);
        on_cleanup(move || abort.abort());

        spawn_local(async move {
            if let Ok(settled) = wait.await {
                outcome.set(Some(settled));
            }
        });
    }

    let fallback = fallback.unwrap_or_else(|| ViewFn::from(|| view! { <Spinner /> }));

    move || match outcome.get() {
        None => Ok(fallback.run()),
        Some(Ok(module)) => Ok(render(module)),
        Some(Err(err)) => Err(err),
    }
}
