//! Dashboard Shell

use std::sync::Arc;

use hostline_core::api::SessionInfo;
use hostline_core::{lazy_with_retry, LoaderConfig};
use leptos::prelude::*;

use crate::api;
use crate::head::{apply_meta, static_meta};
use crate::lazy::{BrowserDelay, Lazy};

#[component]
pub fn DashboardPage() -> impl IntoView {
    apply_meta(&static_meta("Dashboard", "Your Hostline call dashboard.", "/dashboard"));

    let session = lazy_with_retry(api::fetch_session, LoaderConfig::default(), BrowserDelay);

    view! {
        <div class="dashboard">
            <ErrorBoundary fallback=|errors| view! {
                <div class="load-error">
                    <h2>"The dashboard is unavailable"</h2>
                    <ul>
                        {move || errors
                            .get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect_view()}
                    </ul>
                </div>
            }>
                <Lazy handle=session render={|session: Arc<SessionInfo>| render_shell(&session)} />
            </ErrorBoundary>
        </div>
    }
}

fn render_shell(session: &SessionInfo) -> AnyView {
    if !session.can_view_dashboard() {
        return view! {
            <div class="signin-prompt">
                <h2>"Sign in to see your calls"</h2>
                <p>"Your session has expired or you haven't signed in yet."</p>
            </div>
        }
        .into_any();
    }

    let name = session.display_name.clone().unwrap_or_else(|| "there".into());
    let demo = !session.auth_enabled;

    view! {
        <aside class="dashboard-nav">
            <a href="/dashboard" class="active">"Overview"</a>
            <a href="/dashboard">"Calls"</a>
            <a href="/dashboard">"Bookings"</a>
            <a href="/dashboard">"Settings"</a>
        </aside>
        <section class="dashboard-main">
            <Show when=move || demo>
                <div class="banner">"Demo mode: sign-in is not configured, showing sample data."</div>
            </Show>
            <h1>"Welcome, " {name}</h1>
            <div class="panels">
                <div class="panel">
                    <h3>"Calls today"</h3>
                    <p class="metric">"—"</p>
                </div>
                <div class="panel">
                    <h3>"Bookings"</h3>
                    <p class="metric">"—"</p>
                </div>
                <div class="panel">
                    <h3>"Transferred"</h3>
                    <p class="metric">"—"</p>
                </div>
            </div>
        </section>
    }
    .into_any()
}
