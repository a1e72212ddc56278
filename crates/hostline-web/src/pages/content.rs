//! Content-driven marketing pages (about, industries, use cases, features)

use std::sync::Arc;

use hostline_core::{lazy_with_retry, LoaderConfig, PageContent};
use leptos::prelude::*;

use crate::api;
use crate::components::Skeleton;
use crate::head::apply_meta;
use crate::lazy::{BrowserDelay, Lazy};

#[component]
pub fn ContentPage(slug: &'static str) -> impl IntoView {
    let handle = lazy_with_retry(
        move || api::fetch_content(slug),
        LoaderConfig::default(),
        BrowserDelay,
    );

    view! {
        <div class=format!("content-page page-{slug}")>
            <ErrorBoundary fallback=move |errors| view! {
                <div class="load-error">
                    <h2>"This page failed to load"</h2>
                    <ul>
                        {move || errors
                            .get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect_view()}
                    </ul>
                    <a href=format!("/{slug}") class="btn">"Reload"</a>
                </div>
            }>
                <Lazy
                    handle=handle
                    fallback=|| view! { <Skeleton lines=6 /> }
                    render={|content: Arc<PageContent>| render_content(&content)}
                />
            </ErrorBoundary>
        </div>
    }
}

fn render_content(content: &PageContent) -> AnyView {
    apply_meta(&content.meta());

    let sections = content
        .sections
        .iter()
        .cloned()
        .map(|section| {
            view! {
                <section class="section">
                    <h2>{section.heading}</h2>
                    <p>{section.body}</p>
                    <ul>
                        {section.points.into_iter().map(|p| view! { <li>{p}</li> }).collect_view()}
                    </ul>
                </section>
            }
        })
        .collect_view();

    view! {
        <header class="hero">
            <h1>{content.headline.clone()}</h1>
            <p class="tagline">{content.summary.clone()}</p>
        </header>
        <div class="sections">{sections}</div>
    }
    .into_any()
}
