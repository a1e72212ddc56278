//! UI Components

use leptos::prelude::*;

use crate::api::ChatMessage;

/// Site navigation
#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <a href="/" class="logo">"Hostline"</a>
            <div class="nav-links">
                <a href="/features">"Features"</a>
                <a href="/industries">"Industries"</a>
                <a href="/use-cases">"Use Cases"</a>
                <a href="/pricing">"Pricing"</a>
                <a href="/about">"About"</a>
            </div>
            <div class="nav-cta">
                <a href="/dashboard" class="btn">"Dashboard"</a>
                <a href="/chat" class="btn btn-primary">"Try the demo"</a>
            </div>
        </nav>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().format("%Y").to_string();

    view! {
        <footer class="footer">
            <p>"© " {year} " Hostline. Every call answered."</p>
        </footer>
    }
}

/// Centered spinner, the default suspension fallback
#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="spinner-wrap" role="status" aria-live="polite">
            <div class="spinner"></div>
            <span class="sr-only">"Loading..."</span>
        </div>
    }
}

/// Grey placeholder lines shaped like the content being loaded
#[component]
pub fn Skeleton(#[prop(default = 3)] lines: usize) -> impl IntoView {
    view! {
        <div class="skeleton" aria-hidden="true">
            <div class="skeleton-line skeleton-title"></div>
            {(0..lines)
                .map(|i| {
                    // Last line is shorter, like the end of a paragraph
                    let class = if i + 1 == lines { "skeleton-line short" } else { "skeleton-line" };
                    view! { <div class=class></div> }
                })
                .collect_view()}
        </div>
    }
}

/// Message bubble component
#[component]
pub fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let class = format!("message message-{}", message.role);

    view! {
        <div class=class>
            <span class="role">{message.role.clone()}</span>
            <p class="content">{message.content.clone()}</p>
            <span class="time">{message.sent_at.clone()}</span>
        </div>
    }
}
