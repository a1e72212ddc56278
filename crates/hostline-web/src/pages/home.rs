//! Home Page

use leptos::prelude::*;

use crate::head::{apply_meta, static_meta};

#[component]
pub fn HomePage() -> impl IntoView {
    apply_meta(&static_meta(
        "",
        "Hostline is an AI receptionist that answers, books and transfers calls for your business.",
        "/",
    ));

    view! {
        <div class="home">
            <header class="hero">
                <h1>"Never miss another call"</h1>
                <p class="tagline">"An AI receptionist that answers, books and transfers, day and night"</p>
                <div class="cta">
                    <a href="/chat" class="btn btn-primary">"Talk to the demo"</a>
                    <a href="/pricing" class="btn">"View Plans"</a>
                </div>
            </header>

            <section class="features">
                <div class="feature">
                    <h3>"📞 Always on"</h3>
                    <p>"Picks up after hours, on weekends and when every line is busy."</p>
                </div>
                <div class="feature">
                    <h3>"📅 Books for you"</h3>
                    <p>"Checks availability and books straight into your calendar."</p>
                </div>
                <div class="feature">
                    <h3>"🤝 Knows when to hand off"</h3>
                    <p>"Transfers to your team with a summary when a caller needs a person."</p>
                </div>
            </section>

            <section class="explore">
                <a href="/features">"See all features"</a>
                <a href="/industries">"Industries we serve"</a>
                <a href="/use-cases">"Use cases"</a>
            </section>
        </div>
    }
}
