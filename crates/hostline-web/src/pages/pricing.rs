//! Pricing Page

use leptos::prelude::*;

use crate::head::{apply_meta, static_meta};

#[component]
pub fn PricingPage() -> impl IntoView {
    apply_meta(&static_meta(
        "Pricing",
        "Simple monthly plans for AI call answering, from solo practices to multi-location teams.",
        "/pricing",
    ));

    view! {
        <div class="pricing">
            <h1>"Pricing"</h1>
            <p class="subtitle">"Pay for the calls you answer, not the ones you miss"</p>

            <div class="plans">
                <div class="plan">
                    <h2>"Starter"</h2>
                    <div class="price">"$49"<span>"/month"</span></div>
                    <ul>
                        <li>"100 calls/month"</li>
                        <li>"After-hours answering"</li>
                        <li>"Email summaries"</li>
                    </ul>
                    <a href="/chat" class="btn">"Try the demo"</a>
                </div>

                <div class="plan featured">
                    <span class="badge">"Popular"</span>
                    <h2>"Growth"</h2>
                    <div class="price">"$149"<span>"/month"</span></div>
                    <ul>
                        <li>"500 calls/month"</li>
                        <li>"Calendar booking"</li>
                        <li>"Warm transfer"</li>
                    </ul>
                    <a href="/chat" class="btn btn-primary">"Try the demo"</a>
                </div>

                <div class="plan">
                    <h2>"Scale"</h2>
                    <div class="price">"Custom"</div>
                    <ul>
                        <li>"Unlimited calls"</li>
                        <li>"Multiple locations"</li>
                        <li>"CRM integrations"</li>
                    </ul>
                    <a href="mailto:sales@hostline.example" class="btn">"Talk to sales"</a>
                </div>
            </div>
        </div>
    }
}
