//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};

use crate::components::{Footer, NavBar};
use crate::pages::{ChatPage, ContentPage, DashboardPage, HomePage, PricingPage};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <NavBar />
            <main class="app">
                <Routes fallback=|| view! { <p>"Page not found"</p> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/about") view=|| view! { <ContentPage slug="about" /> } />
                    <Route path=path!("/industries") view=|| view! { <ContentPage slug="industries" /> } />
                    <Route path=path!("/use-cases") view=|| view! { <ContentPage slug="use-cases" /> } />
                    <Route path=path!("/features") view=|| view! { <ContentPage slug="features" /> } />
                    <Route path=path!("/pricing") view=PricingPage />
                    <Route path=path!("/chat") view=ChatPage />
                    <Route path=path!("/dashboard") view=DashboardPage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}
