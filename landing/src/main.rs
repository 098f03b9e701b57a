// Ease Recruit landing page, client-side rendered
// (c)2025 The Ease Recruit Team

use easerecruit_site::components::HomePage;
use easerecruit_site::content::FEATURES;
use easerecruit_site::styles::HOME_CSS;
use easerecruit_site::types::SiteConfig;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <style>{HOME_CSS}</style>
        <Router>
            <Routes fallback=|| view! { <p class="container">"Page not found."</p> }>
                <Route path=path!("/") view=Home />
            </Routes>
        </Router>
    }
}

#[component]
fn Home() -> impl IntoView {
    view! { <HomePage config=SiteConfig::default() features=FEATURES.to_vec() /> }
}
