//! Main App Component

use leptos::prelude::*;
use leptos_router::{
    components::{Redirect, Route, Router, Routes},
    path,
};
use site_core::{Theme, route::Route as SiteRoute};

use crate::components::{Footer, Navbar, ScrollToTop};
use crate::pages::{AboutPage, ContactPage, HomePage, PlansPage, ServicesPage};

/// Root application component
///
/// Owns the theme flag and passes it down explicitly; pages never see it.
#[component]
pub fn App() -> impl IntoView {
    let (theme, set_theme) = signal(Theme::default());
    let toggle_theme = Callback::new(move |()| set_theme.update(Theme::toggle));

    view! {
        <Router>
            <ScrollToTop />
            <div class=move || {
                format!(
                    "{} min-h-screen flex flex-col transition-all duration-300",
                    theme.get().shell_class(),
                )
            }>
                <Navbar theme=theme on_toggle=toggle_theme />
                <main class="flex-grow">
                    // Paths mirror `SiteRoute::ALL` / `SiteRoute::path()`; keep both in step
                    <Routes fallback=|| view! { <Redirect path=SiteRoute::Home.path() /> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/services") view=ServicesPage />
                        <Route path=path!("/plans") view=PlansPage />
                        <Route path=path!("/about") view=AboutPage />
                        <Route path=path!("/contact") view=ContactPage />
                    </Routes>
                </main>
                <Footer theme=theme />
            </div>
        </Router>
    }
}
