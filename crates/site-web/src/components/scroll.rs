//! Scroll restoration

use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Scrolls the window back to the top whenever the path changes
#[component]
pub fn ScrollToTop() -> impl IntoView {
    let location = use_location();

    Effect::new(move |_| {
        location.pathname.track();
        scroll_to_top();
    });
}

fn scroll_to_top() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = web_sys::ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
