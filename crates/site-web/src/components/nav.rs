//! Header navigation

use leptos::prelude::*;
use site_core::{Route, Theme, content::BRAND};

/// Fixed header with the five route links and the theme toggle
#[component]
pub fn Navbar(theme: ReadSignal<Theme>, on_toggle: Callback<()>) -> impl IntoView {
    view! {
        <nav class=move || {
            format!(
                "{} py-4 px-6 flex justify-between items-center sticky top-0 z-50 transition-all duration-300",
                theme.get().nav_class(),
            )
        }>
            <h1 class="font-bold text-xl">{BRAND}</h1>
            <div class="flex gap-6 items-center">
                {Route::ALL
                    .into_iter()
                    .map(|route| {
                        view! {
                            <a href=route.path() class="hover:text-yellow-400">
                                {route.label()}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
                <button
                    class="ml-4 bg-yellow-400 text-black font-semibold px-3 py-1 rounded-lg hover:bg-yellow-300"
                    on:click=move |_| on_toggle.run(())
                >
                    {move || theme.get().toggle_label()}
                </button>
            </div>
        </nav>
    }
}
