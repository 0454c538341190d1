//! Home Page

use leptos::prelude::*;
use site_core::{Route, content::HERO};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="bg-blue-900 text-white py-20 px-6 text-center transition-all duration-300 overflow-hidden">
            <h1 class="text-4xl md:text-6xl font-bold mb-4">{HERO.headline}</h1>
            <p class="text-lg md:text-xl max-w-2xl mx-auto mb-8">{HERO.tagline}</p>
            <p class="max-w-3xl mx-auto mb-8">{HERO.intro}</p>
            <div class="flex flex-col md:flex-row justify-center gap-4">
                <a
                    href=Route::Contact.path()
                    class="bg-yellow-400 text-black font-semibold px-6 py-3 rounded-lg hover:bg-yellow-300"
                >
                    {HERO.primary_cta}
                </a>
                <a
                    href=Route::Contact.path()
                    class="bg-transparent border border-white px-6 py-3 rounded-lg hover:bg-white hover:text-blue-900"
                >
                    {HERO.secondary_cta}
                </a>
            </div>
        </section>
    }
}
