//! About Page

use leptos::prelude::*;
use site_core::content::{ABOUT, ABOUT_HEADING};

use crate::components::AboutCard;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="bg-gray-100 text-gray-800 py-16 px-6 text-center">
            <h2 class="text-3xl font-bold mb-8">{ABOUT_HEADING}</h2>
            <div class="grid md:grid-cols-3 gap-8 max-w-6xl mx-auto">
                {ABOUT.iter().map(|blurb| view! { <AboutCard blurb=blurb /> }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}
