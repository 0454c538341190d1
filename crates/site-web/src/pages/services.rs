//! Services Page

use leptos::prelude::*;
use site_core::content::{SERVICES, SERVICES_HEADING};

use crate::components::ServiceCard;

#[component]
pub fn ServicesPage() -> impl IntoView {
    view! {
        <section class="py-16 px-6 max-w-6xl mx-auto">
            <h2 class="text-3xl font-bold text-center mb-10">{SERVICES_HEADING}</h2>
            <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                {SERVICES
                    .iter()
                    .map(|offering| view! { <ServiceCard offering=offering /> })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
