//! Plans Page

use leptos::prelude::*;
use site_core::content::{PLANS, PLANS_HEADING};

use crate::components::PlanCard;

#[component]
pub fn PlansPage() -> impl IntoView {
    view! {
        <section class="py-16 px-6 max-w-6xl mx-auto">
            <h2 class="text-3xl font-bold text-center mb-10">{PLANS_HEADING}</h2>
            <div class="grid md:grid-cols-3 gap-8">
                {PLANS.iter().map(|tier| view! { <PlanCard tier=tier /> }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}
