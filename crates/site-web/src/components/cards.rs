//! Card components for the content pages

use leptos::prelude::*;
use site_core::content::{AboutBlurb, PlanTier, ServiceOffering};

const CARD: &str = "rounded-2xl shadow p-6 transition-transform duration-200 hover:scale-105";

fn bullet_list(items: &'static [&'static str], class: &'static str) -> impl IntoView {
    view! {
        <ul class=class>
            {items.iter().map(|item| view! { <li>{*item}</li> }).collect::<Vec<_>>()}
        </ul>
    }
}

#[component]
pub fn ServiceCard(offering: &'static ServiceOffering) -> impl IntoView {
    view! {
        <div class=format!("bg-white text-gray-800 {CARD}")>
            <h3 class="text-xl font-semibold mb-3">{offering.title}</h3>
            {bullet_list(offering.items, "list-disc pl-5 space-y-1")}
        </div>
    }
}

#[component]
pub fn PlanCard(tier: &'static PlanTier) -> impl IntoView {
    view! {
        <div class=format!("{} {CARD} text-center", tier.card_class())>
            <h3 class="text-xl font-semibold mb-3">{tier.title}</h3>
            <p class="mb-4">{tier.subtitle}</p>
            {bullet_list(tier.items, "list-disc pl-5 text-left space-y-1")}
        </div>
    }
}

#[component]
pub fn AboutCard(blurb: &'static AboutBlurb) -> impl IntoView {
    view! {
        <div class=format!("bg-white text-gray-800 {CARD}")>
            <h3 class="text-xl font-semibold mb-3">{blurb.title}</h3>
            <p>{blurb.text}</p>
        </div>
    }
}
