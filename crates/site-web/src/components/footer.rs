use leptos::prelude::*;
use site_core::{Theme, content::FOOTER_LINES};

#[component]
pub fn Footer(theme: ReadSignal<Theme>) -> impl IntoView {
    view! {
        <footer class=move || {
            format!(
                "{} text-center py-6 text-sm mt-10 transition-all duration-300",
                theme.get().footer_class(),
            )
        }>
            {FOOTER_LINES.into_iter().map(|line| view! { <p>{line}</p> }).collect::<Vec<_>>()}
        </footer>
    }
}
