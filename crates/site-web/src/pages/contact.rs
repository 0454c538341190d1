//! Contact Page

use leptos::prelude::*;
use site_core::{ContactForm, FieldKey, SubmissionStatus, content::CONTACT};
use wasm_bindgen::JsCast;

use crate::api;

const INPUT: &str = "w-full p-3 border rounded-lg";

/// Store an input's new value under the field its `name` attribute names
fn record_input<E: JsCast>(form: RwSignal<ContactForm>, ev: &E) {
    let ev = ev.unchecked_ref::<web_sys::Event>();
    let name = event_target::<web_sys::Element>(ev).get_attribute("name");
    let Some(key) = name.as_deref().and_then(FieldKey::from_name) else {
        tracing::debug!(?name, "input outside the contact fields");
        return;
    };
    let text = event_target_value(ev);
    form.update(|f| f.update_field(key, text));
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());
    let status = RwSignal::new(SubmissionStatus::Unset);

    // Required fields are enforced by the browser before this runs.
    // The button stays enabled and the fields keep their values.
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let payload = form.get_untracked();
        leptos::task::spawn_local(async move {
            let outcome = api::send_contact(&payload).await;
            // The page may have been left while the request was in flight
            status.try_set(outcome);
        });
    };

    let value = move |key: FieldKey| form.with(|f| f.field(key).to_owned());

    view! {
        <section class="bg-blue-900 text-white py-16 px-6 text-center">
            <h2 class="text-3xl font-bold mb-4">{CONTACT.heading}</h2>
            <p class="max-w-2xl mx-auto mb-8">{CONTACT.intro}</p>

            <form
                on:submit=on_submit
                class="max-w-md mx-auto bg-white text-gray-800 p-6 rounded-xl shadow space-y-4"
            >
                <input
                    name=FieldKey::Name.as_str()
                    type="text"
                    placeholder=FieldKey::Name.placeholder()
                    class=INPUT
                    required
                    prop:value=move || value(FieldKey::Name)
                    on:input=move |ev| record_input(form, &ev)
                />
                <input
                    name=FieldKey::Email.as_str()
                    type="email"
                    placeholder=FieldKey::Email.placeholder()
                    class=INPUT
                    required
                    prop:value=move || value(FieldKey::Email)
                    on:input=move |ev| record_input(form, &ev)
                />
                <textarea
                    name=FieldKey::Message.as_str()
                    placeholder=FieldKey::Message.placeholder()
                    rows="4"
                    class=INPUT
                    required
                    prop:value=move || value(FieldKey::Message)
                    on:input=move |ev| record_input(form, &ev)
                ></textarea>
                <button
                    type="submit"
                    class="w-full bg-blue-900 text-white py-3 rounded-lg font-semibold hover:bg-blue-700 transition-colors"
                >
                    "Send Message"
                </button>
            </form>

            <Show when=move || status.get().is_set()>
                <p class="mt-4 text-lg">{move || status.get().message()}</p>
            </Show>

            <p class="text-lg mt-6">"Or reach us directly:"</p>
            <p class="text-lg">
                "Email: " <a href=CONTACT.mailto() class="underline">{CONTACT.email}</a>
            </p>
            <p class="text-lg">"Phone: " {CONTACT.phone}</p>
        </section>
    }
}
