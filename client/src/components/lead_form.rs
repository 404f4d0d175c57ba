//! Lead capture form shown inside the chat.

use leptos::prelude::*;

use launchpad::chat::ChatSession;
use launchpad::leads::LeadField;

use crate::pages::launch::ChatControls;

#[component]
pub fn LeadForm() -> impl IntoView {
    let session = expect_context::<RwSignal<ChatSession>>();
    let controls = expect_context::<ChatControls>();

    let field = move |field: LeadField, input_type: &'static str, placeholder: &'static str| {
        view! {
            <input
                class="lead-form__input"
                type=input_type
                placeholder=placeholder
                prop:value=move || session.with(|s| s.form().get(field).to_owned())
                on:input=move |ev| controls.set_form_field(field, event_target_value(&ev))
            />
        }
    };

    view! {
        <div class="lead-form">
            <h3 class="lead-form__title">"📋 ФОРМА ЗАЯВКИ"</h3>
            {field(LeadField::Name, "text", "Твоё имя *")}
            {field(LeadField::Email, "email", "Email *")}
            {field(LeadField::Phone, "tel", "Телефон")}
            <textarea
                class="lead-form__input lead-form__textarea"
                placeholder="Сообщение"
                prop:value=move || session.with(|s| s.form().message.clone())
                on:input=move |ev| controls.set_form_field(LeadField::Message, event_target_value(&ev))
            ></textarea>
            <button
                class="btn btn--accent lead-form__submit"
                on:click=move |_| {
                    let _ = controls.submit_lead();
                }
            >
                "ОТПРАВИТЬ"
            </button>
        </div>
    }
}
