//! Contact form card - controlled inputs, or the confirmation once submitted.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use super::{ICON_ARROW_RIGHT, ICON_CODE, ICON_PALETTE, ICON_PAPER_PLANE, Icon};
use crate::form::ContactForm;
use crate::types::FormField;

/// The "Send Message" card.
///
/// `form` is owned by the enclosing section so each mount has its own
/// controller. Native `required` / `type="email"` checks run before the
/// submit handler; when they fail the handler never fires and the
/// controller stays in the editing phase.
#[component]
pub fn ContactFormCard(form: RwSignal<ContactForm>) -> impl IntoView {
    view! {
        <div class="form-card-shell">
            <div class="form-card">
                <div class="card-glow"></div>
                <div class="form-card-body">
                    <div class="form-card-heading">
                        <h3>"Send Message"</h3>
                        <p class="muted">"Tell us about your project"</p>
                    </div>

                    {move || {
                        if form.with(ContactForm::is_submitted) {
                            view! { <Confirmation /> }.into_any()
                        } else {
                            view! { <ContactFormFields form=form /> }.into_any()
                        }
                    }}
                </div>
            </div>

            <span class="float-badge badge-top animate-float-slow">
                <Icon path=ICON_CODE size="20" />
            </span>
            <span class="float-badge badge-bottom animate-float-medium">
                <Icon path=ICON_PALETTE size="16" />
            </span>
        </div>
    }
}

#[component]
fn ContactFormFields(form: RwSignal<ContactForm>) -> impl IntoView {
    let value_of = move |field: FormField| move || form.with(|f| f.state().get(field).to_string());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        form.update(|f| {
            f.submit();
        });
    };

    view! {
        <form class="contact-form" on:submit=on_submit>
            <div class="field-group">
                <div class="field-shell">
                    <input
                        class="field-input"
                        name=FormField::Name.as_str()
                        placeholder="Your Name"
                        required=true
                        prop:value=value_of(FormField::Name)
                        on:input=move |ev| form.update(|f| f.set_field(FormField::Name, event_target_value(&ev)))
                    />
                    <div class="field-glow"></div>
                </div>
                <div class="field-shell">
                    <input
                        class="field-input"
                        name=FormField::Email.as_str()
                        type="email"
                        placeholder="Your Email"
                        required=true
                        prop:value=value_of(FormField::Email)
                        on:input=move |ev| form.update(|f| f.set_field(FormField::Email, event_target_value(&ev)))
                    />
                    <div class="field-glow"></div>
                </div>
                <div class="field-shell">
                    <textarea
                        class="field-input field-textarea"
                        name=FormField::Message.as_str()
                        placeholder="Tell us about your project..."
                        rows="4"
                        required=true
                        prop:value=value_of(FormField::Message)
                        on:input=move |ev| form.update(|f| f.set_field(FormField::Message, event_target_value(&ev)))
                    ></textarea>
                    <div class="field-glow"></div>
                </div>
            </div>

            <button type="submit" class="submit-btn">
                <span>"Send Message"</span>
                <Icon path=ICON_ARROW_RIGHT size="16" class="submit-icon" />
            </button>
        </form>
    }
}

#[component]
fn Confirmation() -> impl IntoView {
    view! {
        <div class="confirmation" role="status">
            <div class="confirmation-badge">
                <Icon path=ICON_PAPER_PLANE size="32" color="#ffffff" />
            </div>
            <h4 class="confirmation-title">"Message Sent!"</h4>
            <p class="muted">"We'll get back to you soon."</p>
        </div>
    }
}
