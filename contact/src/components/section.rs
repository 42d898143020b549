//! Contact section - header, form card and contact cards over the backdrop.

use leptos::prelude::*;

use super::{AvailabilityCard, ContactBackdrop, ContactCardGrid, ContactFormCard, ICON_SPARKLE, Icon};
use crate::SectionOptions;
use crate::form::ContactForm;
use crate::visibility::use_visibility_trigger;

/// Class list for a block that fades in once the section is visible.
pub(crate) fn reveal_class(base: &str, visible: bool) -> String {
    if visible {
        format!("{base} reveal is-visible")
    } else {
        format!("{base} reveal")
    }
}

/// The whole contact section, anchored at `options.anchor_id`.
///
/// Each mount owns its own form controller and visibility flag.
#[component]
pub fn ContactSection(
    /// Anchor id, reveal threshold and contact entries
    #[prop(optional)]
    options: SectionOptions,
) -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());
    let visible = use_visibility_trigger(options.anchor_id.clone(), options.visibility_threshold);

    view! {
        <section id=options.anchor_id class="contact-section">
            <ContactBackdrop />

            <div class="contact-container">
                <div class=move || reveal_class("contact-header", visible.get())>
                    <div class="header-badge">
                        <span class="header-badge-dot animate-pulse"></span>
                        <span>"Get In Touch"</span>
                    </div>
                    <h2 class="header-title">
                        <span class="title-line line-lead">"Let's Create"</span>
                        <span class="title-line line-mid">"Something"</span>
                        <span class="title-line line-tail">"Amazing"</span>
                    </h2>
                    <p class="header-lead">
                        "Ready to bring your vision to life? "
                        "Let's discuss your project and make something extraordinary together."
                        <Icon path=ICON_SPARKLE size="18" class="sparkle-icon animate-pulse" />
                    </p>
                </div>

                <div class="contact-grid">
                    <div class=move || reveal_class("contact-form-column reveal-delay-200", visible.get())>
                        <ContactFormCard form=form />
                    </div>

                    <div class=move || reveal_class("contact-cards-column reveal-delay-400", visible.get())>
                        <ContactCardGrid entries=options.entries />
                        <AvailabilityCard />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reveal_class_gates_visibility_modifier() {
        assert_eq!(reveal_class("contact-header", false), "contact-header reveal");
        assert_eq!(
            reveal_class("contact-header", true),
            "contact-header reveal is-visible"
        );
    }

    #[test]
    fn reveal_class_keeps_delay_modifiers() {
        assert_eq!(
            reveal_class("contact-cards-column reveal-delay-400", true),
            "contact-cards-column reveal-delay-400 reveal is-visible"
        );
    }
}
