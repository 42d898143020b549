//! Contact-method cards and the availability note.

use leptos::prelude::*;

use super::{ICON_SPARKLE, Icon};
use crate::types::ContactEntry;

/// Grid of contact-method cards, one per entry, in table order.
#[component]
pub fn ContactCardGrid(entries: &'static [ContactEntry]) -> impl IntoView {
    view! {
        <div class="contact-cards-grid">
            {entries
                .iter()
                .copied()
                .map(|entry| view! { <ContactCard entry=entry /> })
                .collect::<Vec<_>>()}
        </div>
    }
}

/// A single contact method: accent icon, label and outbound link.
#[component]
pub fn ContactCard(entry: ContactEntry) -> impl IntoView {
    let accent = entry.accent.class();

    view! {
        <div class="contact-card-shell">
            <div class="contact-card">
                <div class=format!("card-accent-overlay {accent}")></div>
                <div class="contact-card-body">
                    <div class=format!("contact-card-icon {accent}")>
                        <Icon path=entry.icon size="20" />
                    </div>
                    <div class="contact-card-text">
                        <h3 class="contact-card-label">{entry.label}</h3>
                        <a
                            class="contact-card-link"
                            href=entry.destination
                            target=entry.target()
                            rel=entry.rel()
                        >
                            {entry.display_value}
                        </a>
                    </div>
                </div>
            </div>
            <span class=format!("card-corner {accent} animate-float-fast")>
                <span class="card-corner-dot"></span>
            </span>
        </div>
    }
}

/// Static "Available for Projects" note under the cards.
#[component]
pub fn AvailabilityCard() -> impl IntoView {
    view! {
        <div class="contact-card-shell">
            <div class="availability-card">
                <h3 class="availability-title">"Available for Projects"</h3>
                <p class="muted">
                    "We're currently accepting new projects and would love to hear about your ideas. "
                    "Let's create something amazing together!"
                </p>
            </div>
            <span class="card-corner accent-brand animate-float-medium">
                <Icon path=ICON_SPARKLE size="14" />
            </span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CONTACT_ENTRIES;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn external_card_opens_new_context() {
        let html = view! { <ContactCard entry=CONTACT_ENTRIES[0] /> }.to_html();

        assert!(html.contains(r#"href="mailto:contact@smsupports.com""#));
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noopener noreferrer""#));
        assert!(html.contains("accent-ocean"));
    }

    #[test]
    fn internal_card_stays_in_current_context() {
        let html = view! { <ContactCard entry=CONTACT_ENTRIES[2] /> }.to_html();

        assert!(html.contains(r#"href="tel:+8801301360818""#));
        assert!(html.contains(r#"target="_self""#));
        assert!(!html.contains("rel="));
    }

    #[test]
    fn grid_renders_every_entry_in_order() {
        let entries: &'static [ContactEntry] = &CONTACT_ENTRIES;
        let html = view! { <ContactCardGrid entries=entries /> }.to_html();

        let positions: Vec<usize> = CONTACT_ENTRIES
            .iter()
            .map(|entry| html.find(entry.label).expect("label rendered"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(html.matches("contact-card-link").count(), CONTACT_ENTRIES.len());
    }

    #[test]
    fn empty_grid_renders_no_cards() {
        let entries: &'static [ContactEntry] = &[];
        let html = view! { <ContactCardGrid entries=entries /> }.to_html();
        assert!(!html.contains("contact-card-link"));
    }
}
