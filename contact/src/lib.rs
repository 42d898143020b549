//! # contact-section
//!
//! The contact section of a marketing site as a Leptos component.
//!
//! The section renders a decorative backdrop, a contact form (name, email,
//! message) and a grid of contact-method cards. Behaviour is deliberately
//! small:
//!
//! - **Form controller** - field values update on every keystroke; submit
//!   swaps the form for a confirmation. Nothing is sent anywhere.
//! - **Visibility trigger** - the section fades in the first time 10% of it
//!   enters the viewport, then stays visible.
//!
//! ## Quick Start
//!
//! ```rust
//! use contact_section::{render_contact_section, SectionOptions};
//!
//! let html = render_contact_section(&SectionOptions::default());
//! assert!(html.contains(r#"id="contact""#));
//! ```
//!
//! In the browser, mount the component instead (`csr` feature):
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use contact_section::components::ContactSection;
//!
//! leptos::mount::mount_to_body(|| view! { <ContactSection /> });
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - form data and the static contact-entry table
//! - [`form`] - the controlled-form state machine
//! - [`visibility`] - the one-shot viewport trigger
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//! - [`error`] - internal error type

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod error;
pub mod form;
pub mod styles;
pub mod types;
pub mod visibility;

use components::ContactSection;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use styles::CONTACT_CSS;
use types::{CONTACT_ENTRIES, ContactEntry};

pub use error::{ContactError, Result};

/// Anchor id page navigation links to (`href="#contact"`).
pub const DEFAULT_ANCHOR_ID: &str = "contact";

/// Per-mount configuration of the contact section.
///
/// # Example
///
/// ```rust
/// use contact_section::SectionOptions;
///
/// let options = SectionOptions {
///     anchor_id: "get-in-touch".into(),
///     ..Default::default()
/// };
/// assert_eq!(options.visibility_threshold, 0.1);
/// ```
#[derive(Clone, Debug)]
pub struct SectionOptions {
    /// `id` of the rendered `<section>`, also the element the observer watches
    pub anchor_id: String,
    /// Fraction of the section that must be visible before it reveals
    pub visibility_threshold: f64,
    /// Contact-method cards, in display order
    pub entries: &'static [ContactEntry],
    /// Prepend a `<style>` block with [`CONTACT_CSS`] when rendering to a string
    pub inline_styles: bool,
}

impl Default for SectionOptions {
    fn default() -> Self {
        Self {
            anchor_id: DEFAULT_ANCHOR_ID.to_string(),
            visibility_threshold: visibility::DEFAULT_THRESHOLD,
            entries: &CONTACT_ENTRIES,
            inline_styles: false,
        }
    }
}

/// Render the contact section to static HTML.
///
/// The output is the initial state of a fresh mount: empty form, not yet
/// submitted, not yet revealed.
///
/// ```rust
/// use contact_section::{render_contact_section, SectionOptions};
///
/// let html = render_contact_section(&SectionOptions {
///     inline_styles: true,
///     ..Default::default()
/// });
/// assert!(html.starts_with("<style>"));
/// ```
pub fn render_contact_section(options: &SectionOptions) -> String {
    let inline_styles = options.inline_styles;
    let section = view! { <ContactSection options=options.clone() /> }.to_html();

    if inline_styles {
        format!("<style>{}</style>\n{}", CONTACT_CSS, section)
    } else {
        section
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_default() -> String {
        render_contact_section(&SectionOptions::default())
    }

    #[test]
    fn renders_section_at_contact_anchor() {
        let html = render_default();

        assert!(html.contains("<section"));
        assert!(html.contains(r#"id="contact""#));
        assert!(!html.contains("<style>"));
    }

    #[test]
    fn renders_custom_anchor() {
        let html = render_contact_section(&SectionOptions {
            anchor_id: "reach-us".into(),
            ..Default::default()
        });

        assert!(html.contains(r#"id="reach-us""#));
        assert!(!html.contains(r#"id="contact""#));
    }

    #[test]
    fn renders_form_in_editing_state() {
        let html = render_default();

        assert!(html.contains("<form"));
        assert!(html.contains(r#"name="name""#));
        assert!(html.contains(r#"name="email""#));
        assert!(html.contains(r#"name="message""#));
        assert!(!html.contains("Message Sent!"));
    }

    #[test]
    fn renders_every_contact_entry() {
        let html = render_default();

        for entry in CONTACT_ENTRIES {
            assert!(html.contains(entry.label), "missing {}", entry.label);
            assert!(
                html.contains(&format!(r#"href="{}""#, entry.destination)),
                "missing link for {}",
                entry.label
            );
        }
        assert_eq!(html.matches(r#"target="_blank""#).count(), 2);
        assert_eq!(html.matches(r#"target="_self""#).count(), 2);
        assert_eq!(html.matches(r#"rel="noopener noreferrer""#).count(), 2);
    }

    #[test]
    fn renders_hidden_until_revealed() {
        let html = render_default();

        assert!(html.contains("contact-header reveal"));
        assert!(html.contains("reveal-delay-200"));
        assert!(html.contains("reveal-delay-400"));
        assert!(!html.contains("is-visible"));
    }

    #[test]
    fn renders_decorations_and_availability() {
        let html = render_default();

        assert!(html.contains("contact-backdrop"));
        assert!(html.contains(r#"aria-hidden="true""#));
        assert!(html.contains("Get In Touch"));
        assert!(html.contains("Available for Projects"));
    }

    #[test]
    fn inline_styles_prepend_stylesheet() {
        let html = render_contact_section(&SectionOptions {
            inline_styles: true,
            ..Default::default()
        });

        assert!(html.starts_with("<style>"));
        assert!(html.contains(".reveal.is-visible"));
        assert!(html.contains(r#"id="contact""#));
    }

    #[test]
    fn each_render_is_a_fresh_mount() {
        assert_eq!(render_default(), render_default());
    }
}
