//! Data types for the contact section.
//!
//! Two kinds of data live here:
//!
//! - **Form data** - [`FormState`] and the closed set of [`FormField`]s the
//!   form controller mutates on every keystroke
//! - **Static data** - the [`ContactEntry`] table rendered as contact cards
//!
//! # Example
//!
//! ```rust
//! use contact_section::types::{FormField, FormState, CONTACT_ENTRIES};
//!
//! let mut state = FormState::default();
//! state.set(FormField::Email, "a@b.com");
//! assert_eq!(state.get(FormField::Email), "a@b.com");
//!
//! assert_eq!(CONTACT_ENTRIES.len(), 4);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::components::{ICON_CHAT_CIRCLE, ICON_ENVELOPE, ICON_MAP_PIN, ICON_PHONE};
use crate::error::ContactError;

/// One of the three editable fields of the contact form.
///
/// The string form matches the `name` attribute of the rendered input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    /// Sender name (`<input name="name">`)
    Name,
    /// Sender email (`<input name="email" type="email">`)
    Email,
    /// Free-form message (`<textarea name="message">`)
    Message,
}

impl FormField {
    /// All fields in render order.
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Email, FormField::Message];

    /// HTML `name` attribute of the field.
    pub const fn as_str(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Message => "message",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormField {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(FormField::Name),
            "email" => Ok(FormField::Email),
            "message" => Ok(FormField::Message),
            other => Err(ContactError::UnknownField(other.to_string())),
        }
    }
}

/// In-memory record of the three editable contact-form fields.
///
/// Created empty on mount and never persisted. This is also the payload
/// shape a submission service would receive.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    /// Sender name
    pub name: String,
    /// Sender email
    pub email: String,
    /// Message body
    pub message: String,
}

impl FormState {
    /// Current value of `field`.
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    /// Replace the value of `field`, leaving the others untouched.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        };
        *slot = value.into();
    }
}

/// Color accent of a contact card, rendered as a gradient class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Accent {
    /// blue -> cyan
    Ocean,
    /// green -> emerald
    Meadow,
    /// purple -> pink
    Orchid,
    /// orange -> red
    Ember,
}

impl Accent {
    /// CSS class carrying the gradient for this accent.
    pub const fn class(self) -> &'static str {
        match self {
            Accent::Ocean => "accent-ocean",
            Accent::Meadow => "accent-meadow",
            Accent::Orchid => "accent-orchid",
            Accent::Ember => "accent-ember",
        }
    }
}

/// One static row of contact-method display data.
///
/// Entries that open in a new browsing context get `target="_blank"` and
/// `rel="noopener noreferrer"`; the rest stay in the current one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactEntry {
    /// Card title ("Email", "Phone", ...)
    pub label: &'static str,
    /// Text shown as the link body
    pub display_value: &'static str,
    /// Link destination (`mailto:`, `tel:`, https or `#`)
    pub destination: &'static str,
    /// Open the link in a new browsing context
    pub opens_in_new_context: bool,
    /// Card color accent
    pub accent: Accent,
    /// SVG path data for the card icon
    pub icon: &'static str,
}

impl ContactEntry {
    /// Value of the anchor's `target` attribute.
    pub const fn target(&self) -> &'static str {
        if self.opens_in_new_context {
            "_blank"
        } else {
            "_self"
        }
    }

    /// Value of the anchor's `rel` attribute, if any.
    pub const fn rel(&self) -> Option<&'static str> {
        if self.opens_in_new_context {
            Some("noopener noreferrer")
        } else {
            None
        }
    }
}

/// The fixed contact-method table: email, messaging app, phone, location.
pub const CONTACT_ENTRIES: [ContactEntry; 4] = [
    ContactEntry {
        label: "Email",
        display_value: "contact@smsupports.com",
        destination: "mailto:contact@smsupports.com",
        opens_in_new_context: true,
        accent: Accent::Ocean,
        icon: ICON_ENVELOPE,
    },
    ContactEntry {
        label: "WhatsApp",
        display_value: "+880 1301-360818",
        destination: "https://wa.me/+8801301360818",
        opens_in_new_context: true,
        accent: Accent::Meadow,
        icon: ICON_CHAT_CIRCLE,
    },
    ContactEntry {
        label: "Phone",
        display_value: "+880 1301-360818",
        destination: "tel:+8801301360818",
        opens_in_new_context: false,
        accent: Accent::Orchid,
        icon: ICON_PHONE,
    },
    // Placeholder: no map link yet
    ContactEntry {
        label: "Location",
        display_value: "Dhaka, Bangladesh",
        destination: "#",
        opens_in_new_context: false,
        accent: Accent::Ember,
        icon: ICON_MAP_PIN,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn field_names_round_trip_through_from_str() {
        for field in FormField::ALL {
            assert_eq!(field.as_str().parse::<FormField>().ok(), Some(field));
        }
    }

    #[test]
    fn unknown_field_name_is_rejected() {
        let err = "phone".parse::<FormField>().unwrap_err();
        assert!(matches!(err, ContactError::UnknownField(ref name) if name == "phone"));
    }

    #[test]
    fn field_names_are_case_sensitive() {
        assert!("Name".parse::<FormField>().is_err());
    }

    #[test]
    fn set_only_touches_the_named_field() {
        let mut state = FormState::default();
        state.set(FormField::Message, "Hello");

        assert_eq!(
            state,
            FormState {
                message: "Hello".into(),
                ..Default::default()
            }
        );
    }

    #[test]
    fn form_state_serializes_with_html_field_names() {
        let state = FormState {
            name: "Alice".into(),
            email: "a@b.com".into(),
            message: "Hello".into(),
        };
        let json = serde_json::to_value(&state).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "name": "Alice", "email": "a@b.com", "message": "Hello" })
        );
    }

    #[test]
    fn entry_table_order_and_targets() {
        let labels: Vec<_> = CONTACT_ENTRIES.iter().map(|e| e.label).collect();
        assert_eq!(labels, vec!["Email", "WhatsApp", "Phone", "Location"]);

        let targets: Vec<_> = CONTACT_ENTRIES.iter().map(|e| e.target()).collect();
        assert_eq!(targets, vec!["_blank", "_blank", "_self", "_self"]);
    }

    #[test]
    fn only_new_context_entries_carry_rel() {
        for entry in CONTACT_ENTRIES {
            assert_eq!(entry.rel().is_some(), entry.opens_in_new_context);
        }
    }

    #[test]
    fn destinations_use_expected_schemes() {
        assert!(CONTACT_ENTRIES[0].destination.starts_with("mailto:"));
        assert!(CONTACT_ENTRIES[1].destination.starts_with("https://wa.me/"));
        assert!(CONTACT_ENTRIES[2].destination.starts_with("tel:"));
        assert_eq!(CONTACT_ENTRIES[3].destination, "#");
    }

    #[test]
    fn accents_are_distinct() {
        let mut classes: Vec<_> = CONTACT_ENTRIES.iter().map(|e| e.accent.class()).collect();
        classes.sort_unstable();
        classes.dedup();
        assert_eq!(classes.len(), CONTACT_ENTRIES.len());
    }
}
