//! Contact form controller.
//!
//! Holds the [`FormState`] and the submission flag. The controller is plain
//! data so it can live inside a single `RwSignal` per mount and be tested
//! without a reactive runtime.
//!
//! ```text
//! Editing ──submit──▶ Submitted (terminal)
//! ```
//!
//! Submitting does not transmit anything. A real submission service would
//! receive [`ContactForm::state`] and the flag would only be set on success.

use crate::error::Result;
use crate::types::{FormField, FormState};

/// Lifecycle of one mounted form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    /// Accepting input
    #[default]
    Editing,
    /// Submit fired; the confirmation replaces the form
    Submitted,
}

/// Controlled-form state for one mount of the contact section.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    state: FormState,
    phase: FormPhase,
}

impl ContactForm {
    /// Empty form in the [`FormPhase::Editing`] phase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current field values.
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Current phase.
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Whether submit has fired at least once.
    pub fn is_submitted(&self) -> bool {
        self.phase == FormPhase::Submitted
    }

    /// Replace the value of a field addressed by its HTML `name`.
    ///
    /// Unknown names leave the state untouched.
    pub fn on_field_change(&mut self, field_name: &str, value: impl Into<String>) -> Result<()> {
        let field = field_name.parse::<FormField>()?;
        self.set_field(field, value);
        Ok(())
    }

    /// Replace the value of `field`. No validation happens here; the browser
    /// enforces `required` and `type="email"` before submit fires.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        tracing::trace!(field = %field, len = value.len(), "contact form field changed");
        self.state.set(field, value);
    }

    /// Mark the form as submitted.
    ///
    /// Returns `true` only for the call that performed the transition.
    pub fn submit(&mut self) -> bool {
        match self.phase {
            FormPhase::Editing => {
                self.phase = FormPhase::Submitted;
                tracing::info!("contact form submitted");
                true
            }
            FormPhase::Submitted => {
                tracing::debug!("contact form already submitted");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContactError;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_form_is_empty_and_editing() {
        let form = ContactForm::new();
        assert_eq!(form.state(), &FormState::default());
        assert_eq!(form.phase(), FormPhase::Editing);
        assert!(!form.is_submitted());
    }

    #[test]
    fn last_write_per_field_wins() {
        let mut form = ContactForm::new();
        form.on_field_change("name", "A").unwrap();
        form.on_field_change("name", "Al").unwrap();
        form.on_field_change("message", "Hi").unwrap();
        form.on_field_change("name", "Alice").unwrap();
        form.on_field_change("message", "Hello").unwrap();

        assert_eq!(
            form.state(),
            &FormState {
                name: "Alice".into(),
                email: String::new(),
                message: "Hello".into(),
            }
        );
    }

    #[test]
    fn clearing_a_field_writes_empty_string() {
        let mut form = ContactForm::new();
        form.set_field(FormField::Email, "a@b.com");
        form.set_field(FormField::Email, "");
        assert_eq!(form.state().email, "");
    }

    #[test]
    fn unknown_field_is_rejected_without_side_effects() {
        let mut form = ContactForm::new();
        form.on_field_change("name", "Alice").unwrap();

        let err = form.on_field_change("company", "Acme").unwrap_err();

        assert_eq!(err, ContactError::UnknownField("company".into()));
        assert_eq!(form.state().name, "Alice");
        assert_eq!(form.phase(), FormPhase::Editing);
    }

    #[test]
    fn scenario_fill_and_submit() {
        let mut form = ContactForm::new();
        form.on_field_change("name", "Alice").unwrap();
        form.on_field_change("email", "a@b.com").unwrap();
        form.on_field_change("message", "Hello").unwrap();

        assert_eq!(
            form.state(),
            &FormState {
                name: "Alice".into(),
                email: "a@b.com".into(),
                message: "Hello".into(),
            }
        );
        assert!(!form.is_submitted());

        assert!(form.submit());
        assert!(form.is_submitted());
        // Submitting does not clear or alter the fields
        assert_eq!(form.state().email, "a@b.com");
    }

    #[test]
    fn submit_is_idempotent_once_submitted() {
        let mut form = ContactForm::new();
        assert!(form.submit());
        for _ in 0..5 {
            assert!(!form.submit());
            assert_eq!(form.phase(), FormPhase::Submitted);
        }
    }

    #[test]
    fn submit_with_empty_fields_still_transitions() {
        // The browser blocks submit for empty required fields; once the
        // handler does run, the controller itself never refuses.
        let mut form = ContactForm::new();
        assert!(form.submit());
    }

    #[test]
    fn state_is_unchanged_when_submit_never_fires() {
        let mut form = ContactForm::new();
        form.on_field_change("name", "Alice").unwrap();
        let before = form.clone();

        // Blocked by native validation: no handler call
        assert_eq!(form, before);
        assert!(!form.is_submitted());
    }

    #[test]
    fn independent_forms_do_not_share_state() {
        let mut first = ContactForm::new();
        let mut second = ContactForm::new();

        first.on_field_change("name", "Alice").unwrap();
        first.submit();
        second.on_field_change("name", "Bob").unwrap();

        assert_eq!(first.state().name, "Alice");
        assert_eq!(second.state().name, "Bob");
        assert!(first.is_submitted());
        assert!(!second.is_submitted());
    }
}
