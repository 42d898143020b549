//! Error type for the contact section.
//!
//! None of these reach the user: unknown field names cannot come from the
//! rendered markup, and observer failures degrade to a section that simply
//! never reveals itself.

use thiserror::Error;

/// Internal failures of the form controller and the visibility trigger.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ContactError {
    /// Field name outside `name` / `email` / `message`
    #[error("unknown form field `{0}`")]
    UnknownField(String),

    /// Visibility threshold outside `[0.0, 1.0]`
    #[error("visibility threshold {0} is outside [0.0, 1.0]")]
    InvalidThreshold(f64),

    /// No element with the anchor id at registration time
    #[error("no element with id `{0}` in the document")]
    ElementNotFound(String),

    /// The browser refused to create or attach the observer
    #[error("viewport observer unavailable: {0}")]
    Observer(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, ContactError>;
