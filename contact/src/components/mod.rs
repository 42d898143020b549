//! Leptos UI components for the contact section.
//!
//! # Component Hierarchy
//!
//! ```text
//! ContactSection (section#contact)
//! ├── ContactBackdrop (decorative tiles + orbs)
//! ├── header (badge, title, lead)
//! ├── ContactFormCard
//! │   ├── form (name, email, message)   while editing
//! │   └── confirmation                  once submitted
//! └── cards column
//!     ├── ContactCardGrid
//!     │   └── ContactCard (per entry)
//!     └── AvailabilityCard
//! ```
//!
//! # Usage
//!
//! Mount [`ContactSection`] directly, or render it to a string with
//! [`crate::render_contact_section`]:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use contact_section::components::ContactSection;
//!
//! view! { <ContactSection /> }
//! ```

mod backdrop;
mod cards;
mod form_card;
mod icons;
mod section;

pub use backdrop::ContactBackdrop;
pub use cards::{AvailabilityCard, ContactCard, ContactCardGrid};
pub use form_card::ContactFormCard;
pub use icons::*;
pub use section::ContactSection;
