//! Common reusable UI components
//!
//! Form widgets, the modal shell and spinners shared by the waitlist forms
//! and the accessibility panel.

pub mod form;
pub mod modal;
pub mod spinner;

pub use form::{CheckboxField, ChipGroup, FormField, RatingScale, SelectField, TextAreaField};
pub use modal::BaseModal;
pub use spinner::{LoadingButton, Spinner, SpinnerSize, SpinnerStyle};
