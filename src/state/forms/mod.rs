//! Form domain layer
//!
//! Field values, validation, the booking calendar, and the generic
//! controller that drives every form through Idle → Submitting → Idle.

mod calendar;
mod catalog;
mod controller;
mod field;
mod field_store;
mod validator;

pub use calendar::DatePicker;
pub use catalog::{booking_form, contact_form, quote_form};
pub use controller::{FocusSlot, Form, FormController, FormKind, SubmitStart};
pub use field::FormField;
pub use validator::DateRule;
