//! Form rendering module
//!
//! - `field_renderer`: single field boxes
//! - `calendar`: the booking month grid
//! - `form_view`: a whole form with its submit button

mod calendar;
mod field_renderer;
mod form_view;

pub use calendar::{draw_calendar, CALENDAR_HEIGHT};
pub use form_view::draw_form;
