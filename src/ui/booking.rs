//! Booking section: calendar beside the appointment form

use super::forms::{draw_calendar, draw_form, CALENDAR_HEIGHT};
use super::section;
use crate::app::App;
use crate::state::{Focus, FocusSlot};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
    Frame,
};

/// Month grid width: 7 days of 3 columns plus borders and margin
const CALENDAR_WIDTH: u16 = 26;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.forms.booking;
    let has_focus = app.state.focus == Focus::Content;

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CALENDAR_WIDTH), // Calendar
            Constraint::Min(30),                // Form
        ])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Heading
            Constraint::Length(CALENDAR_HEIGHT),
            Constraint::Min(0),
        ])
        .split(columns[0]);

    let heading = Paragraph::new(section::heading("Schedule Service", "Book Now"));
    frame.render_widget(heading, left[0]);

    if let (Some(picker), Some(rule)) = (form.calendar(), form.date_rule()) {
        let is_active = has_focus && form.focus_slot() == FocusSlot::Calendar;
        draw_calendar(frame, left[1], picker, &rule, app.today(), is_active);
    }

    draw_form(frame, columns[1], form, "Book an Appointment", has_focus);
}
