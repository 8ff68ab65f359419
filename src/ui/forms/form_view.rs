//! A whole form: fields, submit button, help line

use super::field_renderer::{draw_field, field_height};
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{FocusSlot, FormController, FormKind};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn submit_label(kind: FormKind) -> &'static str {
    match kind {
        FormKind::Quote => "Get Free Quote",
        FormKind::Booking => "Book Appointment",
        FormKind::Contact => "Send Message",
    }
}

/// Draw `form` inside a titled box. `has_focus` is false while the sidebar
/// owns the keyboard, in which case nothing is highlighted.
pub fn draw_form(
    frame: &mut Frame,
    area: Rect,
    form: &FormController,
    title: &str,
    has_focus: bool,
) {
    let border_color = if has_focus {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let fields = form.store().fields();
    let constraints: Vec<Constraint> = fields
        .iter()
        .map(|f| Constraint::Length(field_height(f)))
        .chain([
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(1),             // Help
            Constraint::Min(0),
        ])
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let focus = form.focus_slot();
    for (idx, field) in fields.iter().enumerate() {
        let is_active = has_focus && focus == FocusSlot::Field(idx);
        draw_field(frame, chunks[idx], field, is_active);
    }

    let submitting = form.is_submitting();
    let label = if submitting {
        "Submitting..."
    } else {
        submit_label(form.kind())
    };
    render_button(
        frame,
        chunks[fields.len()],
        label,
        has_focus && focus == FocusSlot::Submit,
        !submitting,
    );

    let help = Paragraph::new(format!("* required   {SUBMIT_SHORTCUT} to submit"))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[fields.len() + 1]);
}
