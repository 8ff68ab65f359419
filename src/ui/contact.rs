//! Contact section: company details beside the message form

use super::copy;
use super::forms::draw_form;
use super::section;
use super::ACCENT;
use crate::app::App;
use crate::state::Focus;
use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

fn contact_lines() -> Vec<Line<'static>> {
    let mut lines = section::heading("Get In Touch", "Contact Us");
    lines.push(Line::from(Span::styled(
        copy::CONTACT_BODY,
        Style::default().fg(Color::Gray),
    )));
    lines.push(Line::from(""));

    for (glyph, main, detail) in copy::CONTACT_DETAILS {
        lines.push(Line::from(vec![
            Span::styled(format!(" {glyph} "), Style::default().fg(ACCENT)),
            Span::styled(*main, Style::default().add_modifier(Modifier::BOLD)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("   {detail}"),
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        copy::FOOTER,
        Style::default().fg(Color::DarkGray),
    )));
    lines
}

/// Copy pane inside its margin, and the form area beside it
fn columns(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // Details
            Constraint::Percentage(60), // Form
        ])
        .split(area);
    (chunks[0].inner(Margin::new(1, 1)), chunks[1])
}

pub fn max_scroll(area: Rect) -> u16 {
    let (pane, _) = columns(area);
    section::max_scroll(contact_lines(), pane, true)
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let (pane, form_area) = columns(area);

    let details = Paragraph::new(contact_lines())
        .wrap(Wrap { trim: true })
        .scroll((app.state.scroll.offset(), 0));
    frame.render_widget(details, pane);

    draw_form(
        frame,
        form_area,
        &app.state.forms.contact,
        "Send a Message",
        app.state.focus == Focus::Content,
    );
}
