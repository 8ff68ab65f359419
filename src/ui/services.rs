//! Services section

use super::section;
use super::ACCENT;
use crate::app::App;
use crate::state::Service;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

fn service_lines(service: &Service) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", service.icon().glyph()),
                Style::default().fg(ACCENT),
            ),
            Span::styled(
                service.title.to_uppercase(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("   {}", service.description),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
    ]
}

fn lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = section::heading("What We Do", "Our Services");
    lines.extend(section::body(&app.state.content.services, "services", service_lines));
    lines
}

pub fn max_scroll(app: &App, area: Rect) -> u16 {
    section::max_scroll(lines(app), section::scroll_pane(area), false)
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    section::draw_scrolled(frame, area, lines(app), app.state.scroll.offset());
}
