//! Customer reviews section

use super::section;
use super::ACCENT;
use crate::app::App;
use crate::state::Testimonial;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

fn testimonial_lines(t: &Testimonial) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            format!(" {}", t.star_line()),
            Style::default().fg(ACCENT),
        )),
        Line::from(Span::styled(
            format!(" \u{201c}{}\u{201d}", t.review),
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        )),
        Line::from(vec![
            Span::styled(
                format!(" {}", t.name),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(", {}", t.location), Style::default().fg(Color::Gray)),
        ]),
        Line::from(Span::styled(
            format!(" {} • {}", t.service, t.date),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ]
}

fn lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = section::heading("What Our Clients Say", "Customer Reviews");
    lines.extend(section::body(&app.state.content.testimonials, "reviews", testimonial_lines));
    lines
}

pub fn max_scroll(app: &App, area: Rect) -> u16 {
    section::max_scroll(lines(app), section::scroll_pane(area), false)
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    section::draw_scrolled(frame, area, lines(app), app.state.scroll.offset());
}
