//! Project gallery section

use super::section;
use super::ACCENT;
use crate::app::App;
use crate::state::GalleryItem;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

fn gallery_lines(item: &GalleryItem) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            format!(" {}", item.category.to_uppercase()),
            Style::default().fg(ACCENT),
        )),
        Line::from(Span::styled(
            format!(" {}", item.title),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(" {}", item.description),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            format!(" ⧉ {}", item.image_url),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ]
}

fn lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = section::heading("Our Work", "Project Gallery");
    lines.extend(section::body(&app.state.content.gallery, "projects", gallery_lines));
    lines
}

pub fn max_scroll(app: &App, area: Rect) -> u16 {
    section::max_scroll(lines(app), section::scroll_pane(area), false)
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    section::draw_scrolled(frame, area, lines(app), app.state.scroll.offset());
}
