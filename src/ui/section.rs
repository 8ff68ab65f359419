//! Shared pieces of the read-only content sections

use super::ACCENT;
use crate::state::ContentSection;
use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Caption over a bold title, as on the page
pub fn heading(caption: &str, title: &str) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            caption.to_uppercase(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            title.to_uppercase(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ]
}

/// Body lines for a section: a loading line, or the rendered items.
/// A failed fetch looks exactly like an empty list.
pub fn body<T>(
    section: &ContentSection<T>,
    noun: &str,
    render: impl Fn(&T) -> Vec<Line<'static>>,
) -> Vec<Line<'static>> {
    if section.is_loading() {
        return vec![Line::from(Span::styled(
            format!("Loading {noun}..."),
            Style::default().fg(Color::DarkGray),
        ))];
    }
    section.items().iter().flat_map(render).collect()
}

/// Text area inside the bordered pane drawn by [`draw_scrolled`]
pub fn scroll_pane(area: Rect) -> Rect {
    area.inner(Margin::new(1, 1))
}

/// Rows `lines` take once wrapped to `width`
pub fn wrapped_rows(lines: Vec<Line<'static>>, width: u16, trim: bool) -> u16 {
    let rows = Paragraph::new(lines).wrap(Wrap { trim }).line_count(width);
    u16::try_from(rows).unwrap_or(u16::MAX)
}

/// Largest useful scroll offset for `lines` shown in `pane`
pub fn max_scroll(lines: Vec<Line<'static>>, pane: Rect, trim: bool) -> u16 {
    wrapped_rows(lines, pane.width, trim).saturating_sub(pane.height)
}

/// Draw scrolled lines in a bordered pane
pub fn draw_scrolled(frame: &mut Frame, area: Rect, lines: Vec<Line<'static>>, offset: u16) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((offset, 0));
    frame.render_widget(paragraph, area);
}
