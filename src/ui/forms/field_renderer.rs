//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows a field box needs
pub fn field_height(field: &FormField) -> u16 {
    if field.is_multiline() {
        5
    } else {
        3
    }
}

/// Draw a form field using FormField from the domain layer
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };
    let muted = Style::default().fg(Color::DarkGray);

    let display_value = field.display_value();
    let cursor = if is_active && !field.is_choice() {
        "▌"
    } else {
        ""
    };

    let content = if field.is_choice() {
        let shown = if display_value.is_empty() {
            Span::styled("(select)", muted)
        } else {
            Span::styled(display_value, style)
        };
        let mut spans = vec![shown];
        if is_active {
            spans.insert(0, Span::styled("◂ ", style));
            spans.push(Span::styled(" ▸", style));
        }
        Paragraph::new(Line::from(spans))
    } else if field.is_multiline() {
        let mut lines: Vec<Line> = display_value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), style)))
            .collect();
        if display_value.is_empty() && !is_active {
            lines = vec![Line::from(Span::styled("(empty)", muted))];
        } else if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            }
        }
        Paragraph::new(lines)
    } else if display_value.is_empty() && !is_active {
        Paragraph::new(Line::from(Span::styled("(empty)", muted)))
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_value, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .title(format!(" {} ", field.display_label()))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}
