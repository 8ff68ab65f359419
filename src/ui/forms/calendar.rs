//! Booking calendar widget

use crate::state::{DatePicker, DateRule};
use chrono::NaiveDate;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Borders + month + weekdays + six weeks + blank + selection line
pub const CALENDAR_HEIGHT: u16 = 12;

const WEEKDAYS: &str = " Su Mo Tu We Th Fr Sa";

fn day_style(
    date: NaiveDate,
    picker: &DatePicker,
    rule: &DateRule,
    today: NaiveDate,
    is_active: bool,
) -> Style {
    let mut style = if rule.is_available(date, today) {
        Style::default().fg(Color::White)
    } else {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT)
    };
    if picker.selected() == Some(date) {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if date == today {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    if is_active && picker.cursor() == date {
        style = style.add_modifier(Modifier::REVERSED);
    }
    style
}

/// Draw the month around the cursor
pub fn draw_calendar(
    frame: &mut Frame,
    area: Rect,
    picker: &DatePicker,
    rule: &DateRule,
    today: NaiveDate,
    is_active: bool,
) {
    let mut lines = vec![
        Line::from(Span::styled(
            picker.cursor().format(" %B %Y").to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(WEEKDAYS, Style::default().fg(Color::Gray))),
    ];

    for week in picker.month_grid() {
        let mut spans = vec![Span::raw(" ")];
        for day in week {
            match day {
                Some(date) => {
                    let style = day_style(date, picker, rule, today, is_active);
                    spans.push(Span::styled(date.format("%e").to_string(), style));
                }
                None => spans.push(Span::raw("  ")),
            }
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    lines.push(match picker.selected() {
        Some(date) => Line::from(vec![
            Span::raw(" Picked: "),
            Span::styled(
                date.format("%a, %b %-d").to_string(),
                Style::default().fg(Color::Green),
            ),
        ]),
        None => Line::from(Span::styled(
            " No date picked",
            Style::default().fg(Color::DarkGray),
        )),
    });

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .title(" Preferred Date * ")
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
