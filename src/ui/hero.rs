//! Hero section with the quote form

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

fn hero_lines() -> Vec<Line<'static>> {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::from(Span::styled(
            copy::TAGLINE.to_uppercase(),
            Style::default().fg(ACCENT),
        )),
        Line::from(""),
        Line::from(Span::styled(copy::HERO_TITLE, bold.fg(Color::White))),
        Line::from(Span::styled(copy::HERO_TITLE_ACCENT, bold.fg(ACCENT))),
        Line::from(""),
        Line::from(Span::styled(copy::HERO_BODY, Style::default().fg(Color::Gray))),
        Line::from(""),
    ];
    lines.extend(copy::HERO_BADGES.iter().map(|badge| {
        Line::from(vec![
            Span::styled(" ✔ ", Style::default().fg(ACCENT)),
            Span::raw(*badge),
        ])
    }));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(" ☎ ", Style::default().fg(ACCENT)),
        Span::styled(copy::PHONE, bold),
    ]));
    lines
}

/// Copy pane inside its margin, and the form area beside it
fn columns(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // Hero copy
            Constraint::Percentage(60), // Quote form
        ])
        .split(area);
    (chunks[0].inner(Margin::new(1, 1)), chunks[1])
}

pub fn max_scroll(area: Rect) -> u16 {
    let (pane, _) = columns(area);
    section::max_scroll(hero_lines(), pane, true)
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let (pane, form_area) = columns(area);

    let hero = Paragraph::new(hero_lines())
        .wrap(Wrap { trim: true })
        .scroll((app.state.scroll.offset(), 0));
    frame.render_widget(hero, pane);

    draw_form(
        frame,
        form_area,
        &app.state.forms.quote,
        "Get Your Free Quote",
        app.state.focus == Focus::Content,
    );
}
