//! Toast overlay, top-right of the content pane

use super::text::wrap_text;
use crate::state::{Notifier, ToastLevel};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::Instant;

const TOAST_WIDTH: u16 = 44;

/// Where a toast of `height` rows lands, sliding in from the right edge
fn toast_rect(area: Rect, top: u16, height: u16, progress: f32) -> Option<Rect> {
    let width = TOAST_WIDTH.min(area.width.saturating_sub(2));
    if width < 10 || top + height > area.y + area.height {
        return None;
    }
    let resting_x = area.x + area.width - width - 1;
    let hidden = ((1.0 - progress.clamp(0.0, 1.0)) * f32::from(width)) as u16;
    let x = resting_x + hidden;
    let visible = width.saturating_sub(hidden);
    if visible == 0 {
        return None;
    }
    Some(Rect {
        x,
        y: top,
        width: visible,
        height,
    })
}

/// Render every live toast, newest at the bottom of the stack
pub fn render_toasts(frame: &mut Frame, area: Rect, notifier: &Notifier, now: Instant) {
    let mut top = area.y + 1;
    let inner_width = (TOAST_WIDTH.min(area.width.saturating_sub(2)) as usize).saturating_sub(4);

    for toast in notifier.toasts() {
        let (title, color) = match toast.level {
            ToastLevel::Success => ("✔ Success", Color::Green),
            ToastLevel::Failure => ("✖ Error", Color::Red),
        };

        let lines = wrap_text(&toast.message, inner_width.max(1));
        let height = lines.len() as u16 + 3;

        let Some(rect) = toast_rect(area, top, height, toast.slide_progress(now)) else {
            break;
        };

        let mut content = vec![Line::from(Span::styled(
            title,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))];
        content.extend(lines.into_iter().map(Line::from));

        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(content).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color))
                    .style(Style::default().bg(Color::Black)),
            ),
            rect,
        );

        top += height;
    }
}
