//! Layout components (header, sidebar, status bar)

use super::components::{render_sidebar_button, BUTTON_HEIGHT};
use super::copy;
use super::{ACCENT, FOREST};
use crate::app::App;
use crate::platform::SUBMIT_HINT;
use crate::state::{ContentStore, Focus, LoadStatus, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::iter;

/// Sidebar width in columns
pub const SIDEBAR_WIDTH: u16 = 20;

const HEADER_HEIGHT: u16 = 3;
const COMPACT_HEADER_HEIGHT: u16 = 1;

/// Screen regions for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub header: Rect,
    pub sidebar: Rect,
    pub main: Rect,
    pub status: Rect,
}

/// Create the main layout: header, sidebar + content, status bar
pub fn create_layout(area: Rect, compact: bool) -> PageLayout {
    let header_height = if compact {
        COMPACT_HEADER_HEIGHT
    } else {
        HEADER_HEIGHT
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height), // Header
            Constraint::Min(0),                // Body
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(SIDEBAR_WIDTH), // Sidebar
            Constraint::Min(0),                // Main content
        ])
        .split(rows[1]);

    PageLayout {
        header: rows[0],
        sidebar: columns[0],
        main: columns[1],
        status: rows[2],
    }
}

/// One button area per view, vertically centered in the sidebar
fn sidebar_buttons(sidebar: Rect) -> Vec<Rect> {
    let constraints = iter::once(Constraint::Min(0))
        .chain(View::ALL.iter().map(|_| Constraint::Length(BUTTON_HEIGHT)))
        .chain(iter::once(Constraint::Min(0)));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(sidebar);

    chunks[1..=View::ALL.len()].to_vec()
}

/// Sidebar index under a screen position, for mouse clicks
pub fn sidebar_item_at(area: Rect, compact: bool, column: u16, row: u16) -> Option<usize> {
    let page = create_layout(area, compact);
    sidebar_buttons(page.sidebar).iter().position(|r| {
        column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
    })
}

/// Draw the site header; compact once the page is scrolled
pub fn draw_header(frame: &mut Frame, area: Rect, compact: bool) {
    let brand = vec![
        Span::styled(" ♣ ", Style::default().fg(ACCENT)),
        Span::styled(
            copy::COMPANY,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    if compact {
        let mut spans = brand;
        spans.push(Span::styled(
            format!("  {}", copy::PHONE),
            Style::default().fg(ACCENT),
        ));
        frame.render_widget(
            Paragraph::new(Line::from(spans)).style(Style::default().bg(FOREST)),
            area,
        );
        return;
    }

    let mut spans = brand;
    spans.push(Span::styled(
        format!("  {}", copy::TAGLINE),
        Style::default().fg(Color::Gray),
    ));
    spans.push(Span::styled(
        format!("   ☎ {}", copy::PHONE),
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    ));

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(ACCENT));
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Draw the sidebar with boxed buttons
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let sidebar_focused = app.state.focus == Focus::Sidebar;

    for ((idx, view), button) in View::ALL
        .iter()
        .enumerate()
        .zip(sidebar_buttons(area))
    {
        let is_current = *view == app.state.current_view;
        // Only the current view is highlighted; dim it while content has focus
        render_sidebar_button(
            frame,
            button,
            &(idx + 1).to_string(),
            view.label(),
            is_current && sidebar_focused,
            is_current || sidebar_focused,
        );
    }
}

/// Overall backend health as seen through the content fetches
fn backend_indicator(content: &ContentStore) -> Span<'static> {
    let statuses = [
        content.services.status(),
        content.testimonials.status(),
        content.gallery.status(),
    ];
    if statuses.contains(&LoadStatus::Failed) {
        Span::styled(" ○ ", Style::default().fg(Color::Red))
    } else if statuses.iter().all(|s| *s == LoadStatus::Loaded) {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    } else {
        Span::styled(" ◌ ", Style::default().fg(Color::Gray))
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![backend_indicator(&app.state.content)];

    // View-specific hints
    let hints = get_view_hints(app.state.current_view, app.state.focus);
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg.as_str(), Style::default().fg(Color::Yellow)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right (double Ctrl+C to quit)
    let quit_hint = " ^C^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view and focus
fn get_view_hints(view: View, focus: Focus) -> String {
    match (focus, view) {
        (Focus::Sidebar, _) => "j/k:nav  1-6:jump  Enter:open  Esc:content".to_string(),
        (Focus::Content, View::Booking) => format!(
            "←→↑↓:date  Enter:pick  Tab:next  {}  Esc:sidebar",
            SUBMIT_HINT
        ),
        (Focus::Content, View::Quote | View::Contact) => {
            format!("Tab:next  ←→:choose  {}  Esc:sidebar", SUBMIT_HINT)
        }
        (Focus::Content, View::Services | View::Testimonials | View::Gallery) => {
            "j/k:scroll  d/u:page  g:top  Esc:sidebar".to_string()
        }
    }
}
