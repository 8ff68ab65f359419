//! UI module for rendering the TUI

mod booking;
mod components;
mod contact;
mod copy;
mod forms;
mod gallery;
mod hero;
mod layout;
mod section;
mod services;
mod testimonials;

use crate::app::App;
use crate::state::View;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::Frame;
use std::time::Instant;

pub use layout::{sidebar_item_at, SIDEBAR_WIDTH};

/// Brand orange
pub(crate) const ACCENT: Color = Color::Rgb(0xF9, 0x73, 0x16);
/// Brand forest green
pub(crate) const FOREST: Color = Color::Rgb(0x1A, 0x3C, 0x34);

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let compact = app.state.scroll.is_scrolled();
    let page = layout::create_layout(frame.area(), compact);

    layout::draw_header(frame, page.header, compact);
    layout::draw_sidebar(frame, page.sidebar, app);

    // Draw main content based on current view
    match app.state.current_view {
        View::Quote => hero::draw(frame, page.main, app),
        View::Services => services::draw(frame, page.main, app),
        View::Testimonials => testimonials::draw(frame, page.main, app),
        View::Gallery => gallery::draw(frame, page.main, app),
        View::Booking => booking::draw(frame, page.main, app),
        View::Contact => contact::draw(frame, page.main, app),
    }

    layout::draw_status_bar(frame, page.status, app);

    // Toasts float over everything and never take focus
    components::render_toasts(frame, page.main, &app.state.notifier, Instant::now());
}

/// Furthest the current view can scroll on a screen of `area`
pub fn max_scroll(app: &App, area: Rect) -> u16 {
    let page = layout::create_layout(area, app.state.scroll.is_scrolled());
    match app.state.current_view {
        View::Quote => hero::max_scroll(page.main),
        View::Services => services::max_scroll(app, page.main),
        View::Testimonials => testimonials::max_scroll(app, page.main),
        View::Gallery => gallery::max_scroll(app, page.main),
        View::Booking => 0,
        View::Contact => contact::max_scroll(page.main),
    }
}

/// Whether the next frames need fast redraws
pub fn is_animating(app: &App) -> bool {
    let now = Instant::now();
    app.state
        .notifier
        .toasts()
        .any(|t| t.slide_progress(now) < 1.0)
}
