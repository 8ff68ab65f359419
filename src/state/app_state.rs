//! Application state definitions

use super::content_loader::ContentStore;
use super::forms::{booking_form, contact_form, quote_form, FormController, FormKind};
use super::notifications::Notifier;
use crate::config::SiteConfig;
use chrono::NaiveDate;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Hero section with the quote form
    #[default]
    Quote,
    Services,
    Testimonials,
    Gallery,
    Booking,
    Contact,
}

impl View {
    /// Sidebar order
    pub const ALL: [View; 6] = [
        View::Quote,
        View::Services,
        View::Testimonials,
        View::Gallery,
        View::Booking,
        View::Contact,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Quote => "Quote",
            Self::Services => "Services",
            Self::Testimonials => "Reviews",
            Self::Gallery => "Gallery",
            Self::Booking => "Book",
            Self::Contact => "Contact",
        }
    }

    /// Position in the sidebar
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|v| v == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }

    /// The form shown in this view, if any
    pub fn form_kind(&self) -> Option<FormKind> {
        match self {
            Self::Quote => Some(FormKind::Quote),
            Self::Booking => Some(FormKind::Booking),
            Self::Contact => Some(FormKind::Contact),
            Self::Services | Self::Testimonials | Self::Gallery => None,
        }
    }
}

/// Which pane receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Sidebar,
    Content,
}

impl Focus {
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Sidebar => Self::Content,
            Self::Content => Self::Sidebar,
        };
    }
}

/// Vertical scroll of the content pane, in rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageScroll {
    offset: u16,
}

impl PageScroll {
    /// Header turns compact past this many rows
    pub const COMPACT_AFTER: u16 = 2;

    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn scroll_down(&mut self, rows: u16) {
        self.offset = self.offset.saturating_add(rows);
    }

    pub fn scroll_up(&mut self, rows: u16) {
        self.offset = self.offset.saturating_sub(rows);
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Pull the offset back to at most `max_offset`
    pub fn clamp(&mut self, max_offset: u16) {
        self.offset = self.offset.min(max_offset);
    }

    pub fn is_scrolled(&self) -> bool {
        self.offset > Self::COMPACT_AFTER
    }
}

/// One controller per form
#[derive(Debug, Clone)]
pub struct FormSet {
    pub quote: FormController,
    pub booking: FormController,
    pub contact: FormController,
}

impl FormSet {
    pub fn new(config: &SiteConfig, today: NaiveDate) -> Self {
        Self {
            quote: FormController::new(quote_form(), today),
            booking: FormController::new(booking_form(config.closed_weekday), today),
            contact: FormController::new(contact_form(), today),
        }
    }

    #[cfg(test)]
    pub fn get(&self, kind: FormKind) -> &FormController {
        match kind {
            FormKind::Quote => &self.quote,
            FormKind::Booking => &self.booking,
            FormKind::Contact => &self.contact,
        }
    }

    pub fn get_mut(&mut self, kind: FormKind) -> &mut FormController {
        match kind {
            FormKind::Quote => &mut self.quote,
            FormKind::Booking => &mut self.booking,
            FormKind::Contact => &mut self.contact,
        }
    }
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub current_view: View,
    pub focus: Focus,
    pub scroll: PageScroll,
    pub forms: FormSet,
    pub content: ContentStore,
    pub notifier: Notifier,
    /// One-line hint in the status bar, cleared on the next key
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: &SiteConfig, today: NaiveDate) -> Self {
        Self {
            current_view: View::default(),
            focus: Focus::default(),
            scroll: PageScroll::default(),
            forms: FormSet::new(config, today),
            content: ContentStore::default(),
            notifier: Notifier::new(config.toast_lifetime()),
            status_message: None,
        }
    }

    /// Switch views; the page starts at the top
    pub fn navigate(&mut self, view: View) {
        if view != self.current_view {
            tracing::debug!(from = self.current_view.label(), to = view.label(), "navigate");
            self.current_view = view;
            self.scroll.reset();
        }
    }
}
