//! Application state and core logic

use crate::api::{self, ApiClient, SiteApi, SubmissionResult};
use crate::config::SiteConfig;
use crate::state::{
    load_content, AppState, ContentKind, DatePicker, Focus, FocusSlot, Form, FormController,
    FormKind, LoadedContent, SubmitStart, View,
};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Second Ctrl+C must land within this window to quit
const DOUBLE_TAP_WINDOW: Duration = Duration::from_secs(1);

/// Rows moved per scroll step in content views
const SCROLL_STEP: u16 = 1;
const PAGE_STEP: u16 = 10;

/// Assumed (rows, columns) until the first resize is seen
const FALLBACK_TERMINAL_SIZE: (u16, u16) = (24, 80);

/// Results of background work, delivered to the UI thread
#[derive(Debug)]
pub enum AppEvent {
    /// A form's POST finished
    Submitted {
        form: FormKind,
        result: SubmissionResult,
    },
    /// A content section's GET finished
    ContentLoaded(LoadedContent),
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Backend client shared with spawned requests
    api: Arc<dyn SiteApi>,
    events_tx: UnboundedSender<AppEvent>,
    events_rx: UnboundedReceiver<AppEvent>,
    /// Whether the app should quit
    quit: bool,
    /// Terminal size for mouse hit-testing (height, width)
    pub terminal_size: Option<(u16, u16)>,
    /// Timestamp of last Ctrl+C press for double-tap quit
    pub last_ctrl_c: Option<Instant>,
    /// Pinned date for deterministic runs; `None` means the local date
    fixed_today: Option<NaiveDate>,
}

impl App {
    /// Create an App talking to the configured backend
    pub fn new(config: &SiteConfig) -> Result<Self> {
        let client = ApiClient::new(&config.backend_url, config.request_timeout())?;
        tracing::info!(backend = client.base_url(), "using backend");
        Ok(Self::with_api(config, Arc::new(client)))
    }

    /// Create an App over any [`SiteApi`]
    pub fn with_api(config: &SiteConfig, api: Arc<dyn SiteApi>) -> Self {
        let today = Local::now().date_naive();
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(config, today),
            api,
            events_tx,
            events_rx,
            quit: false,
            terminal_size: None,
            last_ctrl_c: None,
            fixed_today: None,
        }
    }

    /// Pin "today" instead of reading the clock
    #[cfg(test)]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.fixed_today = Some(today);
        for kind in [FormKind::Quote, FormKind::Booking, FormKind::Contact] {
            if let Some(calendar) = self.state.forms.get_mut(kind).calendar_mut() {
                calendar.reset(today);
            }
        }
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.fixed_today.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Mount every content section, fetching the ones not yet loaded
    pub fn mount_content(&mut self) {
        for kind in ContentKind::ALL {
            if self.state.content.mount(kind) {
                self.spawn_fetch(kind);
            }
        }
    }

    fn spawn_fetch(&self, kind: ContentKind) {
        let client = Arc::clone(&self.api);
        let tx = self.events_tx.clone();
        tracing::debug!(section = kind.label(), "fetching content");
        tokio::spawn(async move {
            let loaded = load_content(client.as_ref(), kind).await;
            if tx.send(AppEvent::ContentLoaded(loaded)).is_err() {
                tracing::debug!(section = kind.label(), "app gone before content arrived");
            }
        });
    }

    /// Submit a form. The POST runs in the background; the outcome
    /// arrives later as [`AppEvent::Submitted`].
    pub fn submit_form(&mut self, kind: FormKind) {
        let today = self.today();
        match self.state.forms.get_mut(kind).begin_submit(today) {
            SubmitStart::Ignored => {}
            SubmitStart::Rejected(notice) => self.state.notifier.present(notice),
            SubmitStart::Started(request) => {
                let client = Arc::clone(&self.api);
                let tx = self.events_tx.clone();
                tokio::spawn(async move {
                    let result = api::submit(client.as_ref(), request).await;
                    if tx.send(AppEvent::Submitted { form: kind, result }).is_err() {
                        tracing::debug!(form = kind.label(), "app gone before submission settled");
                    }
                });
            }
        }
    }

    /// Apply one background result to the state
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Submitted { form, result } => {
                let today = self.today();
                if let Some(notice) = self.state.forms.get_mut(form).settle(&result, today) {
                    self.state.notifier.present(notice);
                }
            }
            AppEvent::ContentLoaded(loaded) => self.state.content.apply(loaded),
        }
    }

    /// Apply every result that has arrived so far
    pub fn drain_events(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_event(event);
            handled += 1;
        }
        handled
    }

    /// Wait for the next background result
    #[cfg(test)]
    pub async fn next_event(&mut self) -> Option<AppEvent> {
        self.events_rx.recv().await
    }

    /// Per-frame housekeeping
    pub fn tick(&mut self) {
        self.drain_events();
        self.state.notifier.prune_expired(Instant::now());
        self.clamp_scroll();
    }

    fn screen_area(&self) -> Rect {
        let (height, width) = self.terminal_size.unwrap_or(FALLBACK_TERMINAL_SIZE);
        Rect::new(0, 0, width, height)
    }

    /// Keep the page from scrolling past its last line
    fn clamp_scroll(&mut self) {
        let max = crate::ui::max_scroll(self, self.screen_area());
        self.state.scroll.clamp(max);
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.handle_ctrl_c();
            return;
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        if key.code == KeyCode::Esc {
            self.state.focus.toggle();
            return;
        }

        match self.state.focus {
            Focus::Sidebar => self.handle_sidebar_key(key),
            Focus::Content => match self.state.current_view.form_kind() {
                Some(kind) => self.handle_form_key(kind, key),
                None => self.handle_content_key(key),
            },
        }
    }

    fn handle_ctrl_c(&mut self) {
        let now = Instant::now();
        match self.last_ctrl_c {
            Some(prev) if now.duration_since(prev) <= DOUBLE_TAP_WINDOW => {
                tracing::info!("quit requested");
                self.quit = true;
            }
            _ => {
                self.last_ctrl_c = Some(now);
                self.state.status_message = Some("Press Ctrl+C again to quit".to_string());
            }
        }
    }

    /// Handle keys while the sidebar has focus
    fn handle_sidebar_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                let next = self.state.current_view.next();
                self.state.navigate(next);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                let prev = self.state.current_view.prev();
                self.state.navigate(prev);
            }
            KeyCode::Char(c @ '1'..='6') => {
                let index = c as usize - '1' as usize;
                if let Some(view) = View::from_index(index) {
                    self.state.navigate(view);
                }
            }
            KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => {
                self.state.focus = Focus::Content;
            }
            _ => {}
        }
    }

    /// Handle keys in the services, reviews and gallery views
    fn handle_content_key(&mut self, key: KeyEvent) {
        let scroll = &mut self.state.scroll;
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => scroll.scroll_down(SCROLL_STEP),
            KeyCode::Up | KeyCode::Char('k') => scroll.scroll_up(SCROLL_STEP),
            KeyCode::PageDown | KeyCode::Char('d') => scroll.scroll_down(PAGE_STEP),
            KeyCode::PageUp | KeyCode::Char('u') => scroll.scroll_up(PAGE_STEP),
            KeyCode::Home | KeyCode::Char('g') => scroll.reset(),
            _ => {}
        }
        self.clamp_scroll();
    }

    fn is_submit_key(key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('s') => key.modifiers.contains(KeyModifiers::CONTROL),
            KeyCode::Enter => key.modifiers.contains(crate::platform::SUBMIT_MODIFIER),
            _ => false,
        }
    }

    /// Handle keys in a form view
    fn handle_form_key(&mut self, kind: FormKind, key: KeyEvent) {
        if Self::is_submit_key(&key) {
            self.submit_form(kind);
            return;
        }

        let today = self.today();
        let form = self.state.forms.get_mut(kind);
        let slot = form.focus_slot();

        match (key.code, slot) {
            (KeyCode::Tab, _) => form.next_field(),
            (KeyCode::BackTab, _) => form.prev_field(),

            (KeyCode::Left, FocusSlot::Calendar) => with_calendar(form, |c| c.move_days(-1)),
            (KeyCode::Right, FocusSlot::Calendar) => with_calendar(form, |c| c.move_days(1)),
            (KeyCode::Up, FocusSlot::Calendar) => with_calendar(form, |c| c.move_weeks(-1)),
            (KeyCode::Down, FocusSlot::Calendar) => with_calendar(form, |c| c.move_weeks(1)),
            (KeyCode::Enter, FocusSlot::Calendar) => {
                if !form.select_date(today) {
                    self.state.status_message = Some("That day is not available".to_string());
                }
            }

            (KeyCode::Enter, FocusSlot::Submit) => self.submit_form(kind),

            (KeyCode::Left, FocusSlot::Field(_)) => form.cycle_choice(false),
            (KeyCode::Right, FocusSlot::Field(_)) => form.cycle_choice(true),
            (KeyCode::Up, _) => form.prev_field(),
            (KeyCode::Down, _) => form.next_field(),
            (KeyCode::Enter, FocusSlot::Field(i)) => {
                let multiline = form
                    .store()
                    .field_at(i)
                    .map(|f| f.is_multiline())
                    .unwrap_or(false);
                if multiline {
                    form.input_char('\n');
                } else {
                    form.next_field();
                }
            }
            (KeyCode::Char(c), FocusSlot::Field(_)) => form.input_char(c),
            (KeyCode::Backspace, FocusSlot::Field(_)) => form.backspace(),
            _ => {}
        }
    }

    /// Handle a mouse event
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollDown => {
                self.state.scroll.scroll_down(SCROLL_STEP);
                self.clamp_scroll();
            }
            MouseEventKind::ScrollUp => self.state.scroll.scroll_up(SCROLL_STEP),
            MouseEventKind::Down(MouseButton::Left) => {
                let area = self.screen_area();
                let compact = self.state.scroll.is_scrolled();
                if let Some(view) =
                    crate::ui::sidebar_item_at(area, compact, mouse.column, mouse.row)
                        .and_then(View::from_index)
                {
                    self.state.navigate(view);
                    self.state.focus = Focus::Sidebar;
                } else if mouse.column >= crate::ui::SIDEBAR_WIDTH {
                    self.state.focus = Focus::Content;
                }
            }
            _ => {}
        }
    }
}

fn with_calendar(form: &mut FormController, f: impl FnOnce(&mut DatePicker)) {
    if let Some(calendar) = form.calendar_mut() {
        f(calendar);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, Endpoint, MockSiteApi};
    use crate::state::{LoadStatus, Notice, Service, ToastLevel};
    use serde_json::json;

    fn today() -> NaiveDate {
        // Monday
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn app_with(api: MockSiteApi) -> App {
        App::with_api(&SiteConfig::default(), Arc::new(api)).with_today(today())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn service(id: &str) -> Service {
        Service {
            id: id.to_string(),
            icon: "Scissors".to_string(),
            title: format!("Service {id}"),
            description: String::new(),
            image: None,
        }
    }

    /// Open the services view with far more rows than fit on screen
    fn open_long_services(app: &mut App) {
        let services = (0..40).map(|i| service(&i.to_string())).collect();
        app.state.content.services.mount();
        app.state.content.services.finish(Ok(services));
        app.state.navigate(View::Services);
        app.state.focus = Focus::Content;
    }

    fn fill_quote(app: &mut App) {
        let store = app.state.forms.quote.store_mut();
        store.set("name", "John Smith");
        store.set("email", "john@email.com");
        store.set("phone", "5551234567");
        store.set("service", "tree-removal");
        store.set("address", "123 Main St");
    }

    mod quit_tests {
        use super::*;

        #[test]
        fn test_single_ctrl_c_does_not_quit() {
            let mut app = app_with(MockSiteApi::new());
            app.handle_key(ctrl('c'));
            assert!(!app.should_quit());
            assert!(app.last_ctrl_c.is_some());
            assert!(app.state.status_message.is_some());
        }

        #[test]
        fn test_double_ctrl_c_quits() {
            let mut app = app_with(MockSiteApi::new());
            app.handle_key(ctrl('c'));
            app.handle_key(ctrl('c'));
            assert!(app.should_quit());
        }

        #[test]
        fn test_stale_ctrl_c_does_not_quit() {
            let mut app = app_with(MockSiteApi::new());
            app.last_ctrl_c = Some(Instant::now() - Duration::from_secs(5));
            app.handle_key(ctrl('c'));
            assert!(!app.should_quit());
        }
    }

    mod navigation_tests {
        use super::*;
        use pretty_assertions::assert_eq;
        use ratatui::{backend::TestBackend, Terminal};

        #[test]
        fn test_sidebar_j_k_moves_views() {
            let mut app = app_with(MockSiteApi::new());
            app.handle_key(key(KeyCode::Char('j')));
            assert_eq!(app.state.current_view, View::Services);
            app.handle_key(key(KeyCode::Char('k')));
            app.handle_key(key(KeyCode::Char('k')));
            assert_eq!(app.state.current_view, View::Contact);
        }

        #[test]
        fn test_number_keys_jump() {
            let mut app = app_with(MockSiteApi::new());
            app.handle_key(key(KeyCode::Char('5')));
            assert_eq!(app.state.current_view, View::Booking);
        }

        #[test]
        fn test_esc_toggles_focus() {
            let mut app = app_with(MockSiteApi::new());
            assert_eq!(app.state.focus, Focus::Sidebar);
            app.handle_key(key(KeyCode::Esc));
            assert_eq!(app.state.focus, Focus::Content);
            app.handle_key(key(KeyCode::Esc));
            assert_eq!(app.state.focus, Focus::Sidebar);
        }

        #[test]
        fn test_content_view_scrolls() {
            let mut app = app_with(MockSiteApi::new());
            open_long_services(&mut app);
            for _ in 0..4 {
                app.handle_key(key(KeyCode::Char('j')));
            }
            assert_eq!(app.state.scroll.offset(), 4);
            assert!(app.state.scroll.is_scrolled());
            app.handle_key(key(KeyCode::Char('g')));
            assert_eq!(app.state.scroll.offset(), 0);
        }

        #[test]
        fn test_mouse_wheel_scrolls() {
            let mut app = app_with(MockSiteApi::new());
            open_long_services(&mut app);
            app.handle_mouse(MouseEvent {
                kind: MouseEventKind::ScrollDown,
                column: 40,
                row: 10,
                modifiers: KeyModifiers::NONE,
            });
            assert_eq!(app.state.scroll.offset(), 1);
        }

        #[test]
        fn test_short_page_stays_on_screen() {
            let mut app = app_with(MockSiteApi::new());
            app.terminal_size = Some((30, 100));
            app.state.navigate(View::Services);
            app.state.focus = Focus::Content;
            for _ in 0..500 {
                app.handle_key(key(KeyCode::Char('j')));
            }
            assert_eq!(app.state.scroll.offset(), 0);

            let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
            terminal.draw(|frame| crate::ui::draw(frame, &app)).unwrap();
            let screen: String = terminal
                .backend()
                .buffer()
                .content()
                .iter()
                .map(|cell| cell.symbol())
                .collect();
            assert!(screen.contains("WHAT WE DO"));
        }

        #[test]
        fn test_long_page_stops_at_last_line() {
            let mut app = app_with(MockSiteApi::new());
            app.terminal_size = Some((30, 100));
            open_long_services(&mut app);
            for _ in 0..500 {
                app.handle_key(key(KeyCode::Char('j')));
            }
            let max = crate::ui::max_scroll(&app, app.screen_area());
            assert!(max > 0);
            assert_eq!(app.state.scroll.offset(), max);

            app.handle_key(key(KeyCode::Char('k')));
            assert_eq!(app.state.scroll.offset(), max - 1);
        }

        #[test]
        fn test_wheel_on_booking_never_scrolls() {
            let mut app = app_with(MockSiteApi::new());
            app.state.navigate(View::Booking);
            for _ in 0..5 {
                app.handle_mouse(MouseEvent {
                    kind: MouseEventKind::ScrollDown,
                    column: 40,
                    row: 10,
                    modifiers: KeyModifiers::NONE,
                });
            }
            assert_eq!(app.state.scroll.offset(), 0);
        }

        #[test]
        fn test_click_on_main_focuses_content() {
            let mut app = app_with(MockSiteApi::new());
            app.terminal_size = Some((40, 100));
            app.handle_mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: 60,
                row: 10,
                modifiers: KeyModifiers::NONE,
            });
            assert_eq!(app.state.focus, Focus::Content);
        }
    }

    mod form_key_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_typing_fills_focused_field() {
            let mut app = app_with(MockSiteApi::new());
            app.state.focus = Focus::Content;
            type_str(&mut app, "Jane");
            app.handle_key(key(KeyCode::Tab));
            type_str(&mut app, "jane@x.com");
            app.handle_key(key(KeyCode::Backspace));

            let state = app.state.forms.quote.store().snapshot();
            assert_eq!(state.get("name"), "Jane");
            assert_eq!(state.get("email"), "jane@x.co");
        }

        #[test]
        fn test_right_arrow_cycles_service() {
            let mut app = app_with(MockSiteApi::new());
            app.state.focus = Focus::Content;
            for _ in 0..3 {
                app.handle_key(key(KeyCode::Tab));
            }
            app.handle_key(key(KeyCode::Right));
            let state = app.state.forms.quote.store().snapshot();
            assert_eq!(state.get("service"), "tree-removal");
        }

        #[test]
        fn test_calendar_keys_pick_date() {
            let mut app = app_with(MockSiteApi::new());
            app.state.navigate(View::Booking);
            app.state.focus = Focus::Content;

            app.handle_key(key(KeyCode::Right));
            app.handle_key(key(KeyCode::Down));
            app.handle_key(key(KeyCode::Enter));

            let picked = app.state.forms.booking.calendar().unwrap().selected();
            assert_eq!(picked, NaiveDate::from_ymd_opt(2026, 10, 27));
        }

        #[test]
        fn test_calendar_refusal_sets_status() {
            let mut app = app_with(MockSiteApi::new());
            app.state.navigate(View::Booking);
            app.state.focus = Focus::Content;

            app.handle_key(key(KeyCode::Left)); // Sunday the 18th, in the past
            app.handle_key(key(KeyCode::Enter));
            assert!(app.state.status_message.is_some());
            assert!(app.state.forms.booking.calendar().unwrap().selected().is_none());
        }
    }

    mod submit_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_rapid_double_submit_posts_once() {
            let mut api = MockSiteApi::new();
            api.expect_post_json()
                .withf(|endpoint, _| *endpoint == Endpoint::Quotes)
                .times(1)
                .returning(|_, _| Ok(json!({"id": "q-1"})));

            let mut app = app_with(api);
            fill_quote(&mut app);
            app.state.focus = Focus::Content;

            app.handle_key(ctrl('s'));
            app.handle_key(ctrl('s'));
            assert!(app.state.forms.quote.is_submitting());

            let event = app.next_event().await.unwrap();
            app.handle_event(event);

            assert!(!app.state.forms.quote.is_submitting());
            let toasts: Vec<_> = app.state.notifier.toasts().collect();
            assert_eq!(toasts.len(), 1);
            assert_eq!(toasts[0].level, ToastLevel::Success);
            assert_eq!(
                toasts[0].message,
                "Quote request submitted! We'll contact you shortly."
            );
        }

        #[tokio::test]
        async fn test_server_error_keeps_values() {
            let mut api = MockSiteApi::new();
            api.expect_post_json().times(1).returning(|endpoint, _| {
                Err(ApiError::Status {
                    path: endpoint.path(),
                    status: 500,
                })
            });

            let mut app = app_with(api);
            fill_quote(&mut app);
            app.submit_form(FormKind::Quote);
            let event = app.next_event().await.unwrap();
            app.handle_event(event);

            let toast = app.state.notifier.toasts().next().unwrap();
            assert_eq!(toast.level, ToastLevel::Failure);
            assert_eq!(
                app.state.forms.quote.store().snapshot().get("name"),
                "John Smith"
            );
        }

        #[tokio::test]
        async fn test_invalid_contact_never_posts() {
            let mut api = MockSiteApi::new();
            api.expect_post_json().times(0);

            let mut app = app_with(api);
            app.state.forms.contact.store_mut().set("name", "Jane");
            app.submit_form(FormKind::Contact);

            let toasts: Vec<_> = app.state.notifier.toasts().collect();
            assert_eq!(toasts.len(), 1);
            assert_eq!(toasts[0].message, "Please fill in all required fields");
            assert!(!app.state.forms.contact.is_submitting());
            assert_eq!(app.drain_events(), 0);
        }

        #[tokio::test]
        async fn test_other_forms_stay_usable_while_one_submits() {
            let mut api = MockSiteApi::new();
            api.expect_post_json()
                .times(1)
                .returning(|_, _| Ok(json!({"id": "q-1"})));

            let mut app = app_with(api);
            fill_quote(&mut app);
            app.submit_form(FormKind::Quote);

            app.state.navigate(View::Contact);
            app.state.focus = Focus::Content;
            type_str(&mut app, "Jane");
            assert_eq!(app.state.forms.contact.store().snapshot().get("name"), "Jane");

            let event = app.next_event().await.unwrap();
            app.handle_event(event);
            assert!(app.state.forms.quote.store().snapshot().get("name").is_empty());
        }

        #[test]
        fn test_settle_event_without_submit_is_dropped() {
            let mut app = app_with(MockSiteApi::new());
            app.handle_event(AppEvent::Submitted {
                form: FormKind::Booking,
                result: SubmissionResult::Success,
            });
            assert!(app.state.notifier.is_empty());
        }

        #[test]
        fn test_notice_presented_matches_controller() {
            let mut app = app_with(MockSiteApi::new());
            app.state.notifier.present(Notice::Success("x".to_string()));
            assert_eq!(app.state.notifier.len(), 1);
        }
    }

    mod content_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_mount_fetches_each_section_once() {
            let mut api = MockSiteApi::new();
            api.expect_list_services()
                .times(1)
                .returning(|| Ok(vec![service("1"), service("2"), service("3")]));
            api.expect_list_testimonials()
                .times(1)
                .returning(|| Ok(Vec::new()));
            api.expect_list_gallery().times(1).returning(|| {
                Err(ApiError::Status {
                    path: Endpoint::Gallery.path(),
                    status: 503,
                })
            });

            let mut app = app_with(api);
            app.mount_content();
            app.mount_content();

            for _ in 0..3 {
                let event = app.next_event().await.unwrap();
                app.handle_event(event);
            }

            let content = &app.state.content;
            let ids: Vec<_> = content.services.items().iter().map(|s| s.id.as_str()).collect();
            assert_eq!(ids, vec!["1", "2", "3"]);
            assert_eq!(content.testimonials.status(), LoadStatus::Loaded);
            assert_eq!(content.gallery.status(), LoadStatus::Failed);
            assert!(content.gallery.items().is_empty());
            // Load failures never toast
            assert!(app.state.notifier.is_empty());
        }
    }
}
