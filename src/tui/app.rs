// TUI application state
//
// The App owns one swipe controller, the tab strip bound to it, and the
// per-page state for whatever pages the feature flags enabled. Components
// own their own state; the App routes input to them and exposes accessors
// for rendering.

use crate::calendar::MonthGrid;
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::search::Debouncer;
use crate::swipe::{PagedSwipeController, TabItem, TabStrip};
use crate::theme::Theme;
use chrono::{Datelike, Local, NaiveDate};
use ratatui::layout::Rect;
use std::ops::Range;
use std::time::{Duration, Instant};

/// How long a toast stays on screen
const TOAST_TTL: Duration = Duration::from_secs(3);

/// The pages a deck can carry, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Overview,
    Gallery,
    Calendar,
    Journal,
}

impl PageKind {
    fn tab_item(self) -> TabItem {
        match self {
            PageKind::Overview => TabItem::with_short("Overview", "Over"),
            PageKind::Gallery => TabItem::new("Gallery"),
            PageKind::Calendar => TabItem::with_short("Calendar", "Cal"),
            PageKind::Journal => TabItem::with_short("Journal", "Jrnl"),
        }
    }
}

/// Masonry demonstration state: card extents regenerated on demand
#[derive(Debug, Clone)]
pub struct GalleryState {
    pub extents: Vec<u16>,
    round: u64,
}

impl GalleryState {
    const CARD_COUNT: usize = 28;

    fn new() -> Self {
        Self {
            extents: Self::generate(0),
            round: 0,
        }
    }

    /// Deterministic card heights so a given round always looks the same
    fn generate(round: u64) -> Vec<u16> {
        (0..Self::CARD_COUNT)
            .map(|i| {
                let mut x = (i as u64 + 1)
                    .wrapping_mul(0x9E37_79B9_7F4A_7C15)
                    .wrapping_add(round.wrapping_mul(0xBF58_476D_1CE4_E5B9));
                x ^= x >> 29;
                x = x.wrapping_mul(0x94D0_49BB_1331_11EB);
                x ^= x >> 32;
                3 + (x % 7) as u16
            })
            .collect()
    }

    pub fn reshuffle(&mut self) {
        self.round += 1;
        self.extents = Self::generate(self.round);
    }
}

/// Calendar page state: the cursor month and today's date for highlighting
#[derive(Debug, Clone)]
pub struct CalendarState {
    pub grid: MonthGrid,
    pub today: NaiveDate,
}

impl CalendarState {
    fn new() -> Self {
        let today = Local::now().date_naive();
        Self {
            grid: MonthGrid::new(today.year(), today.month()),
            today,
        }
    }

    pub fn prev_month(&mut self) {
        self.grid = self.grid.prev();
    }

    pub fn next_month(&mut self) {
        self.grid = self.grid.next();
    }
}

/// Journal page state: the filter query and its debounce
#[derive(Debug, Clone, Default)]
pub struct JournalState {
    /// The query as typed (may still be settling)
    pub query: String,
    /// The query currently applied to the view
    pub applied_query: String,
    /// True while keystrokes go to the query instead of the app
    pub editing: bool,
    pub debouncer: Debouncer,
}

/// Screen regions recorded during draw, used to route mouse input
#[derive(Debug, Clone, Copy, Default)]
pub struct ScreenAreas {
    pub tabs: Rect,
    pub deck: Rect,
}

/// A transient status message
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    shown_at: Instant,
}

/// Main application state for the TUI
pub struct App {
    pub theme: Theme,
    pub controller: PagedSwipeController,
    pub tabs: TabStrip,
    pub pages: Vec<PageKind>,

    pub gallery: GalleryState,
    pub calendar: CalendarState,
    pub journal: JournalState,

    pub log_buffer: LogBuffer,
    pub should_quit: bool,
    pub toast: Option<Toast>,

    /// Rebuilt by the tab bar on every draw: caption cell range -> page index
    pub tab_hits: Vec<(Range<u16>, usize)>,
    pub areas: ScreenAreas,

    /// Column where the active mouse drag was pressed
    drag_origin: Option<u16>,
    /// Edge detector for logging settle completion
    was_settling: bool,

    start_time: Instant,
}

impl App {
    pub fn with_config(config: &Config, log_buffer: LogBuffer) -> Self {
        let mut pages = vec![PageKind::Overview];
        if config.features.gallery {
            pages.push(PageKind::Gallery);
        }
        if config.features.calendar {
            pages.push(PageKind::Calendar);
        }
        if config.features.journal {
            pages.push(PageKind::Journal);
        }

        let tabs = TabStrip::new(pages.iter().map(|p| p.tab_item()).collect());
        // The real viewport width arrives on the first draw; any positive
        // placeholder keeps the math sane until then.
        let mut controller = PagedSwipeController::with_tuning(
            pages.len(),
            80.0,
            config.motion.to_tuning(),
        );

        // A configured start page is an ordinary tab selection made right
        // after mount; the first draw may snap the slide the rest of the way
        // when it learns the real viewport width.
        if let Some(name) = &config.start_page {
            match tabs.index_of(name) {
                Some(index) => {
                    controller.select_page(index);
                }
                None => tracing::warn!(name = %name, "start_page does not match any tab"),
            }
        }

        Self {
            theme: Theme::by_name(&config.theme),
            controller,
            tabs,
            pages,
            gallery: GalleryState::new(),
            calendar: CalendarState::new(),
            journal: JournalState::default(),
            log_buffer,
            should_quit: false,
            toast: None,
            tab_hits: Vec::new(),
            areas: ScreenAreas::default(),
            drag_origin: None,
            was_settling: false,
            start_time: Instant::now(),
        }
    }

    pub fn current_page_kind(&self) -> PageKind {
        self.pages
            .get(self.controller.current_page())
            .copied()
            .unwrap_or(PageKind::Overview)
    }

    /// Frame tick: advance the settle, poll the journal debounce, expire
    /// the toast.
    pub fn tick(&mut self) {
        self.controller.tick();

        let settling = self.controller.is_settling();
        if self.was_settling && !settling {
            tracing::debug!(
                page = self.controller.current_page(),
                offset = self.controller.offset(),
                "settle finished"
            );
        }
        self.was_settling = settling;

        if self.journal.debouncer.ready() {
            self.journal.applied_query = self.journal.query.clone();
            tracing::debug!(query = %self.journal.applied_query, "journal filter applied");
        }

        if let Some(toast) = &self.toast {
            if toast.shown_at.elapsed() > TOAST_TTL {
                self.toast = None;
            }
        }
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            shown_at: Instant::now(),
        });
    }

    // ── Page selection ───────────────────────────────────────────────────

    /// Tab tap or number key. The page index (and the tab highlight derived
    /// from it) updates now; the slide catches up over the settle.
    pub fn select_page(&mut self, index: usize) {
        if index >= self.pages.len() {
            return;
        }
        let from = self.controller.current_page();
        let to = self.controller.select_page(index);
        if from != to {
            tracing::info!(from, to, "page selected");
        }
    }

    pub fn select_next_page(&mut self) {
        let next = self.controller.current_page() + 1;
        if next < self.pages.len() {
            self.select_page(next);
        }
    }

    pub fn select_prev_page(&mut self) {
        let current = self.controller.current_page();
        if current > 0 {
            self.select_page(current - 1);
        }
    }

    /// Tab key cycles with wrap-around
    pub fn cycle_page(&mut self) {
        let next = (self.controller.current_page() + 1) % self.pages.len();
        self.select_page(next);
    }

    // ── Mouse gestures ───────────────────────────────────────────────────

    /// Which tab caption (if any) covers this column
    pub fn tab_hit(&self, column: u16) -> Option<usize> {
        self.tab_hits
            .iter()
            .find(|(range, _)| range.contains(&column))
            .map(|(_, index)| *index)
    }

    pub fn on_mouse_down(&mut self, column: u16, row: u16) {
        let pos = ratatui::layout::Position::new(column, row);
        if self.areas.tabs.contains(pos) {
            if let Some(index) = self.tab_hit(column) {
                self.select_page(index);
            }
        } else if self.areas.deck.contains(pos) {
            self.drag_origin = Some(column);
            self.controller.drag_start();
        }
    }

    pub fn on_mouse_drag(&mut self, column: u16) {
        if let Some(origin) = self.drag_origin {
            self.controller
                .drag_update(column as f32 - origin as f32);
        }
    }

    pub fn on_mouse_up(&mut self, column: u16) {
        if let Some(origin) = self.drag_origin.take() {
            let translation = column as f32 - origin as f32;
            let page = self.controller.drag_end(translation);
            tracing::info!(translation, page, "drag released");
        }
    }

    // ── Journal input ────────────────────────────────────────────────────

    pub fn journal_start_editing(&mut self) {
        self.journal.editing = true;
    }

    pub fn journal_stop_editing(&mut self) {
        self.journal.editing = false;
        // Apply whatever is typed without waiting out the quiet period
        self.journal.applied_query = self.journal.query.clone();
    }

    pub fn journal_push(&mut self, c: char) {
        self.journal.query.push(c);
        self.journal.debouncer.touch();
    }

    pub fn journal_backspace(&mut self) {
        self.journal.query.pop();
        self.journal.debouncer.touch();
    }

    /// Get uptime as a formatted string
    pub fn uptime(&self) -> String {
        let seconds = self.start_time.elapsed().as_secs();
        format!("{:02}:{:02}:{:02}", seconds / 3600, (seconds % 3600) / 60, seconds % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::with_config(&Config::default(), LogBuffer::new())
    }

    #[test]
    fn default_features_build_four_pages() {
        let app = app();
        assert_eq!(app.pages.len(), 4);
        assert_eq!(app.tabs.len(), 4);
        assert_eq!(app.controller.page_count(), 4);
        assert_eq!(app.current_page_kind(), PageKind::Overview);
    }

    #[test]
    fn disabled_features_shrink_the_deck() {
        let mut config = Config::default();
        config.features.gallery = false;
        config.features.journal = false;
        let app = App::with_config(&config, LogBuffer::new());
        assert_eq!(app.pages, vec![PageKind::Overview, PageKind::Calendar]);
        assert_eq!(app.controller.page_count(), 2);
    }

    #[test]
    fn start_page_selects_by_caption() {
        let mut config = Config::default();
        config.start_page = Some("Calendar".to_string());
        let app = App::with_config(&config, LogBuffer::new());
        // Selected at mount: index already reported, slide still running
        assert_eq!(app.current_page_kind(), PageKind::Calendar);
        assert!(app.controller.is_settling());
    }

    #[test]
    fn unknown_start_page_stays_on_the_first_page() {
        let mut config = Config::default();
        config.start_page = Some("Reviews".to_string());
        let app = App::with_config(&config, LogBuffer::new());
        assert_eq!(app.controller.current_page(), 0);
    }

    #[test]
    fn select_page_updates_kind_immediately() {
        let mut app = app();
        app.select_page(2);
        // Index is reported before the settle finishes
        assert_eq!(app.current_page_kind(), PageKind::Calendar);
        assert!(app.controller.is_settling());
    }

    #[test]
    fn arrow_selection_saturates_at_the_edges() {
        let mut app = app();
        app.select_prev_page();
        assert_eq!(app.controller.current_page(), 0);
        for _ in 0..10 {
            app.select_next_page();
        }
        assert_eq!(app.controller.current_page(), 3);
    }

    #[test]
    fn cycle_wraps_past_the_last_page() {
        let mut app = app();
        for _ in 0..4 {
            app.cycle_page();
        }
        assert_eq!(app.controller.current_page(), 0);
    }

    #[test]
    fn drag_lifecycle_routes_through_controller() {
        let mut app = app();
        app.areas.deck = Rect::new(0, 4, 120, 30);
        app.controller.set_page_width(120.0);

        app.on_mouse_down(100, 10);
        app.on_mouse_drag(55); // 45 cells left, past 120/3 = 40
        assert_eq!(app.controller.offset(), -45.0);
        app.on_mouse_up(55);
        assert_eq!(app.controller.current_page(), 1);
    }

    #[test]
    fn mouse_down_outside_the_deck_does_not_start_a_drag() {
        let mut app = app();
        app.areas.deck = Rect::new(0, 4, 120, 30);
        app.on_mouse_down(10, 50); // below the deck
        assert!(!app.controller.is_dragging());
        // A stray release with no origin is harmless
        app.on_mouse_up(10);
        assert_eq!(app.controller.current_page(), 0);
    }

    #[test]
    fn gallery_reshuffle_changes_extents_deterministically() {
        let mut a = GalleryState::new();
        let mut b = GalleryState::new();
        assert_eq!(a.extents, b.extents);
        a.reshuffle();
        b.reshuffle();
        assert_eq!(a.extents, b.extents);
        assert_ne!(a.extents, GalleryState::new().extents);
        assert!(a.extents.iter().all(|&h| (3..10).contains(&h)));
    }

    #[test]
    fn journal_editing_applies_on_stop() {
        let mut app = app();
        app.journal_start_editing();
        for c in "warn".chars() {
            app.journal_push(c);
        }
        assert_eq!(app.journal.query, "warn");
        assert!(app.journal.debouncer.is_pending());
        app.journal_stop_editing();
        assert_eq!(app.journal.applied_query, "warn");
        app.journal_backspace();
        assert_eq!(app.journal.query, "war");
    }
}
