// Paged swipe controller - one rule set for drags and tab taps
//
// Owns the authoritative (page index, horizontal offset) pair for a deck of
// side-by-side pages. The host feeds it raw gesture callbacks and explicit
// page selections; it decides where the deck rests and hands the settle to
// its tween. The App is agnostic: it routes input here and reads `offset()`
// when rendering.
//
// Interaction rules (all positional, no velocity model):
// - live drags move the offset unclamped, so edge pages show a little blank
//   overscroll that settles back on release
// - release farther than a third of the page width flips one page, never
//   more, and never past either boundary
// - the page index changes at the moment of release or tap; the visual slide
//   catches up over the settle duration

use super::animator::{Easing, SettleAnimator};
use std::time::Duration;

/// Tuning knobs for the swipe feel. Defaults match the reference behavior:
/// third-of-width release threshold, 250 ms swipe settle, 300 ms tab settle.
#[derive(Debug, Clone, Copy)]
pub struct SwipeTuning {
    /// Settle duration after a released drag.
    pub swipe_settle: Duration,
    /// Settle duration after an explicit tab selection (slightly longer).
    pub tab_settle: Duration,
    /// The release threshold is `page_width / threshold_divisor`.
    pub threshold_divisor: f32,
}

impl Default for SwipeTuning {
    fn default() -> Self {
        Self {
            swipe_settle: Duration::from_millis(250),
            tab_settle: Duration::from_millis(300),
            threshold_divisor: 3.0,
        }
    }
}

/// Interaction state for one deck of pages.
///
/// The page count is fixed for the controller's lifetime; the page width is
/// the viewport width and may be updated on terminal resize. All state is
/// ephemeral - a new controller starts at page 0, offset 0.
#[derive(Debug, Clone)]
pub struct PagedSwipeController {
    page_count: usize,
    page_width: f32,
    current_page: usize,
    offset: f32,
    /// Offset snapshot taken when the active drag began. `None` while no
    /// drag is in progress.
    drag_start_offset: Option<f32>,
    settle: SettleAnimator,
    tuning: SwipeTuning,
}

impl PagedSwipeController {
    /// Create a controller resting on the first page.
    /// A page count of zero is meaningless and is clamped to one.
    #[allow(dead_code)] // default-tuning constructor; the app always passes [motion] config
    pub fn new(page_count: usize, page_width: f32) -> Self {
        Self::with_tuning(page_count, page_width, SwipeTuning::default())
    }

    pub fn with_tuning(page_count: usize, page_width: f32, tuning: SwipeTuning) -> Self {
        Self {
            page_count: page_count.max(1),
            page_width,
            current_page: 0,
            offset: 0.0,
            drag_start_offset: None,
            settle: SettleAnimator::new(),
            tuning,
        }
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// The live horizontal translation of the page strip, in cells.
    /// `[-(page_count-1) * page_width, 0]` at rest; transiently outside that
    /// range while a drag is in progress.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn page_width(&self) -> f32 {
        self.page_width
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_start_offset.is_some()
    }

    pub fn is_settling(&self) -> bool {
        self.settle.is_active()
    }

    /// Where the in-flight settle is headed, if one is active.
    pub fn settle_target(&self) -> Option<f32> {
        self.settle.target()
    }

    /// Minimum release distance that flips a page.
    pub fn threshold(&self) -> f32 {
        self.page_width / self.tuning.threshold_divisor
    }

    /// Viewport width changed (terminal resize). Snaps the offset to the
    /// current page's rest position; an in-flight settle or drag would be
    /// aiming at coordinates that no longer exist.
    pub fn set_page_width(&mut self, page_width: f32) {
        self.page_width = page_width;
        self.settle.cancel();
        self.drag_start_offset = None;
        self.offset = self.rest_offset(self.current_page);
    }

    /// A drag began. Snapshots the current offset as the drag origin and
    /// cancels any in-flight settle so the pointer takes over from the live
    /// value. Duplicate starts simply re-snapshot; there is nothing to
    /// corrupt.
    pub fn drag_start(&mut self) {
        self.settle.cancel();
        self.drag_start_offset = Some(self.offset);
    }

    /// Pointer moved by `translation_x` cells since the drag began. The live
    /// offset is the origin snapshot plus the translation, deliberately
    /// unclamped. Called at input frequency; does nothing but arithmetic.
    ///
    /// An update with no preceding `drag_start` (host gesture takeover,
    /// dropped events) treats the current offset as the origin.
    pub fn drag_update(&mut self, translation_x: f32) {
        let origin = match self.drag_start_offset {
            Some(origin) => origin,
            None => {
                self.settle.cancel();
                self.drag_start_offset = Some(self.offset);
                self.offset
            }
        };
        self.offset = origin + translation_x;
    }

    /// The drag was released after travelling `translation_x` cells.
    ///
    /// Decides the landing page from the total translation alone - one page
    /// forward past `-threshold()`, one page back past `+threshold()`,
    /// otherwise a snap back - then starts the settle from wherever the live
    /// offset currently is. Returns the decided page index; callers that
    /// update labels should do so now, not when the slide finishes.
    pub fn drag_end(&mut self, translation_x: f32) -> usize {
        let threshold = self.threshold();
        let new_index = if translation_x < -threshold && self.current_page < self.page_count - 1 {
            self.current_page + 1
        } else if translation_x > threshold && self.current_page > 0 {
            self.current_page - 1
        } else {
            self.current_page
        };

        self.drag_start_offset = None;
        self.current_page = new_index;
        self.settle.begin(
            self.offset,
            self.rest_offset(new_index),
            self.tuning.swipe_settle,
            Easing::EaseOutQuad,
        );
        new_index
    }

    /// Jump to a page directly (tab click, number key). Out-of-range indices
    /// are a caller bug and are ignored rather than panicking mid-frame.
    /// Returns the now-current page index, reported immediately - the slide
    /// catches up afterwards.
    pub fn select_page(&mut self, index: usize) -> usize {
        if index >= self.page_count {
            tracing::warn!(index, page_count = self.page_count, "select_page out of range");
            return self.current_page;
        }
        self.drag_start_offset = None;
        self.current_page = index;
        self.settle.begin(
            self.offset,
            self.rest_offset(index),
            self.tuning.tab_settle,
            Easing::EaseOutQuad,
        );
        index
    }

    /// Advance the settle animation one frame. Returns `true` if the offset
    /// moved (the host should redraw).
    pub fn tick(&mut self) -> bool {
        self.tick_at(std::time::Instant::now())
    }

    /// `tick()` with an explicit clock, for hosts that batch their frame
    /// timestamp and for deterministic tests.
    pub fn tick_at(&mut self, now: std::time::Instant) -> bool {
        match self.settle.sample(now) {
            Some(value) => {
                self.offset = value;
                true
            }
            None => false,
        }
    }

    /// Rest offset for a page: pages sit side by side, so page `i` is fully
    /// visible when the strip is translated by `-i * page_width`.
    fn rest_offset(&self, index: usize) -> f32 {
        -(index as f32) * self.page_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    /// Run the settle to completion so assertions see the resting offset.
    fn finish_settle(c: &mut PagedSwipeController) {
        c.tick_at(Instant::now() + Duration::from_secs(2));
    }

    #[test]
    fn starts_at_rest_on_first_page() {
        let c = PagedSwipeController::new(3, 300.0);
        assert_eq!(c.current_page(), 0);
        assert_eq!(c.offset(), 0.0);
        assert!(!c.is_dragging());
        assert!(!c.is_settling());
    }

    #[test]
    fn select_page_rests_at_page_boundary() {
        // Resting offset after selecting page i is exactly -i * page_width,
        // for every valid i.
        let mut c = PagedSwipeController::new(4, 250.0);
        for i in [2usize, 0, 3, 1] {
            assert_eq!(c.select_page(i), i);
            assert_eq!(c.current_page(), i, "index reported before settle");
            finish_settle(&mut c);
            assert_eq!(c.offset(), -(i as f32) * 250.0);
        }
    }

    #[test]
    fn select_page_out_of_range_is_ignored() {
        let mut c = PagedSwipeController::new(3, 300.0);
        c.select_page(1);
        finish_settle(&mut c);
        assert_eq!(c.select_page(7), 1);
        assert_eq!(c.current_page(), 1);
        assert_eq!(c.offset(), -300.0);
    }

    #[test]
    fn release_threshold_is_a_third_of_page_width() {
        // From the middle page of three, just past the threshold flips,
        // just short of it snaps back - in both directions.
        let mut c = PagedSwipeController::new(3, 300.0);
        c.select_page(1);
        finish_settle(&mut c);

        c.drag_start();
        c.drag_update(-101.0);
        assert_eq!(c.drag_end(-101.0), 2);

        c.select_page(1);
        finish_settle(&mut c);
        c.drag_start();
        assert_eq!(c.drag_end(-99.0), 1);

        c.drag_start();
        assert_eq!(c.drag_end(101.0), 0);

        c.select_page(1);
        finish_settle(&mut c);
        c.drag_start();
        assert_eq!(c.drag_end(99.0), 1);
    }

    #[test]
    fn boundary_pages_ignore_outward_swipes() {
        let mut c = PagedSwipeController::new(3, 300.0);

        // First page: a hard pull backwards stays put and settles to 0.
        c.drag_start();
        c.drag_update(150.0);
        assert_eq!(c.offset(), 150.0); // visible overscroll
        assert_eq!(c.drag_end(150.0), 0);
        finish_settle(&mut c);
        assert_eq!(c.offset(), 0.0);

        // Last page: same in the forward direction.
        c.select_page(2);
        finish_settle(&mut c);
        c.drag_start();
        assert_eq!(c.drag_end(-150.0), 2);
        finish_settle(&mut c);
        assert_eq!(c.offset(), -600.0);
    }

    #[test]
    fn release_advances_at_most_one_page() {
        // A drag spanning three page widths still only flips one page.
        let mut c = PagedSwipeController::new(3, 300.0);
        c.drag_start();
        c.drag_update(-900.0);
        assert_eq!(c.drag_end(-900.0), 1);
        finish_settle(&mut c);
        assert_eq!(c.offset(), -300.0);
    }

    #[test]
    fn live_offset_tracks_translation_exactly() {
        // No smoothing or clamping during the drag: offset is always
        // origin + translation, even far out of range.
        let mut c = PagedSwipeController::new(3, 300.0);
        c.select_page(1);
        finish_settle(&mut c);

        c.drag_start();
        for tx in [-10.0f32, -180.0, -455.0, 30.0, 620.0] {
            c.drag_update(tx);
            assert_eq!(c.offset(), -300.0 + tx);
        }
        assert!(c.is_dragging());
    }

    #[test]
    fn full_swipe_scenario() {
        // 3 pages, width 390. Drag -140 from page 0: past the ~130 cell
        // threshold, so release lands on page 1 with a settle toward -390.
        let mut c = PagedSwipeController::new(3, 390.0);

        c.drag_start();
        c.drag_update(-140.0);
        assert_eq!(c.offset(), -140.0);

        assert_eq!(c.drag_end(-140.0), 1);
        assert_eq!(c.current_page(), 1);
        assert!(c.is_settling());
        assert_eq!(c.settle_target(), Some(-390.0));

        finish_settle(&mut c);
        assert_eq!(c.offset(), -390.0);
        assert!(!c.is_settling());
    }

    #[test]
    fn update_without_start_falls_back_to_current_offset() {
        // Host gesture takeover can drop the press event; the next update
        // must not corrupt state.
        let mut c = PagedSwipeController::new(3, 300.0);
        c.select_page(1);
        finish_settle(&mut c);

        c.drag_update(-50.0);
        assert_eq!(c.offset(), -350.0);
        assert!(c.is_dragging());
        assert_eq!(c.drag_end(-50.0), 1); // below threshold, snaps back
        finish_settle(&mut c);
        assert_eq!(c.offset(), -300.0);
    }

    #[test]
    fn duplicate_drag_start_resnapshots() {
        let mut c = PagedSwipeController::new(3, 300.0);
        c.drag_start();
        c.drag_update(-120.0);
        // Second start without a release: the new origin is the live offset.
        c.drag_start();
        c.drag_update(-10.0);
        assert_eq!(c.offset(), -130.0);
    }

    #[test]
    fn drag_start_interrupts_settle() {
        let mut c = PagedSwipeController::new(3, 300.0);
        c.select_page(2);
        assert!(c.is_settling());

        // Grab mid-flight: the settle stops and the pointer owns the offset
        // from wherever it was.
        let grabbed_at = c.offset();
        c.drag_start();
        assert!(!c.is_settling());
        c.drag_update(25.0);
        assert_eq!(c.offset(), grabbed_at + 25.0);
    }

    #[test]
    fn resize_snaps_to_current_rest_position() {
        let mut c = PagedSwipeController::new(3, 300.0);
        c.select_page(2);
        finish_settle(&mut c);
        assert_eq!(c.offset(), -600.0);

        c.set_page_width(120.0);
        assert_eq!(c.current_page(), 2);
        assert_eq!(c.offset(), -240.0);
        assert!(!c.is_settling());
        assert_eq!(c.threshold(), 40.0);
    }

    #[test]
    fn zero_page_count_is_clamped() {
        let c = PagedSwipeController::new(0, 300.0);
        assert_eq!(c.page_count(), 1);
    }

    #[test]
    fn custom_tuning_changes_threshold() {
        let tuning = SwipeTuning {
            threshold_divisor: 2.0,
            ..SwipeTuning::default()
        };
        let mut c = PagedSwipeController::with_tuning(2, 300.0, tuning);
        // Divisor 2 -> threshold 150: a 120-cell pull no longer flips.
        c.drag_start();
        assert_eq!(c.drag_end(-120.0), 0);
        c.drag_start();
        assert_eq!(c.drag_end(-151.0), 1);
    }
}
