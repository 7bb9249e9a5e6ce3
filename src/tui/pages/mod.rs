// Deck pages - each renders into its own page-sized slice of the strip
//
// Page renderers draw into the offscreen strip buffer, not the frame, so
// they stay oblivious to swiping: the deck renderer windows the strip at the
// controller's offset. Keep them pure functions of (area, app).

mod calendar;
mod gallery;
mod journal;
mod overview;

use super::app::{App, PageKind};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

pub fn render_page(kind: PageKind, area: Rect, buf: &mut Buffer, app: &App) {
    match kind {
        PageKind::Overview => overview::render(area, buf, app),
        PageKind::Gallery => gallery::render(area, buf, app),
        PageKind::Calendar => calendar::render(area, buf, app),
        PageKind::Journal => journal::render(area, buf, app),
    }
}
