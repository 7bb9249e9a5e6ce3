// Deck renderer - the page strip and its horizontal window
//
// Pages are rendered side by side into an offscreen buffer the width of the
// whole strip, then the slice at -offset is blitted into the frame. That
// keeps every page renderer oblivious to swiping: each draws into its own
// page-sized rect, and partial pages during a drag or settle come out of the
// blit for free. Columns past either end of the strip (overscroll during a
// drag) are left as cleared background.

use super::app::App;
use super::pages;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Frame;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let page_width = area.width;
    let count = app.controller.page_count() as u16;
    let strip_area = Rect::new(0, 0, page_width.saturating_mul(count), area.height);
    let mut strip = Buffer::empty(strip_area);

    for (i, kind) in app.pages.iter().enumerate() {
        let page_area = Rect::new(page_width * i as u16, 0, page_width, area.height);
        pages::render_page(*kind, page_area, &mut strip, app);
    }

    // The window into the strip starts at -offset: offset 0 shows page 0,
    // offset -page_width shows page 1, and anything in between shows the
    // seam. Rounding to whole cells is the terminal's subpixel limit.
    let window_start = (-app.controller.offset()).round() as i32;

    let frame_buf = f.buffer_mut();
    for y in 0..area.height {
        for x in 0..area.width {
            let source_x = window_start + x as i32;
            if source_x < 0 || source_x >= strip_area.width as i32 {
                continue; // overscroll margin stays blank
            }
            let src = strip.cell((source_x as u16, y));
            let dst = frame_buf.cell_mut((area.x + x, area.y + y));
            if let (Some(src), Some(dst)) = (src, dst) {
                *dst = src.clone();
            }
        }
    }
}
