// Gallery page - masonry balancer demonstration
//
// Cards of varying heights flow into however many columns the viewport
// affords, shortest column first. Press 'r' to reshuffle the extents and
// watch the balance change.

use crate::layout::masonry::{self, MasonrySlot};
use crate::tui::app::App;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Widget},
};

/// Minimum cells a column needs before another is added
const MIN_COLUMN_WIDTH: u16 = 22;
const MAX_COLUMNS: usize = 4;
/// Rows between stacked cards
const GAP: u16 = 1;

pub fn render(area: Rect, buf: &mut Buffer, app: &App) {
    // Column count depends on the inner width, and the title depends on the
    // column count, so the layout is balanced before the block is built.
    let inner_width = area.width.saturating_sub(2);
    let columns = masonry::column_count_for_width(inner_width, MIN_COLUMN_WIDTH, MAX_COLUMNS);
    let layout = masonry::balance(&app.gallery.extents, columns, GAP);

    let outer = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border))
        .title(format!(
            " Gallery · {} cards · {} col ",
            layout.len(),
            columns
        ))
        .title_bottom(if layout.max_height() > area.height.saturating_sub(2) {
            " r reshuffle · clipped "
        } else {
            " r reshuffle "
        });
    let inner = outer.inner(area);
    outer.render(area, buf);

    if inner.width == 0 || inner.height == 0 || layout.is_empty() {
        return;
    }

    let column_width = inner.width / columns as u16;

    for (col, column) in layout.columns.iter().enumerate() {
        let x = inner.x + col as u16 * column_width;
        for slot in &column.slots {
            render_card(*slot, x, column_width, inner, buf, app);
        }
    }
}

/// One card, clipped to the viewport bottom. Anything shorter than a border
/// pair after clipping is dropped rather than drawn mangled.
fn render_card(slot: MasonrySlot, x: u16, column_width: u16, inner: Rect, buf: &mut Buffer, app: &App) {
    if slot.y >= inner.height {
        return;
    }
    let height = slot.height.min(inner.height - slot.y);
    if height < 2 || column_width < 4 {
        return;
    }

    let card_area = Rect::new(
        x,
        inner.y + slot.y,
        column_width.saturating_sub(1), // one-cell gutter between columns
        height,
    );

    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.card))
        .title(format!(" #{} · {}r ", slot.index, slot.height))
        .render(card_area, buf);
}
