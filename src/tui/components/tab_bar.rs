// Tab bar component
//
// Renders the tab strip with a `▶` marker on the active caption and records
// each caption's cell range on the App so mouse clicks can be resolved back
// to a page index. The highlight follows `controller.current_page()`, which
// changes the moment a release or tap decides the page - the slide is still
// catching up while the marker has already moved.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Marker plus the space after it, in cells
const MARKER_WIDTH: u16 = 2;

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.tabs.is_empty() {
        return;
    }

    let bp = Breakpoint::from_width(area.width);
    let compact = bp.is_compact();
    let gap: u16 = if compact { 2 } else { 4 };
    let active = app.controller.current_page();

    let mut spans: Vec<Span<'static>> = vec![Span::raw(" ")];
    let mut hits = Vec::with_capacity(app.tabs.len());
    let mut cursor = inner.x + 1;

    for (index, item) in app.tabs.iter().enumerate() {
        let caption = item.caption(compact).to_string();
        let caption_width = item.caption_width(compact);

        // The hit range covers the marker slot and the caption
        hits.push((cursor..cursor + MARKER_WIDTH + caption_width, index));

        if index == active {
            spans.push(Span::styled(
                "▶ ",
                Style::default()
                    .fg(app.theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                caption,
                Style::default()
                    .fg(app.theme.highlight)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled("  ", Style::default().fg(app.theme.dim)));
            spans.push(Span::styled(caption, Style::default().fg(app.theme.dim)));
        }
        cursor += MARKER_WIDTH + caption_width;

        if index + 1 < app.tabs.len() {
            spans.push(Span::raw(" ".repeat(gap as usize)));
            cursor += gap;
        }
    }

    app.tab_hits = hits;
    f.render_widget(Paragraph::new(Line::from(spans)), inner);
}
