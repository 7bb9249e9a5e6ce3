// Status bar component
//
// Live interaction state at the bottom: page position, the exact offset,
// where the settle is headed, and which phase the controller is in. This is
// the line that makes the optimistic index update visible - the page number
// flips at release while the offset is still travelling.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let c = &app.controller;
    let bp = Breakpoint::from_width(area.width);

    let phase = if c.is_dragging() {
        "dragging"
    } else if c.is_settling() {
        "settling"
    } else {
        "resting"
    };

    let caption = app
        .tabs
        .caption(c.current_page(), bp.is_compact())
        .unwrap_or("?");

    let status_text = if bp.is_compact() {
        format!(
            " {}/{} {} │ {:+.0} │ {}",
            c.current_page() + 1,
            c.page_count(),
            caption,
            c.offset(),
            phase,
        )
    } else {
        let target = match c.settle_target() {
            Some(t) => format!(" → {:+.0}", t),
            None => String::new(),
        };
        format!(
            " page {}/{} ({}) │ offset {:+.1}{} │ threshold {:.0} │ {}",
            c.current_page() + 1,
            c.page_count(),
            caption,
            c.offset(),
            target,
            c.threshold(),
            phase,
        )
    };

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(app.theme.status_bar))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border)),
        );

    f.render_widget(status, area);
}
