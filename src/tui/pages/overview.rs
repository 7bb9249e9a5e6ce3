// Overview page - the controller explaining itself
//
// Shows the live interaction state and the key bindings. Handy when tuning
// [motion] values: the threshold and settle target are printed as they are
// used.

use crate::tui::app::App;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub fn render(area: Rect, buf: &mut Buffer, app: &App) {
    let c = &app.controller;
    let dim = Style::default().fg(app.theme.dim);
    let text = Style::default().fg(app.theme.text);
    let accent = Style::default().fg(app.theme.accent);

    let value = |label: &str, v: String| {
        Line::from(vec![
            Span::styled(format!("  {:<12}", label), dim),
            Span::styled(v, text),
        ])
    };

    let phase = if c.is_dragging() {
        "dragging"
    } else if c.is_settling() {
        "settling"
    } else {
        "resting"
    };

    let mut lines = vec![
        Line::from(Span::styled(
            "  One controller, one offset, one rule set.",
            accent.add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        value("pages", format!("{}", c.page_count())),
        value(
            "page",
            format!(
                "{}/{} ({})",
                c.current_page() + 1,
                c.page_count(),
                app.tabs.caption(c.current_page(), false).unwrap_or("?")
            ),
        ),
        value("offset", format!("{:+.1} cells", c.offset())),
        value(
            "target",
            match c.settle_target() {
                Some(t) => format!("{:+.1} cells", t),
                None => "-".to_string(),
            },
        ),
        value(
            "threshold",
            format!("{:.0} cells (a third of the viewport)", c.threshold()),
        ),
        value("phase", phase.to_string()),
        value("theme", app.theme.name.clone()),
        Line::default(),
        Line::from(Span::styled(
            "  Drag horizontally with the mouse. Release past the threshold",
            dim,
        )),
        Line::from(Span::styled(
            "  to flip one page - exactly one, however far you pull - or",
            dim,
        )),
        Line::from(Span::styled(
            "  short of it to snap back. Edge pages overscroll and return.",
            dim,
        )),
        Line::default(),
    ];

    for hint in [
        "←/→ or Tab   switch pages",
        "1-4          jump to a page",
        "mouse click  select a tab",
        "?            show key help",
        "q            quit",
    ] {
        lines.push(Line::from(Span::styled(format!("  {}", hint), dim)));
    }

    Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border))
                .title(" Overview "),
        )
        .render(area, buf);
}
