// Journal page - captured logs with a debounced filter
//
// Shows the in-memory log buffer, newest at the bottom. '/' edits the
// filter; matching re-runs once typing pauses (or immediately on Enter),
// not on every keystroke.

use crate::logging::LogLevel;
use crate::search;
use crate::tui::app::App;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub fn render(area: Rect, buf: &mut Buffer, app: &App) {
    let outer = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border))
        .title(" Journal ")
        .title_bottom(" / filter ");
    let inner = outer.inner(area);
    outer.render(area, buf);

    if inner.width == 0 || inner.height < 2 {
        return;
    }

    let entries = app.log_buffer.snapshot();
    let query = &app.journal.applied_query;
    let matched: Vec<_> = entries
        .iter()
        .filter(|e| search::matches(query, &e.display_line()))
        .collect();

    // Filter status line
    let status = if app.journal.editing {
        Line::from(vec![
            Span::styled("  /", Style::default().fg(app.theme.accent)),
            Span::styled(
                app.journal.query.clone(),
                Style::default()
                    .fg(app.theme.highlight)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("█", Style::default().fg(app.theme.accent)),
            Span::styled(
                if app.journal.debouncer.is_pending() {
                    "  (pausing applies the filter)"
                } else {
                    "  (Enter to apply, Esc to close)"
                },
                Style::default().fg(app.theme.dim),
            ),
        ])
    } else if query.trim().is_empty() {
        Line::from(Span::styled(
            format!("  {} entries · press / to filter", entries.len()),
            Style::default().fg(app.theme.dim),
        ))
    } else {
        Line::from(vec![
            Span::styled(
                format!("  filter \"{}\"", query),
                Style::default().fg(app.theme.accent),
            ),
            Span::styled(
                format!(" · {}/{} entries", matched.len(), entries.len()),
                Style::default().fg(app.theme.dim),
            ),
        ])
    };

    let mut lines = vec![status, Line::default()];

    // Tail of the matched entries that fits under the status line
    let budget = (inner.height as usize).saturating_sub(2);
    let start = matched.len().saturating_sub(budget);
    for entry in &matched[start..] {
        let style = match entry.level {
            LogLevel::Error | LogLevel::Warn => Style::default().fg(app.theme.warn),
            LogLevel::Info => Style::default().fg(app.theme.text),
            LogLevel::Debug | LogLevel::Trace => Style::default().fg(app.theme.dim),
        };
        lines.push(Line::from(Span::styled(
            format!(" {}", entry.display_line()),
            style,
        )));
    }

    Paragraph::new(lines).render(inner, buf);
}
