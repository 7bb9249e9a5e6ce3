// Calendar page - month grid navigation
//
// Renders the Monday-first week grid with today highlighted. '[' and ']'
// (or the mouse wheel) step the cursor month, wrapping across years.

use crate::calendar::WEEKDAY_HEADERS;
use crate::tui::app::App;
use chrono::Datelike;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Cells per day column
const DAY_WIDTH: usize = 4;

pub fn render(area: Rect, buf: &mut Buffer, app: &App) {
    let outer = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border))
        .title(" Calendar ")
        .title_bottom(" [ prev · ] next ");
    let inner = outer.inner(area);
    outer.render(area, buf);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let grid = &app.calendar.grid;
    let today = app.calendar.today;
    let grid_width = DAY_WIDTH * 7;
    let left_pad = " ".repeat((inner.width as usize).saturating_sub(grid_width) / 2);

    let mut lines = vec![
        Line::from(Span::styled(
            format!("{}{:^width$}", left_pad, grid.title(), width = grid_width),
            Style::default()
                .fg(app.theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];

    // Weekday header row
    let mut header = vec![Span::raw(left_pad.clone())];
    for name in WEEKDAY_HEADERS {
        header.push(Span::styled(
            format!("{:>width$}", name, width = DAY_WIDTH),
            Style::default().fg(app.theme.dim),
        ));
    }
    lines.push(Line::from(header));

    let is_today_month = today.year() == grid.year && today.month() == grid.month;

    for week in &grid.weeks {
        let mut row = vec![Span::raw(left_pad.clone())];
        for slot in week {
            match slot {
                Some(day) => {
                    let style = if is_today_month && *day == today.day() {
                        Style::default()
                            .fg(app.theme.today)
                            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                    } else {
                        Style::default().fg(app.theme.text)
                    };
                    row.push(Span::styled(
                        format!("{:>width$}", day, width = DAY_WIDTH),
                        style,
                    ));
                }
                None => row.push(Span::raw(" ".repeat(DAY_WIDTH))),
            }
        }
        lines.push(Line::from(row));
    }

    Paragraph::new(lines).render(inner, buf);
}
