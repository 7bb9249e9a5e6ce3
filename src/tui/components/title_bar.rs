// Title bar component
//
// One line: app name and version on the left, the active toast (or uptime
// when there is none) on the right.

use crate::config::VERSION;
use crate::tui::app::App;
use unicode_width::UnicodeWidthStr;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let left = format!(" pagedeck v{}", VERSION);

    let right = match &app.toast {
        Some(toast) => Span::styled(
            format!("{} ", toast.message),
            Style::default().fg(app.theme.warn),
        ),
        None => Span::styled(
            format!("{} ", app.uptime()),
            Style::default().fg(app.theme.dim),
        ),
    };

    // Pad the middle so the right span lands on the right edge
    let used = left.width() + right.content.as_ref().width();
    let pad = (area.width as usize).saturating_sub(used);

    let line = Line::from(vec![
        Span::styled(
            left,
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ".repeat(pad)),
        right,
    ]);

    f.render_widget(Paragraph::new(line), area);
}
