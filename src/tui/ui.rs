// Shell layout - called on every frame
//
// Vertical stack: title, tab bar, the deck itself, status bar. The tab and
// deck rects are recorded on the App so mouse events can be routed without
// re-deriving the layout, and the deck width is fed to the controller here -
// one place that notices both the first draw and terminal resizes.

use super::app::App;
use super::components;
use super::deck;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(3), // tab bar
            Constraint::Min(5),    // deck
            Constraint::Length(3), // status
        ])
        .split(f.area());

    app.areas.tabs = chunks[1];
    app.areas.deck = chunks[2];

    // Viewport width is the page width. Updating through the controller
    // snaps the offset to the current page, which is exactly what a resize
    // should do; on steady frames the width matches and this is a no-op.
    let width = chunks[2].width as f32;
    if (app.controller.page_width() - width).abs() > 0.5 {
        app.controller.set_page_width(width);
    }

    components::title_bar::render(f, chunks[0], app);
    components::tab_bar::render(f, chunks[1], app);
    deck::render(f, chunks[2], app);
    components::status_bar::render(f, chunks[3], app);
}
