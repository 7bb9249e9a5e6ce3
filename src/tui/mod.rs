// TUI module - Terminal User Interface
//
// Terminal lifecycle and the event loop. The loop multiplexes two sources:
// - crossterm input (keys, mouse gestures, resize)
// - a frame tick that advances settle animations and debounces
//
// Mouse drags are adapted here into the controller's gesture protocol:
// press = drag_start, move = drag_update(column delta), release = drag_end.

pub mod app;
pub mod components;
pub mod deck;
pub mod layout;
pub mod pages;
pub mod ui;

use crate::config::Config;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::{App, PageKind};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal on
/// the way out - including on error, so a crash doesn't leave the shell in
/// raw mode.
pub async fn run_tui(config: Config, log_buffer: LogBuffer) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::with_config(&config, log_buffer);
    let result = run_event_loop(&mut terminal, &mut app, &config).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Redraws after every wakeup; tokio::select! means we only wake when input
/// arrives or the frame tick fires. The tick is what keeps a settle moving
/// when the user's hands are off the terminal.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    config: &Config,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(config.tick_ms));

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard, mouse, resize
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        Ok(Event::Resize(width, _)) => {
                            tracing::debug!(width, "terminal resized");
                            // The draw pass picks up the new deck width and
                            // snaps the controller to the current page.
                        }
                        _ => {}
                    }
                }
            } => {}

            // Frame tick: settle animation, journal debounce, toast expiry
            _ = tick_interval.tick() => {
                app.tick();
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: journal edit mode captures everything, then global
/// keys, then page-specific keys.
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    // Layer 1: journal edit mode owns the keyboard while active
    if app.journal.editing {
        handle_journal_editing(app, &key_event);
        return;
    }

    // Layer 2: global keys
    match key_event.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
            return;
        }
        KeyCode::Left => {
            app.select_prev_page();
            return;
        }
        KeyCode::Right => {
            app.select_next_page();
            return;
        }
        KeyCode::Tab => {
            app.cycle_page();
            return;
        }
        KeyCode::Char(c @ '1'..='9') => {
            // Number keys map directly to page indices
            app.select_page(c as usize - '1' as usize);
            return;
        }
        KeyCode::Char('?') => {
            app.show_toast("drag or ←/→/Tab/1-4 to switch · [ ] months · r reshuffle · / filter · q quit");
            return;
        }
        _ => {}
    }

    // Layer 3: keys scoped to the page under the cursor
    match app.current_page_kind() {
        PageKind::Calendar => match key_event.code {
            KeyCode::Char('[') => app.calendar.prev_month(),
            KeyCode::Char(']') => app.calendar.next_month(),
            _ => {}
        },
        PageKind::Gallery => {
            if key_event.code == KeyCode::Char('r') {
                app.gallery.reshuffle();
                app.show_toast("gallery reshuffled");
            }
        }
        PageKind::Journal => {
            if key_event.code == KeyCode::Char('/') {
                app.journal_start_editing();
            }
        }
        PageKind::Overview => {}
    }
}

/// Keystrokes while the journal filter is being edited
fn handle_journal_editing(app: &mut App, key_event: &KeyEvent) {
    match key_event.code {
        KeyCode::Esc | KeyCode::Enter => app.journal_stop_editing(),
        KeyCode::Backspace => app.journal_backspace(),
        KeyCode::Char(c) if !key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            app.journal_push(c);
        }
        _ => {}
    }
}

/// Handle mouse input - the gesture source for the swipe controller
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    match mouse_event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            app.on_mouse_down(mouse_event.column, mouse_event.row);
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            app.on_mouse_drag(mouse_event.column);
        }
        MouseEventKind::Up(MouseButton::Left) => {
            app.on_mouse_up(mouse_event.column);
        }
        // Wheel steps the calendar when that page is showing
        MouseEventKind::ScrollUp if app.current_page_kind() == PageKind::Calendar => {
            app.calendar.prev_month();
        }
        MouseEventKind::ScrollDown if app.current_page_kind() == PageKind::Calendar => {
            app.calendar.next_month();
        }
        _ => {}
    }
}
