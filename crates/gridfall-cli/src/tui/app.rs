use std::time::Duration;

use crossterm::event::Event;
use ratatui::Frame;

use crate::tui::Tui;

/// Trait for TUI applications.
///
/// Applications executed by `Tui::run()` must implement this trait.
pub trait App {
    /// Initializes the application.
    ///
    /// Called once inside `Tui::run()` after the terminal is set up, so
    /// probed capabilities (key-release reporting) are already known.
    fn init(&mut self, tui: &Tui);

    /// Returns whether the application should exit.
    fn should_exit(&self) -> bool;

    /// Handles terminal events (key input, mouse, resize, etc.).
    fn handle_event(&mut self, event: &Event);

    /// Draws the screen (called on each `TuiEvent::Render`).
    fn draw(&self, frame: &mut Frame);

    /// Advances game time by `elapsed` (called on each `TuiEvent::Tick`).
    ///
    /// Returns whether state changed and the screen needs a redraw.
    /// Returning false while nothing moves keeps paused and finished
    /// games from re-rendering every tick.
    fn update(&mut self, elapsed: Duration) -> bool;
}
