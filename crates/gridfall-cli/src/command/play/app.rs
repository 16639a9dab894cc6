use std::time::Duration;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use gridfall_engine::{GameSession, SessionState, SwipeAction, classify_swipe};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Style},
    text::Text,
};

use crate::{
    tui::{App, Tui},
    ui::widgets::SessionDisplay,
};

#[derive(Debug)]
pub(crate) struct PlayApp {
    session: GameSession,
    show_shadow: bool,
    /// Cell where the left mouse button went down, awaiting its release.
    touch_origin: Option<(u16, u16)>,
    /// Whether the terminal reports key releases. Without them the down
    /// key degrades to plain per-press soft drops; a slam that cannot be
    /// cancelled must never be armed.
    slam_enabled: bool,
    is_exiting: bool,
}

impl PlayApp {
    pub(crate) fn new(session: GameSession, show_shadow: bool) -> Self {
        Self {
            session,
            show_shadow,
            touch_origin: None,
            slam_enabled: false,
            is_exiting: false,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            if key.code == KeyCode::Down {
                self.session.release_soft_drop();
            }
            return;
        }

        let is_playing = self.session.session_state().is_playing();
        let is_paused = self.session.session_state().is_paused();
        let is_game_over = self.session.session_state().is_game_over();

        match key.code {
            KeyCode::Left if is_playing => self.session.move_left(),
            KeyCode::Right if is_playing => self.session.move_right(),
            KeyCode::Down if is_playing => {
                if self.slam_enabled && key.kind == KeyEventKind::Press {
                    self.session.press_soft_drop();
                } else {
                    // key repeat, or a terminal without release events
                    _ = self.session.soft_drop();
                }
            }
            KeyCode::Char('z') if is_playing => self.session.rotate_left(),
            KeyCode::Char('x') if is_playing => self.session.rotate_right(),
            KeyCode::Char('p') if is_playing || is_paused => self.session.toggle_pause(),
            KeyCode::Enter if is_game_over => self.session.restart(),
            KeyCode::Char('q') => self.is_exiting = true,
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if !self.session.session_state().is_playing() {
            self.touch_origin = None;
            return;
        }
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.touch_origin = Some((mouse.column, mouse.row));
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some((x, y)) = self.touch_origin.take() {
                    let dx = i32::from(mouse.column) - i32::from(x);
                    let dy = i32::from(mouse.row) - i32::from(y);
                    match classify_swipe(dx, dy) {
                        SwipeAction::MoveLeft => self.session.move_left(),
                        SwipeAction::MoveRight => self.session.move_right(),
                        SwipeAction::HardDrop => self.session.hard_drop(),
                        SwipeAction::RotateClockwise => self.session.rotate_right(),
                    }
                }
            }
            _ => {}
        }
    }
}

impl App for PlayApp {
    fn init(&mut self, tui: &Tui) {
        self.slam_enabled = tui.supports_key_release();
    }

    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, event: &Event) {
        if let Some(key) = event.as_key_event() {
            self.handle_key(key);
        } else if let Some(mouse) = event.as_mouse_event() {
            self.handle_mouse(mouse);
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let session_display = SessionDisplay::new(&self.session, self.show_shadow);
        let help_text = match self.session.session_state() {
            SessionState::Playing => {
                "Controls: ← → (Move) | ↓ (Drop, hold to slam) | Z X (Rotate) | Drag (Swipe) | P (Pause) | Q (Quit)"
            }
            SessionState::Paused => "Controls: P (Resume) | Q (Quit)",
            SessionState::GameOver => "Controls: Enter (Next Round) | Q (Quit)",
        };
        let help_text = Text::from(help_text)
            .style(Style::default().fg(Color::DarkGray))
            .centered();

        let [main_area, help_area] = Layout::vertical([
            Constraint::Length(session_display.height()),
            Constraint::Length(1),
        ])
        .areas::<2>(frame.area());
        frame.render_widget(session_display, main_area);
        frame.render_widget(help_text, help_area);
    }

    fn update(&mut self, elapsed: Duration) -> bool {
        if !self.session.session_state().is_playing() {
            return false;
        }
        self.session.update(elapsed);
        true
    }
}
