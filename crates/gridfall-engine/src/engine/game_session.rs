use std::time::Duration;

use crate::core::{board::Board, matrix::Spin, piece::Piece};

use super::{
    game_state::{GameState, SoftDropOutcome},
    piece_source::GameSeed,
};

/// Time the gravity accumulator must exceed before the piece falls a row.
pub const DROP_INTERVAL: Duration = Duration::from_millis(1000);

/// How long the down key must stay held before the piece slams to the
/// floor.
pub const SLAM_ARM_DELAY: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionState {
    Playing,
    Paused,
    GameOver,
}

/// A playable game: gameplay state plus the loop's timers.
///
/// The host scheduler calls [`update`](Self::update) once per tick with
/// the elapsed wall time and routes input to the operation methods. All
/// timing lives here; [`GameState`] stays time-free.
#[derive(Debug, Clone)]
pub struct GameSession {
    state: GameState,
    session_state: SessionState,
    seed: GameSeed,
    /// Gravity accumulator. Reset on a successful drop, deliberately not
    /// on a locking one, so a lock with a brimming accumulator makes the
    /// fresh piece take its first step on the very next tick.
    drop_timer: Duration,
    /// Remaining arm delay of a held down key. `None` when disarmed.
    slam_timer: Option<Duration>,
    play_time: Duration,
}

impl GameSession {
    #[must_use]
    pub fn new(seed: GameSeed) -> Self {
        Self::with_board_size(seed, Board::DEFAULT_WIDTH, Board::DEFAULT_HEIGHT)
    }

    /// # Panics
    ///
    /// Panics when either dimension is smaller than 4 (see [`Board::new`]).
    #[must_use]
    pub fn with_board_size(seed: GameSeed, width: u8, height: u8) -> Self {
        Self {
            state: GameState::with_board_size(seed, width, height),
            session_state: SessionState::Playing,
            seed,
            drop_timer: Duration::ZERO,
            slam_timer: None,
            play_time: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn session_state(&self) -> &SessionState {
        &self.session_state
    }

    /// The seed this session was created from, for reproducing the run.
    #[must_use]
    pub fn seed(&self) -> GameSeed {
        self.seed
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    #[must_use]
    pub fn falling_piece(&self) -> &Piece {
        self.state.falling_piece()
    }

    #[must_use]
    pub fn ghost_piece(&self) -> Piece {
        self.state.ghost_piece()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.state.score()
    }

    #[must_use]
    pub fn cleared_rows(&self) -> u32 {
        self.state.cleared_rows()
    }

    #[must_use]
    pub fn locked_pieces(&self) -> u32 {
        self.state.locked_pieces()
    }

    /// Wall time spent playing. Paused time is not counted.
    #[must_use]
    pub fn play_time(&self) -> Duration {
        self.play_time
    }

    /// Advances the timers by `elapsed` and applies gravity. Does nothing
    /// unless the session is playing, so paused or finished wall time
    /// never reaches the accumulators.
    pub fn update(&mut self, elapsed: Duration) {
        if !self.session_state.is_playing() {
            return;
        }
        self.play_time += elapsed;

        if let Some(remaining) = self.slam_timer {
            if elapsed >= remaining {
                // the down key survived the arm delay
                self.slam_timer = None;
                self.hard_drop();
                if !self.session_state.is_playing() {
                    return;
                }
            } else {
                self.slam_timer = Some(remaining - elapsed);
            }
        }

        self.drop_timer += elapsed;
        if self.drop_timer > DROP_INTERVAL {
            self.soft_drop();
        }
    }

    /// One step down, by gravity or input. Returns true when the piece
    /// moved; a locking step returns false.
    pub fn soft_drop(&mut self) -> bool {
        match self.state.soft_drop() {
            SoftDropOutcome::Moved => {
                self.drop_timer = Duration::ZERO;
                true
            }
            SoftDropOutcome::Locked(outcome) => {
                if outcome.topped_out {
                    self.session_state = SessionState::GameOver;
                    // a pending slam must not fire into the next round
                    self.slam_timer = None;
                }
                false
            }
        }
    }

    /// Down-press half of the hard-drop protocol: one soft drop, and when
    /// the piece actually moved, arm the slam delay. A press that locks
    /// has nothing left to slam and does not arm.
    pub fn press_soft_drop(&mut self) {
        if self.soft_drop() {
            self.slam_timer = Some(SLAM_ARM_DELAY);
        }
    }

    /// Down-release half of the hard-drop protocol: cancel a pending slam.
    pub fn release_soft_drop(&mut self) {
        self.slam_timer = None;
    }

    /// Drops the piece straight down until it locks.
    pub fn hard_drop(&mut self) {
        while self.soft_drop() {}
    }

    pub fn move_left(&mut self) {
        self.state.move_left();
    }

    pub fn move_right(&mut self) {
        self.state.move_right();
    }

    pub fn rotate_left(&mut self) {
        self.state.rotate_piece(Spin::CounterClockwise);
    }

    pub fn rotate_right(&mut self) {
        self.state.rotate_piece(Spin::Clockwise);
    }

    pub fn toggle_pause(&mut self) {
        self.session_state = match self.session_state {
            SessionState::Playing => SessionState::Paused,
            SessionState::Paused => SessionState::Playing,
            SessionState::GameOver => SessionState::GameOver, // no change from game over
        };
    }

    /// Starts the next round after a top-out. The board was already wiped
    /// when the spawn failed; the piece spawned at that moment resumes
    /// falling and the score carries over.
    pub fn restart(&mut self) {
        if self.session_state.is_game_over() {
            self.session_state = SessionState::Playing;
        }
    }
}
