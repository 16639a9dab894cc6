//! Game logic and state management above the core grid types.
//!
//! This module provides the high-level logic that orchestrates the core
//! data structures into falling-block gameplay:
//!
//! - [`GameState`] - Pure gameplay state (board, falling piece, score)
//! - [`GameSession`] - A playable game: state machine plus gravity and
//!   slam timers, driven by a host scheduler
//! - [`PieceSource`] / [`GameSeed`] - Seeded uniform piece draws for
//!   reproducible runs
//! - [`classify_swipe`] - Pointer-gesture classification
//!
//! # Game Flow
//!
//! 1. Create a [`GameSession`] from a seed
//! 2. The host calls [`GameSession::update`] every tick with the elapsed
//!    time; gravity soft-drops the piece once per second
//! 3. Input events call the operation methods (move, rotate, drop, pause)
//! 4. A piece that cannot move down locks; full rows score 10 points each
//! 5. When a fresh piece has no room to spawn, the board wipes and the
//!    session enters game over; `Enter` starts the next round with the
//!    score carried over
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//!
//! use gridfall_engine::{GameSeed, GameSession};
//!
//! let seed: GameSeed = "0123456789abcdef0123456789abcdef".parse().unwrap();
//! let mut session = GameSession::new(seed);
//!
//! // One tick past the gravity interval drops the piece a row.
//! session.update(Duration::from_millis(1001));
//! assert_eq!(session.falling_piece().position().y, 1);
//!
//! session.move_left();
//! session.hard_drop();
//! assert_eq!(session.locked_pieces(), 1);
//! ```

pub use self::{game_session::*, game_state::*, gesture::*, piece_source::*};

mod game_session;
mod game_state;
mod gesture;
mod piece_source;
