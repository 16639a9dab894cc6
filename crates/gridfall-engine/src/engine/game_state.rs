use crate::{
    PieceObstructedError, TopOutError,
    core::{
        board::Board,
        matrix::Spin,
        piece::Piece,
    },
};

use super::piece_source::{GameSeed, PieceSource};

/// Points awarded per swept row.
const SCORE_PER_ROW: u32 = 10;

/// Result of one [`GameState::soft_drop`] step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SoftDropOutcome {
    /// The piece moved down one row.
    Moved,
    /// The step collided: the piece locked at its previous position and a
    /// fresh piece spawned.
    Locked(LockOutcome),
}

/// What a locking step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockOutcome {
    /// Rows removed by the sweep.
    pub cleared_rows: u8,
    /// True when the fresh piece had no room to spawn. The board has been
    /// wiped; the session observing this ends the round.
    pub topped_out: bool,
}

/// Pure gameplay state: board, falling piece, piece source, and score.
///
/// Time lives elsewhere; see
/// [`GameSession`](crate::engine::game_session::GameSession).
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    falling_piece: Piece,
    piece_source: PieceSource,
    score: u32,
    cleared_rows: u32,
    locked_pieces: u32,
}

impl GameState {
    #[must_use]
    pub fn new(seed: GameSeed) -> Self {
        Self::with_board_size(seed, Board::DEFAULT_WIDTH, Board::DEFAULT_HEIGHT)
    }

    /// # Panics
    ///
    /// Panics when either dimension is smaller than 4 (see [`Board::new`]).
    #[must_use]
    pub fn with_board_size(seed: GameSeed, width: u8, height: u8) -> Self {
        let board = Board::new(width, height);
        let mut piece_source = PieceSource::new(seed);
        let falling_piece = Piece::spawn(piece_source.draw(), board.width());
        Self {
            board,
            falling_piece,
            piece_source,
            score: 0,
            cleared_rows: 0,
            locked_pieces: 0,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn falling_piece(&self) -> &Piece {
        &self.falling_piece
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn cleared_rows(&self) -> u32 {
        self.cleared_rows
    }

    #[must_use]
    pub fn locked_pieces(&self) -> u32 {
        self.locked_pieces
    }

    /// Replaces the falling piece, refusing positions that collide.
    pub fn set_falling_piece(&mut self, piece: Piece) -> Result<(), PieceObstructedError> {
        if self.board.collides(&piece) {
            return Err(PieceObstructedError);
        }
        self.falling_piece = piece;
        Ok(())
    }

    /// Shifts the falling piece one column left; stays put when the shift
    /// would collide.
    pub fn move_left(&mut self) {
        self.try_shift(-1);
    }

    /// Shifts the falling piece one column right; stays put when the shift
    /// would collide.
    pub fn move_right(&mut self) {
        self.try_shift(1);
    }

    fn try_shift(&mut self, dx: i32) {
        self.falling_piece.shift(dx, 0);
        if self.board.collides(&self.falling_piece) {
            self.falling_piece.shift(-dx, 0);
        }
    }

    /// Rotates the falling piece, kicking off walls when needed.
    ///
    /// Kick offsets oscillate around the original column with growing
    /// magnitude (net displacement +1, -1, +2, -2, ...). Once the
    /// magnitude would exceed the shape grid's width the rotation rolls
    /// back completely: original orientation, original position.
    pub fn rotate_piece(&mut self, spin: Spin) {
        let original = self.falling_piece.position();
        self.falling_piece.rotate(spin);
        let mut offset = 1;
        while self.board.collides(&self.falling_piece) {
            self.falling_piece.shift(offset, 0);
            offset = -(offset + offset.signum());
            if offset.abs() > i32::from(self.falling_piece.width()) {
                self.falling_piece.rotate(spin.reversed());
                self.falling_piece.set_position(original);
                return;
            }
        }
    }

    /// Advances the falling piece one row.
    ///
    /// A colliding step locks instead: the piece merges where it stood,
    /// full rows are swept for [`SCORE_PER_ROW`] points each, and a fresh
    /// piece spawns. A blocked spawn is reported through
    /// [`LockOutcome::topped_out`].
    pub fn soft_drop(&mut self) -> SoftDropOutcome {
        self.falling_piece.shift(0, 1);
        if !self.board.collides(&self.falling_piece) {
            return SoftDropOutcome::Moved;
        }
        self.falling_piece.shift(0, -1);

        self.board.merge(&self.falling_piece);
        let cleared_rows = self.board.sweep();
        self.score += u32::from(cleared_rows) * SCORE_PER_ROW;
        self.cleared_rows += u32::from(cleared_rows);
        self.locked_pieces += 1;

        let topped_out = self.spawn_piece().is_err();
        SoftDropOutcome::Locked(LockOutcome {
            cleared_rows,
            topped_out,
        })
    }

    /// Replaces the falling piece with a fresh draw at the spawn position.
    ///
    /// When the spawn position is blocked the whole board wipes and
    /// [`TopOutError`] is returned; score and counters carry over to the
    /// next round.
    pub fn spawn_piece(&mut self) -> Result<(), TopOutError> {
        self.falling_piece = Piece::spawn(self.piece_source.draw(), self.board.width());
        if self.board.collides(&self.falling_piece) {
            self.board.clear();
            return Err(TopOutError);
        }
        Ok(())
    }

    /// The falling piece advanced to where it would land: the lowest
    /// non-colliding row for its current column and orientation. Rendered
    /// as the drop shadow.
    #[must_use]
    pub fn ghost_piece(&self) -> Piece {
        let mut ghost = self.falling_piece.clone();
        loop {
            ghost.shift(0, 1);
            if self.board.collides(&ghost) {
                ghost.shift(0, -1);
                return ghost;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        matrix::Cell,
        piece::{PieceKind, Position},
    };

    fn seed() -> GameSeed {
        "0123456789abcdef0123456789abcdef".parse().unwrap()
    }

    fn state_with(board: Board, kind: PieceKind) -> GameState {
        let falling_piece = Piece::spawn(kind, board.width());
        GameState {
            board,
            falling_piece,
            piece_source: PieceSource::new(seed()),
            score: 0,
            cleared_rows: 0,
            locked_pieces: 0,
        }
    }

    #[test]
    fn the_first_piece_spawns_centered_at_the_top() {
        let state = GameState::new(seed());
        let piece = state.falling_piece();
        let expected_x =
            i32::from(Board::DEFAULT_WIDTH) / 2 - i32::from(piece.width()) / 2;
        assert_eq!(piece.position(), Position { x: expected_x, y: 0 });
    }

    #[test]
    fn t_piece_soft_drops_seventeen_times_then_locks_on_the_floor() {
        let mut state = state_with(Board::new(12, 20), PieceKind::T);
        for step in 1..=17 {
            assert_eq!(state.soft_drop(), SoftDropOutcome::Moved, "step {step}");
        }
        assert_eq!(
            state.soft_drop(),
            SoftDropOutcome::Locked(LockOutcome {
                cleared_rows: 0,
                topped_out: false,
            })
        );
        // locked at y = 17: the stem row lands on 18, the tip on 19
        assert_eq!(state.board().cell(5, 18), Some(Cell::Piece(PieceKind::T)));
        assert_eq!(state.board().cell(6, 18), Some(Cell::Piece(PieceKind::T)));
        assert_eq!(state.board().cell(7, 18), Some(Cell::Piece(PieceKind::T)));
        assert_eq!(state.board().cell(6, 19), Some(Cell::Piece(PieceKind::T)));
        assert_eq!(state.locked_pieces(), 1);
        assert_eq!(state.falling_piece().position().y, 0);
    }

    #[test]
    fn completing_a_row_scores_ten_points() {
        let mut rows = vec!["............"; 19];
        rows.push("11111.111111");
        // the vertical I spawns at x = 4, its column lands on board column 5
        let mut state = state_with(Board::from_ascii(&rows), PieceKind::I);
        while state.soft_drop().is_moved() {}
        assert_eq!(state.score(), 10);
        assert_eq!(state.cleared_rows(), 1);
        // the swept stack slid down one row, leaving the I's remainder
        assert_eq!(state.board().cell(5, 19), Some(Cell::Piece(PieceKind::I)));
        assert_eq!(state.board().cell(0, 19), Some(Cell::Empty));
    }

    #[test]
    fn four_simultaneous_rows_score_forty_points() {
        let mut rows = vec!["............"; 16];
        rows.extend(["11111.111111"; 4]);
        let mut state = state_with(Board::from_ascii(&rows), PieceKind::I);
        while state.soft_drop().is_moved() {}
        assert_eq!(state.score(), 40);
        assert_eq!(state.cleared_rows(), 4);
        assert_eq!(state.board(), &Board::new(12, 20));
    }

    #[test]
    fn blocked_spawn_wipes_the_board_and_keeps_the_score() {
        // every kind's spawn footprint overlaps rows 0-3
        let mut rows = vec!["111111111111"; 4];
        rows.extend(vec!["............"; 16]);
        let mut state = state_with(Board::from_ascii(&rows), PieceKind::T);
        state.score = 30;
        state.cleared_rows = 3;
        state.locked_pieces = 9;

        assert!(state.spawn_piece().is_err());
        assert_eq!(state.board(), &Board::new(12, 20));
        assert_eq!(state.score(), 30);
        assert_eq!(state.cleared_rows(), 3);
        assert_eq!(state.locked_pieces(), 9);
    }

    #[test]
    fn moves_stop_at_the_walls() {
        let mut state = state_with(Board::new(12, 20), PieceKind::T);
        for _ in 0..20 {
            state.move_left();
        }
        assert_eq!(state.falling_piece().position().x, 0);
        for _ in 0..20 {
            state.move_right();
        }
        assert_eq!(state.falling_piece().position().x, 9);
    }

    #[test]
    fn moves_stop_at_locked_cells() {
        let mut rows = vec![".4.........."];
        rows.extend(vec!["............"; 19]);
        let mut state = state_with(Board::from_ascii(&rows), PieceKind::O);
        // O spawns at x = 5; a wall of one cell at (1, 0) stops it at x = 2
        for _ in 0..20 {
            state.move_left();
        }
        assert_eq!(state.falling_piece().position().x, 2);
    }

    #[test]
    fn empty_leading_columns_may_cross_the_wall() {
        let mut state = state_with(Board::new(12, 20), PieceKind::L);
        // L occupies local columns 1-2, so x = -1 is still legal
        for _ in 0..20 {
            state.move_left();
        }
        assert_eq!(state.falling_piece().position().x, -1);
    }

    #[test]
    fn rotation_kicks_off_the_left_wall() {
        let mut state = state_with(Board::new(12, 20), PieceKind::I);
        state.falling_piece.set_position(Position { x: -1, y: 0 });

        state.rotate_piece(Spin::Clockwise);
        // one +1 kick puts the whole row on the board
        assert_eq!(state.falling_piece().position(), Position { x: 0, y: 0 });
        let cells: Vec<_> = state.falling_piece().board_cells().collect();
        assert_eq!(
            cells,
            [
                (0, 1, PieceKind::I),
                (1, 1, PieceKind::I),
                (2, 1, PieceKind::I),
                (3, 1, PieceKind::I),
            ]
        );
    }

    #[test]
    fn impossible_rotation_rolls_back_orientation_and_position() {
        // every cell filled except the T's exact spawn footprint
        let mut rows = vec!["111111111111"; 20];
        rows[1] = "11111...1111";
        rows[2] = "111111.11111";
        let mut state = state_with(Board::from_ascii(&rows), PieceKind::T);
        let before = state.falling_piece().clone();

        state.rotate_piece(Spin::Clockwise);
        assert_eq!(state.falling_piece(), &before);
    }

    #[test]
    fn ghost_piece_reports_the_landing_position() {
        let state = state_with(Board::new(12, 20), PieceKind::T);
        assert_eq!(state.ghost_piece().position(), Position { x: 5, y: 17 });
        assert_eq!(state.falling_piece().position().y, 0);

        let mut rows = vec!["............"; 18];
        rows.extend(["111111111111"; 2]);
        let state = state_with(Board::from_ascii(&rows), PieceKind::T);
        assert_eq!(state.ghost_piece().position(), Position { x: 5, y: 15 });
    }

    #[test]
    fn set_falling_piece_refuses_an_obstructed_position() {
        let mut rows = vec!["............"; 19];
        rows.push("111111111111");
        let mut state = state_with(Board::from_ascii(&rows), PieceKind::T);

        let mut blocked = state.falling_piece().clone();
        blocked.set_position(Position { x: 5, y: 18 });
        assert!(state.set_falling_piece(blocked).is_err());
        assert_eq!(state.falling_piece().position().y, 0);

        let mut legal = state.falling_piece().clone();
        legal.set_position(Position { x: 5, y: 16 });
        assert!(state.set_falling_piece(legal.clone()).is_ok());
        assert_eq!(state.falling_piece(), &legal);
    }
}
