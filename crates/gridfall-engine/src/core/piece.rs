use rand::{Rng, distr::StandardUniform, prelude::Distribution};

use super::matrix::{Cell, Matrix, Spin};

/// A falling piece (tetromino): a kind, a mutable copy of its shape grid,
/// and a position on the board.
///
/// Rotation rewrites the grid copy in place, so two pieces of the same kind
/// can be in different orientations. Movement and rotation here are
/// unchecked; collision rules live on
/// [`Board`](crate::core::board::Board) and
/// [`GameState`](crate::engine::game_state::GameState).
///
/// # Coordinate System
///
/// - The position is the board-space offset of the shape grid's top-left
///   corner
/// - X increases rightward (columns), Y increases downward (rows)
/// - Both axes are signed: a shape whose leading column is empty may sit
///   at a negative x while every occupied cell stays on the board
///
/// # Example
///
/// ```
/// use gridfall_engine::{Piece, PieceKind, Spin};
///
/// let mut piece = Piece::spawn(PieceKind::T, 12);
/// assert_eq!((piece.position().x, piece.position().y), (5, 0));
/// piece.shift(-1, 0);
/// piece.rotate(Spin::Clockwise);
/// assert_eq!(piece.position().x, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    grid: Matrix,
    position: Position,
}

impl Piece {
    /// Creates a piece of `kind` at the spawn position for a board of the
    /// given width: y = 0, x centered with flooring division
    /// (`board_width / 2 - shape_width / 2`).
    #[must_use]
    pub fn spawn(kind: PieceKind, board_width: u8) -> Self {
        let grid = kind.shape();
        let x = i32::from(board_width) / 2 - i32::from(grid.width()) / 2;
        Self {
            kind,
            grid,
            position: Position { x, y: 0 },
        }
    }

    #[must_use]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[must_use]
    pub fn grid(&self) -> &Matrix {
        &self.grid
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    /// Width of the shape's bounding grid (the kick budget).
    #[must_use]
    pub fn width(&self) -> u8 {
        self.grid.width()
    }

    /// Moves the piece by a board-space delta.
    pub fn shift(&mut self, dx: i32, dy: i32) {
        self.position.x += dx;
        self.position.y += dy;
    }

    /// Rotates the shape copy in place. The position is unaffected.
    pub fn rotate(&mut self, spin: Spin) {
        self.grid.rotate(spin);
    }

    /// Iterates the occupied cells in board coordinates.
    pub fn board_cells(&self) -> impl Iterator<Item = (i32, i32, PieceKind)> + '_ {
        let Position { x, y } = self.position;
        self.grid
            .occupied()
            .map(move |(cx, cy, kind)| (x + i32::from(cx), y + i32::from(cy), kind))
    }
}

/// Board-space offset of a piece's shape grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

/// Enum representing the kind of piece.
///
/// Discriminants are the classic cell values 1-7, which double as palette
/// indices for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    /// T-piece (purple).
    T = 1,
    /// O-piece (yellow).
    O = 2,
    /// L-piece (orange).
    L = 3,
    /// J-piece (blue).
    J = 4,
    /// I-piece (aqua).
    I = 5,
    /// S-piece (green).
    S = 6,
    /// Z-piece (red).
    Z = 7,
}

/// Uniform independent draw over the seven kinds. There is deliberately no
/// bag fairness; droughts and repeats happen.
impl Distribution<PieceKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceKind {
        match rng.random_range(0..=6) {
            0 => PieceKind::T,
            1 => PieceKind::O,
            2 => PieceKind::L,
            3 => PieceKind::J,
            4 => PieceKind::I,
            5 => PieceKind::S,
            _ => PieceKind::Z,
        }
    }
}

impl PieceKind {
    /// Number of piece kinds (7).
    pub const LEN: usize = 7;

    /// The 1-7 cell value / color id for this kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridfall_engine::PieceKind;
    ///
    /// assert_eq!(PieceKind::T.palette_index(), 1);
    /// assert_eq!(PieceKind::Z.palette_index(), 7);
    /// ```
    #[must_use]
    pub const fn palette_index(self) -> u8 {
        self as u8
    }

    /// Parses a piece kind from its 1-7 cell value.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridfall_engine::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_palette_index(1), Some(PieceKind::T));
    /// assert_eq!(PieceKind::from_palette_index(0), None);
    /// ```
    #[must_use]
    pub const fn from_palette_index(value: u8) -> Option<Self> {
        match value {
            1 => Some(PieceKind::T),
            2 => Some(PieceKind::O),
            3 => Some(PieceKind::L),
            4 => Some(PieceKind::J),
            5 => Some(PieceKind::I),
            6 => Some(PieceKind::S),
            7 => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Returns a fresh mutable copy of the canonical spawn-orientation
    /// shape grid. Pieces in play rotate their copy in place and must
    /// never share one.
    #[must_use]
    pub fn shape(self) -> Matrix {
        Matrix::from_rows(PIECE_SHAPES[self as usize - 1])
    }
}

/// Canonical spawn-orientation shapes, indexed by `kind as usize - 1`.
///
/// Bounding grids are deliberately uneven (2 for O, 3 for T/L/J/S/Z, 4 for
/// I); spawn centering and the kick budget depend on the grid width.
const PIECE_SHAPES: [&[&[Cell]]; PieceKind::LEN] = {
    use Cell::Empty as E;
    const T: Cell = Cell::Piece(PieceKind::T);
    const O: Cell = Cell::Piece(PieceKind::O);
    const L: Cell = Cell::Piece(PieceKind::L);
    const J: Cell = Cell::Piece(PieceKind::J);
    const I: Cell = Cell::Piece(PieceKind::I);
    const S: Cell = Cell::Piece(PieceKind::S);
    const Z: Cell = Cell::Piece(PieceKind::Z);
    [
        // T-piece
        &[&[E, E, E], &[T, T, T], &[E, T, E]],
        // O-piece
        &[&[O, O], &[O, O]],
        // L-piece
        &[&[E, L, E], &[E, L, E], &[E, L, L]],
        // J-piece
        &[&[E, J, E], &[E, J, E], &[J, J, E]],
        // I-piece
        &[
            &[E, I, E, E],
            &[E, I, E, E],
            &[E, I, E, E],
            &[E, I, E, E],
        ],
        // S-piece
        &[&[E, S, S], &[S, S, E], &[E, E, E]],
        // Z-piece
        &[&[Z, Z, E], &[E, Z, Z], &[E, E, E]],
    ]
};

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    const KINDS: [PieceKind; PieceKind::LEN] = [
        PieceKind::T,
        PieceKind::O,
        PieceKind::L,
        PieceKind::J,
        PieceKind::I,
        PieceKind::S,
        PieceKind::Z,
    ];

    fn cell_values(matrix: &Matrix) -> Vec<Vec<u8>> {
        matrix
            .rows()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Cell::Empty => 0,
                        Cell::Piece(kind) => kind.palette_index(),
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn canonical_shapes_match_the_classic_grids() {
        assert_eq!(
            cell_values(&PieceKind::T.shape()),
            [[0, 0, 0], [1, 1, 1], [0, 1, 0]]
        );
        assert_eq!(cell_values(&PieceKind::O.shape()), [[2, 2], [2, 2]]);
        assert_eq!(
            cell_values(&PieceKind::L.shape()),
            [[0, 3, 0], [0, 3, 0], [0, 3, 3]]
        );
        assert_eq!(
            cell_values(&PieceKind::J.shape()),
            [[0, 4, 0], [0, 4, 0], [4, 4, 0]]
        );
        assert_eq!(
            cell_values(&PieceKind::I.shape()),
            [
                [0, 5, 0, 0],
                [0, 5, 0, 0],
                [0, 5, 0, 0],
                [0, 5, 0, 0]
            ]
        );
        assert_eq!(
            cell_values(&PieceKind::S.shape()),
            [[0, 6, 6], [6, 6, 0], [0, 0, 0]]
        );
        assert_eq!(
            cell_values(&PieceKind::Z.shape()),
            [[7, 7, 0], [0, 7, 7], [0, 0, 0]]
        );
    }

    #[test]
    fn palette_indices_round_trip() {
        for kind in KINDS {
            assert_eq!(PieceKind::from_palette_index(kind.palette_index()), Some(kind));
        }
        assert_eq!(PieceKind::from_palette_index(0), None);
        assert_eq!(PieceKind::from_palette_index(8), None);
    }

    #[test]
    fn spawn_centers_each_shape_width() {
        // 12 / 2 - shape_width / 2
        assert_eq!(Piece::spawn(PieceKind::T, 12).position().x, 5);
        assert_eq!(Piece::spawn(PieceKind::O, 12).position().x, 5);
        assert_eq!(Piece::spawn(PieceKind::I, 12).position().x, 4);
        assert_eq!(Piece::spawn(PieceKind::T, 13).position().x, 5);
        assert_eq!(Piece::spawn(PieceKind::T, 12).position().y, 0);
    }

    #[test]
    fn board_cells_add_the_position_offset() {
        let mut piece = Piece::spawn(PieceKind::T, 12);
        piece.shift(0, 3);
        let cells: Vec<_> = piece.board_cells().collect();
        assert_eq!(
            cells,
            [
                (5, 4, PieceKind::T),
                (6, 4, PieceKind::T),
                (7, 4, PieceKind::T),
                (6, 5, PieceKind::T),
            ]
        );
    }

    #[test]
    fn random_draws_cover_every_kind() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut seen = HashSet::new();
        for _ in 0..200 {
            seen.insert(rng.random::<PieceKind>());
        }
        assert_eq!(seen.len(), PieceKind::LEN);
    }

    #[test]
    fn i_shape_has_structural_order_four() {
        let original = PieceKind::I.shape();
        let mut shape = original.clone();
        shape.rotate(Spin::Clockwise);
        shape.rotate(Spin::Clockwise);
        assert_ne!(shape, original);
        shape.rotate(Spin::Clockwise);
        shape.rotate(Spin::Clockwise);
        assert_eq!(shape, original);
    }

    #[test]
    fn o_shape_is_rotation_invariant() {
        let original = PieceKind::O.shape();
        let mut shape = original.clone();
        shape.rotate(Spin::Clockwise);
        assert_eq!(shape, original);
        shape.rotate(Spin::CounterClockwise);
        assert_eq!(shape, original);
    }
}
