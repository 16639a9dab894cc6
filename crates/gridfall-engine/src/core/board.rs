use super::{
    matrix::{Cell, Matrix},
    piece::{Piece, PieceKind},
};

/// The playfield holding the locked cells.
///
/// The falling piece is not part of the board; it lives on
/// [`GameState`](crate::GameState) and only enters the board through
/// [`merge`](Self::merge).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: Matrix,
}

impl Board {
    pub const DEFAULT_WIDTH: u8 = 12;
    pub const DEFAULT_HEIGHT: u8 = 20;

    /// Creates an empty board.
    ///
    /// # Panics
    ///
    /// Panics when either dimension is smaller than the largest shape grid
    /// (4), which would leave no room to spawn.
    #[must_use]
    pub fn new(width: u8, height: u8) -> Self {
        assert!(
            width >= 4 && height >= 4,
            "board must be at least 4x4, got {width}x{height}"
        );
        Self {
            grid: Matrix::zeroed(width, height),
        }
    }

    #[must_use]
    pub fn width(&self) -> u8 {
        self.grid.width()
    }

    #[must_use]
    pub fn height(&self) -> u8 {
        self.grid.height()
    }

    /// Iterates rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.grid.rows()
    }

    /// Iterates `(x, y, kind)` for every locked cell, row-major.
    pub fn occupied(&self) -> impl Iterator<Item = (u8, u8, PieceKind)> {
        self.grid.occupied()
    }

    #[must_use]
    pub fn cell(&self, x: i32, y: i32) -> Option<Cell> {
        self.grid.cell(x, y)
    }

    /// True when any occupied cell of `piece` overlaps a locked cell or
    /// lies outside the board on either axis.
    ///
    /// Empty cells of the shape grid are transparent: they may hang over
    /// locked cells or past the walls without colliding.
    #[must_use]
    pub fn collides(&self, piece: &Piece) -> bool {
        piece
            .board_cells()
            .any(|(x, y, _)| self.grid.cell(x, y) != Some(Cell::Empty))
    }

    /// Locks `piece` into the board, overwriting whatever the cells held.
    ///
    /// # Panics
    ///
    /// Panics when an occupied cell lies outside the board; callers merge
    /// only at positions that already passed [`collides`](Self::collides).
    pub fn merge(&mut self, piece: &Piece) {
        for (x, y, kind) in piece.board_cells() {
            self.grid.set(x, y, Cell::Piece(kind));
        }
    }

    /// Removes every full row: rows above a removed one slide down and
    /// fresh empty rows enter at the top. Returns how many rows were
    /// removed.
    ///
    /// Scans bottom-up so that stacked full rows collapse in one pass.
    pub fn sweep(&mut self) -> u8 {
        let mut cleared = 0;
        for y in (0..self.height()).rev() {
            if self.grid.row(y).iter().all(|cell| !cell.is_empty()) {
                cleared += 1;
            } else if cleared > 0 {
                self.grid.copy_row(y, y + cleared);
            }
        }
        for y in 0..cleared {
            self.grid.row_mut(y).fill(Cell::Empty);
        }
        cleared
    }

    /// Empties every cell. Used when a blocked spawn ends the game.
    pub fn clear(&mut self) {
        self.grid.fill(Cell::Empty);
    }
}

#[cfg(test)]
impl Board {
    /// Test fixture: `.` is empty, digits 1-7 are cells of that kind.
    pub(crate) fn from_ascii(rows: &[&str]) -> Self {
        let width = u8::try_from(rows[0].len()).unwrap();
        let height = u8::try_from(rows.len()).unwrap();
        let mut board = Self::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), usize::from(width), "ragged fixture row {y}");
            for (x, c) in row.chars().enumerate() {
                let cell = match c {
                    '.' => Cell::Empty,
                    _ => {
                        let value = c.to_digit(10).expect("cell must be `.` or a digit");
                        let kind = PieceKind::from_palette_index(u8::try_from(value).unwrap())
                            .expect("cell digit must be 1-7");
                        Cell::Piece(kind)
                    }
                };
                board
                    .grid
                    .set(i32::try_from(x).unwrap(), i32::try_from(y).unwrap(), cell);
            }
        }
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::piece::Position;

    fn piece_at(kind: PieceKind, x: i32, y: i32) -> Piece {
        let mut piece = Piece::spawn(kind, Board::DEFAULT_WIDTH);
        piece.set_position(Position { x, y });
        piece
    }

    #[test]
    fn spawned_piece_does_not_collide_on_an_empty_board() {
        let board = Board::new(12, 20);
        assert!(!board.collides(&Piece::spawn(PieceKind::T, 12)));
    }

    #[test]
    fn the_floor_collides() {
        let board = Board::new(12, 20);
        // T occupies local rows 1-2, so y = 17 is the deepest legal offset
        assert!(!board.collides(&piece_at(PieceKind::T, 5, 17)));
        assert!(board.collides(&piece_at(PieceKind::T, 5, 18)));
    }

    #[test]
    fn the_walls_collide() {
        let board = Board::new(12, 20);
        // L occupies local columns 1-2: x = -1 keeps every cell on the board
        assert!(!board.collides(&piece_at(PieceKind::L, -1, 0)));
        assert!(board.collides(&piece_at(PieceKind::L, -2, 0)));
        assert!(!board.collides(&piece_at(PieceKind::L, 9, 0)));
        assert!(board.collides(&piece_at(PieceKind::L, 10, 0)));
    }

    #[test]
    fn empty_shape_cells_are_transparent() {
        let board = Board::from_ascii(&[
            "......",
            "......",
            "......",
            "......",
            "......",
            "111111",
        ]);
        // the S shape's bottom row is empty, so it may overlap the stack
        let mut piece = Piece::spawn(PieceKind::S, 6);
        piece.set_position(Position { x: 1, y: 3 });
        assert!(!board.collides(&piece));
        piece.set_position(Position { x: 1, y: 4 });
        assert!(board.collides(&piece));
    }

    #[test]
    fn merge_writes_the_piece_kind() {
        let mut board = Board::new(12, 20);
        board.merge(&piece_at(PieceKind::J, 5, 17));
        assert_eq!(board.cell(6, 17), Some(Cell::Piece(PieceKind::J)));
        assert_eq!(board.cell(6, 18), Some(Cell::Piece(PieceKind::J)));
        assert_eq!(board.cell(5, 19), Some(Cell::Piece(PieceKind::J)));
        assert_eq!(board.cell(6, 19), Some(Cell::Piece(PieceKind::J)));
        assert_eq!(board.cell(5, 17), Some(Cell::Empty));
    }

    #[test]
    fn sweep_removes_full_rows_and_slides_the_rest_down() {
        let mut board = Board::from_ascii(&[
            "....",
            "2...",
            "1111",
            "3.3.",
            "1111",
            "4444",
        ]);
        assert_eq!(board.sweep(), 3);
        assert_eq!(
            board,
            Board::from_ascii(&[
                "....",
                "....",
                "....",
                "....",
                "2...",
                "3.3.",
            ])
        );
    }

    #[test]
    fn sweep_without_full_rows_changes_nothing() {
        let mut board = Board::from_ascii(&[
            "....",
            "....",
            "....",
            "....",
            "5..5",
            "55.5",
        ]);
        let before = board.clone();
        assert_eq!(board.sweep(), 0);
        assert_eq!(board, before);
    }

    #[test]
    fn clear_empties_every_cell() {
        let mut board = Board::from_ascii(&[
            "7777",
            "7..7",
            "7..7",
            "7777",
        ]);
        board.clear();
        assert_eq!(board, Board::new(4, 4));
    }
}
