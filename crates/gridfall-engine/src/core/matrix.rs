use crate::core::piece::PieceKind;

/// A single grid slot: empty, or filled by a cell of one piece kind.
///
/// The kind doubles as the color id (see [`PieceKind::palette_index`]), so
/// locked cells keep the color of the piece they came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Piece(PieceKind),
}

impl Cell {
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Rotation direction for [`Matrix::rotate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spin {
    Clockwise,
    CounterClockwise,
}

impl Spin {
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
        }
    }
}

/// A rectangular, row-major grid of [`Cell`]s. Row 0 is the top row.
///
/// Backs both the board and the piece shapes. Dimensions are fixed at
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    width: u8,
    height: u8,
    cells: Vec<Cell>,
}

impl Matrix {
    /// Creates a `width` x `height` grid with every cell empty.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    #[must_use]
    pub fn zeroed(width: u8, height: u8) -> Self {
        assert!(
            width > 0 && height > 0,
            "matrix dimensions must be non-zero"
        );
        let cells = vec![Cell::Empty; usize::from(width) * usize::from(height)];
        Self {
            width,
            height,
            cells,
        }
    }

    /// Builds a grid from row slices. All rows must share one length.
    pub(crate) fn from_rows(rows: &[&[Cell]]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());
        assert!(
            width > 0 && height > 0,
            "matrix dimensions must be non-zero"
        );
        assert!(
            rows.iter().all(|row| row.len() == width),
            "rows must have equal lengths"
        );
        let cells = rows.iter().flat_map(|row| row.iter().copied()).collect();
        Self {
            width: u8::try_from(width).expect("matrix width fits in u8"),
            height: u8::try_from(height).expect("matrix height fits in u8"),
            cells,
        }
    }

    #[must_use]
    pub fn width(&self) -> u8 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Looks up the cell at signed coordinates.
    ///
    /// Returns `None` when `(x, y)` lies outside the grid on either axis.
    /// Collision checks rely on this: an out-of-range probe reads as
    /// "not empty".
    #[must_use]
    pub fn cell(&self, x: i32, y: i32) -> Option<Cell> {
        Some(self.cells[self.index_of(x, y)?])
    }

    fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < usize::from(self.width) && y < usize::from(self.height))
            .then(|| y * usize::from(self.width) + x)
    }

    /// Writes the cell at signed coordinates.
    ///
    /// # Panics
    ///
    /// Panics when `(x, y)` lies outside the grid.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        let index = self
            .index_of(x, y)
            .unwrap_or_else(|| panic!("cell ({x}, {y}) out of range"));
        self.cells[index] = cell;
    }

    /// Iterates rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(usize::from(self.width))
    }

    #[must_use]
    pub fn row(&self, y: u8) -> &[Cell] {
        let width = usize::from(self.width);
        &self.cells[usize::from(y) * width..(usize::from(y) + 1) * width]
    }

    pub(crate) fn row_mut(&mut self, y: u8) -> &mut [Cell] {
        let width = usize::from(self.width);
        &mut self.cells[usize::from(y) * width..(usize::from(y) + 1) * width]
    }

    /// Copies row `src` over row `dst`.
    pub(crate) fn copy_row(&mut self, src: u8, dst: u8) {
        let width = usize::from(self.width);
        let start = usize::from(src) * width;
        self.cells
            .copy_within(start..start + width, usize::from(dst) * width);
    }

    /// Overwrites every cell.
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Iterates the non-empty cells as `(x, y, kind)` triples, row-major.
    pub fn occupied(&self) -> impl Iterator<Item = (u8, u8, PieceKind)> + '_ {
        let width = usize::from(self.width);
        (0..self.height).flat_map(move |y| {
            (0..self.width).filter_map(move |x| {
                match self.cells[usize::from(y) * width + usize::from(x)] {
                    Cell::Piece(kind) => Some((x, y, kind)),
                    Cell::Empty => None,
                }
            })
        })
    }

    /// Rotates the grid 90 degrees in place: transpose, then reverse each
    /// row (clockwise) or the row order (counter-clockwise).
    ///
    /// # Panics
    ///
    /// Panics unless the grid is square.
    pub fn rotate(&mut self, spin: Spin) {
        assert_eq!(self.width, self.height, "rotation requires a square grid");
        let size = usize::from(self.width);
        for y in 0..size {
            for x in 0..y {
                self.cells.swap(y * size + x, x * size + y);
            }
        }
        match spin {
            Spin::Clockwise => {
                for row in self.cells.chunks_exact_mut(size) {
                    row.reverse();
                }
            }
            Spin::CounterClockwise => {
                for y in 0..size / 2 {
                    let other = size - 1 - y;
                    for x in 0..size {
                        self.cells.swap(y * size + x, other * size + x);
                    }
                }
            }
        }
    }
}
