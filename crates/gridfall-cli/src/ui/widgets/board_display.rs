use std::iter;

use gridfall_engine::{Board, Cell, Piece, PieceKind};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt, Widget},
};

use crate::ui::widgets::BlockDisplay;

/// How one playfield slot should be painted.
#[derive(Debug, Clone, Copy)]
enum Slot {
    Empty,
    Solid(PieceKind),
    Shadow(PieceKind),
}

#[derive(Debug)]
pub struct BoardDisplay<'a> {
    board: &'a Board,
    shadow: Option<Piece>,
    falling_piece: Option<Piece>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> BoardDisplay<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            shadow: None,
            falling_piece: None,
            block: None,
        }
    }

    pub fn shadow(self, piece: Piece) -> Self {
        Self {
            shadow: Some(piece),
            ..self
        }
    }

    pub fn falling_piece(self, piece: Piece) -> Self {
        Self {
            falling_piece: Some(piece),
            ..self
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        u16::from(self.board.width()) * BlockDisplay::width()
            + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        u16::from(self.board.height()) * BlockDisplay::height()
            + super::block_vertical_margin(self.block.as_ref())
    }

    /// Locked cells first, then the shadow, then the falling piece on top.
    fn slots(&self) -> Vec<Slot> {
        let width = usize::from(self.board.width());
        let height = usize::from(self.board.height());
        let mut slots = vec![Slot::Empty; width * height];

        for (x, y, kind) in self.board.occupied() {
            slots[usize::from(y) * width + usize::from(x)] = Slot::Solid(kind);
        }
        if let Some(shadow) = &self.shadow {
            overlay(&mut slots, width, height, shadow, Slot::Shadow(shadow.kind()));
        }
        if let Some(piece) = &self.falling_piece {
            overlay(&mut slots, width, height, piece, Slot::Solid(piece.kind()));
        }
        slots
    }
}

fn overlay(slots: &mut [Slot], width: usize, height: usize, piece: &Piece, slot: Slot) {
    for (x, y, _) in piece.board_cells() {
        let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
            continue;
        };
        if x < width && y < height {
            slots[y * width + x] = slot;
        }
    }
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let slots = self.slots();
        let width = usize::from(self.board.width());

        // The board dimensions are runtime values, so split instead of
        // the const-generic layout helpers.
        let col_constraints =
            (0..self.board.width()).map(|_| Constraint::Length(BlockDisplay::width()));
        let row_constraints =
            (0..self.board.height()).map(|_| Constraint::Length(BlockDisplay::height()));
        let horizontal = Layout::horizontal(col_constraints).flex(Flex::Center);
        let vertical = Layout::vertical(row_constraints);

        let row_areas = vertical.split(area);
        for (row_area, row_slots) in iter::zip(row_areas.iter(), slots.chunks_exact(width)) {
            let cell_areas = horizontal.split(*row_area);
            for (cell_area, slot) in iter::zip(cell_areas.iter(), row_slots) {
                let block_display = match *slot {
                    Slot::Empty => BlockDisplay::from_cell(Cell::Empty),
                    Slot::Solid(kind) => BlockDisplay::from_cell(Cell::Piece(kind)),
                    Slot::Shadow(kind) => BlockDisplay::shadow(kind),
                };
                block_display.render(*cell_area, buf);
            }
        }
    }
}
