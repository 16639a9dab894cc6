use ratatui::{layout::Rect, widgets::Block as BlockWidget};

pub use self::{block_display::*, board_display::*, session_display::*, stats_display::*};

mod block_display;
mod board_display;
mod session_display;
mod stats_display;

mod color {
    use ratatui::style::Color;

    // the classic palette for cell values 1-7
    pub const PURPLE: Color = Color::Rgb(128, 0, 128);
    pub const YELLOW: Color = Color::Rgb(255, 255, 0);
    pub const ORANGE: Color = Color::Rgb(255, 165, 0);
    pub const BLUE: Color = Color::Rgb(0, 0, 255);
    pub const AQUA: Color = Color::Rgb(0, 255, 255);
    pub const GREEN: Color = Color::Rgb(0, 128, 0);
    pub const RED: Color = Color::Rgb(255, 0, 0);

    // the same palette at quarter intensity, for the landing shadow
    pub const PURPLE_FAINT: Color = Color::Rgb(32, 0, 32);
    pub const YELLOW_FAINT: Color = Color::Rgb(63, 63, 0);
    pub const ORANGE_FAINT: Color = Color::Rgb(63, 41, 0);
    pub const BLUE_FAINT: Color = Color::Rgb(0, 0, 63);
    pub const AQUA_FAINT: Color = Color::Rgb(0, 63, 63);
    pub const GREEN_FAINT: Color = Color::Rgb(0, 32, 0);
    pub const RED_FAINT: Color = Color::Rgb(63, 0, 0);

    pub const GRAY: Color = Color::Rgb(127, 127, 127);
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
}

pub mod style {
    use gridfall_engine::PieceKind;
    use ratatui::style::{Color, Style};

    use crate::ui::widgets::color;

    const fn fg_bg(fg: Color, bg: Color) -> Style {
        Style::new().fg(fg).bg(bg)
    }

    const fn bg_only(color: Color) -> Style {
        Style::new().fg(color).bg(color)
    }

    pub const DEFAULT: Style = fg_bg(color::WHITE, color::BLACK);
    pub const EMPTY_DOT: Style = fg_bg(color::GRAY, color::BLACK);

    #[must_use]
    pub const fn piece(kind: PieceKind) -> Style {
        bg_only(match kind {
            PieceKind::T => color::PURPLE,
            PieceKind::O => color::YELLOW,
            PieceKind::L => color::ORANGE,
            PieceKind::J => color::BLUE,
            PieceKind::I => color::AQUA,
            PieceKind::S => color::GREEN,
            PieceKind::Z => color::RED,
        })
    }

    #[must_use]
    pub const fn shadow(kind: PieceKind) -> Style {
        bg_only(match kind {
            PieceKind::T => color::PURPLE_FAINT,
            PieceKind::O => color::YELLOW_FAINT,
            PieceKind::L => color::ORANGE_FAINT,
            PieceKind::J => color::BLUE_FAINT,
            PieceKind::I => color::AQUA_FAINT,
            PieceKind::S => color::GREEN_FAINT,
            PieceKind::Z => color::RED_FAINT,
        })
    }
}

fn block_vertical_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.height - inner_rect.height
}

fn block_horizontal_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.width - inner_rect.width
}
