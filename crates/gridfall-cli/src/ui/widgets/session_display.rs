use gridfall_engine::{GameSession, SessionState};
use ratatui::{
    layout::{Constraint, Flex, Layout},
    prelude::{Buffer, Rect},
    style::Style,
    text::{Line, Text},
    widgets::{Block, Clear, Padding, Widget},
};

use crate::ui::widgets::{BoardDisplay, StatsDisplay, color, style};

#[derive(Debug)]
pub struct SessionDisplay<'a> {
    session: &'a GameSession,
    show_shadow: bool,
    horizontal_padding: u16,
    vertical_padding: u16,
}

impl<'a> SessionDisplay<'a> {
    pub fn new(session: &'a GameSession, show_shadow: bool) -> Self {
        Self {
            session,
            show_shadow,
            horizontal_padding: 1,
            vertical_padding: 0,
        }
    }

    /// The taller of the two columns, for sizing the frame area.
    pub fn height(&self) -> u16 {
        let game_board = BoardDisplay::new(self.session.board()).block(Block::bordered());
        let session_stats = StatsDisplay::new(self.session).block(Block::bordered());
        u16::max(game_board.height(), session_stats.height())
    }
}

impl Widget for SessionDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &SessionDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let style = style::DEFAULT;
        let block_padding = Padding::symmetric(self.horizontal_padding, self.vertical_padding);
        let border_style = match self.session.session_state() {
            SessionState::Playing => color::WHITE,
            SessionState::Paused => color::YELLOW,
            SessionState::GameOver => color::RED,
        };

        let game_board = {
            let widget = BoardDisplay::new(self.session.board())
                .falling_piece(self.session.falling_piece().clone())
                .block(Block::bordered().border_style(border_style).style(style));
            if self.show_shadow {
                widget.shadow(self.session.ghost_piece())
            } else {
                widget
            }
        };
        let session_stats = StatsDisplay::new(self.session).block(
            Block::bordered()
                .title(Line::from("STATS").centered())
                .padding(block_padding)
                .border_style(border_style)
                .style(style::DEFAULT),
        );

        let [board_column, stats_column] = Layout::horizontal([
            Constraint::Length(game_board.width()),
            Constraint::Length(session_stats.width()),
        ])
        .flex(Flex::Center)
        .spacing(1)
        .areas(area);

        let [board_area] =
            Layout::vertical([Constraint::Length(game_board.height())]).areas(board_column);
        let [stats_area] =
            Layout::vertical([Constraint::Length(session_stats.height())]).areas(stats_column);

        let game_board_width = game_board.width();
        game_board.render(board_area, buf);
        session_stats.render(stats_area, buf);

        let popup = match self.session.session_state() {
            SessionState::Playing => None,
            SessionState::Paused => {
                Some(("PAUSED", Style::new().fg(color::BLACK).bg(color::YELLOW)))
            }
            SessionState::GameOver => {
                Some(("GAME OVER", Style::new().fg(color::WHITE).bg(color::RED)))
            }
        };

        if let Some((text, style)) = popup {
            let block = Block::new().style(style);
            let text = Text::styled(text, style).centered();
            let area =
                board_area.centered(Constraint::Length(game_board_width), Constraint::Length(3));
            let inner = block.inner(area);
            Clear.render(area, buf);
            block.render(area, buf);
            text.render(inner.centered_vertically(Constraint::Length(1)), buf);
        }
    }
}
