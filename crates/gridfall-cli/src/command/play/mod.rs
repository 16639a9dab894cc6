use gridfall_engine::{Board, GameSeed, GameSession};
use rand::Rng as _;

use crate::{command::play::app::PlayApp, tui::Tui};

mod app;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Piece-sequence seed (32 hex characters); random when omitted
    #[clap(long)]
    seed: Option<GameSeed>,
    /// Board width in columns
    #[clap(long, default_value_t = Board::DEFAULT_WIDTH, value_parser = clap::value_parser!(u8).range(4..))]
    cols: u8,
    /// Board height in rows
    #[clap(long, default_value_t = Board::DEFAULT_HEIGHT, value_parser = clap::value_parser!(u8).range(4..))]
    rows: u8,
    /// Logic ticks per second
    #[clap(long, default_value_t = 60.0)]
    tick_rate: f64,
    /// Do not draw the landing shadow
    #[clap(long)]
    hide_shadow: bool,
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        seed,
        cols,
        rows,
        tick_rate,
        hide_shadow,
    } = arg;
    anyhow::ensure!(
        tick_rate.is_finite() && *tick_rate > 0.0,
        "tick rate must be a positive number of ticks per second"
    );

    let seed = seed.unwrap_or_else(|| rand::rng().random());
    let session = GameSession::with_board_size(seed, *cols, *rows);
    let mut app = PlayApp::new(session, !hide_shadow);

    Tui::new(*tick_rate).run(&mut app)?;

    // printed after the terminal is restored
    println!("seed: {seed}");
    Ok(())
}
