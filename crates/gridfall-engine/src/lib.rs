pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// A fresh piece could not spawn. The board has already been wiped; the
/// session that observes this error transitions to game over.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("no room to spawn a fresh piece")]
pub struct TopOutError;

/// A checked piece placement overlapped the locked stack or the walls.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("piece collides with the board")]
pub struct PieceObstructedError;
