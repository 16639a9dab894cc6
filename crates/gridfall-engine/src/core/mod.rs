pub use self::{board::*, matrix::*, piece::*};

pub(crate) mod board;
pub(crate) mod matrix;
pub(crate) mod piece;
