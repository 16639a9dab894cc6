use std::{fmt, str::FromStr};

use rand::{Rng, SeedableRng as _, distr::StandardUniform, prelude::Distribution};
use rand_pcg::Pcg32;

use crate::core::piece::PieceKind;

/// Seed for the piece sequence: the 16 bytes feeding the [`Pcg32`]
/// generator.
///
/// Two sources built from the same seed draw the same sequence of kinds,
/// which makes runs reproducible. The textual form is 32 hex characters,
/// big-endian; the game prints it on exit and accepts it back through
/// `--seed`.
///
/// # Example
///
/// ```
/// use gridfall_engine::GameSeed;
///
/// let seed: GameSeed = "000102030405060708090a0b0c0d0e0f".parse().unwrap();
/// assert_eq!(seed.to_string(), "000102030405060708090a0b0c0d0e0f");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSeed([u8; 16]);

impl fmt::Display for GameSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

/// Rejected seed text: anything but exactly 32 hex characters.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("invalid seed: expected 32 hex characters")]
pub struct ParseSeedError;

impl FromStr for GameSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 {
            return Err(ParseSeedError);
        }
        let value = u128::from_str_radix(s, 16).map_err(|_| ParseSeedError)?;
        Ok(Self(value.to_be_bytes()))
    }
}

/// Allows drawing a fresh random seed with `rng.random()`.
impl Distribution<GameSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> GameSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        GameSeed(seed)
    }
}

/// Seeded source of piece kinds.
///
/// Every draw is an independent uniform pick over the seven kinds; see
/// the [`Distribution`] impl on
/// [`PieceKind`](crate::core::piece::PieceKind).
#[derive(Debug, Clone)]
pub struct PieceSource {
    rng: Pcg32,
}

impl PieceSource {
    #[must_use]
    pub fn new(seed: GameSeed) -> Self {
        Self {
            rng: Pcg32::from_seed(seed.0),
        }
    }

    /// Draws the next kind.
    pub fn draw(&mut self) -> PieceKind {
        self.rng.random()
    }
}
