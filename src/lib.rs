pub mod config;
pub mod field;
pub mod game;
pub mod input;
pub mod piece;
pub mod render;

use std::ops;

use piece::PieceKind;
use rand::{prelude::SliceRandom, rngs::StdRng, SeedableRng};
use strum::IntoEnumIterator;

// (row, col) on the field, or relative to a piece's bounding box
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct Coords(pub i32, pub i32);

impl ops::Add for Coords {
    type Output = Coords;

    fn add(self, Coords(row2, col2): Self) -> Self::Output { Coords(self.0 + row2, self.1 + col2) }
}

// source of upcoming pieces
pub trait Randomizer {
    fn next(&mut self) -> PieceKind;
}

// every kind is equally likely on every draw, including immediate repeats
pub struct UniformRandomizer {
    rng: StdRng,
    kinds: Vec<PieceKind>,
}

impl UniformRandomizer {
    pub fn new() -> Self { Self::with_rng(StdRng::from_entropy()) }

    // reproducible sequence for replays and tests
    pub fn seeded(seed: u64) -> Self { Self::with_rng(StdRng::seed_from_u64(seed)) }

    fn with_rng(rng: StdRng) -> Self {
        UniformRandomizer {
            rng,
            kinds: PieceKind::iter().collect(),
        }
    }
}

impl Default for UniformRandomizer {
    fn default() -> Self { Self::new() }
}

impl Randomizer for UniformRandomizer {
    fn next(&mut self) -> PieceKind {
        // the catalog is never empty
        *self.kinds.choose(&mut self.rng).unwrap_or(&PieceKind::I)
    }
}

// cycles through a fixed list of kinds
pub struct SequenceRandomizer {
    kinds: Vec<PieceKind>,
    index: usize,
}

impl SequenceRandomizer {
    // an empty list falls back to the full catalog order
    pub fn new(kinds: impl IntoIterator<Item = PieceKind>) -> Self {
        let mut kinds = kinds.into_iter().collect::<Vec<_>>();
        if kinds.is_empty() {
            kinds = PieceKind::iter().collect();
        }
        SequenceRandomizer { kinds, index: 0 }
    }
}

impl Randomizer for SequenceRandomizer {
    fn next(&mut self) -> PieceKind {
        let kind = self.kinds[self.index];
        self.index = (self.index + 1) % self.kinds.len();
        kind
    }
}
