//! RNG module - piece type selection for spawning
//!
//! Draws are independent and uniform over the seven kinds: no bag, no
//! repeat avoidance. The source is behind the [`Randomizer`] trait so a
//! session can be driven by a seeded generator or by a fixed script in
//! tests.

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::types::PieceKind;

/// Source of piece kinds for spawning
pub trait Randomizer {
    /// Draw the next piece kind
    fn next_kind(&mut self) -> PieceKind;
}

impl<R: Randomizer + ?Sized> Randomizer for Box<R> {
    fn next_kind(&mut self) -> PieceKind {
        (**self).next_kind()
    }
}

/// Uniform random piece generator backed by a seedable RNG
#[derive(Debug, Clone)]
pub struct UniformRandomizer {
    rng: StdRng,
    /// Index into `PieceKind::ALL`.
    index: Uniform<usize>,
    seed: Option<u64>,
}

impl UniformRandomizer {
    /// Create a deterministic generator from a seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            index: Uniform::new(0, PieceKind::ALL.len()),
            seed: Some(seed),
        }
    }

    /// Create a generator seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            index: Uniform::new(0, PieceKind::ALL.len()),
            seed: None,
        }
    }

    /// Seed this generator was created with, if any
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Randomizer for UniformRandomizer {
    fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.index.sample(&mut self.rng)]
    }
}

impl Default for UniformRandomizer {
    fn default() -> Self {
        Self::from_entropy()
    }
}

/// Replays a fixed sequence of kinds, cycling when it runs out
#[derive(Debug, Clone)]
pub struct ScriptedRandomizer {
    script: Vec<PieceKind>,
    index: usize,
}

impl ScriptedRandomizer {
    /// Create from a non-empty script
    pub fn new(script: impl Into<Vec<PieceKind>>) -> Self {
        let script = script.into();
        assert!(!script.is_empty(), "script must contain at least one piece");
        Self { script, index: 0 }
    }

    /// Always yield the same kind
    pub fn repeat(kind: PieceKind) -> Self {
        Self::new(vec![kind])
    }

    /// Number of kinds drawn so far
    pub fn drawn(&self) -> usize {
        self.index
    }
}

impl Randomizer for ScriptedRandomizer {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self.script[self.index % self.script.len()];
        self.index += 1;
        kind
    }
}
