//! Opponent move sources.
//!
//! The runtime opponent draws from a ChaCha8 RNG, seeded either explicitly
//! (reproducible rounds) or from OS entropy.

#[cfg(test)]
use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::model::moves::Move;

/// Yields one opponent move per call.
pub trait MoveSource {
    fn draw(&mut self) -> Move;
}

#[derive(Debug, Clone)]
pub struct RandomOpponent {
    rng: ChaCha8Rng,
    seed: u64,
}

impl RandomOpponent {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MoveSource for RandomOpponent {
    fn draw(&mut self) -> Move {
        let idx = self.rng.gen_range(0..Move::ALL.len());
        Move::ALL[idx]
    }
}

/// Replays a scripted list of moves, then repeats the last one.
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct FixedOpponent {
    moves: VecDeque<Move>,
    last: Move,
    draws: usize,
}

#[cfg(test)]
impl FixedOpponent {
    pub fn new(first: Move) -> Self {
        Self::scripted(first, [])
    }

    pub fn scripted(first: Move, rest: impl IntoIterator<Item = Move>) -> Self {
        let mut moves: VecDeque<Move> = rest.into_iter().collect();
        moves.push_front(first);
        Self {
            moves,
            last: first,
            draws: 0,
        }
    }

    /// Number of times `draw` has been called.
    pub fn draws(&self) -> usize {
        self.draws
    }
}

#[cfg(test)]
impl MoveSource for FixedOpponent {
    fn draw(&mut self) -> Move {
        self.draws += 1;
        if let Some(next) = self.moves.pop_front() {
            self.last = next;
        }
        self.last
    }
}

impl<S: MoveSource + ?Sized> MoveSource for &mut S {
    fn draw(&mut self) -> Move {
        (**self).draw()
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/opponent.rs"]
mod tests;
