//! Greedy Capture Move Selector
//!
//! Picks the most valuable capture on the board, and falls back to a
//! uniformly random legal move when nothing can be taken. One ply, no
//! lookahead. Useful for:
//! - An automated opponent that at least punishes hung pieces
//! - A baseline a real searcher should easily beat
//! - Exercising the selector/rules-engine seams

use game_core::{Move, SelectError, Selection, Selector};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

#[cfg(test)]
mod lib_tests;

/// A move selector that prefers the highest-value capture.
///
/// Captures are ranked by the kind taken (bishop/knight 3, rook 5,
/// queen 9, anything else 1). Ties keep the move seen first, so the
/// rules engine's move order decides between equal captures. With no
/// capture available the selector plays a random legal move.
#[derive(Debug, Clone)]
pub struct GreedySelector {
    rng: StdRng,
}

impl GreedySelector {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic fallback choices, for reproducible games and tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for GreedySelector {
    fn default() -> Self {
        Self::new()
    }
}

impl Selector for GreedySelector {
    fn select(&mut self, moves: &[Move]) -> Result<Selection, SelectError> {
        let mut best_capture: Option<Move> = None;
        let mut best_value = 0;

        for mv in moves {
            if let Some(value) = mv.capture_value() {
                // Strictly greater only: the first move reaching the
                // maximum capture value wins ties.
                if value > best_value {
                    best_value = value;
                    best_capture = Some(*mv);
                }
            }
        }

        let (mv, score) = match best_capture {
            Some(mv) => (mv, best_value),
            None => {
                let mv = moves
                    .choose(&mut self.rng)
                    .copied()
                    .ok_or(SelectError::EmptyMoveSet)?;
                (mv, 0)
            }
        };

        Ok(Selection {
            mv: mv.with_default_promotion(),
            score,
            considered: moves.len(),
        })
    }

    fn name(&self) -> &str {
        "Greedy v1.0"
    }
}
