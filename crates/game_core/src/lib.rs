pub mod rules;
pub mod types;

// Re-export core vocabulary (not selector-specific)
pub use rules::RulesEngine;
pub use types::*;

use thiserror::Error;

// =============================================================================
// Selector trait — implemented by all move selectors (greedy, random, etc.)
// =============================================================================

/// Result of a selection operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// The chosen move, with any required promotion already filled in
    pub mv: Move,
    /// Material value of the winning capture (0 when the move was picked
    /// at random from a capture-free list)
    pub score: i32,
    /// Number of candidate moves scanned
    pub considered: usize,
}

/// Errors a selector can report. Selection has no transient failures;
/// everything here is a caller contract violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectError {
    /// The selector was invoked with zero legal moves. Terminal-state
    /// detection is the caller's job; a position with no moves is "game
    /// over", never a selection request.
    #[error("selector invoked with no legal moves")]
    EmptyMoveSet,
}

/// Trait that all move selectors must implement.
///
/// This allows swapping between the greedy capture policy, pure random
/// play, and whatever comes later without touching the caller.
pub trait Selector: Send {
    /// Pick exactly one move from the legal moves of the current turn.
    ///
    /// # Arguments
    /// * `moves` - Legal moves in the rules engine's order; must be non-empty
    ///
    /// # Returns
    /// The chosen move plus selection statistics, or `EmptyMoveSet` if the
    /// caller broke the non-empty precondition. Never mutates game state.
    fn select(&mut self, moves: &[Move]) -> Result<Selection, SelectError>;

    /// Returns the selector's name for reports and logs
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
