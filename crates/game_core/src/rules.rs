//! Contract with the external rules engine.
//!
//! The rules engine owns the game: it knows whose turn it is, which moves
//! are legal, and when the game is over. This crate never implements those
//! rules; it only describes the seam a selector's caller drives.

use crate::types::Move;

/// The external rules engine, as seen from this side of the seam.
///
/// `apply` hands back the resulting position value instead of exposing a
/// shared mutable board; the caller forwards that value to whatever
/// presentation layer is listening.
pub trait RulesEngine {
    /// Opaque position state produced by `apply`. The selector never
    /// inspects it; it exists so the caller can notify observers.
    type Position;

    /// Legal moves in the current position, in the engine's own order.
    /// Empty means the game is over (checkmate, stalemate, or draw).
    fn legal_moves(&self) -> Vec<Move>;

    /// Applies a move the engine previously reported as legal and returns
    /// the resulting position.
    fn apply(&mut self, mv: Move) -> Self::Position;

    /// True once the current position has no continuation.
    fn is_terminal(&self) -> bool;
}
