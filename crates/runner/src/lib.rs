//! Turn driver for automated play
//!
//! This crate is the caller side of the selector contract:
//! - Asks the rules engine for the legal moves of the current turn
//! - Hands them to a move selector and applies the chosen move
//! - Notifies the presentation sink with the resulting position
//! - Keeps a serializable transcript of the game

mod game;
mod record;

pub use game::*;
pub use record::*;
