//! Game transcript storage and reporting

use serde::{Deserialize, Serialize};
use std::path::Path;

use game_core::Selection;

/// How a driven game ended
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameOutcome {
    /// The game was still going when the record was taken
    InProgress,
    /// The rules engine reported no continuation
    Finished,
    /// The runner's turn cap stopped the game
    TurnLimit,
}

/// A single selected-and-applied move
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TurnEntry {
    /// Coordinate notation, e.g. "g8f6" or "e7e8q"
    pub mv: String,
    pub capture: bool,
    /// Capture score that won the selection (0 = random fallback)
    pub score: i32,
}

/// Transcript of one driven game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    /// Name of the selector that played the game
    pub selector: String,
    /// Moves in played order
    pub turns: Vec<TurnEntry>,
    pub outcome: GameOutcome,
}

impl GameRecord {
    pub fn new(selector: &str) -> Self {
        Self {
            selector: selector.to_string(),
            turns: Vec::new(),
            outcome: GameOutcome::InProgress,
        }
    }

    /// Append a selection to the transcript
    pub fn push(&mut self, selection: Selection) {
        self.turns.push(TurnEntry {
            mv: selection.mv.to_coord(),
            capture: selection.mv.is_capture,
            score: selection.score,
        });
    }

    /// Save the record to a JSON file
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize: {}", e))?;
        std::fs::write(path, json).map_err(|e| format!("Failed to write: {}", e))
    }

    /// Load a record from a JSON file
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read: {}", e))?;
        serde_json::from_str(&contents).map_err(|e| format!("Failed to parse: {}", e))
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Game: {} ===\n", self.selector));
        let outcome = match self.outcome {
            GameOutcome::InProgress => "in progress",
            GameOutcome::Finished => "finished",
            GameOutcome::TurnLimit => "turn limit",
        };
        report.push_str(&format!("Turns: {} ({})\n\n", self.turns.len(), outcome));

        for (i, entry) in self.turns.iter().enumerate() {
            let tag = if entry.capture { "x" } else { " " };
            report.push_str(&format!("{:>3}. {} {}\n", i + 1, entry.mv, tag));
        }

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Move, PieceKind};

    fn sample_record() -> GameRecord {
        let mut record = GameRecord::new("Greedy v1.0");
        record.push(Selection {
            mv: Move::capture(1, 18, PieceKind::Knight, PieceKind::Rook),
            score: 5,
            considered: 7,
        });
        record.push(Selection {
            mv: Move::new(52, 60, PieceKind::Pawn).with_default_promotion(),
            score: 0,
            considered: 3,
        });
        record.outcome = GameOutcome::Finished;
        record
    }

    #[test]
    fn test_json_round_trip() {
        let record = sample_record();
        let json = serde_json::to_string(&record).unwrap();
        let loaded: GameRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(loaded.selector, record.selector);
        assert_eq!(loaded.turns, record.turns);
        assert_eq!(loaded.outcome, record.outcome);
    }

    #[test]
    fn test_report_lists_moves() {
        let report = sample_record().generate_report();

        assert!(report.contains("Greedy v1.0"));
        assert!(report.contains("finished"));
        assert!(report.contains("b1c3 x"));
        assert!(report.contains("e7e8q"));
    }

    #[test]
    fn test_promotion_suffix_recorded() {
        let record = sample_record();
        assert_eq!(record.turns[1].mv, "e7e8q");
        assert!(!record.turns[1].capture);
    }
}
