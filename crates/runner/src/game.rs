//! Game driver wiring the rules engine, selector, and presentation together

use game_core::{RulesEngine, SelectError, Selection, Selector};

use crate::record::{GameOutcome, GameRecord};

/// Configuration for a driven game
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Maximum turns before the runner stops the game
    pub max_turns: u32,
    /// Print each chosen move
    pub verbose: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_turns: 200,
            verbose: false,
        }
    }
}

/// What a single driven turn produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// A move was selected and applied
    Played(Selection),
    /// The rules engine reports no continuation; the selector was not consulted
    GameOver,
}

/// Observer for position updates, typically the presentation layer.
///
/// Any `FnMut(&Position)` closure qualifies.
pub trait PositionSink<P> {
    fn position_changed(&mut self, pos: &P);
}

impl<P, F: FnMut(&P)> PositionSink<P> for F {
    fn position_changed(&mut self, pos: &P) {
        self(pos);
    }
}

/// Drives games against an external rules engine.
///
/// Control flow per turn: rules engine produces the legal-move list, the
/// selector picks one move, the rules engine applies it, the sink hears
/// about the new position. The runner itself holds no game state.
pub struct GameRunner {
    config: GameConfig,
}

impl GameRunner {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    /// Play one turn for whichever side the rules engine has to move.
    ///
    /// Terminal positions (including an empty legal-move list) short-circuit
    /// to `GameOver` before the selector runs, so through this path the
    /// selector never sees the empty move set it treats as a caller bug.
    pub fn play_turn<R, S>(
        &self,
        rules: &mut R,
        selector: &mut S,
        sink: &mut dyn PositionSink<R::Position>,
    ) -> Result<TurnOutcome, SelectError>
    where
        R: RulesEngine,
        S: Selector,
    {
        if rules.is_terminal() {
            return Ok(TurnOutcome::GameOver);
        }
        let moves = rules.legal_moves();
        if moves.is_empty() {
            return Ok(TurnOutcome::GameOver);
        }

        let selection = selector.select(&moves)?;
        let pos = rules.apply(selection.mv);
        sink.position_changed(&pos);
        Ok(TurnOutcome::Played(selection))
    }

    /// Play until the game ends or `max_turns` is reached, recording every
    /// chosen move.
    pub fn run_game<R, S>(
        &self,
        rules: &mut R,
        selector: &mut S,
        sink: &mut dyn PositionSink<R::Position>,
    ) -> Result<GameRecord, SelectError>
    where
        R: RulesEngine,
        S: Selector,
    {
        selector.new_game();
        let mut record = GameRecord::new(selector.name());

        for turn in 0..self.config.max_turns {
            match self.play_turn(rules, selector, sink)? {
                TurnOutcome::Played(selection) => {
                    if self.config.verbose {
                        println!(
                            "Turn {}: {} (score {})",
                            turn + 1,
                            selection.mv.to_coord(),
                            selection.score
                        );
                    }
                    record.push(selection);
                }
                TurnOutcome::GameOver => {
                    record.outcome = GameOutcome::Finished;
                    return Ok(record);
                }
            }
        }

        record.outcome = GameOutcome::TurnLimit;
        Ok(record)
    }
}
