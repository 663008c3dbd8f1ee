use crate::error::GameError;

use super::bridge::{Bridge, Lane};
use super::map;

/// Where the current attempt stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Mid-crossing; the next move targets the position after the last record.
    Crossing,
    /// The last move stepped on the wrong lane.
    Failed,
    /// Every position was crossed safely.
    Succeeded,
}

impl Phase {
    /// Phase name for error reporting
    pub fn name(self) -> &'static str {
        match self {
            Phase::Crossing => "crossing",
            Phase::Failed => "failed",
            Phase::Succeeded => "succeeded",
        }
    }
}

/// One validated move: the lane the player chose and whether it was safe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub lane: Lane,
    pub correct: bool,
}

/// Final result of a finished game: total attempts, the last attempt's
/// history, and whether the bridge was crossed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    pub attempts: u32,
    pub history: Vec<MoveRecord>,
    pub success: bool,
}

impl GameOutcome {
    /// Map rows for the final attempt, upper row first.
    pub fn map_rows(&self) -> [String; 2] {
        map::render_rows(&self.history)
    }
}

/// State machine for crossing one fixed bridge over one or more attempts.
///
/// The bridge never changes after construction; a wrong step freezes the
/// attempt until [`BridgeGame::retry`] discards it and starts a fresh one.
#[derive(Debug, Clone)]
pub struct BridgeGame {
    bridge: Bridge,
    attempt: Vec<MoveRecord>,
    attempts: u32,
    phase: Phase,
}

impl BridgeGame {
    /// Start the first attempt at position 0.
    pub fn new(bridge: Bridge) -> Self {
        BridgeGame {
            bridge,
            attempt: Vec::new(),
            attempts: 1,
            phase: Phase::Crossing,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Total attempts started so far, counting the first.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Moves recorded for the current attempt, in order.
    pub fn attempt(&self) -> &[MoveRecord] {
        &self.attempt
    }

    pub fn bridge(&self) -> &Bridge {
        &self.bridge
    }

    /// Apply one move at the current position and return the resulting phase.
    ///
    /// Only legal while crossing: a wrong step ends the attempt immediately
    /// and nothing further is recorded until [`BridgeGame::retry`].
    pub fn step(&mut self, lane: Lane) -> Result<Phase, GameError> {
        if self.phase != Phase::Crossing {
            return Err(GameError::IllegalState {
                operation: "step",
                phase: self.phase.name(),
            });
        }

        let position = self.attempt.len();
        let correct = lane == self.bridge.lane_at(position);
        self.attempt.push(MoveRecord { lane, correct });

        if !correct {
            self.phase = Phase::Failed;
        } else if self.attempt.len() == self.bridge.len() {
            self.phase = Phase::Succeeded;
        }

        Ok(self.phase)
    }

    /// Discard the failed attempt and start a new one on the same bridge.
    pub fn retry(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::Failed {
            return Err(GameError::IllegalState {
                operation: "retry",
                phase: self.phase.name(),
            });
        }

        self.attempt.clear();
        self.attempts += 1;
        self.phase = Phase::Crossing;
        Ok(())
    }

    /// Cumulative map for the current attempt, upper row first.
    pub fn map_rows(&self) -> [String; 2] {
        map::render_rows(&self.attempt)
    }

    /// Consume the game into its final outcome.
    pub fn into_outcome(self) -> GameOutcome {
        GameOutcome {
            attempts: self.attempts,
            success: self.phase == Phase::Succeeded,
            history: self.attempt,
        }
    }
}
