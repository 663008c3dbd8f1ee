//! Orchestration: drives the prompt / validate / render loop against the
//! injected line ports until the crossing succeeds or the player quits.
//!
//! Input validation is unforgiving: any malformed token prints a single
//! `[ERROR]`-tagged line and ends the run. There is no re-prompt.

use tracing::{debug, info};

use crate::config::BridgeConfig;
use crate::error::GameError;
use crate::game::{make_bridge, BridgeGame, GameOutcome, Lane, Phase};
use crate::io::{LineSink, LineSource};

const BANNER: &str = "Let's play the bridge crossing game.";
const MOVE_PROMPT: &str = "Choose a lane to cross. (up: U, down: D)";
const RETRY_PROMPT: &str = "Retry or quit? (retry: R, quit: Q)";
const REPORT_HEADER: &str = "Final game result";

/// Player's choice after a failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RetryChoice {
    Retry,
    Quit,
}

impl RetryChoice {
    fn from_token(token: &str) -> Result<RetryChoice, GameError> {
        match token {
            "R" => Ok(RetryChoice::Retry),
            "Q" => Ok(RetryChoice::Quit),
            other => Err(GameError::InvalidRetryChoice(other.to_string())),
        }
    }
}

/// Drives one full game against an input source and an output sink.
pub struct GameRunner<S, K> {
    limits: BridgeConfig,
    source: S,
    sink: K,
}

impl<S: LineSource, K: LineSink> GameRunner<S, K> {
    pub fn new(limits: BridgeConfig, source: S, sink: K) -> Self {
        GameRunner {
            limits,
            source,
            sink,
        }
    }

    /// Play a full game, drawing from `gen` once per bridge position.
    ///
    /// On any validation failure the `[ERROR]` line is printed to the sink
    /// before the error is returned; no further prompts are issued.
    pub fn run(&mut self, gen: impl FnMut() -> u32) -> Result<GameOutcome, GameError> {
        match self.play(gen) {
            Ok(outcome) => Ok(outcome),
            Err(err) => {
                self.sink.print_line(&format!("[ERROR] {err}"));
                Err(err)
            }
        }
    }

    fn play(&mut self, gen: impl FnMut() -> u32) -> Result<GameOutcome, GameError> {
        self.sink.print_line(BANNER);

        let size = self.read_bridge_size()?;
        let bridge = make_bridge(size, gen)?;
        info!(size, "bridge built");
        let mut game = BridgeGame::new(bridge);

        loop {
            let lane = self.read_move()?;
            let phase = game.step(lane)?;
            for row in game.map_rows() {
                self.sink.print_line(&row);
            }

            match phase {
                Phase::Crossing => {}
                Phase::Succeeded => break,
                Phase::Failed => {
                    debug!(attempt = game.attempts(), "attempt failed");
                    match self.read_retry_choice()? {
                        RetryChoice::Retry => game.retry()?,
                        RetryChoice::Quit => break,
                    }
                }
            }
        }

        let outcome = game.into_outcome();
        info!(
            attempts = outcome.attempts,
            success = outcome.success,
            "game finished"
        );
        self.report(&outcome);
        Ok(outcome)
    }

    fn read_bridge_size(&mut self) -> Result<usize, GameError> {
        let BridgeConfig { min_size, max_size } = self.limits;
        self.sink
            .print_line(&format!("Enter the bridge length ({min_size}-{max_size})."));

        let token = self.next_token()?;
        token
            .parse::<usize>()
            .ok()
            .filter(|size| (min_size..=max_size).contains(size))
            .ok_or_else(|| {
                GameError::InvalidSize(format!(
                    "'{token}' is not an integer between {min_size} and {max_size}"
                ))
            })
    }

    fn read_move(&mut self) -> Result<Lane, GameError> {
        self.sink.print_line(MOVE_PROMPT);
        Lane::from_token(&self.next_token()?)
    }

    fn read_retry_choice(&mut self) -> Result<RetryChoice, GameError> {
        self.sink.print_line(RETRY_PROMPT);
        RetryChoice::from_token(&self.next_token()?)
    }

    fn next_token(&mut self) -> Result<String, GameError> {
        self.source.read_line().ok_or(GameError::InputExhausted)
    }

    fn report(&mut self, outcome: &GameOutcome) {
        self.sink.print_line(REPORT_HEADER);
        for row in outcome.map_rows() {
            self.sink.print_line(&row);
        }
        let label = if outcome.success { "success" } else { "failure" };
        self.sink.print_line(&format!("Game result: {label}"));
        self.sink
            .print_line(&format!("Total attempts: {}", outcome.attempts));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{RecordingSink, ScriptedSource};

    fn scripted_gen(draws: &[u32]) -> impl FnMut() -> u32 {
        let mut draws: std::collections::VecDeque<u32> = draws.iter().copied().collect();
        move || draws.pop_front().expect("generator drawn past bridge size")
    }

    fn run_game(
        draws: &[u32],
        inputs: &[&str],
    ) -> (Result<GameOutcome, GameError>, RecordingSink) {
        let mut sink = RecordingSink::default();
        let result = GameRunner::new(
            BridgeConfig::default(),
            ScriptedSource::new(inputs.iter().copied()),
            &mut sink,
        )
        .run(scripted_gen(draws));
        (result, sink)
    }

    #[test]
    fn test_first_try_success() {
        // Bridge is [Up, Down, Up].
        let (result, sink) = run_game(&[1, 0, 1], &["3", "U", "D", "U"]);

        let outcome = result.unwrap();
        assert!(outcome.success);
        assert_eq!(outcome.attempts, 1);

        assert!(sink.contains(REPORT_HEADER));
        assert!(sink.contains("[ O |   | O ]"));
        assert!(sink.contains("[   | O |   ]"));
        assert!(sink.contains("Game result: success"));
        assert!(sink.contains("Total attempts: 1"));
        // Upper row always prints above the lower row.
        assert!(sink.position("[ O |   | O ]").unwrap() < sink.position("[   | O |   ]").unwrap());
    }

    #[test]
    fn test_map_prints_after_every_move() {
        let (_, sink) = run_game(&[1, 0, 1], &["3", "U", "D", "U"]);

        for map in ["[ O ]", "[ O |   ]", "[ O |   | O ]"] {
            assert!(sink.contains(map), "missing cumulative map {map:?}");
        }
    }

    #[test]
    fn test_retry_then_success() {
        // Bridge is [Up, Up, Down]; first try fails on move two.
        let (result, sink) = run_game(&[1, 1, 0], &["3", "U", "D", "R", "U", "U", "D"]);

        let outcome = result.unwrap();
        assert!(outcome.success);
        assert_eq!(outcome.attempts, 2);

        // Failed first attempt, fresh start, then the full crossing.
        assert!(sink.contains("[ O |   ]"));
        assert!(sink.contains("[   | X ]"));
        assert!(sink.contains("[ O | O ]"));
        assert!(sink.contains("[ O | O |   ]"));
        assert!(sink.contains("[   |   | O ]"));
        assert!(sink.contains("Game result: success"));
        assert!(sink.contains("Total attempts: 2"));
    }

    #[test]
    fn test_retry_then_quit() {
        let (result, sink) = run_game(&[1, 1, 0], &["3", "U", "D", "R", "U", "U", "U", "Q"]);

        let outcome = result.unwrap();
        assert!(!outcome.success);
        assert_eq!(outcome.attempts, 2);

        // The final report shows the second, also failed, attempt.
        assert!(sink.contains("[ O | O | X ]"));
        assert!(sink.contains("Game result: failure"));
        assert!(sink.contains("Total attempts: 2"));
    }

    #[test]
    fn test_invalid_size_aborts() {
        let (result, sink) = run_game(&[], &["a"]);

        assert!(matches!(result, Err(GameError::InvalidSize(_))));
        assert!(sink.contains("[ERROR]"));
        // The error line ends the run: nothing prints after it.
        assert!(sink.lines().last().unwrap().starts_with("[ERROR]"));
        assert!(!sink.contains(MOVE_PROMPT));
    }

    #[test]
    fn test_out_of_range_size_aborts() {
        let (result, sink) = run_game(&[], &["21"]);
        assert!(matches!(result, Err(GameError::InvalidSize(_))));
        assert!(sink.contains("[ERROR]"));
    }

    #[test]
    fn test_invalid_move_token_aborts() {
        let (result, sink) = run_game(&[1, 0, 1], &["3", "R"]);

        assert!(matches!(result, Err(GameError::InvalidMove(_))));
        assert!(sink.contains("[ERROR]"));
        assert!(sink.lines().last().unwrap().starts_with("[ERROR]"));
    }

    #[test]
    fn test_invalid_retry_choice_aborts() {
        let (result, sink) = run_game(&[1, 1, 0], &["3", "U", "D", "x"]);

        assert!(matches!(result, Err(GameError::InvalidRetryChoice(_))));
        assert!(sink.contains("[ERROR]"));
    }

    #[test]
    fn test_exhausted_input_aborts() {
        let (result, sink) = run_game(&[1, 0, 1], &["3"]);

        assert!(matches!(result, Err(GameError::InputExhausted)));
        assert!(sink.contains("[ERROR]"));
    }
}
