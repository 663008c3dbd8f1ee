//! Line-based input and output ports for the game runner.
//!
//! The runner never touches the console directly: it reads tokens from a
//! [`LineSource`] and writes through a [`LineSink`]. The binary wires in the
//! console implementations; tests use [`ScriptedSource`] and
//! [`RecordingSink`] to drive deterministic runs.

use std::collections::VecDeque;
use std::io::BufRead;

/// Source of player input, one trimmed line per call.
pub trait LineSource {
    /// Next input line, or `None` once input is exhausted.
    fn read_line(&mut self) -> Option<String>;
}

/// Sink for game output lines.
pub trait LineSink {
    fn print_line(&mut self, line: &str);
}

impl<T: LineSource + ?Sized> LineSource for &mut T {
    fn read_line(&mut self) -> Option<String> {
        (**self).read_line()
    }
}

impl<T: LineSink + ?Sized> LineSink for &mut T {
    fn print_line(&mut self, line: &str) {
        (**self).print_line(line)
    }
}

/// Reads player input from stdin.
#[derive(Debug, Default)]
pub struct ConsoleSource;

impl LineSource for ConsoleSource {
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match std::io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }
}

/// Writes game output to stdout.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl LineSink for ConsoleSink {
    fn print_line(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Feeds a fixed sequence of input lines.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    lines: VecDeque<String>,
}

impl ScriptedSource {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedSource {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl LineSource for ScriptedSource {
    fn read_line(&mut self) -> Option<String> {
        self.lines.pop_front()
    }
}

/// Records every printed line for later assertions.
#[derive(Debug, Default)]
pub struct RecordingSink {
    lines: Vec<String>,
}

impl RecordingSink {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Whether any recorded line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }

    /// Index of the first recorded line containing `needle`.
    pub fn position(&self, needle: &str) -> Option<usize> {
        self.lines.iter().position(|line| line.contains(needle))
    }
}

impl LineSink for RecordingSink {
    fn print_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}
