//! # Bridge Crossing
//!
//! A turn-based bridge crossing puzzle game for the terminal. A randomly
//! generated bridge has one safe lane (upper or lower) per position; the
//! player guesses lane by lane, sees a cumulative map of the crossing after
//! every move, and after a wrong step may retry the whole crossing on the
//! same bridge or quit.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: bridge generation, attempt state machine, map rendering
//! - [`runner`] — Orchestration loop driving the game against line-based I/O
//! - [`io`] — Input/output ports with console implementations and test doubles
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod io;
pub mod runner;
