//! Core bridge crossing game logic: bridge generation, the per-attempt state
//! machine, and cumulative map rendering.

mod bridge;
mod map;
mod state;

pub use bridge::{make_bridge, Bridge, Lane, SAFE_DRAW};
pub use map::render_rows;
pub use state::{BridgeGame, GameOutcome, MoveRecord, Phase};
