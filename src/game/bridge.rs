use crate::error::GameError;

/// The generator draw that marks a position as safe on the upper lane.
pub const SAFE_DRAW: u32 = 1;

/// One of the two lanes the player can step on at each bridge position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lane {
    Up,
    Down,
}

impl Lane {
    /// Parse a player token. Only the exact tokens "U" and "D" are accepted;
    /// anything else (including lowercase) is an invalid move.
    pub fn from_token(token: &str) -> Result<Lane, GameError> {
        match token {
            "U" => Ok(Lane::Up),
            "D" => Ok(Lane::Down),
            other => Err(GameError::InvalidMove(other.to_string())),
        }
    }

    /// Get the other lane
    pub fn other(self) -> Lane {
        match self {
            Lane::Up => Lane::Down,
            Lane::Down => Lane::Up,
        }
    }

    /// Input token for this lane
    pub fn token(self) -> &'static str {
        match self {
            Lane::Up => "U",
            Lane::Down => "D",
        }
    }
}

/// Immutable safe-lane sequence, one marker per bridge position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bridge {
    lanes: Vec<Lane>,
}

impl Bridge {
    /// Number of positions to cross.
    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }

    /// The safe lane at a position. Row 0 of the rendered map is the upper lane.
    pub fn lane_at(&self, position: usize) -> Lane {
        self.lanes[position]
    }
}

/// Build a bridge of `size` positions, drawing from `gen` exactly once per
/// position in order. A draw equal to [`SAFE_DRAW`] marks the upper lane
/// safe; any other value marks the lower lane.
pub fn make_bridge(size: usize, mut gen: impl FnMut() -> u32) -> Result<Bridge, GameError> {
    if size == 0 {
        return Err(GameError::InvalidSize(
            "0 (must be at least 1)".to_string(),
        ));
    }

    let lanes = (0..size)
        .map(|_| {
            if gen() == SAFE_DRAW {
                Lane::Up
            } else {
                Lane::Down
            }
        })
        .collect();

    Ok(Bridge { lanes })
}
