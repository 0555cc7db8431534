//! Coordinate bookkeeping for the 8x8 grid environment and the slip
//! classifier that compares a deterministic reading of each action against
//! the backend's authoritative result.

use crate::Action;

/// Fixed by the backend's "8x8" map; known on both sides of the wire.
pub const GRID_SIZE: i64 = 8;

/// Grid action codes.
pub const LEFT: Action = 0;
pub const DOWN: Action = 1;
pub const RIGHT: Action = 2;
pub const UP: Action = 3;

/// A grid cell. Derived from the backend's flat index; indices outside
/// `[0, GRID_SIZE * GRID_SIZE)` are out of contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coordinate {
    pub row: i64,
    pub col: i64,
}

impl Coordinate {
    pub fn from_index(index: i64) -> Self {
        Self {
            row: index / GRID_SIZE,
            col: index % GRID_SIZE,
        }
    }
}

/// Where a deterministic reading of `action` would land the agent. No bounds
/// clamping: an edge move predicts an off-board cell while the backend clamps
/// to the boundary, so edge attempts always classify as a slip. Preserved
/// behavior of the original front-end.
pub fn predict(from: Coordinate, action: Action) -> Coordinate {
    match action {
        LEFT => Coordinate {
            row: from.row,
            col: from.col - 1,
        },
        DOWN => Coordinate {
            row: from.row + 1,
            col: from.col,
        },
        RIGHT => Coordinate {
            row: from.row,
            col: from.col + 1,
        },
        UP => Coordinate {
            row: from.row - 1,
            col: from.col,
        },
        _ => from,
    }
}

/// Retains the agent's believed position and classifies each completed step
/// as slipped or as intended.
#[derive(Debug, Clone, Copy)]
pub struct PositionTracker {
    current: Coordinate,
}

impl PositionTracker {
    pub fn new(start: Coordinate) -> Self {
        Self { current: start }
    }

    pub fn current(&self) -> Coordinate {
        self.current
    }

    /// Compares the predicted landing cell against the backend's reported
    /// index, retains the reported cell, and returns whether the agent
    /// slipped.
    pub fn observe(&mut self, action: Action, new_index: i64) -> bool {
        let expected = predict(self.current, action);
        let actual = Coordinate::from_index(new_index);
        self.current = actual;

        expected != actual
    }
}
