//! Maze parsing and replay errors.

use thiserror::Error;

use crate::state::{Direction, MazeState};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("maze has no rows")]
    Empty,

    /// Every row must be as wide as the first.
    #[error("row {row} has width {actual}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("unknown cell {ch:?} at {at}")]
    UnknownCell { ch: char, at: MazeState },

    #[error("maze has no initial cell 'I'")]
    MissingInitial,

    #[error("second initial cell at {second}, first at {first}")]
    DuplicateInitial { first: MazeState, second: MazeState },

    #[error("second key cell at {second}, first at {first}")]
    DuplicateKey { first: MazeState, second: MazeState },

    #[error("maze has no goal cell 'G'")]
    MissingGoal,

    /// Replaying an action list left the grid or entered a wall.
    #[error("step {step} moves {direction} from {from} into a wall or off the grid")]
    IllegalMove {
        step: usize,
        direction: Direction,
        from: MazeState,
    },
}
