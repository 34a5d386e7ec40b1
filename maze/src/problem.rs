//! The maze as a [`KeyedProblem`].

use keymaze_search::contract::{Cost, KeyedProblem, SearchProblem, Transition};

use crate::error::MazeError;
use crate::grid::{Cell, Maze};
use crate::state::{Direction, MazeState};

/// Cost of a move into a mud cell. Every other move costs 1.
pub const MUD_STEP_COST: Cost = 3;

/// A maze plus its resolved key position.
///
/// A maze without a `K` cell uses its initial cell as the key, which makes
/// the first leg of a solve empty.
#[derive(Debug, Clone)]
pub struct MazeProblem {
    maze: Maze,
    initial: MazeState,
    key: MazeState,
}

impl MazeProblem {
    #[must_use]
    pub fn new(maze: Maze) -> Self {
        let initial = maze.initial();
        let key = maze.key().unwrap_or(initial);
        Self { maze, initial, key }
    }

    /// # Errors
    ///
    /// Propagates [`Maze::from_rows`] errors.
    pub fn from_rows<R: AsRef<str>>(rows: &[R]) -> Result<Self, MazeError> {
        Maze::from_rows(rows).map(Self::new)
    }

    #[must_use]
    pub fn maze(&self) -> &Maze {
        &self.maze
    }
}

fn manhattan_cost(a: MazeState, b: MazeState) -> Cost {
    Cost::try_from(a.manhattan(b)).unwrap_or(Cost::MAX)
}

impl SearchProblem for MazeProblem {
    type State = MazeState;
    type Action = Direction;

    fn is_goal(&self, state: &MazeState) -> bool {
        self.maze.cell(*state) == Some(Cell::Goal)
    }

    fn distance_to_goal(&self, state: &MazeState) -> Cost {
        self.maze
            .goals()
            .iter()
            .map(|g| manhattan_cost(*state, *g))
            .min()
            .unwrap_or(0)
    }

    fn distance(&self, from: &MazeState, to: &MazeState) -> Cost {
        manhattan_cost(*from, *to)
    }

    fn step_cost(&self, _from: &MazeState, to: &MazeState) -> Cost {
        if self.maze.cell(*to) == Some(Cell::Mud) {
            MUD_STEP_COST
        } else {
            1
        }
    }

    fn transitions(&self, state: &MazeState) -> Vec<Transition<Direction, MazeState>> {
        self.maze
            .neighbors(*state)
            .map(|(d, next)| Transition::new(d, next))
            .collect()
    }
}

impl KeyedProblem for MazeProblem {
    fn initial_state(&self) -> &MazeState {
        &self.initial
    }

    fn key_state(&self) -> &MazeState {
        &self.key
    }

    fn goal_states(&self) -> &[MazeState] {
        self.maze.goals()
    }
}
