//! Keymaze Maze: the grid domain for `keymaze_search`.
//!
//! A [`Maze`] is parsed from text, wrapped in a [`MazeProblem`] and handed to
//! [`keymaze_search::solver::solve`], which walks initial → key → goal.
//!
//! ```
//! use keymaze_maze::{format_actions, MazeProblem};
//! use keymaze_search::policy::SearchPolicy;
//! use keymaze_search::solver::solve;
//!
//! let problem = MazeProblem::from_rows(&["XXXXX", "XIKGX", "XXXXX"]).unwrap();
//! let solution = solve(&problem, &SearchPolicy::default()).unwrap();
//! assert_eq!(format_actions(&solution.actions), "[R, R]");
//! ```

#![forbid(unsafe_code)]

pub mod demos;
pub mod error;
pub mod grid;
pub mod problem;
pub mod state;

pub use demos::{DemoMaze, DEMO_MAZES};
pub use error::MazeError;
pub use grid::{Cell, Maze};
pub use problem::{MazeProblem, MUD_STEP_COST};
pub use state::{action_letters, format_actions, Direction, MazeState};
