//! Built-in demo mazes, also used as golden fixtures by the lock tests.

use crate::error::MazeError;
use crate::problem::MazeProblem;

/// A named maze shipped with the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoMaze {
    pub name: &'static str,
    pub rows: &'static [&'static str],
}

impl DemoMaze {
    /// # Errors
    ///
    /// Only if the demo itself is malformed.
    pub fn problem(&self) -> Result<MazeProblem, MazeError> {
        MazeProblem::from_rows(self.rows)
    }

    #[must_use]
    pub fn find(name: &str) -> Option<&'static DemoMaze> {
        DEMO_MAZES.iter().find(|d| d.name == name)
    }
}

/// The demo set, in display order. The last one has no solution.
pub const DEMO_MAZES: &[DemoMaze] = &[
    DemoMaze {
        name: "open_mud",
        rows: &["XXXXXXX", "XI.M..X", "X.....X", "XKX.XGX", "XXXXXXX"],
    },
    DemoMaze {
        name: "key_low",
        rows: &["XXXXXXX", "XI....X", "X.....X", "X.XKXGX", "XXXXXXX"],
    },
    DemoMaze {
        name: "mud_barrier",
        rows: &["XXXXXXX", "XI.G..X", "X.MMMGX", "X.XKX.X", "XXXXXXX"],
    },
    DemoMaze {
        name: "key_below",
        rows: &["XXXXXXX", "X.....X", "X.GIMGX", "X.XKX.X", "XXXXXXX"],
    },
    DemoMaze {
        name: "no_key",
        rows: &["XXXXXXX", "X.....X", "X.GIMGX", "X.X.X.X", "XXXXXXX"],
    },
    DemoMaze {
        name: "sealed_start",
        rows: &["XXXXXXX", "XK.X..X", "X.XIXGX", "X.X.X.X", "XXXXXXX"],
    },
];
