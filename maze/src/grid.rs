//! Maze grid: cell semantics, parsing, replay and rendering.
//!
//! # Text format
//!
//! One line per row, one character per cell:
//!
//! ```text
//! XXXXXXX
//! XI.M..X
//! X.....X
//! XKX.XGX
//! XXXXXXX
//! ```
//!
//! `X` wall, `.` open, `I` initial, `K` key, `G` goal, `M` mud. Positions
//! outside the grid behave like walls.

use std::fmt;
use std::str::FromStr;

use crate::error::MazeError;
use crate::state::{Direction, MazeState};

/// Character used by [`Maze::render_path`] for cells the path crosses.
pub const PATH_MARK: char = '*';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Wall,
    Open,
    Mud,
    Initial,
    Key,
    Goal,
}

impl Cell {
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'X' => Some(Self::Wall),
            '.' => Some(Self::Open),
            'M' => Some(Self::Mud),
            'I' => Some(Self::Initial),
            'K' => Some(Self::Key),
            'G' => Some(Self::Goal),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::Wall => 'X',
            Self::Open => '.',
            Self::Mud => 'M',
            Self::Initial => 'I',
            Self::Key => 'K',
            Self::Goal => 'G',
        }
    }

    #[must_use]
    pub fn is_passable(self) -> bool {
        self != Self::Wall
    }
}

/// A parsed rectangular maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    width: usize,
    height: usize,
    /// Row-major.
    cells: Vec<Cell>,
    initial: MazeState,
    key: Option<MazeState>,
    /// Row-major order.
    goals: Vec<MazeState>,
}

impl Maze {
    /// Parse a maze from its rows.
    ///
    /// # Errors
    ///
    /// Returns a [`MazeError`] for empty input, rows of unequal width,
    /// unknown characters, a missing or repeated `I`, a repeated `K`, or no `G`.
    pub fn from_rows<R: AsRef<str>>(rows: &[R]) -> Result<Self, MazeError> {
        let first = rows.first().ok_or(MazeError::Empty)?;
        let width = first.as_ref().chars().count();
        if width == 0 {
            return Err(MazeError::Empty);
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        let mut initial: Option<MazeState> = None;
        let mut key: Option<MazeState> = None;
        let mut goals = Vec::new();

        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let actual = line.chars().count();
            if actual != width {
                return Err(MazeError::RaggedRow {
                    row,
                    expected: width,
                    actual,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let at = MazeState::new(col, row);
                let cell = Cell::from_char(ch).ok_or(MazeError::UnknownCell { ch, at })?;
                match cell {
                    Cell::Initial => {
                        if let Some(first) = initial {
                            return Err(MazeError::DuplicateInitial { first, second: at });
                        }
                        initial = Some(at);
                    }
                    Cell::Key => {
                        if let Some(first) = key {
                            return Err(MazeError::DuplicateKey { first, second: at });
                        }
                        key = Some(at);
                    }
                    Cell::Goal => goals.push(at),
                    Cell::Wall | Cell::Open | Cell::Mud => {}
                }
                cells.push(cell);
            }
        }

        let initial = initial.ok_or(MazeError::MissingInitial)?;
        if goals.is_empty() {
            return Err(MazeError::MissingGoal);
        }

        Ok(Self {
            width,
            height: rows.len(),
            cells,
            initial,
            key,
            goals,
        })
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn initial(&self) -> MazeState {
        self.initial
    }

    /// The key cell, if the maze has one.
    #[must_use]
    pub fn key(&self) -> Option<MazeState> {
        self.key
    }

    #[must_use]
    pub fn goals(&self) -> &[MazeState] {
        &self.goals
    }

    /// The cell at `at`, or `None` outside the grid.
    #[must_use]
    pub fn cell(&self, at: MazeState) -> Option<Cell> {
        if at.col >= self.width || at.row >= self.height {
            return None;
        }
        self.cells.get(at.row * self.width + at.col).copied()
    }

    #[must_use]
    pub fn is_passable(&self, at: MazeState) -> bool {
        self.cell(at).is_some_and(Cell::is_passable)
    }

    /// Passable neighbours of `at`, in [`Direction::ALL`] order.
    pub fn neighbors(&self, at: MazeState) -> impl Iterator<Item = (Direction, MazeState)> + '_ {
        Direction::ALL.into_iter().filter_map(move |d| {
            let next = at.step(d)?;
            self.is_passable(next).then_some((d, next))
        })
    }

    /// Replay `actions` from `start`, returning every visited position
    /// (start included).
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::IllegalMove`] at the first step that leaves the
    /// grid or enters a wall.
    pub fn trace(
        &self,
        start: MazeState,
        actions: &[Direction],
    ) -> Result<Vec<MazeState>, MazeError> {
        let mut visited = Vec::with_capacity(actions.len() + 1);
        visited.push(start);
        let mut at = start;
        for (step, &direction) in actions.iter().enumerate() {
            at = at
                .step(direction)
                .filter(|next| self.is_passable(*next))
                .ok_or(MazeError::IllegalMove {
                    step,
                    direction,
                    from: at,
                })?;
            visited.push(at);
        }
        Ok(visited)
    }

    /// Draw the maze with open and mud cells on the path replaced by `*`.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::IllegalMove`] if the path cannot be replayed.
    pub fn render_path(&self, start: MazeState, actions: &[Direction]) -> Result<String, MazeError> {
        let mut marks: Vec<char> = self.cells.iter().map(|c| c.as_char()).collect();
        for at in self.trace(start, actions)? {
            let index = at.row * self.width + at.col;
            if matches!(self.cells[index], Cell::Open | Cell::Mud) {
                marks[index] = PATH_MARK;
            }
        }
        Ok(marks
            .chunks(self.width)
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

impl FromStr for Maze {
    type Err = MazeError;

    /// Parse newline-separated rows. Blank lines and trailing whitespace are
    /// ignored.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .collect();
        Self::from_rows(&rows)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.width).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.as_char())?;
            }
        }
        Ok(())
    }
}
