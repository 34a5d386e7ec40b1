//! Grid positions and moves.

use std::fmt;

/// A cell position: `col` grows rightwards, `row` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MazeState {
    pub col: usize,
    pub row: usize,
}

impl MazeState {
    #[must_use]
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    #[must_use]
    pub fn manhattan(self, other: Self) -> usize {
        self.col.abs_diff(other.col) + self.row.abs_diff(other.row)
    }

    /// The neighbouring position in `direction`, or `None` past the top/left edge.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Self> {
        let Self { col, row } = self;
        Some(match direction {
            Direction::Up => Self::new(col, row.checked_sub(1)?),
            Direction::Down => Self::new(col, row + 1),
            Direction::Left => Self::new(col.checked_sub(1)?, row),
            Direction::Right => Self::new(col + 1, row),
        })
    }
}

impl fmt::Display for MazeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.col, self.row)
    }
}

/// A move between adjacent cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Enumeration order for transitions.
    pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::Up => 'U',
            Self::Down => 'D',
            Self::Left => 'L',
            Self::Right => 'R',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Render actions as `[D, R, R, U]`.
#[must_use]
pub fn format_actions(actions: &[Direction]) -> String {
    let parts: Vec<String> = actions.iter().map(ToString::to_string).collect();
    format!("[{}]", parts.join(", "))
}

/// Compact form, one letter per action: `DRRU`.
#[must_use]
pub fn action_letters(actions: &[Direction]) -> String {
    actions.iter().map(|d| d.as_char()).collect()
}
