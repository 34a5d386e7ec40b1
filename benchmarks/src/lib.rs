//! Shared maze builders for the keymaze benchmark suites.

use keymaze_maze::MazeProblem;

/// Open `size` x `size` grid with `I` top-left, `K` in the middle of the left
/// column and `G` bottom-right. Every `mud_every`-th interior cell is mud
/// when `mud_every > 0`.
///
/// # Panics
///
/// Panics if `size < 2`. Benchmark setup failures are fatal.
#[must_use]
pub fn open_grid(size: usize, mud_every: usize) -> MazeProblem {
    let mut cells: Vec<char> = (0..size * size)
        .map(|i| {
            if mud_every > 0 && i % mud_every == mud_every - 1 {
                'M'
            } else {
                '.'
            }
        })
        .collect();
    cells[0] = 'I';
    cells[(size / 2) * size] = 'K';
    cells[size * size - 1] = 'G';
    problem_from_cells(size, &cells)
}

/// Serpentine corridor: walls on every other row with a single gap that
/// alternates sides, so the only route sweeps the whole grid.
///
/// # Panics
///
/// Panics if `size < 3`. Benchmark setup failures are fatal.
#[must_use]
pub fn serpentine(size: usize) -> MazeProblem {
    let mut cells = vec!['.'; size * size];
    for row in (1..size).step_by(2) {
        let gap = if (row / 2) % 2 == 0 { size - 1 } else { 0 };
        for col in 0..size {
            if col != gap {
                cells[row * size + col] = 'X';
            }
        }
    }
    let last_row = size - 1 - (size - 1) % 2;
    cells[0] = 'I';
    cells[1] = 'K';
    cells[last_row * size + size / 2] = 'G';
    problem_from_cells(size, &cells)
}

fn problem_from_cells(width: usize, cells: &[char]) -> MazeProblem {
    let rows: Vec<String> = cells
        .chunks(width)
        .map(|row| row.iter().collect())
        .collect();
    MazeProblem::from_rows(&rows).expect("benchmark maze is well-formed")
}
