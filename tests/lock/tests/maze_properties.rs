//! Property tests on random mazes, checked against a breadth-first oracle.

use proptest::collection::vec;
use proptest::prelude::*;

use keymaze_maze::{Cell, MazeProblem};
use keymaze_search::contract::{KeyedProblem, SearchProblem};
use keymaze_search::policy::SearchPolicy;
use keymaze_search::solver::solve;
use lock_tests::grid_oracle::{bfs_steps, rows_from_cells};

/// Random 3x3 to 7x7 mazes with one `I`, one `K` and one or two `G` cells.
/// About 30% walls, and 10% mud when `mud` is set.
fn maze_rows(mud: bool) -> impl Strategy<Value = Vec<String>> {
    (3usize..8, 3usize..8)
        .prop_flat_map(|(w, h)| {
            let n = w * h;
            (
                Just(w),
                vec(0u8..10, n),
                0..n,
                0..n,
                0..n,
                proptest::option::of(0..n),
            )
        })
        .prop_filter_map(
            "special cells must be distinct",
            move |(w, codes, initial, key, goal, extra_goal)| {
                if initial == key || initial == goal || key == goal {
                    return None;
                }
                if extra_goal.is_some_and(|g| g == initial || g == key) {
                    return None;
                }
                let mut cells: Vec<char> = codes
                    .iter()
                    .map(|code| match code {
                        0..=2 => 'X',
                        3 if mud => 'M',
                        _ => '.',
                    })
                    .collect();
                cells[initial] = 'I';
                cells[key] = 'K';
                cells[goal] = 'G';
                if let Some(g) = extra_goal {
                    cells[g] = 'G';
                }
                Some(rows_from_cells(w, &cells))
            },
        )
}

proptest! {
    #[test]
    fn solutions_replay_through_key_to_a_goal(rows in maze_rows(true)) {
        let problem = MazeProblem::from_rows(&rows).unwrap();
        let maze = problem.maze();
        let key = *problem.key_state();
        let key_reachable = bfs_steps(maze, maze.initial(), |s| s == key).is_some();
        let goal_reachable =
            bfs_steps(maze, key, |s| maze.cell(s) == Some(Cell::Goal)).is_some();

        match solve(&problem, &SearchPolicy::default()) {
            Ok(solution) => {
                prop_assert!(key_reachable && goal_reachable);
                let visited = maze.trace(maze.initial(), &solution.actions).unwrap();
                prop_assert_eq!(visited[solution.legs[0].action_count], key);
                let last = *visited.last().unwrap();
                prop_assert!(problem.is_goal(&last));
                prop_assert_eq!(
                    solution.len(),
                    solution.legs[0].action_count + solution.legs[1].action_count
                );

                let replayed_cost: i64 = visited
                    .windows(2)
                    .map(|pair| problem.step_cost(&pair[0], &pair[1]))
                    .sum();
                prop_assert_eq!(replayed_cost, solution.path_cost());
            }
            Err(err) => {
                prop_assert!(err.is_no_solution(), "unexpected failure: {}", err);
                prop_assert!(!(key_reachable && goal_reachable));
            }
        }
    }

    #[test]
    fn mud_free_legs_have_fewest_moves(rows in maze_rows(false)) {
        let problem = MazeProblem::from_rows(&rows).unwrap();
        let maze = problem.maze();
        let key = *problem.key_state();
        if let Ok(solution) = solve(&problem, &SearchPolicy::default()) {
            let to_key = bfs_steps(maze, maze.initial(), |s| s == key);
            let to_goal = bfs_steps(maze, key, |s| maze.cell(s) == Some(Cell::Goal));
            prop_assert_eq!(Some(solution.legs[0].action_count), to_key);
            prop_assert_eq!(Some(solution.legs[1].action_count), to_goal);
        }
    }

    #[test]
    fn walled_in_key_gives_no_solution(rows in maze_rows(true)) {
        // Surround the key with walls; a key on the border is already sealed
        // on that side.
        let problem = MazeProblem::from_rows(&rows).unwrap();
        let key = *problem.key_state();
        let mut grid: Vec<Vec<char>> = rows.iter().map(|r| r.chars().collect()).collect();
        for (dc, dr) in [(0i64, -1i64), (0, 1), (-1, 0), (1, 0)] {
            let (Ok(col), Ok(row)) = (
                usize::try_from(i64::try_from(key.col).unwrap() + dc),
                usize::try_from(i64::try_from(key.row).unwrap() + dr),
            ) else {
                continue;
            };
            if let Some(cell) = grid.get_mut(row).and_then(|r| r.get_mut(col)) {
                if *cell != 'I' {
                    *cell = 'X';
                }
            }
        }
        let sealed: Vec<String> = grid.into_iter().map(|r| r.into_iter().collect()).collect();
        let problem = MazeProblem::from_rows(&sealed);
        prop_assume!(problem.is_ok());
        let problem = problem.unwrap();
        prop_assume!(problem.maze().initial().manhattan(key) > 1);

        let err = solve(&problem, &SearchPolicy::default()).unwrap_err();
        prop_assert!(err.is_no_solution());
    }
}
