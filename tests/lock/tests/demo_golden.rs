//! Golden outputs for the demo mazes.
//!
//! Changing the frontier tie-break, the direction order or the mud cost
//! changes these values.

use keymaze_maze::{action_letters, DemoMaze, DEMO_MAZES};
use keymaze_search::error::SearchError;
use keymaze_search::policy::SearchPolicy;
use keymaze_search::solver::{solve, Leg, SolveError};

struct Golden {
    name: &'static str,
    to_key: &'static str,
    to_goal: &'static str,
    expansions: [u64; 2],
    path_cost: i64,
}

const GOLDEN: &[Golden] = &[
    Golden {
        name: "open_mud",
        to_key: "DD",
        to_goal: "URRRRD",
        expansions: [2, 7],
        path_cost: 8,
    },
    Golden {
        name: "key_low",
        to_key: "DRRD",
        to_goal: "URRD",
        expansions: [7, 4],
        path_cost: 8,
    },
    Golden {
        name: "mud_barrier",
        to_key: "RRDD",
        to_goal: "UU",
        expansions: [8, 2],
        path_cost: 10,
    },
    Golden {
        name: "key_below",
        to_key: "D",
        to_goal: "UL",
        expansions: [1, 2],
        path_cost: 3,
    },
    Golden {
        name: "no_key",
        to_key: "",
        to_goal: "L",
        expansions: [0, 1],
        path_cost: 1,
    },
];

fn demo(name: &str) -> &'static DemoMaze {
    DemoMaze::find(name).unwrap_or_else(|| panic!("no demo named {name}"))
}

#[test]
fn solvable_demos_match_golden_legs() {
    for golden in GOLDEN {
        let problem = demo(golden.name).problem().unwrap();
        let solution = solve(&problem, &SearchPolicy::default()).unwrap();

        let (first, second) = solution.actions.split_at(solution.legs[0].action_count);
        assert_eq!(action_letters(first), golden.to_key, "{}", golden.name);
        assert_eq!(action_letters(second), golden.to_goal, "{}", golden.name);
        assert_eq!(
            [
                solution.legs[0].report.total_expansions,
                solution.legs[1].report.total_expansions
            ],
            golden.expansions,
            "{}",
            golden.name
        );
        assert_eq!(solution.path_cost(), golden.path_cost, "{}", golden.name);
    }
}

#[test]
fn sealed_demo_fails_on_key_leg() {
    let problem = demo("sealed_start").problem().unwrap();
    let err = solve(&problem, &SearchPolicy::default()).unwrap_err();
    assert_eq!(
        err,
        SolveError::Leg {
            leg: Leg::ToKey,
            source: SearchError::NoSolution { expansions: 2 },
        }
    );
}

#[test]
fn golden_table_covers_every_solvable_demo() {
    let names: Vec<&str> = DEMO_MAZES.iter().map(|d| d.name).collect();
    let mut covered: Vec<&str> = GOLDEN.iter().map(|g| g.name).collect();
    covered.push("sealed_start");
    assert_eq!(names, covered);
}

#[test]
fn solved_demo_paths_replay_to_a_goal() {
    for golden in GOLDEN {
        let problem = demo(golden.name).problem().unwrap();
        let solution = solve(&problem, &SearchPolicy::default()).unwrap();
        let maze = problem.maze();
        let visited = maze.trace(maze.initial(), &solution.actions).unwrap();
        let last = *visited.last().unwrap();
        assert!(maze.goals().contains(&last), "{} ends at {last}", golden.name);
    }
}
