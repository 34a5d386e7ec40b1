//! In-process determinism: repeated runs produce byte-identical reports.

use keymaze_maze::{MazeProblem, DEMO_MAZES};
use keymaze_search::contract::KeyedProblem;
use keymaze_search::policy::SearchPolicy;
use keymaze_search::search::search;
use keymaze_search::solver::solve;
use lock_tests::grid_oracle::rows_from_cells;

fn open_grid(size: usize) -> MazeProblem {
    let mut cells = vec!['.'; size * size];
    cells[0] = 'I';
    cells[size * size / 2] = 'K';
    cells[size * size - 1] = 'G';
    MazeProblem::from_rows(&rows_from_cells(size, &cells)).unwrap()
}

#[test]
fn demo_solution_digests_stable_n10() {
    let policy = SearchPolicy::default();
    for demo in DEMO_MAZES {
        let problem = demo.problem().unwrap();
        let Ok(first) = solve(&problem, &policy) else {
            continue;
        };
        let first_digest = first.digest();
        for _ in 1..10 {
            let other = solve(&problem, &policy).unwrap();
            assert_eq!(first_digest, other.digest(), "{} digest drifted", demo.name);
            assert_eq!(first.actions, other.actions);
        }
    }
}

#[test]
fn report_bytes_stable_on_open_grid_n10() {
    let problem = open_grid(24);
    let policy = SearchPolicy::default();
    let start = *problem.initial_state();
    let goal = problem.maze().goals()[0];

    let first = search(&problem, &start, &goal, &policy).unwrap();
    let first_bytes = first.report.to_canonical_json_bytes();
    for _ in 1..10 {
        let other = search(&problem, &start, &goal, &policy).unwrap();
        assert_eq!(
            first_bytes,
            other.report.to_canonical_json_bytes(),
            "SearchReport bytes differ across runs"
        );
        assert_eq!(first.actions, other.actions);
    }
}

#[test]
fn report_json_is_canonical() {
    let problem = open_grid(8);
    let solution = solve(&problem, &SearchPolicy::default()).unwrap();
    let report = &solution.legs[0].report;
    let bytes = report.to_canonical_json_bytes();
    let text = String::from_utf8(bytes.clone()).unwrap();
    assert!(!text.contains(' '), "canonical JSON is compact: {text}");

    let reparsed: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let keys: Vec<&String> = reparsed.as_object().unwrap().keys().collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
    assert!(report.digest().starts_with("sha256:"));
    assert_eq!(report.digest().len(), "sha256:".len() + 64);
}
