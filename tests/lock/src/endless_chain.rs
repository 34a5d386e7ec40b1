//! An implicit graph with no end: state `n` always leads to `n + 1`.

use std::thread;
use std::time::Duration;

use keymaze_search::contract::{Cost, SearchProblem, Transition};

/// Successors are generated on demand; the frontier never empties.
#[derive(Debug, Default, Clone, Copy)]
pub struct EndlessChain {
    /// Sleep this long in every `transitions` call.
    pub step_delay: Option<Duration>,
}

impl EndlessChain {
    #[must_use]
    pub fn slow(step_delay: Duration) -> Self {
        Self {
            step_delay: Some(step_delay),
        }
    }
}

impl SearchProblem for EndlessChain {
    type State = u64;
    type Action = u64;

    fn is_goal(&self, _state: &u64) -> bool {
        false
    }

    fn distance_to_goal(&self, _state: &u64) -> Cost {
        0
    }

    fn distance(&self, _from: &u64, _to: &u64) -> Cost {
        0
    }

    fn transitions(&self, state: &u64) -> Vec<Transition<u64, u64>> {
        if let Some(delay) = self.step_delay {
            thread::sleep(delay);
        }
        let next = state.saturating_add(1);
        vec![Transition::new(next, next)]
    }
}
