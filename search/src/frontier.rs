//! Best-first frontier with state membership tracking.
//!
//! The heap orders entries by [`FrontierKey`]; a parallel `HashSet` answers
//! "is this state waiting to be expanded" in O(1).

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};
use std::hash::Hash;

use crate::error::SearchError;
use crate::node::{FrontierKey, NodeId};

/// A frontier entry wrapping a node id with its ordering key.
///
/// `BinaryHeap` is a max-heap, so we use `Reverse<FrontierKey>` to get
/// min-heap behavior (lowest priority first).
#[derive(Debug)]
struct FrontierEntry<S> {
    key: Reverse<FrontierKey>,
    state: S,
}

impl<S> PartialEq for FrontierEntry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<S> Eq for FrontierEntry<S> {}

impl<S> PartialOrd for FrontierEntry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for FrontierEntry<S> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Best-first frontier manager.
///
/// Maintains:
/// - A `BinaryHeap` for O(log n) pop of the best node
/// - A `HashSet` of states currently held, for duplicate suppression
pub struct Frontier<S> {
    heap: BinaryHeap<FrontierEntry<S>>,
    members: HashSet<S>,
    high_water: usize,
}

impl<S: Clone + Eq + Hash> Frontier<S> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            members: HashSet::new(),
            high_water: 0,
        }
    }

    /// Push a node for `state`.
    ///
    /// Returns `false` if `state` is already held (node not added).
    pub fn push(&mut self, key: FrontierKey, state: S) -> bool {
        if !self.members.insert(state.clone()) {
            return false;
        }
        self.heap.push(FrontierEntry {
            key: Reverse(key),
            state,
        });
        self.high_water = self.high_water.max(self.heap.len());
        true
    }

    /// Remove and return the node with the smallest key.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::EmptyFrontier`] if nothing is held.
    pub fn pop(&mut self) -> Result<NodeId, SearchError> {
        let entry = self.heap.pop().ok_or(SearchError::EmptyFrontier)?;
        self.members.remove(&entry.state);
        Ok(entry.key.0.node)
    }

    /// Smallest key without removing it.
    #[must_use]
    pub fn peek_key(&self) -> Option<FrontierKey> {
        self.heap.peek().map(|e| e.key.0)
    }

    /// Whether some held node has `state`.
    #[must_use]
    pub fn contains_state(&self, state: &S) -> bool {
        self.members.contains(state)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}

impl<S: Clone + Eq + Hash> Default for Frontier<S> {
    fn default() -> Self {
        Self::new()
    }
}
