//! Path reconstruction from a terminal node back to the root.

use crate::node::{NodeId, SearchTree};

/// Actions from the root to `terminal`, in execution order.
///
/// Walks parent links until the root and reverses. The root's own (absent)
/// action is never included, so the root alone yields an empty path.
#[must_use]
pub fn build_path<S, A: Clone>(tree: &SearchTree<S, A>, terminal: NodeId) -> Vec<A> {
    let mut actions = Vec::new();
    let mut current = tree.node(terminal);

    while let (Some(parent), Some(action)) = (current.parent, current.action.as_ref()) {
        actions.push(action.clone());
        current = tree.node(parent);
    }

    actions.reverse();
    actions
}

/// States from the root to `terminal`, both included.
#[must_use]
pub fn build_state_path<S: Clone, A>(tree: &SearchTree<S, A>, terminal: NodeId) -> Vec<S> {
    let mut states = Vec::new();
    let mut current_id = Some(terminal);

    while let Some(id) = current_id {
        let node = tree.node(id);
        states.push(node.state.clone());
        current_id = node.parent;
    }

    states.reverse();
    states
}
