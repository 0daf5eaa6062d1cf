//! MCTS tree structure with arena allocation.
//!
//! The tree uses arena allocation for efficient node storage and
//! cache-friendly traversal. Nodes are stored in a contiguous Vec
//! and referenced by NodeId indices. A child's parent link is a plain
//! index, so there is no shared ownership between parent and child.

use engine_core::GameState;

use crate::node::{MctsNode, NodeId};

/// MCTS tree with arena-based node storage.
#[derive(Debug)]
pub struct MctsTree<S> {
    /// Arena storing all nodes
    nodes: Vec<MctsNode<S>>,

    /// Root node index (always 0 after initialization)
    root: NodeId,
}

impl<S> MctsTree<S> {
    /// Create a new tree with the given root state.
    pub fn new(root_state: S) -> Self {
        Self {
            nodes: vec![MctsNode::new_root(root_state)],
            root: NodeId(0),
        }
    }

    /// Get the root node ID.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a reference to a node by ID.
    #[inline]
    pub fn get(&self, id: NodeId) -> &MctsNode<S> {
        &self.nodes[id.0 as usize]
    }

    /// Get a mutable reference to a node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut MctsNode<S> {
        &mut self.nodes[id.0 as usize]
    }

    /// Allocate a new node and return its ID.
    pub fn allocate(&mut self, node: MctsNode<S>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Get the total number of nodes in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty (should never be true after construction).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get the arena slice for read access.
    #[inline]
    pub fn arena(&self) -> &[MctsNode<S>] {
        &self.nodes
    }

    /// Consume the tree and return the root position.
    pub fn into_root_state(mut self) -> S {
        self.nodes.swap_remove(self.root.0 as usize).state
    }

    /// Add a child to a parent node.
    /// Returns the new child's NodeId.
    pub fn add_child(&mut self, parent_id: NodeId, state: S) -> NodeId {
        let child_id = self.allocate(MctsNode::new_child(parent_id, state));
        self.get_mut(parent_id).children.push(child_id);
        child_id
    }

    /// Select the best child of a node.
    ///
    /// Any unvisited child is returned immediately (first in creation order).
    /// Otherwise the child with the highest UCB1 score wins; ties go to the
    /// earlier child. Returns None if the node has no children.
    pub fn best_child(&self, node_id: NodeId, exploration: f64) -> Option<NodeId> {
        let node = self.get(node_id);
        // Pre-compute ln once instead of per-child comparison
        let parent_visits_ln = (node.visit_count as f64).ln();

        let mut best: Option<(NodeId, f64)> = None;
        for &child_id in &node.children {
            let child = self.get(child_id);
            if child.visit_count == 0 {
                return Some(child_id);
            }
            let score = child.ucb1_score(parent_visits_ln, exploration);
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((child_id, score)),
            }
        }

        best.map(|(id, _)| id)
    }

    /// Backpropagate a value from a leaf to the root.
    /// Value is negated at each level (opponent's perspective).
    pub fn backpropagate(&mut self, leaf_id: NodeId, value: f64) {
        let mut current_id = leaf_id;
        let mut current_value = value;

        while current_id.is_some() {
            let node = self.get_mut(current_id);
            node.record(current_value);

            // Negate for opponent's perspective
            current_value = -current_value;

            current_id = node.parent;
        }
    }

    /// Visit counts of the root's children, in creation order.
    pub fn root_visits(&self) -> Vec<u32> {
        self.get(self.root)
            .children
            .iter()
            .map(|id| self.get(*id).visit_count)
            .collect()
    }

    /// Get statistics about the tree for debugging.
    pub fn stats(&self) -> TreeStats {
        let root = self.get(self.root);
        TreeStats {
            total_nodes: self.nodes.len(),
            root_visits: root.visit_count,
            root_value: root.mean_value(),
            max_depth: self.compute_max_depth(self.root, 0),
        }
    }

    fn compute_max_depth(&self, node_id: NodeId, current_depth: u32) -> u32 {
        let node = self.get(node_id);
        if node.children.is_empty() {
            return current_depth;
        }

        node.children
            .iter()
            .map(|id| self.compute_max_depth(*id, current_depth + 1))
            .max()
            .unwrap_or(current_depth)
    }
}

impl<S: GameState> MctsTree<S> {
    /// Whether every successor of the node's position has been materialized.
    ///
    /// Compares counts only, so it relies on `next_states` being deterministic.
    /// A non-terminal position without successors counts as fully expanded.
    pub fn is_fully_expanded(&self, node_id: NodeId) -> bool {
        let node = self.get(node_id);
        node.children.len() >= node.state.next_states().len()
    }

    /// Whether a position equal to `state` is already a child of the node.
    pub fn has_child_state(&self, node_id: NodeId, state: &S) -> bool {
        self.get(node_id)
            .children
            .iter()
            .any(|id| self.get(*id).state == *state)
    }
}

/// Statistics about an MCTS tree.
#[derive(Debug, Clone)]
pub struct TreeStats {
    pub total_nodes: usize,
    pub root_visits: u32,
    pub root_value: f64,
    pub max_depth: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::Toy;

    #[test]
    fn test_new_tree() {
        let tree = MctsTree::new(Toy::Duel);

        assert_eq!(tree.len(), 1);
        assert_eq!(tree.root(), NodeId(0));

        let root = tree.get(tree.root());
        assert!(root.parent.is_none());
        assert_eq!(root.state, Toy::Duel);
    }

    #[test]
    fn test_add_child() {
        let mut tree = MctsTree::new(Toy::Duel);

        let child_id = tree.add_child(tree.root(), Toy::Leaf { value: 1.0 });

        assert_eq!(tree.len(), 2);
        assert_eq!(child_id, NodeId(1));

        let root = tree.get(tree.root());
        assert_eq!(root.children, vec![NodeId(1)]);

        let child = tree.get(child_id);
        assert_eq!(child.parent, tree.root());
        assert!(tree.has_child_state(tree.root(), &Toy::Leaf { value: 1.0 }));
        assert!(!tree.has_child_state(tree.root(), &Toy::Leaf { value: -1.0 }));
    }

    #[test]
    fn test_backpropagate() {
        let mut tree = MctsTree::new(Toy::Inner(0));

        // Create a chain: root -> child -> grandchild
        let child_id = tree.add_child(tree.root(), Toy::Inner(1));
        let grandchild_id = tree.add_child(child_id, Toy::Leaf { value: 1.0 });

        // Backpropagate value 1.0 from grandchild
        tree.backpropagate(grandchild_id, 1.0);

        // Check visits
        assert_eq!(tree.get(grandchild_id).visit_count, 1);
        assert_eq!(tree.get(child_id).visit_count, 1);
        assert_eq!(tree.get(tree.root()).visit_count, 1);

        // Check values (negated at each level)
        assert!((tree.get(grandchild_id).value_sum - 1.0).abs() < 1e-12);
        assert!((tree.get(child_id).value_sum - (-1.0)).abs() < 1e-12);
        assert!((tree.get(tree.root()).value_sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_backpropagate_accumulates_sign_flipped_sums() {
        let mut tree = MctsTree::new(Toy::Inner(0));
        let child_id = tree.add_child(tree.root(), Toy::Inner(1));

        for value in [0.5, -1.0, 0.25] {
            tree.backpropagate(child_id, value);
        }

        let child = tree.get(child_id);
        let root = tree.get(tree.root());
        assert_eq!(child.visit_count, 3);
        assert_eq!(root.visit_count, 3);
        assert!((child.value_sum - (-0.25)).abs() < 1e-12);
        assert!((root.value_sum - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_best_child_prefers_unvisited() {
        let mut tree = MctsTree::new(Toy::Duel);
        let strong = tree.add_child(tree.root(), Toy::Leaf { value: 1.0 });
        let fresh = tree.add_child(tree.root(), Toy::Leaf { value: -1.0 });

        // The visited child has a perfect record, the other none at all
        for _ in 0..5 {
            tree.backpropagate(strong, 1.0);
        }

        assert_eq!(tree.best_child(tree.root(), 1.0), Some(fresh));
        assert_eq!(tree.best_child(tree.root(), 100.0), Some(fresh));
    }

    #[test]
    fn test_best_child_exploitation_only() {
        let mut tree = MctsTree::new(Toy::Duel);
        let worse = tree.add_child(tree.root(), Toy::Leaf { value: -1.0 });
        let better = tree.add_child(tree.root(), Toy::Leaf { value: 1.0 });

        tree.backpropagate(worse, -1.0);
        tree.backpropagate(better, 1.0);

        assert_eq!(tree.best_child(tree.root(), 0.0), Some(better));
    }

    #[test]
    fn test_best_child_exploration_favours_rarely_visited() {
        let mut tree = MctsTree::new(Toy::Duel);
        let busy = tree.add_child(tree.root(), Toy::Leaf { value: 1.0 });
        let rare = tree.add_child(tree.root(), Toy::Leaf { value: -1.0 });

        // busy: mean 0.2 over 20 visits, rare: mean 0.0 over 1 visit
        for i in 0..20 {
            tree.backpropagate(busy, if i % 5 == 0 { 1.0 } else { 0.0 });
        }
        tree.backpropagate(rare, 0.0);

        assert_eq!(tree.best_child(tree.root(), 0.0), Some(busy));
        assert_eq!(
            tree.best_child(tree.root(), std::f64::consts::SQRT_2),
            Some(rare)
        );
    }

    #[test]
    fn test_best_child_ties_go_to_first_created() {
        let mut tree = MctsTree::new(Toy::Twins);
        let first = tree.add_child(tree.root(), Toy::Leaf { value: 0.5 });
        let second = tree.add_child(tree.root(), Toy::Leaf { value: 0.4 });

        tree.backpropagate(first, 0.5);
        tree.backpropagate(second, 0.5);

        assert_eq!(tree.best_child(tree.root(), 0.0), Some(first));
        assert_eq!(tree.best_child(tree.root(), 1.0), Some(first));
    }

    #[test]
    fn test_best_child_without_children() {
        let tree = MctsTree::new(Toy::Stuck);
        assert_eq!(tree.best_child(tree.root(), 1.0), None);
    }

    #[test]
    fn test_is_fully_expanded() {
        let mut tree = MctsTree::new(Toy::Duel);
        assert!(!tree.is_fully_expanded(tree.root()));

        tree.add_child(tree.root(), Toy::Leaf { value: -1.0 });
        assert!(!tree.is_fully_expanded(tree.root()));

        tree.add_child(tree.root(), Toy::Leaf { value: 1.0 });
        assert!(tree.is_fully_expanded(tree.root()));

        // No successors at all
        let stuck = MctsTree::new(Toy::Stuck);
        assert!(stuck.is_fully_expanded(stuck.root()));
    }

    #[test]
    fn test_root_visits_in_creation_order() {
        let mut tree = MctsTree::new(Toy::Duel);
        let a = tree.add_child(tree.root(), Toy::Leaf { value: -1.0 });
        let b = tree.add_child(tree.root(), Toy::Leaf { value: 1.0 });

        tree.backpropagate(a, -1.0);
        tree.backpropagate(b, 1.0);
        tree.backpropagate(b, 1.0);

        assert_eq!(tree.root_visits(), vec![1, 2]);
    }

    #[test]
    fn test_tree_stats() {
        let mut tree = MctsTree::new(Toy::Inner(0));
        let child = tree.add_child(tree.root(), Toy::Inner(1));
        tree.add_child(child, Toy::Leaf { value: 1.0 });
        tree.backpropagate(child, 0.5);

        let stats = tree.stats();
        assert_eq!(stats.total_nodes, 3);
        assert_eq!(stats.max_depth, 2);
        assert_eq!(stats.root_visits, 1);
        assert!((stats.root_value - (-0.5)).abs() < 1e-12);
    }

    #[test]
    fn test_into_root_state() {
        let mut tree = MctsTree::new(Toy::Duel);
        tree.add_child(tree.root(), Toy::Leaf { value: 1.0 });
        assert_eq!(tree.into_root_state(), Toy::Duel);
    }
}
