//! Arena-backed node storage
//!
//! Nodes form a tree through parent links reachable from many frontier
//! entries at once, and every node must outlive the search so the winning
//! parent chain can be walked afterwards. Storing nodes in a flat arena and
//! linking them by index keeps ownership simple: the arena owns everything,
//! handles are `Copy`, and parent traversal stays O(1).

use crate::board::grid::Board;

/// Handle into a [`NodeArena`]
///
/// Only valid for the arena that minted it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Search node: a board plus bookkeeping, immutable once allocated
#[derive(Debug, Clone)]
pub struct Node {
    /// Board configuration this node represents
    pub board: Board,
    /// Cached blank position, maintained incrementally during expansion
    pub blank: (usize, usize),
    /// Moves from the root to this node
    pub path_cost: u32,
    /// Total estimated cost f = `path_cost` + Manhattan distance
    pub estimate: u32,
    /// Node this one was expanded from; `None` for the root
    pub parent: Option<NodeId>,
}

/// Append-only store of every node allocated during a search
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    /// Create an empty arena
    pub const fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Allocate a node and return its handle
    pub fn insert(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Look up a node by handle
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Number of nodes allocated so far
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no nodes have been allocated
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{Node, NodeArena};
    use crate::board::grid::Board;

    #[test]
    fn test_handles_resolve_to_inserted_nodes() {
        let mut arena = NodeArena::new();
        assert!(arena.is_empty());

        let root = arena.insert(Node {
            board: Board::solved(3),
            blank: (2, 2),
            path_cost: 0,
            estimate: 0,
            parent: None,
        });
        let child = arena.insert(Node {
            board: Board::solved(3),
            blank: (2, 2),
            path_cost: 1,
            estimate: 2,
            parent: Some(root),
        });

        assert_eq!(arena.len(), 2);
        assert!(arena.get(root).is_some_and(|n| n.parent.is_none()));
        assert!(arena.get(child).is_some_and(|n| n.parent == Some(root)));
    }
}
