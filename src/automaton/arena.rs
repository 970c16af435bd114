//! Index-addressed node storage.
//!
//! All nodes of one automaton live in a single `Vec`. Parent, child and failure
//! relations are [`NodeId`]s into it, so the resolved graph can point backwards and
//! sideways without any borrowing between nodes.

use std::ops::{Index, IndexMut};

use super::node::{Node, NodeId};
use super::symbol::Symbol;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct NodeArena<C: Symbol> {
    nodes: Vec<Node<C>>,
}

impl<C: Symbol> NodeArena<C> {
    /// Creates an arena holding only the root.
    pub fn new() -> Self {
        NodeArena {
            nodes: vec![Node::root()],
        }
    }

    /// Allocates a child of `parent` on `symbol` and links it in.
    ///
    /// The caller must have checked that `parent` has no `symbol` edge yet.
    ///
    /// # Panics
    ///
    /// Panics if the arena already holds `u32::MAX` nodes.
    pub fn alloc_child(&mut self, parent: NodeId, symbol: C) -> NodeId {
        let raw = u32::try_from(self.nodes.len())
            .unwrap_or_else(|_| panic!("automaton exceeds {} nodes", u32::MAX));
        let id = NodeId::from_raw(raw);
        self.nodes.push(Node::child_of(id, parent, symbol));
        self[parent].insert(symbol, id);
        id
    }

    /// Returns the number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn get(&self, id: NodeId) -> Option<&Node<C>> {
        self.nodes.get(id.index())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node<C>> {
        self.nodes.iter()
    }
}

impl<C: Symbol> Index<NodeId> for NodeArena<C> {
    type Output = Node<C>;

    #[inline]
    fn index(&self, id: NodeId) -> &Node<C> {
        &self.nodes[id.index()]
    }
}

impl<C: Symbol> IndexMut<NodeId> for NodeArena<C> {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut Node<C> {
        &mut self.nodes[id.index()]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn new_arena_holds_the_root() {
        let arena = NodeArena::<char>::new();
        assert_eq!(arena.len(), 1);
        assert_eq!(arena[NodeId::ROOT].id(), NodeId::ROOT);
    }

    #[test]
    fn ids_follow_creation_order() {
        let mut arena = NodeArena::new();
        let a = arena.alloc_child(NodeId::ROOT, 'a');
        let b = arena.alloc_child(a, 'b');
        let c = arena.alloc_child(NodeId::ROOT, 'c');
        assert_eq!([a.index(), b.index(), c.index()], [1, 2, 3]);
        assert_eq!(arena[NodeId::ROOT].get('a'), Some(a));
        assert_eq!(arena[NodeId::ROOT].get('c'), Some(c));
        assert_eq!(arena[a].get('b'), Some(b));
        assert_eq!(arena[b].parent(), Some(a));
        assert!(arena.get(NodeId::from_raw(4)).is_none());
        let ids: Vec<_> = arena.iter().map(|n| n.id().index()).collect();
        assert_eq!(ids, [0, 1, 2, 3]);
    }
}
