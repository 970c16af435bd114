use std::fmt;

use smallvec::SmallVec;

use super::children::{ChildIter, Children};
use super::symbol::Symbol;

/// Index of a node in the automaton's arena.
///
/// Ids are handed out in creation order, so the root is always `0` and the ids of a
/// given pattern sequence are reproducible from build to build.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct NodeId(u32);

impl NodeId {
    /// The root node, representing the empty prefix.
    pub const ROOT: NodeId = NodeId(0);

    pub(crate) const fn from_raw(raw: u32) -> Self {
        NodeId(raw)
    }

    /// Returns the position of this node in the arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// True if this is the root node.
    #[inline]
    pub fn is_root(self) -> bool {
        self == Self::ROOT
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Pattern lengths ending at a node. Most terminal nodes hold one or two.
pub(crate) type Lens = SmallVec<[usize; 2]>;

/// A node in the automaton, standing for one prefix of one or more patterns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<C: Symbol> {
    id: NodeId,
    symbol: Option<C>,
    parent: Option<NodeId>,
    children: Children<C>,
    failure: Option<NodeId>,
    lens: Lens,
}

impl<C: Symbol> Node<C> {
    pub(crate) fn root() -> Self {
        Node {
            id: NodeId::ROOT,
            symbol: None,
            parent: None,
            children: Children::None,
            failure: None,
            lens: Lens::new(),
        }
    }

    pub(crate) fn child_of(id: NodeId, parent: NodeId, symbol: C) -> Self {
        Node {
            id,
            symbol: Some(symbol),
            parent: Some(parent),
            children: Children::None,
            failure: None,
            lens: Lens::new(),
        }
    }

    /// Creation-order id of this node.
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The symbol on the edge from the parent, or `None` for the root.
    #[inline]
    pub fn symbol(&self) -> Option<C> {
        self.symbol
    }

    /// The node this one hangs off, or `None` for the root.
    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// The failure link: the node for the longest proper suffix of this node's prefix
    /// that is also in the trie. `None` for the root.
    #[inline]
    pub fn failure(&self) -> Option<NodeId> {
        self.failure
    }

    /// Lengths of the patterns reported when a scan lands on this node, in the order
    /// they are emitted.
    #[inline]
    pub fn lens(&self) -> &[usize] {
        &self.lens
    }

    /// True if at least one pattern length is recorded here.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !self.lens.is_empty()
    }

    /// Returns the node that `symbol`'s edge leads to, or None if no such edge exists.
    #[inline]
    pub fn get(&self, symbol: C) -> Option<NodeId> {
        self.children.get(symbol)
    }

    /// Returns an iterator over all children of this node, in insertion order.
    #[inline]
    pub fn children(&self) -> ChildIter<'_, C> {
        self.children.iter()
    }

    /// Returns the number of children.
    #[inline]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub(crate) fn insert(&mut self, symbol: C, child: NodeId) {
        self.children.insert(symbol, child);
    }

    pub(crate) fn push_len(&mut self, len: usize) {
        self.lens.push(len);
    }

    pub(crate) fn extend_lens(&mut self, lens: &[usize]) {
        self.lens.extend_from_slice(lens);
    }

    /// Sets the failure link. Called exactly once per non-root node by the resolver.
    pub(crate) fn set_failure(&mut self, failure: NodeId) {
        debug_assert!(self.failure.is_none(), "failure link of {:?} set twice", self.id);
        debug_assert!(!self.id.is_root(), "the root has no failure link");
        self.failure = Some(failure);
    }
}
