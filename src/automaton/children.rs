use super::node::NodeId;
use super::symbol::Symbol;

/// A compact representation of the outgoing edges of a node that doesn't allocate until
/// there are at least three children.
///
/// Edges are kept in insertion order, which is also the order the resolver visits them
/// and the order they are rendered in a dump.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Children<C: Symbol> {
    /// No children.
    None,
    /// Exactly one child (symbol, node).
    One((C, NodeId)),
    /// Exactly two children (symbol1, node1, symbol2, node2).
    Two((C, NodeId, C, NodeId)),
    /// Three or more children stored in a vector.
    Many(Vec<(C, NodeId)>),
}

impl<C: Symbol> Default for Children<C> {
    fn default() -> Self {
        Children::None
    }
}

impl<C: Symbol> Children<C> {
    /// Gets the edge at the specified position.
    ///
    /// Returns `None` if the position is out of bounds.
    #[inline]
    pub fn nth(&self, index: usize) -> Option<(C, NodeId)> {
        match self {
            Children::None => None,
            Children::One(edge) => (index == 0).then_some(*edge),
            Children::Two((c1, n1, c2, n2)) => match index {
                0 => Some((*c1, *n1)),
                1 => Some((*c2, *n2)),
                _ => None,
            },
            Children::Many(edges) => edges.get(index).copied(),
        }
    }

    /// Returns the node that `symbol`'s edge leads to, or None if no such edge exists.
    #[inline]
    pub fn get(&self, symbol: C) -> Option<NodeId> {
        match self {
            Children::None => None,
            Children::One((ch, node)) => (*ch == symbol).then_some(*node),
            Children::Two((c1, n1, c2, n2)) => {
                if symbol == *c1 {
                    Some(*n1)
                } else if symbol == *c2 {
                    Some(*n2)
                } else {
                    None
                }
            }
            Children::Many(edges) => {
                // Unrolled by 2; edges are unsorted so a binary search is not an option.
                let chunks = edges.chunks_exact(2);
                let remainder = chunks.remainder();
                for chunk in chunks {
                    if chunk[0].0 == symbol {
                        return Some(chunk[0].1);
                    }
                    if chunk[1].0 == symbol {
                        return Some(chunk[1].1);
                    }
                }
                remainder
                    .iter()
                    .find(|&&(ch, _)| ch == symbol)
                    .map(|&(_, node)| node)
            }
        }
    }

    /// Appends an edge.
    ///
    /// The builder only calls this after [`get`](Children::get) came back empty, so a
    /// duplicate symbol here is a bug in the caller.
    pub(crate) fn insert(&mut self, symbol: C, node: NodeId) {
        debug_assert!(
            self.get(symbol).is_none(),
            "insert: edge {symbol:?} already exists"
        );
        let edge = (symbol, node);
        *self = match std::mem::take(self) {
            Children::None => Children::One(edge),
            Children::One((c1, n1)) => Children::Two((c1, n1, edge.0, edge.1)),
            Children::Two((c1, n1, c2, n2)) => Children::Many(vec![(c1, n1), (c2, n2), edge]),
            Children::Many(mut edges) => {
                edges.push(edge);
                Children::Many(edges)
            }
        };
    }

    /// Returns the number of edges.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Children::None => 0,
            Children::One(_) => 1,
            Children::Two(_) => 2,
            Children::Many(edges) => edges.len(),
        }
    }

    /// True if there are no edges.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Children::None)
    }

    /// Returns an iterator over the edges in insertion order.
    #[inline]
    pub fn iter(&self) -> ChildIter<'_, C> {
        ChildIter {
            children: self,
            index: 0,
        }
    }
}

/// An iterator over the children of a [`Node`](super::node::Node).
#[derive(Clone)]
pub struct ChildIter<'a, C: Symbol> {
    children: &'a Children<C>,
    index: usize,
}

impl<C: Symbol> Iterator for ChildIter<'_, C> {
    type Item = (C, NodeId);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let edge = self.children.nth(self.index)?;
        self.index += 1;
        Some(edge)
    }

    /// Since we know the exact size, we can do better than the default implementation.
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.children.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<C: Symbol> ExactSizeIterator for ChildIter<'_, C> {}

#[cfg(test)]
mod test {
    use super::*;

    fn id(n: u32) -> NodeId {
        NodeId::from_raw(n)
    }

    #[test]
    fn no_children() {
        let c = Children::<char>::None;
        assert_eq!(c.iter().next(), None);
        assert_eq!(c.len(), 0);
        assert!(c.is_empty());
        assert_eq!(c.get('a'), None);
    }

    #[test]
    fn one_child() {
        let mut c = Children::None;
        c.insert('a', id(1));
        assert_eq!(c.iter().collect::<Vec<_>>(), [('a', id(1))]);
        assert_eq!(c.get('a'), Some(id(1)));
        assert_eq!(c.get('b'), None);
    }

    #[test]
    fn two_children_keep_insertion_order() {
        let mut c = Children::None;
        c.insert('z', id(1));
        c.insert('a', id(2));
        assert_eq!(c.iter().collect::<Vec<_>>(), [('z', id(1)), ('a', id(2))]);
        assert_eq!(c.get('a'), Some(id(2)));
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn many_children_keep_insertion_order() {
        let mut c = Children::None;
        for (i, ch) in "dbeac".chars().enumerate() {
            c.insert(ch, id(i as u32 + 1));
        }
        let order: String = c.iter().map(|(ch, _)| ch).collect();
        assert_eq!(order, "dbeac");
        assert_eq!(c.get('e'), Some(id(3)));
        assert_eq!(c.get('c'), Some(id(5)));
        assert_eq!(c.get('f'), None);
        assert_eq!(c.iter().len(), 5);
    }

    #[test]
    fn a_thousand_children() {
        let mut c = Children::None;
        let letters = (0..).filter_map(std::char::from_u32).take(1000);
        for (i, ch) in letters.clone().enumerate() {
            c.insert(ch, id(i as u32));
        }
        for (i, ch) in letters.enumerate() {
            assert_eq!(c.get(ch), Some(id(i as u32)));
        }
        assert_eq!(c.len(), 1000);
    }

    #[test]
    #[should_panic(expected = "already exists")]
    #[cfg(debug_assertions)]
    fn duplicate_edge_is_a_bug() {
        let mut c = Children::None;
        c.insert('a', id(1));
        c.insert('a', id(2));
    }
}
