use super::arena::NodeArena;
use super::builder::{build_automaton, FailureMode, IntoPattern};
use super::dump::Dump;
use super::node::{Node, NodeId};
use super::symbol::Symbol;

/// A resolved keyword automaton: the trie of all patterns plus failure links.
///
/// An `Automaton` is immutable once built. Scanning only borrows it, so one automaton
/// can serve any number of texts, from any number of threads.
///
/// # Examples
///
/// ```
/// use libaho::automaton::Automaton;
///
/// let ac = Automaton::new(["bc", "abc", "bcd", "boy"]);
/// let found: Vec<_> = ac
///     .find_all("abcd")
///     .into_iter()
///     .map(|m| (m.index, m.word))
///     .collect();
/// assert_eq!(
///     found,
///     [(0, "abc".to_string()), (1, "bc".to_string()), (1, "bcd".to_string())]
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Automaton<C: Symbol = char> {
    arena: NodeArena<C>,
    mode: FailureMode,
}

impl<C: Symbol> Automaton<C> {
    /// Builds an automaton from patterns with [`FailureMode::SingleHop`].
    ///
    /// Shorthand for [`build_automaton`].
    pub fn new<P: IntoPattern<C>>(patterns: impl IntoIterator<Item = P>) -> Self {
        build_automaton(patterns)
    }

    pub(crate) fn from_parts(arena: NodeArena<C>, mode: FailureMode) -> Self {
        Automaton { arena, mode }
    }

    /// Returns the root node, standing for the empty prefix.
    #[inline]
    pub fn root(&self) -> &Node<C> {
        &self.arena[NodeId::ROOT]
    }

    /// Returns the node with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this automaton.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node<C> {
        &self.arena[id]
    }

    /// Returns the node with the given id, or `None` if it does not belong to this
    /// automaton.
    pub fn try_node(&self, id: NodeId) -> Option<&Node<C>> {
        self.arena.get(id)
    }

    /// Returns all nodes in creation order, root first.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &Node<C>> + '_ {
        self.arena.iter()
    }

    /// Returns the number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// The failure mode this automaton was resolved with and scans with.
    pub fn mode(&self) -> FailureMode {
        self.mode
    }

    /// Follows `path` from the root along trie edges only (no failure links).
    ///
    /// Returns the node spelling exactly `path`, or `None` if no pattern starts with it.
    pub fn get(&self, path: impl IntoIterator<Item = C>) -> Option<NodeId> {
        path.into_iter()
            .try_fold(NodeId::ROOT, |id, symbol| self.arena[id].get(symbol))
    }

    /// Returns a structural rendering of the automaton.
    ///
    /// See [`Dump`] for the format.
    pub fn dump(&self) -> Dump<'_, C> {
        Dump::new(self)
    }
}

#[cfg(test)]
mod test {
    use std::thread;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::automaton::builder::Builder;

    #[test]
    fn automaton_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Automaton<char>>();
        assert_send_sync::<Automaton<u8>>();
    }

    #[test]
    fn building_twice_gives_identical_automata() {
        let patterns = ["bc", "abc", "bcd", "boy", "bc", "", "x"];
        let a = build_automaton(patterns);
        let b = build_automaton(patterns);
        assert_eq!(a, b);
        let ids = |ac: &Automaton| ac.nodes().map(|n| (n.id(), n.symbol())).collect::<Vec<_>>();
        assert_eq!(ids(&a), ids(&b));
    }

    #[test]
    fn modes_build_different_automata() {
        let single = build_automaton(["c", "bc", "abc"]);
        let mut builder = Builder::with_mode(FailureMode::Exhaustive);
        builder.add_pattern("c").add_pattern("bc").add_pattern("abc");
        let exhaustive = builder.build();
        assert_eq!(single.node_count(), exhaustive.node_count());
        assert_ne!(single.dump().to_string(), exhaustive.dump().to_string());
    }

    #[test]
    fn get_walks_trie_edges() {
        let ac = Automaton::new(["boy", "bool"]);
        assert_eq!(ac.get("".chars()), Some(NodeId::ROOT));
        let boo = ac.get("boo".chars()).unwrap();
        assert_eq!(ac.node(boo).symbol(), Some('o'));
        assert_eq!(ac.get("oy".chars()), None);
        assert!(ac.try_node(boo).is_some());
        assert!(ac.try_node(NodeId::from_raw(100)).is_none());
    }

    #[test]
    fn shared_across_threads() {
        let ac = Automaton::new(["he", "she", "his", "hers"]);
        let texts = ["ushers", "this", "hershe", "nothing"];
        let expected: Vec<_> = texts.iter().map(|t| ac.find_all(t)).collect();
        let ac = &ac;
        let found: Vec<_> = thread::scope(|s| {
            let handles: Vec<_> = texts
                .iter()
                .map(|&t| s.spawn(move || ac.find_all(t)))
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().unwrap())
                .collect()
        });
        assert_eq!(found, expected);
    }
}
