//! Breadth-first failure link resolution.
//!
//! Nodes are visited level by level, so the failure link (and the inherited lengths)
//! of every shallower node is final by the time a deeper node looks at it.

use std::collections::VecDeque;

use super::arena::NodeArena;
use super::builder::FailureMode;
use super::node::{Lens, NodeId};
use super::symbol::Symbol;

/// Sets the failure link of every non-root node and propagates pattern lengths along
/// those links.
pub(crate) fn resolve_failures<C: Symbol>(arena: &mut NodeArena<C>, mode: FailureMode) {
    let mut queue = VecDeque::with_capacity(arena.len());
    queue.push_back(NodeId::ROOT);

    while let Some(id) = queue.pop_front() {
        queue.extend(arena[id].children().map(|(_, child)| child));

        // The root is the only node without an incoming edge.
        let (Some(parent), Some(symbol)) = (arena[id].parent(), arena[id].symbol()) else {
            continue;
        };

        // A one-symbol prefix has no non-empty proper suffix.
        let failure = if parent.is_root() {
            NodeId::ROOT
        } else {
            match mode {
                FailureMode::SingleHop => single_hop_failure(arena, id, parent, symbol),
                FailureMode::Exhaustive => exhaustive_failure(arena, id, parent, symbol),
            }
        };
        arena[id].set_failure(failure);
    }
}

fn single_hop_failure<C: Symbol>(
    arena: &mut NodeArena<C>,
    id: NodeId,
    parent: NodeId,
    symbol: C,
) -> NodeId {
    let parent_failure = arena[parent].failure().unwrap_or(NodeId::ROOT);
    let Some(target) = arena[parent_failure].get(symbol) else {
        return NodeId::ROOT;
    };

    // Only the target's first length is inherited, and only by a terminal node.
    if arena[id].is_terminal() {
        if let Some(&len) = arena[target].lens().first() {
            arena[id].push_len(len);
        }
    }
    target
}

fn exhaustive_failure<C: Symbol>(
    arena: &mut NodeArena<C>,
    id: NodeId,
    parent: NodeId,
    symbol: C,
) -> NodeId {
    let mut candidate = arena[parent].failure().unwrap_or(NodeId::ROOT);
    let target = loop {
        if let Some(target) = arena[candidate].get(symbol) {
            break target;
        }
        match arena[candidate].failure() {
            Some(next) => candidate = next,
            None => break NodeId::ROOT,
        }
    };

    // The target is shallower, so its own inherited lengths are already complete.
    let inherited = Lens::from(arena[target].lens());
    arena[id].extend_lens(&inherited);
    target
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::automaton::builder::Builder;
    use crate::automaton::graph::Automaton;
    use crate::automaton::node::Node;

    fn build(mode: FailureMode, patterns: &[&str]) -> Automaton<char> {
        let mut builder = Builder::with_mode(mode);
        for p in patterns {
            builder.add_pattern(p);
        }
        builder.build()
    }

    fn node<'a>(ac: &'a Automaton<char>, prefix: &str) -> &'a Node<char> {
        let id = ac
            .get(prefix.chars())
            .unwrap_or_else(|| panic!("no node for {prefix:?}"));
        ac.node(id)
    }

    fn failure_of(ac: &Automaton<char>, prefix: &str) -> NodeId {
        node(ac, prefix).failure().unwrap_or_else(|| panic!("{prefix:?} has no failure"))
    }

    fn id_of(ac: &Automaton<char>, prefix: &str) -> NodeId {
        node(ac, prefix).id()
    }

    #[test]
    fn every_non_root_node_gets_a_failure() {
        let ac = build(FailureMode::SingleHop, &["bc", "abc", "bcd", "boy"]);
        assert_eq!(ac.root().failure(), None);
        for n in ac.nodes().skip(1) {
            assert!(n.failure().is_some(), "{:?} unresolved", n.id());
        }
    }

    #[test]
    fn first_level_fails_to_root() {
        let ac = build(FailureMode::SingleHop, &["ab", "ba"]);
        assert_eq!(failure_of(&ac, "a"), NodeId::ROOT);
        assert_eq!(failure_of(&ac, "b"), NodeId::ROOT);
    }

    #[test]
    fn failure_points_at_longest_suffix() {
        let ac = build(FailureMode::SingleHop, &["bc", "abc", "bcd", "boy"]);
        assert_eq!(failure_of(&ac, "ab"), id_of(&ac, "b"));
        assert_eq!(failure_of(&ac, "abc"), id_of(&ac, "bc"));
        assert_eq!(failure_of(&ac, "bcd"), NodeId::ROOT);
        assert_eq!(failure_of(&ac, "bo"), NodeId::ROOT);
        assert_eq!(failure_of(&ac, "boy"), NodeId::ROOT);
    }

    #[test]
    fn terminal_node_inherits_suffix_length() {
        let ac = build(FailureMode::SingleHop, &["b", "ab"]);
        assert_eq!(node(&ac, "ab").lens(), [2, 1]);
        assert_eq!(node(&ac, "b").lens(), [1]);
    }

    #[test]
    fn inner_node_inherits_nothing() {
        let ac = build(FailureMode::SingleHop, &["abcd", "bc"]);
        assert_eq!(failure_of(&ac, "abc"), id_of(&ac, "bc"));
        assert!(node(&ac, "abc").lens().is_empty());
    }

    #[test]
    fn only_first_length_is_inherited() {
        let ac = build(FailureMode::SingleHop, &["c", "bc", "abc"]);
        assert_eq!(node(&ac, "bc").lens(), [2, 1]);
        assert_eq!(node(&ac, "abc").lens(), [3, 2]);

        let ac = build(FailureMode::SingleHop, &["b", "b", "ab"]);
        assert_eq!(node(&ac, "ab").lens(), [2, 1]);
    }

    #[test]
    fn single_hop_falls_back_to_root_past_one_link() {
        let ac = build(FailureMode::SingleHop, &["abab", "ac"]);
        assert_eq!(failure_of(&ac, "aba"), id_of(&ac, "a"));
        assert_eq!(failure_of(&ac, "abab"), id_of(&ac, "ab"));

        let ac = build(FailureMode::SingleHop, &["aabb", "abc"]);
        assert_eq!(failure_of(&ac, "aa"), id_of(&ac, "a"));
        assert_eq!(failure_of(&ac, "aab"), id_of(&ac, "ab"));
        // "aab" fails to "ab", which has only a "c" child.
        assert_eq!(failure_of(&ac, "aabb"), NodeId::ROOT);
    }

    #[test]
    fn exhaustive_walks_the_whole_chain() {
        // "aabb": parent "aab" fails to "ab" (no "b" child), which fails to "b"
        // (root child) and that node has a "b" child.
        let ac = build(FailureMode::Exhaustive, &["aabb", "abc", "bb"]);
        assert_eq!(failure_of(&ac, "aab"), id_of(&ac, "ab"));
        assert_eq!(failure_of(&ac, "ab"), id_of(&ac, "b"));
        assert_eq!(failure_of(&ac, "aabb"), id_of(&ac, "bb"));

        let ac = build(FailureMode::SingleHop, &["aabb", "abc", "bb"]);
        assert_eq!(failure_of(&ac, "aabb"), NodeId::ROOT);
    }

    #[test]
    fn exhaustive_inherits_full_output() {
        let ac = build(FailureMode::Exhaustive, &["c", "bc", "abc"]);
        assert_eq!(node(&ac, "bc").lens(), [2, 1]);
        assert_eq!(node(&ac, "abc").lens(), [3, 2, 1]);

        let ac = build(FailureMode::Exhaustive, &["abcd", "bc"]);
        assert_eq!(node(&ac, "abc").lens(), [2]);

        let ac = build(FailureMode::Exhaustive, &["b", "b", "ab"]);
        assert_eq!(node(&ac, "ab").lens(), [2, 1, 1]);
    }
}
