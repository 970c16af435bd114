//! Structural rendering of an automaton, for tests and debugging.

use std::fmt::{self, Display, Write};

use super::graph::Automaton;
use super::node::{Node, NodeId};
use super::symbol::Symbol;

/// A printable view of an [`Automaton`], created by [`Automaton::dump`].
///
/// Each node renders as `#id:symbol`, followed by `=(len,...)` when pattern lengths are
/// recorded, `~>id` when the failure link points somewhere other than the root, and
/// `->[...]` with its children in insertion order. The root renders as `#0`.
///
/// The alternate form (`{:#}`) puts one node per line, indented by depth.
///
/// ```
/// use libaho::automaton::Automaton;
///
/// let ac = Automaton::new(["b", "ab"]);
/// assert_eq!(ac.dump().to_string(), "#0->[#1:b=(1),#2:a->[#3:b=(2,1)~>1]]");
/// ```
pub struct Dump<'a, C: Symbol> {
    automaton: &'a Automaton<C>,
}

impl<'a, C: Symbol> Dump<'a, C> {
    pub(crate) fn new(automaton: &'a Automaton<C>) -> Self {
        Dump { automaton }
    }

    fn write_label(&self, f: &mut fmt::Formatter<'_>, node: &Node<C>) -> fmt::Result
    where
        C: Display,
    {
        write!(f, "#{}", node.id())?;
        if let Some(symbol) = node.symbol() {
            write!(f, ":{symbol}")?;
        }
        if let Some((first, rest)) = node.lens().split_first() {
            write!(f, "=({first}")?;
            for len in rest {
                write!(f, ",{len}")?;
            }
            f.write_char(')')?;
        }
        if let Some(failure) = node.failure().filter(|id| !id.is_root()) {
            write!(f, "~>{failure}")?;
        }
        Ok(())
    }

    fn write_inline(&self, f: &mut fmt::Formatter<'_>, id: NodeId) -> fmt::Result
    where
        C: Display,
    {
        let node = self.automaton.node(id);
        self.write_label(f, node)?;
        if node.child_count() > 0 {
            f.write_str("->[")?;
            for (i, (_, child)) in node.children().enumerate() {
                if i > 0 {
                    f.write_char(',')?;
                }
                self.write_inline(f, child)?;
            }
            f.write_char(']')?;
        }
        Ok(())
    }

    fn write_tree(&self, f: &mut fmt::Formatter<'_>, id: NodeId, depth: usize) -> fmt::Result
    where
        C: Display,
    {
        let node = self.automaton.node(id);
        write!(f, "{:indent$}", "", indent = depth * 2)?;
        self.write_label(f, node)?;
        f.write_char('\n')?;
        for (_, child) in node.children() {
            self.write_tree(f, child, depth + 1)?;
        }
        Ok(())
    }
}

impl<C: Symbol + Display> Display for Dump<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            self.write_tree(f, NodeId::ROOT, 0)
        } else {
            self.write_inline(f, NodeId::ROOT)
        }
    }
}
