/// Trie builder, pattern conversion and failure modes.
pub mod builder;
/// Edge containers for automaton nodes.
pub mod children;
/// Structural rendering of an automaton.
pub mod dump;
/// The resolved automaton type.
pub mod graph;
/// Scanning: occurrence iterators and `find_all`.
pub mod matcher;
/// Node and node id types.
pub mod node;
/// Trait for types that can serve as automaton edge labels.
pub mod symbol;

pub(crate) mod arena;
mod resolve;

pub use builder::{build_automaton, build_automaton_from_file, Builder, FailureMode, IntoPattern};
pub use dump::Dump;
pub use graph::Automaton;
pub use matcher::{find_all, FindIter, Match, Span, Spans};
pub use node::{Node, NodeId};
pub use symbol::Symbol;
