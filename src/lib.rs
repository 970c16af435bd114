//! # libaho
//!
//! Multi-keyword search with an [Aho-Corasick](https://en.wikipedia.org/wiki/Aho%E2%80%93Corasick_algorithm)
//! automaton.
//!
//! All keywords go into one trie. A breadth-first pass then gives every node a failure
//! link to the node for its longest proper suffix in the trie, so a single
//! left-to-right scan over a text reports every occurrence of every keyword, including
//! overlapping ones and keywords that end inside a longer one.
//!
//! ## Features
//!
//! - **Generic over symbol type**: works with `char`, `u8`, `u16`, or any type implementing
//!   [`Symbol`](automaton::Symbol)
//! - **Character offsets**: string scans count `char`s, not bytes
//! - **Reusable**: an [`Automaton`](automaton::Automaton) is immutable once built and can be
//!   shared across threads
//! - **Introspectable**: nodes, failure links and a structural [`dump`](automaton::Automaton::dump)
//!   are all public
//!
//! ## Quick Start
//!
//! ```
//! use libaho::find_all;
//!
//! let found: Vec<_> = find_all("abcd", ["bc", "abc", "bcd", "boy"])
//!     .into_iter()
//!     .map(|m| (m.index, m.word))
//!     .collect();
//! assert_eq!(
//!     found,
//!     [(0, "abc".to_string()), (1, "bc".to_string()), (1, "bcd".to_string())]
//! );
//! ```
//!
//! To scan several texts, build the automaton once:
//!
//! ```
//! use libaho::Automaton;
//!
//! let ac = Automaton::new(["he", "she", "his", "hers"]);
//! assert_eq!(ac.find_all("ushers").len(), 3);
//! assert_eq!(ac.find_all("this").len(), 1);
//! ```
//!
//! ## Generic Usage
//!
//! The automaton is generic over the edge label type:
//!
//! ```
//! use libaho::automaton::{build_automaton, Span};
//!
//! let ac = build_automaton([vec![1u8, 2, 3], vec![2, 3]]);
//! let spans: Vec<_> = ac.spans(&[0, 1, 2, 3]).collect();
//! assert_eq!(spans, [Span { start: 1, end: 4 }, Span { start: 2, end: 4 }]);
//! ```
//!
//! ## Failure modes
//!
//! By default ([`FailureMode::SingleHop`](automaton::FailureMode::SingleHop)) a scan takes at
//! most one failure hop per symbol, and a node inherits at most one length from its failure
//! target, and only if the node is itself the end of a keyword. That is cheaper than the
//! textbook automaton but not equivalent to it:
//!
//! ```
//! use libaho::automaton::{Builder, FailureMode};
//! use libaho::find_all;
//!
//! // "abc" is not a keyword, so it inherits nothing from "bc".
//! assert!(find_all("abc", ["abcd", "bc"]).is_empty());
//!
//! // After the hop from "ab" to "b" fails on 'x', the scan stays on "b" and
//! // matches "d" from there: "xd" is reported although it is not a keyword.
//! let words: Vec<_> = find_all("abxd", ["ab", "bd"]).into_iter().map(|m| m.word).collect();
//! assert_eq!(words, ["ab", "xd"]);
//!
//! let mut builder = Builder::with_mode(FailureMode::Exhaustive);
//! builder.add_pattern("ab").add_pattern("bd");
//! let words: Vec<_> = builder.build().find_all("abxd").into_iter().map(|m| m.word).collect();
//! assert_eq!(words, ["ab"]);
//! ```
//!
//! [`FailureMode::Exhaustive`](automaton::FailureMode::Exhaustive) reports exactly the
//! occurrences a brute-force search finds.

#![warn(missing_docs)]

/// Core automaton data structure: nodes, builder, resolver and matcher.
pub mod automaton;

pub use automaton::{build_automaton, find_all, Automaton, FailureMode, Match};
