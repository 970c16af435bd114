use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use smallvec::SmallVec;

use super::arena::NodeArena;
use super::graph::Automaton;
use super::node::NodeId;
use super::resolve::resolve_failures;
use super::symbol::Symbol;

/// Trait for types that can be used as a pattern when building an automaton.
///
/// Implemented for common string and sequence types so that [`Builder::add_pattern`]
/// and [`build_automaton`] accept them directly without manual conversion. Strings are
/// split into `char`s, so a multi-byte character counts as one symbol.
pub trait IntoPattern<C: Symbol> {
    /// Collects this pattern into a symbol buffer.
    fn collect_pattern(self) -> SmallVec<[C; 32]>;
}

// String types → char

impl IntoPattern<char> for &str {
    fn collect_pattern(self) -> SmallVec<[char; 32]> {
        self.chars().collect()
    }
}

impl IntoPattern<char> for &&str {
    fn collect_pattern(self) -> SmallVec<[char; 32]> {
        self.chars().collect()
    }
}

impl IntoPattern<char> for String {
    fn collect_pattern(self) -> SmallVec<[char; 32]> {
        self.chars().collect()
    }
}

impl IntoPattern<char> for &String {
    fn collect_pattern(self) -> SmallVec<[char; 32]> {
        self.chars().collect()
    }
}

// Generic sequence types → C

impl<C: Symbol> IntoPattern<C> for &[C] {
    fn collect_pattern(self) -> SmallVec<[C; 32]> {
        self.iter().copied().collect()
    }
}

impl<C: Symbol> IntoPattern<C> for Vec<C> {
    fn collect_pattern(self) -> SmallVec<[C; 32]> {
        self.into_iter().collect()
    }
}

impl<C: Symbol> IntoPattern<C> for &Vec<C> {
    fn collect_pattern(self) -> SmallVec<[C; 32]> {
        self.iter().copied().collect()
    }
}

impl<C: Symbol, const N: usize> IntoPattern<C> for [C; N] {
    fn collect_pattern(self) -> SmallVec<[C; 32]> {
        self.into_iter().collect()
    }
}

impl<C: Symbol, const N: usize> IntoPattern<C> for &[C; N] {
    fn collect_pattern(self) -> SmallVec<[C; 32]> {
        self.iter().copied().collect()
    }
}

/// How failure links are resolved and followed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FailureMode {
    /// The scan performs at most one failure hop per symbol, and a terminal node
    /// inherits only the first length recorded at its failure target (and only when
    /// both are terminal).
    ///
    /// This can under-report matches when failure chains are two or more links deep,
    /// and after a failed hop the scan resumes from the failure target without
    /// re-reading the current symbol, which can report spans that are not patterns.
    /// See the crate documentation for worked examples.
    #[default]
    SingleHop,
    /// The textbook automaton: failure chains are followed until a transition exists
    /// or the root is reached, and every node inherits the full output of its failure
    /// target. Reports exactly the occurrences a brute-force search finds.
    Exhaustive,
}

/// A builder for constructing an [`Automaton`] from patterns added one at a time.
///
/// Patterns may be added in any order; duplicates are kept and reported once per copy.
/// Empty patterns are skipped and never match.
#[derive(Debug)]
pub struct Builder<C: Symbol> {
    arena: NodeArena<C>,
    mode: FailureMode,
    patterns: usize,
}

impl<C: Symbol> Default for Builder<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Symbol> Builder<C> {
    /// Creates a builder using [`FailureMode::SingleHop`].
    pub fn new() -> Self {
        Self::with_mode(FailureMode::default())
    }

    /// Creates a builder that resolves and scans with the given failure mode.
    pub fn with_mode(mode: FailureMode) -> Self {
        Builder {
            arena: NodeArena::new(),
            mode,
            patterns: 0,
        }
    }

    /// Adds a pattern to the trie being constructed.
    ///
    /// The pattern can be any type that implements [`IntoPattern`], including `&str`,
    /// `String`, `&[u8]`, `Vec<u8>`, or fixed-size arrays like `[u8; 3]`.
    pub fn add_pattern(&mut self, pattern: impl IntoPattern<C>) -> &mut Self {
        let pattern = pattern.collect_pattern();
        self.add_pattern_slice(&pattern);
        self
    }

    fn add_pattern_slice(&mut self, pattern: &[C]) {
        if pattern.is_empty() {
            tracing::trace!("skipping empty pattern");
            return;
        }

        let mut node = NodeId::ROOT;
        for &symbol in pattern {
            node = match self.arena[node].get(symbol) {
                Some(child) => child,
                None => self.arena.alloc_child(node, symbol),
            };
        }
        self.arena[node].push_len(pattern.len());
        self.patterns += 1;
    }

    /// Returns the number of non-empty patterns added so far, duplicates included.
    pub fn pattern_count(&self) -> usize {
        self.patterns
    }

    /// Resolves failure links and returns the finished automaton.
    pub fn build(mut self) -> Automaton<C> {
        resolve_failures(&mut self.arena, self.mode);
        tracing::debug!(
            patterns = self.patterns,
            nodes = self.arena.len(),
            mode = ?self.mode,
            "built automaton"
        );
        Automaton::from_parts(self.arena, self.mode)
    }
}

impl Builder<char> {
    /// Adds one pattern per line read from `reader`.
    ///
    /// Trailing whitespace is trimmed. Empty lines and lines starting with `#` are
    /// skipped.
    pub fn add_patterns_from_reader(&mut self, mut reader: impl BufRead) -> io::Result<()> {
        // Reuse one buffer for every line instead of allocating through `lines()`.
        let mut buf = String::with_capacity(80);
        loop {
            if reader.read_line(&mut buf)? == 0 {
                break;
            }
            let pattern = buf.trim_end();
            if is_comment(pattern) {
                tracing::trace!(line = pattern, "skipping comment");
            } else if !pattern.is_empty() {
                self.add_pattern(pattern);
            }
            buf.clear();
        }
        Ok(())
    }
}

/// Builds an automaton from an iterator of patterns using [`FailureMode::SingleHop`].
///
/// # Examples
///
/// ```
/// use libaho::automaton::builder::build_automaton;
///
/// let ac = build_automaton(["he", "she", "his", "hers"]);
/// let words: Vec<_> = ac.find_all("ushers").into_iter().map(|m| m.word).collect();
/// assert_eq!(words, ["she", "he", "hers"]);
/// ```
///
/// Building from byte sequences:
///
/// ```
/// use libaho::automaton::builder::build_automaton;
///
/// let ac = build_automaton([vec![1u8, 2], vec![2, 3]]);
/// let spans: Vec<_> = ac.spans(&[1, 2, 3]).map(|s| s.start).collect();
/// assert_eq!(spans, [0, 1]);
/// ```
pub fn build_automaton<C, P>(patterns: impl IntoIterator<Item = P>) -> Automaton<C>
where
    C: Symbol,
    P: IntoPattern<C>,
{
    let mut builder = Builder::new();
    for pattern in patterns {
        builder.add_pattern(pattern);
    }
    builder.build()
}

/// Builds an automaton from a keyword file (one pattern per line).
///
/// Lines starting with '#' are treated as comments and ignored. Empty lines are
/// skipped.
///
/// # Examples
///
/// ```no_run
/// use libaho::automaton::builder::build_automaton_from_file;
///
/// let ac = build_automaton_from_file("keywords.txt").unwrap();
/// ```
pub fn build_automaton_from_file(
    filename: impl AsRef<Path>,
) -> Result<Automaton<char>, Box<dyn Error>> {
    let file = File::open(filename.as_ref())?;
    let mut builder = Builder::new();
    builder.add_patterns_from_reader(BufReader::new(file))?;
    Ok(builder.build())
}

/// Returns true if this line is a comment.
pub(crate) fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}
