use std::iter::FusedIterator;
use std::slice;

use super::builder::{build_automaton, FailureMode, IntoPattern};
use super::graph::Automaton;
use super::node::NodeId;
use super::symbol::Symbol;

/// Location of an occurrence, in symbols (for strings: `char`s, not bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Span {
    /// Offset of the first symbol of the occurrence.
    pub start: usize,
    /// Offset one past the last symbol of the occurrence.
    pub end: usize,
}

impl Span {
    /// Number of symbols covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True if the span covers nothing. Spans reported by a scan are never empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// An occurrence found in a string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Match {
    /// Character (not byte) offset of the start of the occurrence.
    pub index: usize,
    /// The matched text.
    pub word: String,
}

/// Scan state shared by [`Spans`] and [`FindIter`].
#[derive(Clone, Debug)]
struct Cursor<'a, C: Symbol> {
    automaton: &'a Automaton<C>,
    current: NodeId,
    /// Offset of the next symbol to read.
    pos: usize,
    /// Lengths still to report for the occurrences ending at `end`.
    pending: slice::Iter<'a, usize>,
    end: usize,
}

impl<'a, C: Symbol> Cursor<'a, C> {
    fn new(automaton: &'a Automaton<C>) -> Self {
        Cursor {
            automaton,
            current: NodeId::ROOT,
            pos: 0,
            pending: <&[usize]>::default().iter(),
            end: 0,
        }
    }

    fn next_span(&mut self, text: &[C]) -> Option<Span> {
        loop {
            if let Some(&len) = self.pending.next() {
                debug_assert!(len <= self.end, "length {len} overruns offset {}", self.end);
                return Some(Span {
                    start: self.end - len,
                    end: self.end,
                });
            }
            let &symbol = text.get(self.pos)?;
            self.pos += 1;
            if let Some(found) = self.step(symbol) {
                self.pending = self.automaton.node(found).lens().iter();
                self.end = self.pos;
            }
        }
    }

    /// Advances over one symbol. Returns the node reached by a transition, if any.
    ///
    /// Only the root lacks a failure link, so `?` on `failure()` is the "stay at the
    /// root" case.
    fn step(&mut self, symbol: C) -> Option<NodeId> {
        let ac = self.automaton;
        match ac.mode() {
            FailureMode::SingleHop => {
                if let Some(next) = ac.node(self.current).get(symbol) {
                    self.current = next;
                    return Some(next);
                }
                let failure = ac.node(self.current).failure()?;
                match ac.node(failure).get(symbol) {
                    Some(next) => {
                        self.current = next;
                        Some(next)
                    }
                    None => {
                        // Park on the failure target without consuming `symbol` there.
                        self.current = failure;
                        None
                    }
                }
            }
            FailureMode::Exhaustive => loop {
                if let Some(next) = ac.node(self.current).get(symbol) {
                    self.current = next;
                    return Some(next);
                }
                self.current = ac.node(self.current).failure()?;
            },
        }
    }
}

/// Iterator over the occurrences in a symbol slice, in discovery order.
///
/// Created by [`Automaton::spans`].
#[derive(Clone, Debug)]
pub struct Spans<'a, C: Symbol> {
    cursor: Cursor<'a, C>,
    text: &'a [C],
}

impl<C: Symbol> Iterator for Spans<'_, C> {
    type Item = Span;

    fn next(&mut self) -> Option<Span> {
        self.cursor.next_span(self.text)
    }
}

impl<C: Symbol> FusedIterator for Spans<'_, C> {}

/// Iterator over the occurrences in a string, in discovery order.
///
/// Created by [`Automaton::find_iter`].
#[derive(Clone, Debug)]
pub struct FindIter<'a> {
    cursor: Cursor<'a, char>,
    chars: Vec<char>,
}

impl Iterator for FindIter<'_> {
    type Item = Match;

    fn next(&mut self) -> Option<Match> {
        let span = self.cursor.next_span(&self.chars)?;
        Some(Match {
            index: span.start,
            word: self.chars[span.start..span.end].iter().collect(),
        })
    }
}

impl FusedIterator for FindIter<'_> {}

impl<C: Symbol> Automaton<C> {
    /// Scans `text` left to right and yields every occurrence as a [`Span`].
    ///
    /// Occurrences come out ordered by end offset. Several occurrences ending at the
    /// same offset come out in the order their lengths are recorded on the node, the
    /// node's own patterns first.
    ///
    /// ```
    /// use libaho::automaton::{build_automaton, Span};
    ///
    /// let ac = build_automaton([[0x0du8, 0x0a]]);
    /// let spans: Vec<_> = ac.spans(b"a\r\nb\r\n").collect();
    /// assert_eq!(spans, [Span { start: 1, end: 3 }, Span { start: 4, end: 6 }]);
    /// ```
    pub fn spans<'a>(&'a self, text: &'a [C]) -> Spans<'a, C> {
        Spans {
            cursor: Cursor::new(self),
            text,
        }
    }
}

impl Automaton<char> {
    /// Lazily finds every occurrence in `text`.
    pub fn find_iter(&self, text: &str) -> FindIter<'_> {
        FindIter {
            cursor: Cursor::new(self),
            chars: text.chars().collect(),
        }
    }

    /// Finds every occurrence in `text`, in discovery order.
    ///
    /// ```
    /// use libaho::automaton::Automaton;
    ///
    /// let ac = Automaton::new(["b", "ab"]);
    /// let found: Vec<_> = ac.find_all("ab").into_iter().map(|m| (m.index, m.word)).collect();
    /// assert_eq!(found, [(0, "ab".to_string()), (1, "b".to_string())]);
    /// ```
    pub fn find_all(&self, text: &str) -> Vec<Match> {
        self.find_iter(text).collect()
    }
}

/// Builds a fresh automaton from `patterns` and finds every occurrence in `text`.
///
/// Prefer building an [`Automaton`] once when scanning several texts.
pub fn find_all<P>(text: &str, patterns: impl IntoIterator<Item = P>) -> Vec<Match>
where
    P: IntoPattern<char>,
{
    build_automaton(patterns).find_all(text)
}
