//! Example: building a keyword scanner on top of Automaton.
//!
//! This shows how to wrap the raw automaton API in a small domain type. The
//! `KeywordScanner` struct wraps an `Automaton` and provides per-keyword counts and
//! text highlighting.
//!
//! Run with: cargo run --example keywords
//! Set `RUST_LOG=libaho=debug` to see build events.

use std::collections::BTreeMap;

use libaho::automaton::{Builder, FailureMode};
use libaho::Automaton;
use tracing_subscriber::EnvFilter;

/// A keyword scanner over a fixed list of keywords.
struct KeywordScanner {
    automaton: Automaton,
}

impl KeywordScanner {
    fn new(automaton: Automaton) -> Self {
        KeywordScanner { automaton }
    }

    /// Returns how often each keyword occurs in `text`.
    fn counts(&self, text: &str) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for m in self.automaton.find_iter(text) {
            *counts.entry(m.word).or_insert(0) += 1;
        }
        counts
    }

    /// Returns `text` with every character covered by an occurrence upper-cased.
    fn highlight(&self, text: &str) -> String {
        let mut chars: Vec<char> = text.chars().collect();
        let mut covered = vec![false; chars.len()];
        for m in self.automaton.find_iter(text) {
            let len = m.word.chars().count();
            covered[m.index..m.index + len].fill(true);
        }
        for (ch, covered) in chars.iter_mut().zip(covered) {
            if covered {
                *ch = ch.to_ascii_uppercase();
            }
        }
        chars.into_iter().collect()
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let keywords = ["he", "she", "his", "hers", "usher"];
    let text = "the usher said this is hers, and she nodded";

    let scanner = KeywordScanner::new(Automaton::new(keywords));

    // Occurrences in discovery order
    println!("Occurrences:");
    for m in scanner.automaton.find_iter(text) {
        println!("  {:>3}: {}", m.index, m.word);
    }

    println!("\nCounts: {:?}", scanner.counts(text));
    println!("Highlighted: {}", scanner.highlight(text));

    // Structure
    println!("\nAutomaton:\n{:#}", scanner.automaton.dump());

    // The textbook automaton may report more
    let mut builder = Builder::with_mode(FailureMode::Exhaustive);
    for k in keywords {
        builder.add_pattern(k);
    }
    let exhaustive = KeywordScanner::new(builder.build());
    println!("Exhaustive counts: {:?}", exhaustive.counts(text));
}
