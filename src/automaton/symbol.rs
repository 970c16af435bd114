use std::fmt::Debug;
use std::hash::Hash;

/// Trait for types that can serve as edge labels in an automaton.
///
/// This trait is automatically implemented for any type satisfying all the
/// required bounds (`char`, `u8`, `u16`, `u32`, etc.).
///
/// - `Copy`: edges and scanned text store labels by value
/// - `Eq`: comparing a text symbol against edge labels
/// - `Hash`: symbols can key hash-based collections
/// - `Debug`: debug printing of nodes
pub trait Symbol: Copy + Eq + Hash + Debug {}

impl<T: Copy + Eq + Hash + Debug> Symbol for T {}
