//! # dna-ptrie - Memory-Optimized DNA Prefix Trie
//!
//! A prefix trie over the DNA alphabet {A, C, G, T, N} that keeps a minimal
//! in-memory representation of short sequences and answers what portion of
//! the input was accounted for by a chosen set of bases.
//!
//! Three memory optimizations stack on top of a plain trie:
//! 1. **Bare terminal markers**: a position with no descendants stores only
//!    its termination count, not a full node.
//! 2. **Lazy count promotion**: interior nodes carry no count field until a
//!    sequence actually terminates on them.
//! 3. **Path compression**: a one-shot pass folds non-branching chains into
//!    single run records whose strings are interned, so identical runs
//!    anywhere in the trie share one allocation.
//!
//! ## Example
//!
//! ```
//! use dna_ptrie::{BaseSet, Trie};
//!
//! let trie = Trie::from_sequences(["ACTG", "AACT", "TCAGG", "TTGGA"])?;
//!
//! let gc: BaseSet = "CG".parse()?;
//! assert_eq!(trie.fraction(gc)?, 8.0 / 18.0);
//! # Ok::<(), dna_ptrie::Error>(())
//! ```
//!
//! ## Lifecycle
//!
//! Build with [`Trie::insert`]/[`Trie::extend`], compress once with
//! [`Trie::compress`], then query with [`Trie::tally`] and
//! [`Trie::fraction`]. [`Trie::from_sequences`] runs all three build steps.
//! Queries never mutate, so a compressed trie can be shared freely.

mod base;
mod compress;
mod error;
mod intern;
mod node;
mod tally;
mod trie;

#[cfg(test)]
mod tests;

pub use base::{Base, BaseSet};
pub use error::Error;
pub use tally::Tally;
pub use trie::{Trie, TrieStats};
