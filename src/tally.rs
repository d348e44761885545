use crate::base::{Base, BaseSet};
use crate::error::Error;
use crate::node::Node;
use crate::trie::Trie;
use slotmap::DefaultKey;

/// Per-base occurrence totals, weighted by terminal counts.
///
/// Each base is counted once per sequence per occurrence position: a symbol
/// at depth d of a path contributes the number of sequences terminating at
/// or below that position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tally([u64; 5]);

impl Tally {
    /// Total occurrences of one base.
    pub fn get(self, base: Base) -> u64 {
        self.0[base.index()]
    }

    /// Sum over every base.
    pub fn total(self) -> u64 {
        self.0.iter().sum()
    }

    /// Sum over the bases in `classes`.
    pub fn class_total(self, classes: BaseSet) -> u64 {
        Base::ALL
            .into_iter()
            .filter(|&base| classes.contains(base))
            .map(|base| self.get(base))
            .sum()
    }
}

impl Trie {
    /// Tallies per-base occurrence totals across all inserted sequences.
    ///
    /// Iterative depth-first traversal: each stack frame carries the path's
    /// running per-base counts, so call depth never depends on sequence
    /// length. The trie is not mutated; compressed and uncompressed trees
    /// tally identically.
    pub fn tally(&self) -> Tally {
        let mut totals = [0u64; 5];
        let mut stack: Vec<(DefaultKey, [u64; 5])> = vec![(self.root, [0; 5])];

        while let Some((key, path)) = stack.pop() {
            match &self.nodes[key] {
                Node::Branch(children) => {
                    for (base, child) in children.iter() {
                        let mut path = path;
                        path[base.index()] += 1;
                        stack.push((child, path));
                    }
                }
                Node::CountedBranch { children, count } => {
                    for (total, along_path) in totals.iter_mut().zip(path) {
                        *total += count * along_path;
                    }
                    for (base, child) in children.iter() {
                        let mut path = path;
                        path[base.index()] += 1;
                        stack.push((child, path));
                    }
                }
                Node::Terminal(count) => {
                    for (total, along_path) in totals.iter_mut().zip(path) {
                        *total += count * along_path;
                    }
                }
                Node::Run { seq, next } => {
                    // the run's first character is the edge label, already
                    // counted by the parent frame
                    let mut path = path;
                    for symbol in seq.chars().skip(1) {
                        let base = Base::try_from(symbol)
                            .expect("run strings hold only alphabet symbols");
                        path[base.index()] += 1;
                    }
                    stack.push((*next, path));
                }
            }
        }

        Tally(totals)
    }

    /// Fraction of all tallied symbol occurrences that fall in `classes`.
    ///
    /// Fails with [`Error::EmptySequenceSet`] when the trie holds no
    /// sequences; an empty-trie fraction is undefined, not zero.
    pub fn fraction(&self, classes: BaseSet) -> Result<f64, Error> {
        let tally = self.tally();
        let denominator = tally.total();
        if denominator == 0 {
            return Err(Error::EmptySequenceSet);
        }
        Ok(tally.class_total(classes) as f64 / denominator as f64)
    }
}
