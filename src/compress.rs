//! One-shot path compression.
//!
//! Chains of single-child, uncounted branches are the dominant node
//! population in low-diversity input (long shared prefixes, repeat regions).
//! This pass rewrites each such chain into one [`Node::Run`] record whose
//! string is interned, freeing the folded arena nodes.

use crate::base::Base;
use crate::node::Node;
use crate::trie::Trie;
use slotmap::DefaultKey;

impl Trie {
    /// Collapses non-branching chains of uncounted branches into interned
    /// run records.
    ///
    /// Runs once over the whole tree, driven by an explicit worklist so
    /// stack use is independent of sequence length. Counts are never
    /// discarded: only plain branches with exactly one child are folded, and
    /// a terminal may be folded only as a run's tail. Idempotent, since run
    /// nodes are opaque to the single-child scan.
    pub fn compress(&mut self) {
        self.mark_compressed();

        let mut worklist = vec![self.root];
        while let Some(key) = worklist.pop() {
            let slots: Vec<(Base, DefaultKey)> = match &self.nodes[key] {
                Node::Branch(children) | Node::CountedBranch { children, .. } => {
                    children.iter().collect()
                }
                // A run's tail still needs scanning on repeated passes.
                Node::Run { next, .. } => {
                    worklist.push(*next);
                    continue;
                }
                Node::Terminal(_) => continue,
            };

            for (base, child) in slots {
                match self.fold_chain(base, child) {
                    Some((run, tail)) => {
                        self.children_mut(key).set(base, run);
                        worklist.push(tail);
                    }
                    None => worklist.push(child),
                }
            }
        }
    }

    /// Tries to fold the chain entered through `edge` at `start`.
    ///
    /// Walks while each node is a plain branch with exactly one child; the
    /// first node that is branching, counted, terminal, or already a run
    /// becomes the tail. Returns the new run node and its tail, or None if
    /// nothing was folded (a single-character hop is not worth a run
    /// record).
    fn fold_chain(&mut self, edge: Base, start: DefaultKey) -> Option<(DefaultKey, DefaultKey)> {
        let mut seq = String::new();
        seq.push(edge.to_char());

        let mut folded = Vec::new();
        let mut current = start;
        loop {
            match &self.nodes[current] {
                Node::Branch(children) => match children.sole_child() {
                    Some((label, child)) => {
                        seq.push(label.to_char());
                        folded.push(current);
                        current = child;
                    }
                    None => break,
                },
                Node::CountedBranch { .. } | Node::Terminal(_) | Node::Run { .. } => break,
            }
        }

        if folded.is_empty() {
            return None;
        }

        let shared = self.interner.intern(&seq);
        let run = self.nodes.insert(Node::Run {
            seq: shared,
            next: current,
        });
        for key in folded {
            self.nodes.remove(key);
        }

        Some((run, current))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    /// Collects the run strings present in the trie, in arbitrary order.
    fn run_seqs(trie: &Trie) -> Vec<Arc<str>> {
        trie.nodes
            .values()
            .filter_map(|node| match node {
                Node::Run { seq, .. } => Some(Arc::clone(seq)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_folds_shared_prefix() {
        let mut trie =
            Trie::from_sequences_uncompressed(["CGGCGGA", "CGGCGGC", "CGGCGGG", "CGGCGGT", "CGGCGGN"])
                .unwrap();
        let before = trie.stats();
        trie.compress();
        let after = trie.stats();

        // five single-child branches fold into one run
        assert_eq!(after.runs, 1);
        assert_eq!(after.nodes(), before.nodes() - 4);

        let seqs = run_seqs(&trie);
        assert_eq!(seqs.len(), 1);
        assert_eq!(&*seqs[0], "CGGCGG");
    }

    #[test]
    fn test_single_hop_is_not_folded() {
        // AC: one branch between root and terminal, run would be length 1
        let mut trie = Trie::from_sequences_uncompressed(["AC"]).unwrap();
        trie.compress();

        let stats = trie.stats();
        assert_eq!(stats.runs, 0);
        assert_eq!(stats.branches, 2); // root + A
        assert_eq!(stats.terminals, 1);
    }

    #[test]
    fn test_terminal_folds_as_run_tail() {
        let mut trie = Trie::from_sequences_uncompressed(["ACTG"]).unwrap();
        trie.compress();

        let stats = trie.stats();
        assert_eq!(stats.runs, 1);
        assert_eq!(stats.terminals, 1);
        // only root survives of the four branches
        assert_eq!(stats.branches, 1);
        assert_eq!(&*run_seqs(&trie)[0], "ACTG");
    }

    #[test]
    fn test_counted_branch_stops_the_run() {
        // AC terminates inside the ACTG path, so the chain may only fold
        // beyond it
        let mut trie = Trie::from_sequences_uncompressed(["ACTGAA", "AC"]).unwrap();
        trie.compress();

        let stats = trie.stats();
        assert_eq!(stats.counted_branches, 1);
        assert_eq!(stats.runs, 2); // root->AC and AC->..AA
        let mut seqs: Vec<String> = run_seqs(&trie).iter().map(|s| s.to_string()).collect();
        seqs.sort();
        assert_eq!(seqs, vec!["AC", "TGAA"]);
    }

    #[test]
    fn test_compression_below_counted_branch() {
        // the subtree under the counted AC position must still be scanned
        let mut trie = Trie::from_sequences_uncompressed(["AC", "ACTGGA"]).unwrap();
        trie.compress();

        let stats = trie.stats();
        assert_eq!(stats.runs, 2);
        let mut seqs: Vec<String> = run_seqs(&trie).iter().map(|s| s.to_string()).collect();
        seqs.sort();
        assert_eq!(seqs, vec!["AC", "TGGA"]);
    }

    #[test]
    fn test_equal_runs_share_storage() {
        // ACGG appears as a non-branching chain in two distinct subtrees,
        // each entered below a branching position
        let mut trie = Trie::from_sequences_uncompressed([
            "GACGGA", "GACGGT", "GTTT", "TACGGA", "TACGGT", "TGGG",
        ])
        .unwrap();
        trie.compress();

        let seqs = run_seqs(&trie);
        let acgg: Vec<&Arc<str>> = seqs.iter().filter(|s| &***s == "ACGG").collect();
        assert_eq!(acgg.len(), 2);
        assert!(Arc::ptr_eq(acgg[0], acgg[1]));
        // ACGG (shared), TTT, GGG
        assert_eq!(trie.stats().interned_runs, 3);
    }

    #[test]
    fn test_idempotent() {
        let mut trie =
            Trie::from_sequences_uncompressed(["CGGCGGA", "CGGCGGC", "ACTG", "ACTG"]).unwrap();
        trie.compress();
        let first = trie.stats();
        let first_tally = trie.tally();

        trie.compress();
        assert_eq!(trie.stats(), first);
        assert_eq!(trie.tally(), first_tally);
    }

    #[test]
    fn test_empty_trie_compress_is_noop() {
        let mut trie = Trie::new();
        trie.compress();
        assert_eq!(trie.stats().nodes(), 1);
    }
}
