use crate::base::Base;
use crate::error::Error;
use crate::intern::Interner;
use crate::node::{Children, Node};
use slotmap::{DefaultKey, SlotMap};

/// Memory-optimized prefix trie over DNA sequences.
///
/// Nodes live in a slotmap arena and are addressed by keys; each position
/// holds the cheapest [`Node`] representation that can express it, and
/// insertion promotes representations lazily. After the final insert,
/// [`compress`](Trie::compress) folds non-branching chains into interned run
/// records; from then on the trie is read-only.
pub struct Trie {
    /// Node arena. Child links are keys into this map.
    pub(crate) nodes: SlotMap<DefaultKey, Node>,

    /// Root position. Always a `Branch` or `CountedBranch`.
    pub(crate) root: DefaultKey,

    /// Shared storage for run strings, populated during compression.
    pub(crate) interner: Interner,

    /// Number of non-empty sequences inserted.
    length: usize,

    /// Set once `compress` has run; inserts are rejected afterwards.
    compressed: bool,
}

impl Trie {
    /// Creates an empty trie.
    pub fn new() -> Self {
        let mut nodes = SlotMap::new();
        let root = nodes.insert(Node::Branch(Children::default()));

        Self {
            nodes,
            root,
            interner: Interner::default(),
            length: 0,
            compressed: false,
        }
    }

    /// Adds one sequence to the trie.
    ///
    /// The sequence is parsed up front, so a rejected symbol leaves the trie
    /// unchanged. Empty sequences are accepted and ignored: the root carries
    /// no count, so a zero-length sequence has nowhere to terminate.
    ///
    /// # Panics
    ///
    /// Panics if called after [`compress`](Trie::compress); the lifecycle is
    /// build, compress once, then query.
    pub fn insert(&mut self, sequence: &str) -> Result<(), Error> {
        assert!(
            !self.compressed,
            "sequences must be inserted before compression"
        );

        let bases = sequence
            .chars()
            .map(Base::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let Some((&last, prefix)) = bases.split_last() else {
            return Ok(());
        };

        let mut current = self.root;
        for &base in prefix {
            current = self.descend(current, base);
        }
        self.terminate(current, last);
        self.length += 1;

        Ok(())
    }

    /// Adds every sequence from an iterator.
    pub fn extend<I, S>(&mut self, sequences: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for sequence in sequences {
            self.insert(sequence.as_ref())?;
        }
        Ok(())
    }

    /// Builds a trie from a batch of sequences and compresses it.
    ///
    /// Empty input is not an error; the resulting trie simply holds no
    /// sequences (and [`fraction`](Trie::fraction) will report that).
    pub fn from_sequences<I, S>(sequences: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::from_sequences_uncompressed(sequences)?;
        trie.compress();
        Ok(trie)
    }

    /// Builds a trie without the compression pass.
    ///
    /// Kept for memory comparisons and for callers that want to keep
    /// inserting; [`compress`](Trie::compress) can still be run later.
    pub fn from_sequences_uncompressed<I, S>(sequences: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        trie.extend(sequences)?;
        Ok(trie)
    }

    /// Number of (non-empty) sequences inserted.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Returns true if no sequences have been inserted.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Reports the live node population per representation.
    pub fn stats(&self) -> TrieStats {
        let mut stats = TrieStats {
            branches: 0,
            counted_branches: 0,
            terminals: 0,
            runs: 0,
            interned_runs: self.interner.len(),
            interned_bytes: self.interner.content_bytes(),
        };

        for node in self.nodes.values() {
            match node {
                Node::Branch(_) => stats.branches += 1,
                Node::CountedBranch { .. } => stats.counted_branches += 1,
                Node::Terminal(_) => stats.terminals += 1,
                Node::Run { .. } => stats.runs += 1,
            }
        }

        stats
    }

    pub(crate) fn mark_compressed(&mut self) {
        self.compressed = true;
    }

    /// Child table of a branch-like node.
    pub(crate) fn children_mut(&mut self, key: DefaultKey) -> &mut Children {
        match &mut self.nodes[key] {
            Node::Branch(children) | Node::CountedBranch { children, .. } => children,
            Node::Terminal(_) | Node::Run { .. } => {
                unreachable!("only branch nodes own child slots")
            }
        }
    }

    /// Steps from `parent` into the child under `base`, creating or
    /// promoting the child so that it can hold children of its own.
    fn descend(&mut self, parent: DefaultKey, base: Base) -> DefaultKey {
        match self.children_mut(parent).get(base) {
            Some(child) => {
                let node = &mut self.nodes[child];
                // A terminal on the path of a longer sequence must start
                // holding children; the stored count carries over.
                if let Node::Terminal(count) = node {
                    let count = *count;
                    *node = Node::CountedBranch {
                        children: Children::default(),
                        count,
                    };
                }
                child
            }
            None => {
                let child = self.nodes.insert(Node::Branch(Children::default()));
                self.children_mut(parent).set(base, child);
                child
            }
        }
    }

    /// Records a sequence ending in the slot under `base`, promoting the
    /// occupant to a representation that can hold a count.
    fn terminate(&mut self, parent: DefaultKey, base: Base) {
        match self.children_mut(parent).get(base) {
            None => {
                let child = self.nodes.insert(Node::Terminal(1));
                self.children_mut(parent).set(base, child);
            }
            Some(child) => {
                let node = &mut self.nodes[child];
                match node {
                    Node::Terminal(count) | Node::CountedBranch { count, .. } => *count += 1,
                    Node::Branch(children) => {
                        let children = std::mem::take(children);
                        *node = Node::CountedBranch { children, count: 1 };
                    }
                    Node::Run { .. } => unreachable!("runs do not exist before compression"),
                }
            }
        }
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

/// Node-population report for a built trie.
///
/// The in-process analog of a heap profiler run: how many nodes of each
/// representation are live, and how much run-string storage is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrieStats {
    /// Interior nodes with no count.
    pub branches: usize,
    /// Interior nodes where sequences also terminate.
    pub counted_branches: usize,
    /// Leaf-only termination markers.
    pub terminals: usize,
    /// Compressed run records.
    pub runs: usize,
    /// Distinct interned run strings.
    pub interned_runs: usize,
    /// Total bytes of interned run content.
    pub interned_bytes: usize,
}

impl TrieStats {
    /// Total live nodes across all representations.
    pub fn nodes(&self) -> usize {
        self.branches + self.counted_branches + self.terminals + self.runs
    }
}
