use crate::base::Base;
use slotmap::DefaultKey;
use std::sync::Arc;

/// Child table of a branching node: one slot per alphabet base.
#[derive(Debug, Default)]
pub(crate) struct Children([Option<DefaultKey>; 5]);

impl Children {
    /// Returns the child key under `base`, if present.
    #[inline]
    pub(crate) fn get(&self, base: Base) -> Option<DefaultKey> {
        self.0[base.index()]
    }

    /// Points the slot under `base` at `child`.
    #[inline]
    pub(crate) fn set(&mut self, base: Base, child: DefaultKey) {
        self.0[base.index()] = Some(child);
    }

    /// Iterates present children in alphabet order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (Base, DefaultKey)> + '_ {
        Base::ALL
            .into_iter()
            .filter_map(|base| self.0[base.index()].map(|key| (base, key)))
    }

    /// Returns the only present child, or None if the table holds zero or
    /// more than one.
    pub(crate) fn sole_child(&self) -> Option<(Base, DefaultKey)> {
        let mut present = self.iter();
        let first = present.next()?;
        if present.next().is_some() {
            None
        } else {
            Some(first)
        }
    }
}

/// Node representations, cheapest first.
///
/// A tree position holds exactly one variant. Insertion promotes a slot to a
/// richer variant only when forced to: a `Branch` gains a count, a `Terminal`
/// gains children. Promotions never reverse, and only insertion performs
/// them; compression replaces single-child `Branch` chains with `Run` but
/// leaves counts untouched.
#[derive(Debug)]
pub(crate) enum Node {
    /// Interior position where no sequence terminates.
    Branch(Children),

    /// Interior position where `count` sequences also terminate.
    CountedBranch { children: Children, count: u64 },

    /// Leaf position holding only a termination count.
    Terminal(u64),

    /// A collapsed non-branching chain. The first character of `seq` is the
    /// edge label that led here; the rest is the folded path. `seq` is
    /// interned, so equal runs anywhere in the trie share one allocation.
    /// Always at least two characters long.
    Run { seq: Arc<str>, next: DefaultKey },
}
