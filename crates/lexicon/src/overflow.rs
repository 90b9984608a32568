// Overflow store: the mutable sorted set of words living outside the automaton.

use std::collections::BTreeSet;
use std::collections::btree_set;
use std::ops::Bound;

/// Sorted set of words added at runtime or read from plain-text lists.
///
/// Ordering is byte-wise lexicographic, the same order the automaton's
/// sibling runs are laid out in, so the two stores can be merged linearly.
/// Words are stored exactly as given; the lexicon normalizes before calling in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverflowStore {
    words: BTreeSet<String>,
}

impl OverflowStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Returns `true` if some stored word starts with `prefix`.
    ///
    /// Only the first word at or after `prefix` in sort order needs checking:
    /// every word sharing the prefix sorts into one contiguous run there.
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.words
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .next()
            .is_some_and(|w| w.starts_with(prefix))
    }

    /// Insert `word`, returning `false` if it was already present.
    pub fn add(&mut self, word: impl Into<String>) -> bool {
        self.words.insert(word.into())
    }

    pub fn clear(&mut self) {
        self.words.clear();
    }

    /// Iterate the words in ascending order.
    pub fn iter(&self) -> btree_set::Iter<'_, String> {
        self.words.iter()
    }
}

impl<'a> IntoIterator for &'a OverflowStore {
    type Item = &'a String;
    type IntoIter = btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
