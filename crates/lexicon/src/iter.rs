// Merge iterator over the automaton and overflow stores.

use std::cmp::Ordering;
use std::collections::btree_set;
use std::iter::{FusedIterator, Peekable};

use lexicon_dawg::DawgWords;

/// Iterator over every word in a [`Lexicon`](crate::Lexicon), ascending.
///
/// Holds one cursor into each store and emits the smaller of the two
/// current candidates, advancing only that cursor. A word present in both
/// stores is emitted once. Nothing is materialized beyond the automaton
/// cursor's current prefix.
///
/// Single pass and fused; call [`Lexicon::iter`](crate::Lexicon::iter)
/// again to rescan.
pub struct Iter<'a> {
    dawg: Option<Peekable<DawgWords<'a>>>,
    others: Peekable<btree_set::Iter<'a, String>>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(dawg: Option<DawgWords<'a>>, others: btree_set::Iter<'a, String>) -> Self {
        Self {
            dawg: dawg.map(Iterator::peekable),
            others: others.peekable(),
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let order = match (self.dawg.as_mut().and_then(Peekable::peek), self.others.peek()) {
            (None, None) => return None,
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (Some(d), Some(o)) => d.as_str().cmp(o.as_str()),
        };
        match order {
            Ordering::Less => self.dawg.as_mut().and_then(Iterator::next),
            Ordering::Greater => self.others.next().cloned(),
            Ordering::Equal => {
                self.others.next();
                self.dawg.as_mut().and_then(Iterator::next)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let d = self.dawg.as_ref().map_or(0, |it| it.size_hint().0);
        let o = self.others.size_hint().0;
        (d.max(o), Some(d + o))
    }
}

impl FusedIterator for Iter<'_> {}

#[cfg(test)]
mod tests {
    use lexicon_dawg::{Dawg, Edge};

    use crate::overflow::OverflowStore;

    use super::*;

    /// {ax, ex, ox}
    fn dawg() -> Dawg {
        let edges = vec![
            Edge::new(0, false, true, 0),
            Edge::new(1, false, false, 4),
            Edge::new(5, false, false, 4),
            Edge::new(15, false, true, 4),
            Edge::new(24, true, true, 0),
        ];
        Dawg::from_edges(edges, 1).unwrap()
    }

    fn store(words: &[&str]) -> OverflowStore {
        let mut s = OverflowStore::new();
        for w in words {
            s.add(*w);
        }
        s
    }

    #[test]
    fn interleaves_both_stores() {
        let d = dawg();
        let s = store(&["cx", "zz", "a"]);
        let words: Vec<String> = Iter::new(Some(d.words()), s.iter()).collect();
        assert_eq!(words, ["a", "ax", "cx", "ex", "ox", "zz"]);
    }

    #[test]
    fn duplicate_across_stores_emitted_once() {
        let d = dawg();
        let s = store(&["ex"]);
        let words: Vec<String> = Iter::new(Some(d.words()), s.iter()).collect();
        assert_eq!(words, ["ax", "ex", "ox"]);
    }

    #[test]
    fn overflow_only() {
        let s = store(&["b", "a"]);
        let words: Vec<String> = Iter::new(None, s.iter()).collect();
        assert_eq!(words, ["a", "b"]);
    }

    #[test]
    fn dawg_only() {
        let d = dawg();
        let s = OverflowStore::new();
        let words: Vec<String> = Iter::new(Some(d.words()), s.iter()).collect();
        assert_eq!(words, ["ax", "ex", "ox"]);
    }

    #[test]
    fn size_hint_bounds() {
        let d = dawg();
        let s = store(&["cx", "zz"]);
        let mut it = Iter::new(Some(d.words()), s.iter());
        assert_eq!(it.size_hint(), (3, Some(5)));
        it.next();
        assert_eq!(it.size_hint(), (2, Some(4)));
    }

    #[test]
    fn fused() {
        let s = store(&["a"]);
        let mut it = Iter::new(None, s.iter());
        assert_eq!(it.next().as_deref(), Some("a"));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }
}
