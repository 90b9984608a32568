// Lexicon: one logical dictionary over the automaton and overflow stores.

use std::fmt;
use std::path::Path;

use lexicon_core::character::normalize;
use lexicon_dawg::Dawg;
use lexicon_dawg::format::is_dawg;

use crate::LexiconError;
use crate::iter::Iter;
use crate::overflow::OverflowStore;
use crate::text::parse_word_list;

/// A set of lowercase words with membership and prefix queries.
///
/// Words loaded from a binary `DAWG` file live in an immutable automaton;
/// everything else (runtime `add`s, plain-text word lists) goes into a
/// sorted overflow store. A word already accepted by the automaton is never
/// duplicated into the overflow store.
///
/// All inputs are lowercased (ASCII) before use. Cloning copies both stores,
/// so clones never share state.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    dawg: Option<Dawg>,
    others: OverflowStore,
}

impl Lexicon {
    /// Create an empty lexicon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a lexicon from a file, binary or text (see
    /// [`add_words_from_path`](Self::add_words_from_path)).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let mut lex = Self::new();
        lex.add_words_from_path(path)?;
        Ok(lex)
    }

    /// Create a lexicon from the contents of a binary or text lexicon file.
    pub fn from_bytes(data: &[u8]) -> Result<Self, LexiconError> {
        let mut lex = Self::new();
        lex.add_words_from_bytes(data)?;
        Ok(lex)
    }

    /// Read a whole lexicon file and add its words.
    ///
    /// The file is read into memory in one pass, then dispatched on its first
    /// four bytes as in [`add_words_from_bytes`](Self::add_words_from_bytes).
    pub fn add_words_from_path(&mut self, path: impl AsRef<Path>) -> Result<(), LexiconError> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|source| LexiconError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        self.add_words_from_bytes(&data)
    }

    /// Add the words from the contents of a lexicon file.
    ///
    /// Data starting with `DAWG` is parsed as a binary automaton and replaces
    /// the current one; this requires the overflow store to be empty. Any
    /// other data is a plain-text list, one word per line, added word by word.
    ///
    /// On error the lexicon is left exactly as it was.
    pub fn add_words_from_bytes(&mut self, data: &[u8]) -> Result<(), LexiconError> {
        if is_dawg(data) {
            self.load_dawg(data)
        } else {
            self.load_text(data)
        }
    }

    fn load_dawg(&mut self, data: &[u8]) -> Result<(), LexiconError> {
        if !self.others.is_empty() {
            return Err(LexiconError::BinaryRequiresEmpty {
                words: self.others.len(),
            });
        }
        let dawg = Dawg::from_bytes(data)?;
        if let Some(old) = &self.dawg {
            tracing::debug!(
                old_words = old.word_count(),
                new_words = dawg.word_count(),
                "replacing lexicon automaton"
            );
        }
        self.dawg = Some(dawg);
        Ok(())
    }

    fn load_text(&mut self, data: &[u8]) -> Result<(), LexiconError> {
        let list = parse_word_list(data)?;
        let before = self.len();
        for word in &list.words {
            self.add(word);
        }
        tracing::debug!(
            lines = list.lines,
            added = self.len() - before,
            "word list loaded"
        );
        Ok(())
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.dawg.as_ref().map_or(0, Dawg::word_count) + self.others.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop the automaton and every added word.
    pub fn clear(&mut self) {
        tracing::debug!(words = self.len(), "clearing lexicon");
        self.dawg = None;
        self.others.clear();
    }

    /// Add a word, lowercased. Returns `false` if it was already present.
    ///
    /// The automaton is never modified; new words go to the overflow store.
    pub fn add(&mut self, word: &str) -> bool {
        let word = normalize(word);
        if self.contains_normalized(&word) {
            return false;
        }
        self.others.add(word.into_owned())
    }

    /// Returns `true` if `word` (case-insensitively) is in the lexicon.
    pub fn contains(&self, word: &str) -> bool {
        self.contains_normalized(&normalize(word))
    }

    fn contains_normalized(&self, word: &str) -> bool {
        self.dawg.as_ref().is_some_and(|d| d.contains(word)) || self.others.contains(word)
    }

    /// Returns `true` if some word in the lexicon starts with `prefix`
    /// (case-insensitively). The empty prefix is always contained.
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        if prefix.is_empty() {
            return true;
        }
        let prefix = normalize(prefix);
        self.dawg.as_ref().is_some_and(|d| d.contains_prefix(&prefix))
            || self.others.contains_prefix(&prefix)
    }

    /// Iterate every word in ascending order.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.dawg.as_ref().map(Dawg::words), self.others.iter())
    }

    /// The loaded automaton, if any.
    pub fn dawg(&self) -> Option<&Dawg> {
        self.dawg.as_ref()
    }

    /// Words held outside the automaton.
    pub fn others(&self) -> &OverflowStore {
        &self.others
    }
}

impl<'a> IntoIterator for &'a Lexicon {
    type Item = String;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: AsRef<str>> Extend<S> for Lexicon {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.add(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Lexicon {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut lex = Self::new();
        lex.extend(iter);
        lex
    }
}

/// Two lexicons are equal when they hold the same words, wherever each
/// word is stored.
impl PartialEq for Lexicon {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for Lexicon {}

impl fmt::Display for Lexicon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, word) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "\"{word}\"")?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use lexicon_dawg::{DawgError, Edge};

    use super::*;

    /// Binary file for {ax, ex, ox}.
    fn ax_ex_ox_bytes() -> Vec<u8> {
        let edges = vec![
            Edge::new(0, false, true, 0),
            Edge::new(1, false, false, 4),
            Edge::new(5, false, false, 4),
            Edge::new(15, false, true, 4),
            Edge::new(24, true, true, 0),
        ];
        Dawg::from_edges(edges, 1).unwrap().to_bytes()
    }

    fn words(lex: &Lexicon) -> Vec<String> {
        lex.iter().collect()
    }

    #[test]
    fn text_word_list() {
        let lex = Lexicon::from_bytes(b"one\ntwo\nthree\n").unwrap();
        assert_eq!(lex.len(), 3);
        assert!(lex.contains("two"));
        assert!(!lex.contains("four"));
        assert!(lex.contains_prefix("th"));
        assert_eq!(words(&lex), ["one", "three", "two"]);
        assert!(lex.dawg().is_none());
    }

    #[test]
    fn add_twice_counts_once() {
        let mut lex = Lexicon::new();
        assert!(lex.add("ax"));
        assert!(!lex.add("ax"));
        assert_eq!(lex.len(), 1);
    }

    #[test]
    fn add_normalizes_case() {
        let mut lex = Lexicon::new();
        lex.add("HeLLo");
        assert!(lex.contains("hello"));
        assert!(lex.contains("HELLO"));
        assert!(!lex.add("hello"));
        assert_eq!(words(&lex), ["hello"]);
    }

    #[test]
    fn binary_then_add() {
        let mut lex = Lexicon::from_bytes(&ax_ex_ox_bytes()).unwrap();
        assert_eq!(lex.len(), 3);
        assert!(lex.add("cx"));
        assert_eq!(lex.len(), 4);
        assert_eq!(words(&lex), ["ax", "cx", "ex", "ox"]);
    }

    #[test]
    fn add_word_already_in_automaton_is_noop() {
        let mut lex = Lexicon::from_bytes(&ax_ex_ox_bytes()).unwrap();
        assert!(!lex.add("EX"));
        assert_eq!(lex.len(), 3);
        assert!(lex.others().is_empty());
    }

    #[test]
    fn automaton_prefix_that_is_not_a_word() {
        let mut lex = Lexicon::from_bytes(&ax_ex_ox_bytes()).unwrap();
        assert!(!lex.contains("e"));
        assert!(lex.contains_prefix("e"));
        assert!(lex.add("e"));
        assert!(lex.contains("e"));
        assert_eq!(words(&lex), ["ax", "e", "ex", "ox"]);
    }

    #[test]
    fn prefix_falls_through_to_overflow() {
        let mut lex = Lexicon::from_bytes(&ax_ex_ox_bytes()).unwrap();
        lex.add("zebra");
        assert!(lex.contains_prefix("ZEB"));
        assert!(!lex.contains_prefix("zebras"));
        assert!(lex.contains_prefix(""));
    }

    #[test]
    fn empty_prefix_on_empty_lexicon() {
        let lex = Lexicon::new();
        assert!(lex.is_empty());
        assert!(lex.contains_prefix(""));
        assert!(!lex.contains(""));
    }

    #[test]
    fn binary_into_non_empty_lexicon_is_rejected() {
        let mut lex = Lexicon::new();
        lex.add("word");
        let err = lex.add_words_from_bytes(&ax_ex_ox_bytes()).unwrap_err();
        assert!(matches!(err, LexiconError::BinaryRequiresEmpty { words: 1 }));
        assert_eq!(words(&lex), ["word"]);
        assert!(lex.dawg().is_none());
    }

    #[test]
    fn binary_replaces_existing_automaton() {
        let mut lex = Lexicon::from_bytes(&ax_ex_ox_bytes()).unwrap();
        let other = Dawg::from_edges(
            vec![Edge::new(0, false, true, 0), Edge::new(9, true, true, 0)],
            1,
        )
        .unwrap()
        .to_bytes();
        lex.add_words_from_bytes(&other).unwrap();
        assert_eq!(words(&lex), ["i"]);
    }

    #[test]
    fn malformed_binary_leaves_lexicon_untouched() {
        let mut lex = Lexicon::from_bytes(&ax_ex_ox_bytes()).unwrap();
        let err = lex.add_words_from_bytes(b"DAWG:-1:0:").unwrap_err();
        assert!(matches!(
            err,
            LexiconError::Format(DawgError::NegativeField { field: "start" })
        ));
        assert_eq!(lex.len(), 3);
        assert!(lex.contains("ox"));
    }

    #[test]
    fn corrupt_edge_data_leaves_lexicon_untouched() {
        let mut lex = Lexicon::from_bytes(&ax_ex_ox_bytes()).unwrap();
        let mut corrupt = ax_ex_ox_bytes();
        // Drop the shared 'x' record so the first-level edges point past the end.
        corrupt.truncate(corrupt.len() - 4);
        let err = lex.add_words_from_bytes(&corrupt).unwrap_err();
        assert!(matches!(
            err,
            LexiconError::Format(DawgError::EdgeOutOfRange { index: 4, edges: 4 })
        ));
        assert_eq!(words(&lex), ["ax", "ex", "ox"]);
    }

    #[test]
    fn bad_text_leaves_lexicon_untouched() {
        let mut lex = Lexicon::new();
        lex.add("keep");
        let err = lex.add_words_from_bytes(b"new\n\xC3\x28\n").unwrap_err();
        assert!(matches!(err, LexiconError::InvalidText { line: 2 }));
        assert_eq!(words(&lex), ["keep"]);
    }

    #[test]
    fn text_after_binary_is_allowed() {
        let mut lex = Lexicon::from_bytes(&ax_ex_ox_bytes()).unwrap();
        lex.add_words_from_bytes(b"bx\nOX\n").unwrap();
        assert_eq!(lex.len(), 4);
        assert_eq!(words(&lex), ["ax", "bx", "ex", "ox"]);
    }

    #[test]
    fn clear_drops_both_stores() {
        let mut lex = Lexicon::from_bytes(&ax_ex_ox_bytes()).unwrap();
        lex.add("cx");
        lex.clear();
        assert!(lex.is_empty());
        assert!(lex.dawg().is_none());
        assert!(!lex.contains("ax"));
        assert_eq!(lex.iter().next(), None);
        // binary loads are allowed again
        lex.add_words_from_bytes(&ax_ex_ox_bytes()).unwrap();
        assert_eq!(lex.len(), 3);
    }

    #[test]
    fn clone_is_independent() {
        let mut a = Lexicon::from_bytes(&ax_ex_ox_bytes()).unwrap();
        a.add("cx");
        let mut b = a.clone();
        b.add("zz");
        assert!(!a.contains("zz"));
        b.clear();
        assert!(a.contains("ax"));
        assert!(a.contains("cx"));
        assert_eq!(a.len(), 4);
        a.add("qq");
        assert!(!b.contains("qq"));
    }

    #[test]
    fn clone_without_automaton() {
        let a: Lexicon = ["x"].into_iter().collect();
        let b = a.clone();
        assert!(b.dawg().is_none());
        assert_eq!(a, b);
    }

    #[test]
    fn equality_ignores_backing_store() {
        let binary = Lexicon::from_bytes(&ax_ex_ox_bytes()).unwrap();
        let text = Lexicon::from_bytes(b"ox\nex\nax\n").unwrap();
        assert_eq!(binary, text);
        let mut more = text.clone();
        more.add("ux");
        assert_ne!(binary, more);
    }

    #[test]
    fn display_lists_words() {
        let lex: Lexicon = ["b", "a"].into_iter().collect();
        assert_eq!(lex.to_string(), r#"{"a", "b"}"#);
        assert_eq!(Lexicon::new().to_string(), "{}");
    }

    #[test]
    fn extend_adds_normalized() {
        let mut lex = Lexicon::new();
        lex.extend(vec![String::from("B"), String::from("a"), String::from("b")]);
        assert_eq!(lex.len(), 2);
        assert_eq!(words(&lex), ["a", "b"]);
    }

    #[test]
    fn size_matches_iteration() {
        let mut lex = Lexicon::from_bytes(&ax_ex_ox_bytes()).unwrap();
        lex.extend(["a", "zz", "ex", "bb"]);
        assert_eq!(lex.len(), lex.iter().count());
        assert_eq!(lex.len(), 6);
    }

    #[test]
    fn missing_file_is_open_error() {
        let err = Lexicon::from_path("/nonexistent/lexicon.dat").unwrap_err();
        assert!(matches!(err, LexiconError::Open { .. }));
        assert!(err.to_string().contains("/nonexistent/lexicon.dat"));
    }
}
