// Immutable DAWG store: loading, validation and path-following queries.

use std::io::Read;

use lexicon_core::byte_order;
use lexicon_core::character::letter_ordinal;

use crate::cursor::DawgWords;
use crate::edge::Edge;
use crate::format::{self, EDGE_SIZE};
use crate::DawgError;

/// A loaded word automaton.
///
/// Owns one contiguous edge array; nodes are implicit at edge offsets and
/// referenced only by index. The array is never mutated after loading, so
/// cloning produces a fully independent copy with the same `start` offset.
///
/// Every edge reachable from `start` is validated when the store is built,
/// which lets the query paths index the array directly.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Dawg {
    edges: Vec<Edge>,
    /// Index of the root's first child edge.
    start: usize,
    /// Accepting edges reachable from `start`, counted once at load time.
    word_count: usize,
}

impl std::fmt::Debug for Dawg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dawg")
            .field("edge_count", &self.edges.len())
            .field("start", &self.start)
            .field("word_count", &self.word_count)
            .finish()
    }
}

impl Dawg {
    /// Load an automaton from a byte stream in the binary DAWG format.
    ///
    /// The edge data may be shorter than the header declares: whatever was
    /// present up to end-of-stream is kept, and a trailing partial record is
    /// dropped. Any other read error, a bad magic tag, a malformed header or
    /// a corrupt edge graph fails the whole load.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, DawgError> {
        let header = format::read_header(&mut reader)?;

        let mut raw = Vec::new();
        reader
            .by_ref()
            .take(header.byte_len as u64)
            .read_to_end(&mut raw)?;

        if raw.len() < header.byte_len {
            tracing::warn!(
                declared = header.byte_len,
                actual = raw.len(),
                "DAWG edge data shorter than declared, keeping what was read"
            );
        }
        let edge_count = raw.len() / EDGE_SIZE;
        if raw.len() % EDGE_SIZE != 0 {
            tracing::warn!(
                trailing = raw.len() % EDGE_SIZE,
                "dropping partial DAWG edge record"
            );
        }

        // Copy into an aligned Vec<Edge>; the byte buffer has no alignment guarantee.
        let mut edges = vec![Edge::new(0, false, false, 0); edge_count];
        bytemuck::cast_slice_mut::<Edge, u8>(&mut edges)
            .copy_from_slice(&raw[..edge_count * EDGE_SIZE]);
        byte_order::be_words_to_host(bytemuck::cast_slice_mut::<Edge, u32>(&mut edges));

        let dawg = Self::from_edges(edges, header.start)?;
        tracing::debug!(
            start = dawg.start,
            edges = dawg.edges.len(),
            words = dawg.word_count,
            "DAWG loaded"
        );
        Ok(dawg)
    }

    /// Load an automaton from an in-memory copy of a binary DAWG file.
    pub fn from_bytes(data: &[u8]) -> Result<Self, DawgError> {
        Self::from_reader(data)
    }

    /// Build a store from host-order edges and a start index.
    ///
    /// An empty edge array is an empty automaton whatever `start` says.
    /// Otherwise `start` must be in range, and the graph reachable from it
    /// must stay inside the array, carry valid letters and be acyclic.
    pub fn from_edges(edges: Vec<Edge>, start: usize) -> Result<Self, DawgError> {
        if edges.is_empty() {
            return Ok(Self::default());
        }
        if start >= edges.len() {
            return Err(DawgError::StartOutOfRange {
                start,
                edges: edges.len(),
            });
        }
        let word_count = count_words(&edges, start)?;
        Ok(Self {
            edges,
            start,
            word_count,
        })
    }

    /// Encode this automaton in the binary DAWG format.
    pub fn to_bytes(&self) -> Vec<u8> {
        let byte_len = self.edges.len() * EDGE_SIZE;
        let mut out = format::encode_header(self.start, byte_len);
        let mut words: Vec<u32> = bytemuck::cast_slice(&self.edges).to_vec();
        byte_order::host_words_to_be(&mut words);
        out.extend_from_slice(bytemuck::cast_slice(&words));
        out
    }

    /// Number of words the automaton accepts.
    #[inline]
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Length of the edge array.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Index of the root's first child edge.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Returns `true` if the automaton has no edges.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// The raw edge array.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Scan the sibling run starting at `siblings` for the edge spelling `c`.
    ///
    /// Returns the edge index, or `None` once the run's last edge has been
    /// passed without a match. Only lowercase ASCII letters can match.
    pub fn find_edge(&self, siblings: usize, c: char) -> Option<usize> {
        let ordinal = letter_ordinal(c)?;
        let mut index = siblings;
        loop {
            let edge = self.edges.get(index)?;
            if edge.letter() == ordinal {
                return Some(index);
            }
            if edge.last_edge() {
                return None;
            }
            index += 1;
        }
    }

    /// Follow `word` from the root, returning the index of the edge reached
    /// by its last character.
    ///
    /// The empty word has no path.
    pub fn trace(&self, word: &str) -> Option<usize> {
        if self.edges.is_empty() {
            return None;
        }
        let mut chars = word.chars();
        let mut current = self.find_edge(self.start, chars.next()?)?;
        for c in chars {
            let children = self.edges[current].children();
            if children == 0 {
                return None;
            }
            current = self.find_edge(children as usize, c)?;
        }
        Some(current)
    }

    /// Returns `true` if `word` spells a path ending on an accepting edge.
    pub fn contains(&self, word: &str) -> bool {
        self.trace(word).is_some_and(|i| self.edges[i].accept())
    }

    /// Returns `true` if `prefix` spells any path from the root.
    ///
    /// The empty prefix is always contained.
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        prefix.is_empty() || self.trace(prefix).is_some()
    }

    /// Iterate all accepted words in ascending order.
    pub fn words(&self) -> DawgWords<'_> {
        DawgWords::new(self)
    }
}

impl<'a> IntoIterator for &'a Dawg {
    type Item = String;
    type IntoIter = DawgWords<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.words()
    }
}

/// Count accepting edges over every path from `start`, validating each
/// visited edge along the way.
///
/// Uses an explicit stack of `(sibling run, depth)` frames. No acyclic path
/// can be longer than the edge array, so exceeding that depth means the
/// graph loops back on itself.
fn count_words(edges: &[Edge], start: usize) -> Result<usize, DawgError> {
    let max_depth = edges.len();
    let mut count = 0usize;
    let mut stack: Vec<(usize, usize)> = vec![(start, 1)];

    while let Some((run, depth)) = stack.pop() {
        let mut index = run;
        loop {
            let edge = edges.get(index).ok_or(DawgError::EdgeOutOfRange {
                index,
                edges: edges.len(),
            })?;
            if edge.letter_char().is_none() {
                return Err(DawgError::InvalidLetter {
                    index,
                    letter: edge.letter(),
                });
            }
            if edge.accept() {
                count += 1;
            }
            if edge.children() != 0 {
                if depth >= max_depth {
                    return Err(DawgError::Cyclic);
                }
                stack.push((edge.children() as usize, depth + 1));
            }
            if edge.last_edge() {
                break;
            }
            index += 1;
        }
    }
    Ok(count)
}
