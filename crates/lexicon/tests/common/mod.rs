// Shared fixtures: encode word lists as binary DAWG files.

#![allow(dead_code)]

use std::path::PathBuf;

use lexicon::Dawg;
use lexicon_dawg::Edge;
use tempfile::TempDir;

/// Encode `words` as a trie-shaped (unminimized) binary DAWG.
///
/// Edge 0 is a filler record since index 0 means "no children".
pub fn encode_words(words: &[&str]) -> Vec<u8> {
    let mut sorted: Vec<String> = words.iter().map(|w| w.to_ascii_lowercase()).collect();
    sorted.sort();
    sorted.dedup();
    sorted.retain(|w| !w.is_empty());

    let mut edges = vec![Edge::new(0, false, true, 0)];
    let start = emit(&sorted, &mut edges);
    Dawg::from_edges(edges, start)
        .expect("fixture encodes a valid automaton")
        .to_bytes()
}

fn emit(group: &[String], edges: &mut Vec<Edge>) -> usize {
    let mut letters: Vec<u8> = group.iter().map(|w| w.as_bytes()[0]).collect();
    letters.dedup();

    let base = edges.len();
    edges.resize(base + letters.len(), Edge::new(0, false, false, 0));
    for (i, &letter) in letters.iter().enumerate() {
        let accept = group.iter().any(|w| w.as_bytes() == [letter]);
        let rest: Vec<String> = group
            .iter()
            .filter(|w| w.len() > 1 && w.as_bytes()[0] == letter)
            .map(|w| w[1..].to_string())
            .collect();
        let children = if rest.is_empty() { 0 } else { emit(&rest, edges) };
        edges[base + i] = Edge::new(
            letter - b'a' + 1,
            accept,
            i + 1 == letters.len(),
            children as u32,
        );
    }
    base
}

/// Write `data` to a file named `name` inside a fresh temporary directory.
///
/// The directory is removed when the returned `TempDir` is dropped.
pub fn write_temp(name: &str, data: &[u8]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(name);
    std::fs::write(&path, data).unwrap();
    (dir, path)
}

/// A deterministic pseudo-random vocabulary of lowercase words.
pub fn vocabulary(count: usize, seed: u64) -> Vec<String> {
    let mut state = seed.max(1);
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };
    (0..count)
        .map(|_| {
            let len = 1 + (next() % 8) as usize;
            (0..len).map(|_| (b'a' + (next() % 26) as u8) as char).collect()
        })
        .collect()
}
