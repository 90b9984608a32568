// Depth-first word enumeration over a DAWG with an explicit stack.

use std::iter::FusedIterator;

use crate::dawg::Dawg;
use crate::edge::Edge;

/// Iterator over the words a [`Dawg`] accepts, in ascending order.
///
/// Walks the edge array depth-first without recursion: descending into an
/// edge's children pushes that edge and appends its letter to the prefix;
/// running off the end of a sibling run pops back up. Each accepting edge
/// yields `prefix + letter`.
///
/// Single pass: once exhausted it keeps returning `None`.
pub struct DawgWords<'a> {
    edges: &'a [Edge],
    /// Edge under the cursor; `None` once the walk is finished.
    current: Option<usize>,
    started: bool,
    /// Edges descended through, one per prefix letter.
    stack: Vec<usize>,
    prefix: String,
    /// Words not yet yielded.
    remaining: usize,
}

impl<'a> DawgWords<'a> {
    pub(crate) fn new(dawg: &'a Dawg) -> Self {
        let current = if dawg.is_empty() {
            None
        } else {
            Some(dawg.start())
        };
        Self {
            edges: dawg.edges(),
            current,
            started: false,
            stack: Vec::new(),
            prefix: String::new(),
            remaining: dawg.word_count(),
        }
    }

    /// Move to the next edge in depth-first order.
    fn advance_edge(&mut self) {
        let Some(mut index) = self.current else {
            return;
        };
        let edge = self.edges[index];
        if edge.children() == 0 {
            while self.edges[index].last_edge() {
                match self.stack.pop() {
                    Some(parent) => {
                        index = parent;
                        self.prefix.pop();
                    }
                    None => {
                        self.current = None;
                        return;
                    }
                }
            }
            self.current = Some(index + 1);
        } else {
            self.stack.push(index);
            self.prefix.push(letter(&edge));
            self.current = Some(edge.children() as usize);
        }
    }
}

#[inline]
fn letter(edge: &Edge) -> char {
    edge.letter_char().unwrap_or(char::REPLACEMENT_CHARACTER)
}

impl Iterator for DawgWords<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.started {
            self.advance_edge();
        } else {
            self.started = true;
        }
        while let Some(index) = self.current {
            if self.edges[index].accept() {
                break;
            }
            self.advance_edge();
        }

        let index = self.current?;
        let mut word = String::with_capacity(self.prefix.len() + 1);
        word.push_str(&self.prefix);
        word.push(letter(&self.edges[index]));
        self.remaining = self.remaining.saturating_sub(1);
        Some(word)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for DawgWords<'_> {}

impl FusedIterator for DawgWords<'_> {}
