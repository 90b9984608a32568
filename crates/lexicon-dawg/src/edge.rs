// Packed edge record for the DAWG edge array.

use bytemuck::{Pod, Zeroable};
use lexicon_core::character::ordinal_letter;

const LETTER_SHIFT: u32 = 27;
const LETTER_MASK: u32 = 0x1F;
const LAST_EDGE_BIT: u32 = 1 << 26;
const ACCEPT_BIT: u32 = 1 << 25;
const CHILDREN_MASK: u32 = 0x00FF_FFFF;

/// One automaton transition (4 bytes).
///
/// The record is a single `u32` in host order once loaded:
/// - bits 27-31: letter ordinal (1-26, 0 unused)
/// - bit 26: last edge of its sibling run
/// - bit 25: accept (the path ending here spells a word)
/// - bit 24: unused
/// - bits 0-23: index of the first child edge (0 = no children)
///
/// A node has no representation of its own; it is the index of its first
/// outgoing edge, and its edges run contiguously in ascending letter order
/// up to the one with the last-edge bit.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Edge {
    pub bits: u32,
}

impl Edge {
    /// Pack an edge. `children` is truncated to 24 bits.
    pub const fn new(letter: u8, accept: bool, last_edge: bool, children: u32) -> Self {
        let mut bits = ((letter as u32) & LETTER_MASK) << LETTER_SHIFT;
        if last_edge {
            bits |= LAST_EDGE_BIT;
        }
        if accept {
            bits |= ACCEPT_BIT;
        }
        bits |= children & CHILDREN_MASK;
        Self { bits }
    }

    /// Letter ordinal (1-26 for a valid edge).
    #[inline]
    pub fn letter(&self) -> u8 {
        ((self.bits >> LETTER_SHIFT) & LETTER_MASK) as u8
    }

    /// The lowercase letter this edge spells, if its ordinal is valid.
    #[inline]
    pub fn letter_char(&self) -> Option<char> {
        ordinal_letter(self.letter())
    }

    #[inline]
    pub fn accept(&self) -> bool {
        self.bits & ACCEPT_BIT != 0
    }

    #[inline]
    pub fn last_edge(&self) -> bool {
        self.bits & LAST_EDGE_BIT != 0
    }

    /// Index of the first child edge, 0 if this edge has no children.
    #[inline]
    pub fn children(&self) -> u32 {
        self.bits & CHILDREN_MASK
    }
}

impl std::fmt::Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Edge")
            .field("letter", &self.letter_char().unwrap_or('?'))
            .field("accept", &self.accept())
            .field("last_edge", &self.last_edge())
            .field("children", &self.children())
            .finish()
    }
}

const _: () = assert!(size_of::<Edge>() == 4);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_size() {
        assert_eq!(size_of::<Edge>(), 4);
    }

    #[test]
    fn field_extraction() {
        let e = Edge::new(3, true, false, 0x12_3456);
        assert_eq!(e.letter(), 3);
        assert_eq!(e.letter_char(), Some('c'));
        assert!(e.accept());
        assert!(!e.last_edge());
        assert_eq!(e.children(), 0x12_3456);
    }

    #[test]
    fn bit_positions() {
        // 'z' (26) in the top five bits, last edge, no accept, children 7
        let e = Edge::new(26, false, true, 7);
        assert_eq!(e.bits, (26 << 27) | (1 << 26) | 7);
    }

    #[test]
    fn unused_bit_is_ignored() {
        let e = Edge { bits: Edge::new(1, false, false, 5).bits | (1 << 24) };
        assert_eq!(e.letter(), 1);
        assert!(!e.accept());
        assert!(!e.last_edge());
        assert_eq!(e.children(), 5);
    }

    #[test]
    fn children_truncated_to_24_bits() {
        let e = Edge::new(1, false, false, 0x0100_0002);
        assert_eq!(e.children(), 2);
        assert_eq!(e.letter(), 1);
        assert!(!e.accept());
    }

    #[test]
    fn reserved_letter_has_no_char() {
        let e = Edge::new(0, true, true, 0);
        assert_eq!(e.letter(), 0);
        assert_eq!(e.letter_char(), None);
    }

    #[test]
    fn zero_copy_cast() {
        let raw = [Edge::new(1, true, true, 0).bits, Edge::new(2, false, true, 1).bits];
        let edges: &[Edge] = bytemuck::cast_slice(&raw);
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].letter_char(), Some('a'));
        assert!(edges[0].accept());
        assert_eq!(edges[1].children(), 1);
    }
}
