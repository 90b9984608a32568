//! Shared low-level helpers for the lexicon crates.
//!
//! - [`character`] -- letter ordinals used by automaton edges and ASCII case normalization
//! - [`byte_order`] -- conversion of big-endian on-disk words to host order

pub mod byte_order;
pub mod character;
