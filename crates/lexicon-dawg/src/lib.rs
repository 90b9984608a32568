//! DAWG (directed acyclic word graph) automaton engine.
//!
//! This crate loads the compact binary `DAWG` word-graph format and answers
//! membership and prefix queries against it in O(word length). Building an
//! automaton from a word list is not part of this crate; it only reads what
//! a builder produced.
//!
//! # Architecture
//!
//! - [`format`] -- Binary header parsing (`DAWG:<start>:<bytes>:`) and encoding
//! - [`edge`] -- The packed 32-bit edge record
//! - [`dawg`] -- The immutable edge array and path-following queries
//! - [`cursor`] -- Explicit-stack depth-first enumeration of accepted words

pub mod cursor;
pub mod dawg;
pub mod edge;
pub mod format;

pub use cursor::DawgWords;
pub use dawg::Dawg;
pub use edge::Edge;

/// Error type for DAWG parsing and loading.
#[derive(Debug, thiserror::Error)]
pub enum DawgError {
    #[error("invalid magic tag in DAWG header")]
    InvalidMagic,
    #[error("DAWG header ended before the {field} field")]
    MissingField { field: &'static str },
    #[error("unparseable {field} field in DAWG header")]
    InvalidField { field: &'static str },
    #[error("negative {field} field in DAWG header")]
    NegativeField { field: &'static str },
    #[error("start index {start} is outside the edge array ({edges} edges)")]
    StartOutOfRange { start: usize, edges: usize },
    #[error("edge index {index} is outside the edge array ({edges} edges)")]
    EdgeOutOfRange { index: usize, edges: usize },
    #[error("edge {index} carries invalid letter ordinal {letter}")]
    InvalidLetter { index: usize, letter: u8 },
    #[error("edge graph contains a cycle")]
    Cyclic,
    #[error("failed to read DAWG data: {0}")]
    Io(#[from] std::io::Error),
}
