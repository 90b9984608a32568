//! A dictionary of lowercase words answering membership and prefix queries.
//!
//! A [`Lexicon`] is backed by two stores:
//!
//! - an immutable [`Dawg`] loaded from the compact binary `DAWG` format, for
//!   large word lists (O(word length) lookups), and
//! - an [`OverflowStore`], a sorted set holding words added at runtime or
//!   read from plain-text word lists.
//!
//! Queries consult both; iteration merges them into one ascending sequence.
//!
//! ```
//! use lexicon::Lexicon;
//!
//! let mut lex: Lexicon = ["one", "two", "three"].into_iter().collect();
//! lex.add("Four");
//! assert!(lex.contains("FOUR"));
//! assert!(lex.contains_prefix("th"));
//! assert_eq!(lex.iter().collect::<Vec<_>>(), ["four", "one", "three", "two"]);
//! ```

mod error;
pub mod iter;
mod lexicon;
pub mod overflow;
#[cfg(feature = "serde")]
mod serde_impl;
mod text;

pub use error::LexiconError;
pub use iter::Iter;
pub use lexicon::Lexicon;
pub use lexicon_dawg::{Dawg, DawgError};
pub use overflow::OverflowStore;
