// Error type for lexicon loading.

use std::path::PathBuf;

use lexicon_dawg::DawgError;

/// Error type for [`Lexicon`](crate::Lexicon) loading failures.
///
/// A failed load never leaves a partially loaded lexicon behind: the
/// lexicon keeps the words it had before the call.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    /// The file does not exist or could not be read.
    #[error("couldn't open lexicon file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The binary automaton data is malformed.
    #[error("improperly formed lexicon file: {0}")]
    Format(#[from] DawgError),

    /// A binary automaton was loaded into a lexicon that already holds
    /// runtime-added words.
    #[error("binary lexicon files require an empty lexicon ({words} words present)")]
    BinaryRequiresEmpty { words: usize },

    /// A plain-text word list line is not valid UTF-8.
    #[error("word list line {line} is not valid UTF-8")]
    InvalidText { line: usize },
}
