// Plain-text word list parsing: one word per line, no header.

use crate::LexiconError;

/// A parsed word list, borrowing from the input.
#[derive(Debug)]
pub(crate) struct WordList<'a> {
    pub(crate) words: Vec<&'a str>,
    /// Lines read, blank ones included. A final newline does not open a line.
    pub(crate) lines: usize,
}

/// Split a word list into its words.
///
/// Lines are separated by `\n`; surrounding ASCII whitespace (including a
/// trailing `\r`) is stripped and blank lines are skipped. The whole list is
/// validated before anything is returned, so a bad line rejects the file.
pub(crate) fn parse_word_list(data: &[u8]) -> Result<WordList<'_>, LexiconError> {
    if data.is_empty() {
        return Ok(WordList {
            words: Vec::new(),
            lines: 0,
        });
    }
    let body = data.strip_suffix(b"\n").unwrap_or(data);

    let mut words = Vec::new();
    let mut lines = 0;
    for (i, line) in body.split(|&b| b == b'\n').enumerate() {
        let line =
            std::str::from_utf8(line).map_err(|_| LexiconError::InvalidText { line: i + 1 })?;
        lines += 1;
        let word = line.trim_ascii();
        if !word.is_empty() {
            words.push(word);
        }
    }
    Ok(WordList { words, lines })
}
