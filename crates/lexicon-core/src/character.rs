// Letter ordinals and case normalization
//
// Automaton edges store letters as small ordinals: 'a' is 1, 'z' is 26 and
// 0 is reserved for "no letter". Words are compared and stored lowercase.

use std::borrow::Cow;

/// Number of distinct letters an automaton edge can carry.
pub const LETTER_COUNT: u8 = 26;

/// Returns the edge ordinal (1..=26) for a lowercase ASCII letter.
///
/// Anything else, including uppercase letters, has no ordinal: callers are
/// expected to normalize with [`normalize`] first.
#[inline]
pub fn letter_ordinal(c: char) -> Option<u8> {
    if c.is_ascii_lowercase() {
        Some(c as u8 - b'a' + 1)
    } else {
        None
    }
}

/// Returns the lowercase letter for an edge ordinal, or `None` for 0 and
/// values past 26.
#[inline]
pub fn ordinal_letter(ordinal: u8) -> Option<char> {
    if (1..=LETTER_COUNT).contains(&ordinal) {
        Some((b'a' + ordinal - 1) as char)
    } else {
        None
    }
}

/// Lowercases ASCII letters, leaving every other character untouched.
///
/// Borrows the input when it has no uppercase ASCII letters.
pub fn normalize(word: &str) -> Cow<'_, str> {
    if word.bytes().any(|b| b.is_ascii_uppercase()) {
        Cow::Owned(word.to_ascii_lowercase())
    } else {
        Cow::Borrowed(word)
    }
}
