// Big-endian to host byte-order conversion for 32-bit records.

/// Converts a run of 32-bit words read verbatim from a big-endian source
/// into host order, in place.
///
/// On big-endian hosts this is a no-op; on little-endian hosts every word is
/// byte-swapped. Called once, right after the raw bytes are read.
pub fn be_words_to_host(words: &mut [u32]) {
    if cfg!(target_endian = "big") {
        return;
    }
    for w in words.iter_mut() {
        *w = u32::from_be(*w);
    }
}

/// Converts host-order 32-bit words into big-endian byte order, in place.
///
/// The inverse of [`be_words_to_host`]; used when writing edge records back
/// out in on-disk order.
pub fn host_words_to_be(words: &mut [u32]) {
    if cfg!(target_endian = "big") {
        return;
    }
    for w in words.iter_mut() {
        *w = w.to_be();
    }
}
