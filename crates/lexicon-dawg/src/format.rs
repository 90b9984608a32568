// DAWG binary format: header parsing and encoding
//
// Layout:
//   bytes 0..4   ASCII "DAWG"
//   1 byte       delimiter (conventionally ':')
//   decimal      start edge index, followed by one delimiter byte
//   decimal      byte length of the edge data, followed by one delimiter byte
//   N bytes      N / 4 edge records, big-endian

use std::io::{ErrorKind, Read};

use crate::DawgError;

/// Magic tag opening every binary DAWG file.
pub const MAGIC: &[u8; 4] = b"DAWG";

/// Size of one on-disk edge record in bytes.
pub const EDGE_SIZE: usize = 4;

/// Delimiter written by [`encode_header`]. Readers accept any byte.
pub const DELIMITER: u8 = b':';

/// Parsed DAWG header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DawgHeader {
    /// Index of the root's first child edge.
    pub start: usize,
    /// Declared length of the edge data in bytes.
    pub byte_len: usize,
}

impl DawgHeader {
    /// Number of whole edge records the header promises.
    pub fn edge_count(&self) -> usize {
        self.byte_len / EDGE_SIZE
    }
}

/// Returns `true` if `data` opens with the DAWG magic tag.
///
/// Used to tell binary automaton files from plain word lists.
pub fn is_dawg(data: &[u8]) -> bool {
    data.starts_with(MAGIC)
}

/// Reads and validates the header, leaving `reader` positioned at the first
/// byte of edge data.
pub fn read_header<R: Read>(reader: &mut R) -> Result<DawgHeader, DawgError> {
    let mut magic = [0u8; 4];
    if let Err(e) = reader.read_exact(&mut magic) {
        return Err(match e.kind() {
            ErrorKind::UnexpectedEof => DawgError::InvalidMagic,
            _ => DawgError::Io(e),
        });
    }
    if &magic != MAGIC {
        return Err(DawgError::InvalidMagic);
    }

    if next_byte(reader)?.is_none() {
        return Err(DawgError::MissingField { field: "start" });
    }
    let start = read_decimal(reader, "start")?;
    let byte_len = read_decimal(reader, "byte length")?;

    Ok(DawgHeader { start, byte_len })
}

/// Encodes a header for the given start index and edge-data length.
pub fn encode_header(start: usize, byte_len: usize) -> Vec<u8> {
    let mut buf = Vec::with_capacity(24);
    buf.extend_from_slice(MAGIC);
    buf.push(DELIMITER);
    buf.extend_from_slice(start.to_string().as_bytes());
    buf.push(DELIMITER);
    buf.extend_from_slice(byte_len.to_string().as_bytes());
    buf.push(DELIMITER);
    buf
}

fn next_byte<R: Read>(reader: &mut R) -> Result<Option<u8>, DawgError> {
    let mut buf = [0u8; 1];
    loop {
        match reader.read(&mut buf) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(buf[0])),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(DawgError::Io(e)),
        }
    }
}

/// Reads an ASCII decimal and consumes the single delimiter byte after it.
///
/// Leading ASCII whitespace and a sign are accepted; at least one digit is
/// required. A negative value is rejected, `-0` is not negative.
fn read_decimal<R: Read>(reader: &mut R, field: &'static str) -> Result<usize, DawgError> {
    let mut byte = next_byte(reader)?.ok_or(DawgError::MissingField { field })?;
    while byte.is_ascii_whitespace() {
        byte = next_byte(reader)?.ok_or(DawgError::MissingField { field })?;
    }

    let negative = byte == b'-';
    if byte == b'-' || byte == b'+' {
        byte = next_byte(reader)?.ok_or(DawgError::MissingField { field })?;
    }

    let mut value: usize = 0;
    let mut digits = 0usize;
    while byte.is_ascii_digit() {
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(usize::from(byte - b'0')))
            .ok_or(DawgError::InvalidField { field })?;
        digits += 1;
        byte = next_byte(reader)?.ok_or(DawgError::MissingField { field })?;
    }
    // `byte` is the delimiter and has been consumed.

    if digits == 0 {
        return Err(DawgError::InvalidField { field });
    }
    if negative && value != 0 {
        return Err(DawgError::NegativeField { field });
    }
    Ok(value)
}
