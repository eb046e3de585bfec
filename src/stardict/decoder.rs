//! Binary record decoding for raw `.dict` payloads.

use byteorder::{BigEndian, ByteOrder};

/// Iterator over the packed records of a decompressed `.dict` buffer.
///
/// Record layout, repeated back to back with no padding between records:
/// - N bytes: word, terminated by `\0`
/// - 4 bytes: reserved (type/flag byte plus padding), skipped
/// - 4 bytes: big-endian definition length
/// - length bytes: definition payload
///
/// The 4-byte reserved span is a fixed contract matching the Anh-Việt payload
/// layout, not something documented by the StarDict format itself.
///
/// Words and definitions are decoded as UTF-8 with invalid sequences
/// replaced. A missing terminator or a truncated tail simply ends iteration;
/// already-yielded records stay valid. The iterator performs no filtering:
/// callers decide what to do with empty words or definitions.
pub struct RecordIter<'a> {
    buf: &'a [u8],
    offset: usize,
}

impl<'a> RecordIter<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, offset: 0 }
    }
}

impl Iterator for RecordIter<'_> {
    type Item = (String, String);

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.buf.len() {
            return None;
        }

        // Word runs up to the next NUL; no terminator means a truncated tail.
        let nul = self.buf[self.offset..]
            .iter()
            .position(|&b| b == 0)?
            + self.offset;
        let word = String::from_utf8_lossy(&self.buf[self.offset..nul]).into_owned();

        // Skip the 4 reserved bytes after the terminator, then the length
        // field must fit entirely in the remaining buffer.
        let len_start = nul + 5;
        let def_start = nul + 9;
        if def_start > self.buf.len() {
            self.offset = self.buf.len();
            return None;
        }
        let def_len = BigEndian::read_u32(&self.buf[len_start..def_start]) as usize;

        let def_end = def_start.checked_add(def_len)?;
        if def_end > self.buf.len() {
            self.offset = self.buf.len();
            return None;
        }
        let definition = String::from_utf8_lossy(&self.buf[def_start..def_end]).into_owned();

        self.offset = def_end;
        Some((word, definition))
    }
}
