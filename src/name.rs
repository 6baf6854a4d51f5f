//! XML 1.0 `NameStartChar` / `NameChar` predicates and name scanning.

use crate::cursor::Cursor;
use crate::error::ErrorKind;

/// True when `c` may start an XML `Name`.
#[inline]
pub(crate) fn is_name_start_char(c: u32) -> bool {
    matches!(c,
        0x3A // ':'
        | 0x5F // '_'
        | 0x41..=0x5A // 'A'..='Z'
        | 0x61..=0x7A // 'a'..='z'
        | 0xC0..=0xD6
        | 0xD8..=0xF6
        | 0xF8..=0x2FF
        | 0x370..=0x37D
        | 0x37F..=0x1FFF
        | 0x200C..=0x200D
        | 0x2070..=0x218F
        | 0x2C00..=0x2FEF
        | 0x3001..=0xD7FF
        | 0xF900..=0xFDCF
        | 0xFDF0..=0xFFFD
        | 0x10000..=0xEFFFF
    )
}

/// True when `c` may appear after the first scalar of an XML `Name`.
#[inline]
pub(crate) fn is_name_char(c: u32) -> bool {
    is_name_start_char(c)
        || matches!(c,
            0x2D // '-'
            | 0x2E // '.'
            | 0x30..=0x39 // '0'..='9'
            | 0xB7
            | 0x300..=0x36F
            | 0x203F..=0x2040
        )
}

/// Scans a maximal `Name` at the cursor and returns the consumed byte
/// range.
///
/// `empty_or_invalid_start` is the error to raise when the first scalar is
/// absent or does not satisfy `is_name_start_char` — callers use
/// `ErrorKind::MissingName` where an empty name simply means "no name was
/// here" (element tags, end tags, PI targets) and `ErrorKind::InvalidSequence`
/// where a non-empty but malformed token is itself the error (attribute
/// names, per the engine's attribute loop).
pub(crate) fn scan_name<'a>(
    cur: &mut Cursor<'a>,
    empty_or_invalid_start: ErrorKind,
) -> Result<&'a [u8], ErrorKind> {
    let start = cur.pos();
    match cur.utf8_decode_one() {
        Some((cp, len)) if is_name_start_char(cp) => cur.advance(len),
        _ => return Err(empty_or_invalid_start),
    }
    loop {
        match cur.utf8_decode_one() {
            Some((cp, len)) if is_name_char(cp) => cur.advance(len),
            Some(_) => break,
            None if cur.eof() => break,
            None => return Err(ErrorKind::InvalidSequence),
        }
    }
    Ok(cur.slice_from(start))
}
