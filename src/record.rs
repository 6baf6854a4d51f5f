//! The flat, tagged record layout and the bit-flag discriminator scheme.
//!
//! Every record begins with a 1-byte discriminator followed by one or two
//! `Span`s (an `(offset, len)` pair into the original input). Sizes are
//! fixed per discriminator so a record can always be skipped in O(1)
//! without decoding its payload.

pub(crate) const KIND_NONE: u8 = 0;
pub(crate) const KIND_ELEMENT: u8 = 1;
pub(crate) const KIND_ATTR: u8 = 2;
pub(crate) const KIND_COMMENT: u8 = KIND_ELEMENT | 4;
pub(crate) const KIND_PI: u8 = KIND_ELEMENT | 8;
pub(crate) const KIND_TEXT: u8 = KIND_ELEMENT | 16;
pub(crate) const KIND_END_ELEMENT: u8 = 32;

const ELEMENT_MASK: u8 = KIND_ELEMENT;

/// `(kind & Element) == Element` — true for every kind that participates
/// in the sibling sequence (everything but `Attr` and `EndElement`).
#[inline]
pub(crate) const fn is_element_like(kind: u8) -> bool {
    kind & ELEMENT_MASK == ELEMENT_MASK
}

const HEADER: usize = 1;
const SPAN: usize = 8; // u32 offset + u32 len

/// Constant footprint, in bytes, of a record with the given discriminator.
/// `KIND_NONE` has no on-wire representation; callers never step past one
/// because an empty remaining buffer is detected first.
#[inline]
pub(crate) const fn size_of_kind(kind: u8) -> usize {
    match kind {
        KIND_ELEMENT | KIND_COMMENT | KIND_TEXT | KIND_END_ELEMENT => HEADER + SPAN,
        KIND_ATTR | KIND_PI => HEADER + 2 * SPAN,
        _ => 0,
    }
}

/// Reads the discriminator byte at the start of `buf`, or `KIND_NONE` if
/// `buf` is empty.
#[inline]
pub(crate) fn kind_of(buf: &[u8]) -> u8 {
    buf.first().copied().unwrap_or(KIND_NONE)
}

/// Computes the byte offset (relative to the start of `buf`, which must
/// begin at an `Element` record) of that element's matching `EndElement`
/// plus one record — i.e. the position of its next sibling.
///
/// Implements §4.3's `next_sibling`: starting from the element itself,
/// step one record at a time, incrementing a depth counter on `Element`
/// and decrementing it on `EndElement`, until the counter returns to zero
/// (which happens exactly when the element's own closing record is
/// consumed).
pub(crate) fn next_sibling_offset(buf: &[u8]) -> usize {
    debug_assert_eq!(kind_of(buf), KIND_ELEMENT);
    let mut depth: i64 = 0;
    let mut pos = 0usize;
    loop {
        let kind = kind_of(&buf[pos..]);
        let size = size_of_kind(kind);
        pos += size;
        match kind {
            KIND_ELEMENT => depth += 1,
            KIND_END_ELEMENT => depth -= 1,
            _ => {}
        }
        if depth == 0 {
            return pos;
        }
    }
}

/// An `(offset, len)` pair locating a borrowed field inside the original
/// input. This — not a raw pointer — is the on-wire "slice" representation
/// referred to in the external interface description: it keeps records
/// `Copy` and keeps them valid across growth of the accumulation buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    pub offset: u32,
    pub len: u32,
}

impl Span {
    /// Computes the span of `sub` relative to `source`. `sub` must be a
    /// sub-slice of `source` (guaranteed by construction: every borrowed
    /// field the parser ever produces is carved directly out of the
    /// cursor's own input).
    pub(crate) fn of(source: &[u8], sub: &[u8]) -> Span {
        let base = source.as_ptr() as usize;
        let ptr = sub.as_ptr() as usize;
        debug_assert!(ptr >= base && ptr + sub.len() <= base + source.len());
        Span {
            offset: (ptr - base) as u32,
            len: sub.len() as u32,
        }
    }

    #[inline]
    pub(crate) fn resolve<'a>(&self, source: &'a [u8]) -> &'a [u8] {
        let start = self.offset as usize;
        let end = start + self.len as usize;
        &source[start..end]
    }

    fn write(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.offset.to_le_bytes());
        out.extend_from_slice(&self.len.to_le_bytes());
    }

    fn read(bytes: &[u8]) -> Span {
        let offset = u32::from_le_bytes(bytes[0..4].try_into().unwrap());
        let len = u32::from_le_bytes(bytes[4..8].try_into().unwrap());
        Span { offset, len }
    }
}

/// Appends a record with a single span payload (`Element`, `Comment`,
/// `Text`, `EndElement`).
pub(crate) fn encode_one_span(out: &mut Vec<u8>, kind: u8, source: &[u8], field: &[u8]) {
    out.push(kind);
    Span::of(source, field).write(out);
}

/// Appends a record with two span payloads (`Attr`, `PI`).
pub(crate) fn encode_two_spans(
    out: &mut Vec<u8>,
    kind: u8,
    source: &[u8],
    first: &[u8],
    second: &[u8],
) {
    out.push(kind);
    Span::of(source, first).write(out);
    Span::of(source, second).write(out);
}

/// Decodes the single span field of a record at the start of `buf`.
pub(crate) fn decode_one_span<'a>(source: &'a [u8], buf: &[u8]) -> &'a [u8] {
    Span::read(&buf[HEADER..HEADER + SPAN]).resolve(source)
}

/// Decodes the two span fields of a record at the start of `buf`.
pub(crate) fn decode_two_spans<'a>(source: &'a [u8], buf: &[u8]) -> (&'a [u8], &'a [u8]) {
    let first = Span::read(&buf[HEADER..HEADER + SPAN]).resolve(source);
    let second = Span::read(&buf[HEADER + SPAN..HEADER + 2 * SPAN]).resolve(source);
    (first, second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn discriminator_bit_pattern_matches_spec() {
        assert_eq!(KIND_NONE, 0);
        assert_eq!(KIND_ELEMENT, 1);
        assert_eq!(KIND_ATTR, 2);
        assert_eq!(KIND_COMMENT, 5);
        assert_eq!(KIND_PI, 9);
        assert_eq!(KIND_TEXT, 17);
        assert_eq!(KIND_END_ELEMENT, 32);
    }

    #[test]
    fn element_like_mask_selects_exactly_the_sibling_kinds() {
        assert_eq!(is_element_like(KIND_ELEMENT), true);
        assert_eq!(is_element_like(KIND_COMMENT), true);
        assert_eq!(is_element_like(KIND_PI), true);
        assert_eq!(is_element_like(KIND_TEXT), true);
        assert_eq!(is_element_like(KIND_ATTR), false);
        assert_eq!(is_element_like(KIND_END_ELEMENT), false);
        assert_eq!(is_element_like(KIND_NONE), false);
    }

    #[test]
    fn sizes_are_fixed_per_kind() {
        assert_eq!(size_of_kind(KIND_ELEMENT), 9);
        assert_eq!(size_of_kind(KIND_COMMENT), 9);
        assert_eq!(size_of_kind(KIND_TEXT), 9);
        assert_eq!(size_of_kind(KIND_END_ELEMENT), 9);
        assert_eq!(size_of_kind(KIND_ATTR), 17);
        assert_eq!(size_of_kind(KIND_PI), 17);
    }

    #[test]
    fn span_round_trips_through_source() {
        let source = b"<e a=\"1\"/>";
        let tag = &source[1..2];
        let span = Span::of(source, tag);
        assert_eq!(span.resolve(source), b"e");
    }

    #[test]
    fn next_sibling_skips_nested_subtree() {
        // Element(e) Attr(a,1) Element(c) EndElement(c) EndElement(e)
        let source = b"e a 1 c";
        let mut buf = Vec::new();
        encode_one_span(&mut buf, KIND_ELEMENT, source, &source[0..1]); // e
        encode_two_spans(&mut buf, KIND_ATTR, source, &source[2..3], &source[4..5]); // a,1
        encode_one_span(&mut buf, KIND_ELEMENT, source, &source[6..7]); // c
        encode_one_span(&mut buf, KIND_END_ELEMENT, source, &source[6..7]); // /c
        encode_one_span(&mut buf, KIND_END_ELEMENT, source, &source[0..1]); // /e
        let skip = next_sibling_offset(&buf);
        assert_eq!(skip, buf.len());
    }
}
