//! The accumulated, one-allocation record buffer (C3's concrete backing
//! store) plus the `parse_into` convenience entry point.

use crate::error::ParseError;
use crate::events::Event;
use crate::nav::Siblings;
use crate::parser::{self, ParserConfig};
use crate::record::{encode_one_span, encode_two_spans, KIND_COMMENT, KIND_ELEMENT, KIND_END_ELEMENT, KIND_PI, KIND_TEXT};

/// A fully parsed document, flattened into a single contiguous `Vec<u8>` of
/// fixed-size records plus a borrow of the original input they point into.
///
/// Built once by [`parse_into`] and then only ever read; nothing in the
/// public API lets a record be mutated or removed after the fact, so the
/// borrow-checker enforced "no mutation while navigating" invariant.
#[derive(Debug)]
pub struct RecordBuf<'a> {
    source: &'a [u8],
    bytes: Vec<u8>,
}

impl<'a> RecordBuf<'a> {
    fn new(source: &'a [u8]) -> Self {
        RecordBuf {
            source,
            bytes: Vec::new(),
        }
    }

    /// Appends one parser-emitted event as its fixed-size record.
    pub(crate) fn push(&mut self, event: &Event<'a>) {
        push_event(&mut self.bytes, self.source, event);
    }

    /// Iterates the top-level siblings of the document: the root `Element`
    /// plus any `Comment`/`PI` that appear before or after it.
    pub fn roots(&self) -> Siblings<'_> {
        Siblings::new(self.source, &self.bytes)
    }

    /// The raw accumulated record bytes, as described in the external
    /// interface's flat on-wire layout.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The original input this buffer's records borrow from.
    pub fn source(&self) -> &'a [u8] {
        self.source
    }
}

/// Encodes one [`Event`] into `out` using the discriminator scheme from
/// [`crate::record`]. Shared by [`RecordBuf::push`] and the navigation unit
/// tests, which build a buffer directly from `parse`'s callback without
/// going through `RecordBuf`.
pub(crate) fn push_event<'a>(out: &mut Vec<u8>, source: &'a [u8], event: &Event<'a>) {
    match *event {
        Event::Element(tag) => encode_one_span(out, KIND_ELEMENT, source, tag),
        Event::Attr(name, value) => {
            encode_two_spans(out, crate::record::KIND_ATTR, source, name, value)
        }
        Event::Comment(content) => encode_one_span(out, KIND_COMMENT, source, content),
        Event::Pi(target, content) => encode_two_spans(out, KIND_PI, source, target, content),
        Event::Text(content) => encode_one_span(out, KIND_TEXT, source, content),
        Event::EndElement(tag) => encode_one_span(out, KIND_END_ELEMENT, source, tag),
    }
}

/// Parses `input` and accumulates every emitted event into a single
/// [`RecordBuf`], using the default [`ParserConfig`].
pub fn parse_into<'a>(input: &'a [u8]) -> Result<RecordBuf<'a>, ParseError> {
    parse_into_with_config(input, ParserConfig::default())
}

/// Parses `input` with an explicit [`ParserConfig`] and accumulates every
/// emitted event into a single [`RecordBuf`].
pub fn parse_into_with_config<'a>(
    input: &'a [u8],
    config: ParserConfig,
) -> Result<RecordBuf<'a>, ParseError> {
    let mut buf = RecordBuf::new(input);
    parser::parse_with_config(input, config, |ev| buf.push(&ev))?;
    Ok(buf)
}
