//! The logical item passed to the parser's callback.
//!
//! Unlike the teacher's `events::Event`, every field here is a plain
//! borrowed `&'a [u8]` rather than `Cow<'a, [u8]>` — this crate never
//! decodes entities and never needs to materialize an owned fallback
//! (both are explicit non-goals), so the `Cow` indirection buys nothing.

/// One parser-emitted item, borrowed from the original input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event<'a> {
    /// Start of an element; carries its tag name.
    Element(&'a [u8]),
    /// An attribute belonging to the most recently emitted `Element`.
    Attr(&'a [u8], &'a [u8]),
    /// A comment's content, excluding the `<!--`/`-->` delimiters.
    Comment(&'a [u8]),
    /// A processing instruction's target and content.
    Pi(&'a [u8], &'a [u8]),
    /// Character data between tags. `&` and `<` are never decoded.
    Text(&'a [u8]),
    /// The closing counterpart of an `Element`, carrying the same tag.
    EndElement(&'a [u8]),
}
