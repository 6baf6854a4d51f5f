//! Forward iterators over the flat record buffer (C5).
//!
//! Every cursor here is a plain byte offset into a `RecordBuf`'s backing
//! bytes; advancing one is always O(1) because every record's footprint is
//! known from its discriminator alone (`record::size_of_kind`), and an
//! `Element`'s matching `EndElement` can be located without visiting its
//! children (`record::next_sibling_offset`).

use crate::record::{
    self, KIND_ATTR, KIND_COMMENT, KIND_ELEMENT, KIND_END_ELEMENT, KIND_NONE, KIND_PI, KIND_TEXT,
};

/// One decoded item yielded while walking a sibling sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Item<'a> {
    /// An element, navigable to its own attributes and children.
    Element(ElementNode<'a>),
    /// A comment's content.
    Comment(&'a [u8]),
    /// A processing instruction's target and content.
    Pi(PiNode<'a>),
    /// Character data.
    Text(&'a [u8]),
}

/// An `Element` record together with enough of the buffer to navigate its
/// attributes and children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementNode<'a> {
    source: &'a [u8],
    /// The element's own record, plus everything up to and including its
    /// matching `EndElement` — i.e. exactly what `next_sibling_offset`
    /// would skip.
    subtree: &'a [u8],
}

impl<'a> ElementNode<'a> {
    pub(crate) fn new(source: &'a [u8], subtree: &'a [u8]) -> Self {
        debug_assert_eq!(record::kind_of(subtree), KIND_ELEMENT);
        ElementNode { source, subtree }
    }

    /// The element's tag name.
    pub fn tag(&self) -> &'a [u8] {
        record::decode_one_span(self.source, self.subtree)
    }

    /// Iterates the element's attributes, in document order.
    pub fn attributes(&self) -> Attributes<'a> {
        let header = record::size_of_kind(KIND_ELEMENT);
        Attributes {
            source: self.source,
            buf: &self.subtree[header..],
        }
    }

    /// Iterates the element's direct children (Element, Comment, PI, and
    /// Text siblings, but not Attr), in document order.
    pub fn children(&self) -> Siblings<'a> {
        let mut pos = record::size_of_kind(KIND_ELEMENT);
        while record::kind_of(&self.subtree[pos..]) == KIND_ATTR {
            pos += record::size_of_kind(KIND_ATTR);
        }
        // subtree ends just past this element's own EndElement; children
        // stop one record earlier.
        let end = self.subtree.len() - record::size_of_kind(KIND_END_ELEMENT);
        Siblings {
            source: self.source,
            buf: &self.subtree[pos..end],
        }
    }
}

/// A `PI` record's target and content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PiNode<'a> {
    target: &'a [u8],
    content: &'a [u8],
}

impl<'a> PiNode<'a> {
    /// The PI's target name.
    pub fn target(&self) -> &'a [u8] {
        self.target
    }

    /// The PI's content, excluding the `<?`/`?>` delimiters and the target.
    pub fn content(&self) -> &'a [u8] {
        self.content
    }
}

/// A decoded `Attr` record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttrNode<'a> {
    /// The attribute's name.
    pub name: &'a [u8],
    /// The attribute's value, with no entity decoding applied.
    pub value: &'a [u8],
}

/// Forward iterator over a run of `Attr` records immediately following an
/// `Element`'s own record.
#[derive(Debug, Clone, Copy)]
pub struct Attributes<'a> {
    source: &'a [u8],
    buf: &'a [u8],
}

impl<'a> Iterator for Attributes<'a> {
    type Item = AttrNode<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if record::kind_of(self.buf) != KIND_ATTR {
            return None;
        }
        let size = record::size_of_kind(KIND_ATTR);
        let (name, value) = record::decode_two_spans(self.source, self.buf);
        self.buf = &self.buf[size..];
        Some(AttrNode { name, value })
    }
}

/// Forward iterator over a run of sibling records (`Element`, `Comment`,
/// `Pi`, `Text`) — everything `record::is_element_like` admits — stopping
/// at the first record that isn't one, or at the end of `buf`.
#[derive(Debug, Clone, Copy)]
pub struct Siblings<'a> {
    source: &'a [u8],
    buf: &'a [u8],
}

impl<'a> Siblings<'a> {
    pub(crate) fn new(source: &'a [u8], buf: &'a [u8]) -> Self {
        Siblings { source, buf }
    }
}

impl<'a> Iterator for Siblings<'a> {
    type Item = Item<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let kind = record::kind_of(self.buf);
        if kind == KIND_NONE || !record::is_element_like(kind) {
            return None;
        }
        match kind {
            KIND_ELEMENT => {
                let skip = record::next_sibling_offset(self.buf);
                let subtree = &self.buf[..skip];
                self.buf = &self.buf[skip..];
                Some(Item::Element(ElementNode::new(self.source, subtree)))
            }
            KIND_COMMENT => {
                let size = record::size_of_kind(KIND_COMMENT);
                let content = record::decode_one_span(self.source, self.buf);
                self.buf = &self.buf[size..];
                Some(Item::Comment(content))
            }
            KIND_PI => {
                let size = record::size_of_kind(KIND_PI);
                let (target, content) = record::decode_two_spans(self.source, self.buf);
                self.buf = &self.buf[size..];
                Some(Item::Pi(PiNode { target, content }))
            }
            KIND_TEXT => {
                let size = record::size_of_kind(KIND_TEXT);
                let content = record::decode_one_span(self.source, self.buf);
                self.buf = &self.buf[size..];
                Some(Item::Text(content))
            }
            _ => unreachable!("is_element_like admitted an unhandled kind"),
        }
    }
}
