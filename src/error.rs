//! Error management module.

use std::error::Error as StdError;
use std::fmt;

/// The kind of failure the parse engine can report.
///
/// `InterruptEndTag` and `InterruptEOF` from the engine's internal
/// control-flow idiom are deliberately absent here: they are resolved
/// before ever reaching the public API (`InterruptEOF` becomes `Ok` at the
/// top level; `InterruptEndTag` is consumed by the parent that requested
/// it, or promoted to `InvalidEndTag` on mismatch).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Expected `<`, found something else.
    MissingBegin,
    /// Input ended inside a token that requires more bytes.
    EarlyEof,
    /// Bytes form neither a valid Name, nor a legal `<!--`/`-->`, nor valid
    /// UTF-8 inside a Name.
    InvalidSequence,
    /// Close delimiter (`>` / `-->`) not found.
    NoEnd,
    /// Dispatch saw `<` followed by a character that begins no known
    /// production.
    NoSuch,
    /// Attribute value did not open with `"` or `'`.
    MissingQuote,
    /// Attribute value's closing quote missing before EOF.
    QuoteNotClosed,
    /// Empty Name where one is required.
    MissingName,
    /// Attribute name not followed by `=`.
    MissingEq,
    /// Two attributes of the same element share a name.
    DuplicateAttribute,
    /// Open tag's `>` not found; or comment/PI's terminator not found.
    TagNotClosed,
    /// End-tag name does not match the open element's name.
    InvalidEndTag,
    /// EOF while inside an open element scope.
    ElementNotClosed,
    /// Configured maximum nesting depth exceeded.
    NestingTooDeep,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ErrorKind::MissingBegin => "expected '<'",
            ErrorKind::EarlyEof => "unexpected end of input",
            ErrorKind::InvalidSequence => "invalid name or malformed UTF-8",
            ErrorKind::NoEnd => "closing delimiter not found",
            ErrorKind::NoSuch => "unrecognized production after '<'",
            ErrorKind::MissingQuote => "attribute value must start with '\"' or '\\''",
            ErrorKind::QuoteNotClosed => "attribute value's closing quote not found",
            ErrorKind::MissingName => "expected a name",
            ErrorKind::MissingEq => "expected '=' after attribute name",
            ErrorKind::DuplicateAttribute => "duplicate attribute name",
            ErrorKind::TagNotClosed => "tag not closed",
            ErrorKind::InvalidEndTag => "end tag does not match the open element",
            ErrorKind::ElementNotClosed => "element not closed before end of input",
            ErrorKind::NestingTooDeep => "maximum nesting depth exceeded",
        };
        f.write_str(msg)
    }
}

/// A parse failure, with the byte offset (from the start of the input) at
/// which it was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseError {
    /// What went wrong.
    pub kind: ErrorKind,
    /// Byte offset from the start of the input at which `kind` was detected.
    pub offset: usize,
}

impl ParseError {
    pub(crate) fn new(kind: ErrorKind, offset: usize) -> Self {
        ParseError { kind, offset }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at byte offset {}", self.kind, self.offset)
    }
}

impl StdError for ParseError {}

/// Internal, non-public signal returned by the low-level recognizers.
/// Never part of the public API — see `ErrorKind`'s doc comment.
pub(crate) enum Flow<'a> {
    /// A Comment, PI, or Element production was fully consumed.
    Continue,
    /// An end tag was consumed and validated in form; the parent must check
    /// that `name` matches its own. `name_offset` is where `name` starts,
    /// so a mismatch can be reported at the tag itself rather than after
    /// the whole end-tag token has been consumed.
    EndTag { name: &'a [u8], name_offset: usize },
    /// Benign end of document reached at a Misc boundary.
    Eof,
}

pub(crate) type EngineResult<T> = Result<T, ErrorKind>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_includes_offset() {
        let err = ParseError::new(ErrorKind::MissingName, 7);
        assert_eq!(err.to_string(), "expected a name at byte offset 7");
    }
}
