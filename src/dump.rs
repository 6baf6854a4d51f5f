//! The diagnostic record-to-text renderer used by tests and by callers who
//! want a human-readable trace of a parse, one line per record.
//!
//! Grounded in the source material's `dump(ostream&)` methods on each node
//! struct: each kind writes its own line, attributes are indented with a
//! leading `- ` under their owning element, and byte content is written
//! verbatim (not escaped) since the format is diagnostic, not a
//! re-parseable serialization.

use std::fmt;
use std::io::{self, Write};

use crate::buffer::RecordBuf;
use crate::nav::{Item, Siblings};

/// Writes the dump of every record in `buf`, in document order, to `out`.
pub fn write_dump<W: Write>(buf: &RecordBuf<'_>, out: &mut W) -> io::Result<()> {
    write_siblings(buf.roots(), out)
}

fn write_siblings<W: Write>(siblings: Siblings<'_>, out: &mut W) -> io::Result<()> {
    for item in siblings {
        write_item(&item, out)?;
    }
    Ok(())
}

fn write_item<W: Write>(item: &Item<'_>, out: &mut W) -> io::Result<()> {
    match item {
        Item::Element(elem) => {
            out.write_all(b"ELEM ")?;
            out.write_all(elem.tag())?;
            out.write_all(b"\n")?;
            for attr in elem.attributes() {
                out.write_all(b"- ATTR ")?;
                out.write_all(attr.name)?;
                out.write_all(b"=")?;
                out.write_all(attr.value)?;
                out.write_all(b"\n")?;
            }
            write_siblings(elem.children(), out)?;
            out.write_all(b"ETAG ")?;
            out.write_all(elem.tag())?;
            out.write_all(b"\n")?;
        }
        Item::Comment(content) => {
            out.write_all(b"COMMENT ")?;
            out.write_all(content)?;
            out.write_all(b"\n")?;
        }
        Item::Pi(pi) => {
            out.write_all(b"PI ")?;
            out.write_all(pi.content())?;
            out.write_all(b"\n")?;
        }
        Item::Text(content) => {
            out.write_all(b"TEXT ")?;
            out.write_all(content)?;
            out.write_all(b"\n")?;
        }
    }
    Ok(())
}

/// Convenience wrapper around [`write_dump`] for callers that want the
/// result as a `String` rather than writing to an `io::Write`. Lossy: bytes
/// that are not valid UTF-8 are replaced per
/// [`String::from_utf8_lossy`], which cannot happen for input that was
/// itself valid XML text but may matter for malformed attribute/text bytes
/// admitted by this parser's deliberately permissive byte handling.
pub fn dump_to_string(buf: &RecordBuf<'_>) -> String {
    let mut bytes = Vec::new();
    write_dump(buf, &mut bytes).expect("writing to a Vec<u8> never fails");
    String::from_utf8_lossy(&bytes).into_owned()
}

impl fmt::Display for RecordBuf<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&dump_to_string(self))
    }
}
