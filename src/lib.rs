//! A zero-copy, single-pass, callback-driven XML 1.0 parser.
//!
//! The parser never allocates on the caller's behalf: every borrowed field
//! in every [`Event`] is a sub-slice of the original input. Consumers who
//! want to navigate the parsed document afterward, rather than react to it
//! inline, can accumulate the callback's output into a [`RecordBuf`] with
//! [`parse_into`] and then walk it with the iterators in this crate —
//! [`RecordBuf::roots`] and [`nav::ElementNode::children`]/
//! [`nav::ElementNode::attributes`] — without any further allocation.
//!
//! ## Example
//!
//! ```
//! use flatxml::{parse, Event};
//!
//! let xml = br#"<catalog><book id="1">Title</book></catalog>"#;
//! let mut titles = Vec::new();
//! parse(xml, |event| {
//!     if let Event::Text(text) = event {
//!         titles.push(text);
//!     }
//! }).unwrap();
//! assert_eq!(titles, vec![&b"Title"[..]]);
//! ```
//!
//! ## Navigating a parsed document
//!
//! ```
//! use flatxml::{parse_into, nav::Item};
//!
//! let buf = parse_into(br#"<a><b/><c/></a>"#).unwrap();
//! let root = match buf.roots().next().unwrap() {
//!     Item::Element(e) => e,
//!     _ => unreachable!(),
//! };
//! assert_eq!(root.tag(), b"a");
//! assert_eq!(root.children().count(), 2);
//! ```
//!
//! ## Non-goals
//!
//! This crate does not validate against a DTD or XML Schema, does not
//! decode entity or character references, does not support streaming from
//! an incomplete buffer, and does not repair malformed input. It is a
//! strict, single-pass recognizer for well-formed XML 1.0 documents.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod buffer;
mod cursor;
mod dump;
mod error;
mod events;
mod name;
mod parser;
mod record;

pub mod nav;

pub use buffer::{parse_into, parse_into_with_config, RecordBuf};
pub use dump::{dump_to_string, write_dump};
pub use error::{ErrorKind, ParseError};
pub use events::Event;
pub use parser::{parse, parse_with_config, ParserConfig};
