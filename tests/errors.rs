use flatxml::{parse, ErrorKind};

fn err_kind(xml: &[u8]) -> ErrorKind {
    parse(xml, |_| {}).unwrap_err().kind
}

#[test]
fn missing_root_element_reports_missing_begin() {
    assert_eq!(err_kind(b""), ErrorKind::MissingBegin);
    assert_eq!(err_kind(b"   "), ErrorKind::MissingBegin);
    assert_eq!(err_kind(b"<!--only a comment-->"), ErrorKind::MissingBegin);
}

#[test]
fn stray_end_tag_at_top_level_is_missing_begin() {
    assert_eq!(err_kind(b"</a>"), ErrorKind::MissingBegin);
}

#[test]
fn unclosed_open_tag_is_tag_not_closed() {
    assert_eq!(err_kind(b"<a"), ErrorKind::TagNotClosed);
    assert_eq!(err_kind(b"<a "), ErrorKind::TagNotClosed);
}

#[test]
fn attribute_without_quoted_value_is_missing_quote() {
    assert_eq!(err_kind(br#"<a x=1/>"#), ErrorKind::MissingQuote);
}

#[test]
fn unterminated_pi_is_tag_not_closed() {
    assert_eq!(err_kind(b"<a><?pi unterminated</a>"), ErrorKind::TagNotClosed);
}

#[test]
fn malformed_comment_terminator_is_invalid_sequence() {
    assert_eq!(err_kind(b"<a><!-- c ---></a>"), ErrorKind::InvalidSequence);
}

#[test]
fn offsets_point_at_the_failing_token_not_past_it() {
    let err = parse(b"<root><child></root>", |_| {}).unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidEndTag);
    // "</" starts at byte 13; the name "root" begins at byte 15.
    assert_eq!(err.offset, 15);
}

#[test]
fn error_kind_display_is_human_readable() {
    assert_eq!(ErrorKind::DuplicateAttribute.to_string(), "duplicate attribute name");
}
