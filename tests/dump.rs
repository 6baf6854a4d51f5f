use flatxml::{dump_to_string, parse_into};

#[test]
fn dump_format_matches_one_line_per_record() {
    let buf = parse_into(b"<catalog><book id=\"1\"><!--note--><title>Rust</title></book></catalog>")
        .unwrap();
    let expected = "\
ELEM catalog
ELEM book
- ATTR id=1
COMMENT note
ELEM title
TEXT Rust
ETAG title
ETAG book
ETAG catalog
";
    assert_eq!(dump_to_string(&buf), expected);
}

#[test]
fn dump_of_self_closing_element_has_no_attribute_lines() {
    let buf = parse_into(b"<empty/>").unwrap();
    assert_eq!(dump_to_string(&buf), "ELEM empty\nETAG empty\n");
}

#[test]
fn dump_renders_processing_instructions_by_content_only() {
    let buf = parse_into(b"<a><?target value?></a>").unwrap();
    assert_eq!(
        dump_to_string(&buf),
        "ELEM a\nPI value\nETAG a\n"
    );
}

#[test]
fn dump_via_display_matches_dump_to_string() {
    let buf = parse_into(b"<a><b/></a>").unwrap();
    assert_eq!(buf.to_string(), dump_to_string(&buf));
}
