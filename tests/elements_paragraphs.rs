//! Paragraph parsing
//!
//! Paragraph lines accumulate until a blank line, a decoration or any structure
//! closes them. Source lines are joined by line-break fragments.

use tabmark::tabmark::parse;
use tabmark::tabmark::testing::assert_doc;

#[test]
fn test_lines_join_into_one_paragraph() {
    let doc = parse("First line\nsecond line\n\nSecond paragraph\n");

    assert_doc(&doc)
        .item_count(2)
        .item(0, |item| {
            item.assert_paragraph()
                .text("First line second line")
                .type_strings(&["text/normal", "text/line-break", "text/normal"]);
        })
        .item(1, |item| {
            item.assert_paragraph().text("Second paragraph").fragment_count(1);
        });
}

#[test]
fn test_blank_line_runs_collapse() {
    let doc = parse("one\n\n\n\ntwo\n\n\n");
    assert_doc(&doc).item_count(2);
}

#[test]
fn test_decoration_separates_paragraphs() {
    let doc = parse("one\n-----\ntwo\n==========\n");

    assert_doc(&doc)
        .item_count(2)
        .item(0, |item| {
            item.assert_paragraph().text("one");
        })
        .item(1, |item| {
            item.assert_paragraph().text("two");
        });
}

#[test]
fn test_short_or_varied_rules_are_text() {
    // Four characters are below the minimum, four distinct characters above the variety.
    let doc = parse("----\n-=~+-=~+\n");
    assert_doc(&doc).item_count(1).item(0, |item| {
        item.assert_paragraph().text("---- -=~+-=~+");
    });
}

#[test]
fn test_malformed_commands_are_paragraph_text() {
    let doc = parse("-flag\n/usr/bin\n#hashtag\n!bang\n");

    assert_doc(&doc).item_count(1).item(0, |item| {
        item.assert_paragraph().text("-flag /usr/bin #hashtag !bang");
    });
}

#[test]
fn test_crlf_line_endings() {
    let doc = parse("one\r\ntwo\r\n\r\nthree\r\n");
    assert_doc(&doc)
        .item_count(2)
        .item(0, |item| {
            item.assert_paragraph().text("one two");
        });
}

#[test]
fn test_context_line() {
    let doc = parse("#!tabmark 1.0\n\nBody\n");
    assert_doc(&doc)
        .context(Some("tabmark 1.0"))
        .item_count(1)
        .item(0, |item| {
            item.assert_paragraph().text("Body");
        });
}
