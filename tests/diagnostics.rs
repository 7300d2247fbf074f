//! Quotes, exceptions and warnings
//!
//! Input that fits no structure never aborts a parse. Unanticipated indentation
//! becomes a Quote; events that fit nowhere become Exception elements in place.

use tabmark::tabmark::config::ParsingConfig;
use tabmark::tabmark::testing::assert_doc;
use tabmark::tabmark::{parse, parse_with, Profile};

#[test]
fn test_unanticipated_indentation_is_a_quote() {
    let doc = parse("Text\n\n\tQuoted text\n\t\tdeeper\n");

    assert_doc(&doc)
        .item_count(2)
        .exception_count(0)
        .item(1, |item| {
            item.assert_quote()
                .child_count(2)
                .child(0, |child| {
                    child.assert_paragraph().text("Quoted text");
                })
                .child(1, |child| {
                    child.assert_quote().child_count(1);
                });
        });
}

#[test]
fn test_section_inside_body_is_an_exception() {
    let doc = parse("! NOTE:\n\t[Inner]\n\tstill body\nmore\n");

    assert_doc(&doc)
        .item_count(2)
        .exception_count(1)
        .item(0, |item| {
            item.assert_admonition()
                .child_count(2)
                .child(0, |child| {
                    child
                        .assert_exception()
                        .event("section")
                        .line(2)
                        .level(1)
                        .reason_contains("indented body");
                })
                .child(1, |child| {
                    child.assert_paragraph().text("still body");
                });
        })
        .item(1, |item| {
            item.assert_paragraph().text("more");
        });
}

#[test]
fn test_nesting_limit_skips_the_deep_body() {
    let profile = Profile::new(&ParsingConfig {
        nesting_limit: 1,
        ..ParsingConfig::default()
    });
    let doc = parse_with("- a\n\t- b\n\t\t- c\n\t\t\t- d\n- e\n", &profile);

    assert_doc(&doc).exception_count(1).item(0, |item| {
        item.assert_set().item_count(2).item(0, |list_item| {
            list_item.child(1, |child| {
                child.assert_set().item(0, |inner| {
                    inner.text("b").child(1, |deep| {
                        deep.assert_exception().event("enter").line(3).reason_contains("nesting limit");
                    });
                });
            });
        });
    });
}

#[test]
fn test_warnings_leave_tree_intact() {
    let with_warning = parse("[[Title]\nbody\n");
    let clean = parse("[[Title]]\nbody\n");

    assert_eq!(with_warning.warnings.len(), 1);
    assert_eq!(with_warning.children, clean.children);
    assert!(with_warning.warnings[0].to_string().starts_with("line 1: warning:"));
}

#[test]
fn test_mismatched_emphasis_is_not_an_error() {
    let doc = parse("*foo** bar\n**a* b\n");
    assert_doc(&doc).warning_count(0).exception_count(0).item(0, |item| {
        item.assert_paragraph()
            .type_strings(&["text/normal", "text/line-break", "text/normal"]);
    });
}

#[test]
fn test_deep_section_path_is_an_exception() {
    let source = format!("[{}]\ntext\n", vec!["a"; 5_000].join(">>"));
    let doc = parse(&source);

    assert_doc(&doc)
        .item_count(2)
        .exception_count(1)
        .item(0, |item| {
            item.assert_exception().event("section").line(1).reason_contains("nesting limit of 64");
        })
        .item(1, |item| {
            item.assert_paragraph().text("text");
        });
    assert_eq!(tabmark::tabmark::render_text(&doc).lines().nth(1), Some(""));
}
