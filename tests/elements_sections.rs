//! Section selection
//!
//! Section headers switch the node that receives content. Sections are identified by
//! their title path, so repeating a header appends to the existing section.

use tabmark::tabmark::parse;
use tabmark::tabmark::testing::assert_doc;

#[test]
fn test_reselected_section_keeps_order() {
    let doc = parse("[Section 1]\nfirst\n\n[Section 2]\nother\n\n[Section 1]\nsecond\n");

    assert_doc(&doc)
        .item_count(2)
        .item(0, |item| {
            item.assert_section()
                .path(&["Section 1"])
                .child_count(2)
                .child(0, |child| {
                    child.assert_paragraph().text("first");
                })
                .child(1, |child| {
                    child.assert_paragraph().text("second");
                });
        })
        .item(1, |item| {
            item.assert_section().path(&["Section 2"]).child_count(1);
        });
}

#[test]
fn test_paths_nest_under_their_prefix() {
    let doc = parse("[Guide]\nintro\n[Guide >> Install]\nsteps\n[ Guide >>  Usage ]\nrun it\n");

    assert_doc(&doc).item_count(1).item(0, |item| {
        item.assert_section()
            .path(&["Guide"])
            .child_count(3)
            .child(1, |child| {
                child
                    .assert_section()
                    .path(&["Guide", "Install"])
                    .child(0, |p| {
                        p.assert_paragraph().text("steps");
                    });
            })
            .child(2, |child| {
                child.assert_section().path(&["Guide", "Usage"]);
            });
    });
}

#[test]
fn test_missing_ancestors_are_created_empty() {
    let doc = parse("[A >> B >> C]\ndeep\n");

    assert_doc(&doc).item_count(1).item(0, |a| {
        a.assert_section().path(&["A"]).child_count(1).child(0, |b| {
            b.assert_section().path(&["A", "B"]).child_count(1).child(0, |c| {
                c.assert_section().path(&["A", "B", "C"]).child_count(1);
            });
        });
    });
}

#[test]
fn test_multiplicity_and_bracket_warning() {
    let doc = parse("[[Chapter]]\ntext\n[[Broken]\n");

    assert_doc(&doc)
        .warning_count(1)
        .item(0, |item| {
            item.assert_section().multiplicity(2);
        })
        .item(1, |item| {
            item.assert_section().path(&["Broken"]).multiplicity(2);
        });
    assert_eq!(doc.warnings[0].line, 3);
}

#[test]
fn test_empty_path_is_ignored_with_warning() {
    let doc = parse("text\n[ >> ]\nmore\n");

    assert_doc(&doc)
        .warning_count(1)
        .item_count(1)
        .item(0, |item| {
            item.assert_paragraph().text("text more");
        });
}

#[test]
fn test_section_lookup() {
    let doc = parse("[A]\n[A >> B]\nx\n");
    let section = doc.section(&["A", "B"]).expect("section A >> B");
    assert_eq!(section.title(), "B");
    assert!(doc.section(&["B"]).is_none());
}
