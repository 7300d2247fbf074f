//! Document exporter
//!
//!     Turns the raw parse tree into the typed [Document]. Containers map one to one,
//!     with two reshapes: list items and dictionary key/value pairs become fields of
//!     their parent element instead of nodes of their own.
//!
//!     Inline events become fragments. References are classified here from their raw
//!     text:
//!
//!         &<https://x>      reference/hyperlink   https://x
//!         &[A >> B]         reference/section     A >> B
//!         &name             reference/ambiguous   name
//!         &*[A]             reference/section     A, include set

use crate::tabmark::ast::{NodeId, NodeKind, Tree};
use crate::tabmark::document::{
    Admonition, Dictionary, Document, Element, Entry, Fragment, FragmentType, Item, List, Paragraph, Quote,
    Section, Syntax,
};
use crate::tabmark::inlines::Inline;

pub fn export(tree: &Tree) -> Document {
    Document {
        context: tree.context.clone(),
        children: elements(tree, tree.root()),
        warnings: tree.warnings.clone(),
    }
}

fn elements(tree: &Tree, parent: NodeId) -> Vec<Element> {
    tree.children(parent)
        .iter()
        .filter_map(|&id| element(tree, id))
        .collect()
}

fn element(tree: &Tree, id: NodeId) -> Option<Element> {
    let element = match tree.kind(id) {
        NodeKind::Section { path, multiplicity } => Element::Section(Section {
            path: path.clone(),
            multiplicity: *multiplicity,
            children: elements(tree, id),
        }),
        NodeKind::Paragraph(inlines) => Element::Paragraph(paragraph(inlines)),
        NodeKind::Set => Element::Set(list(tree, id)),
        NodeKind::Sequence => Element::Sequence(list(tree, id)),
        NodeKind::Dictionary => Element::Dictionary(dictionary(tree, id)),
        NodeKind::Admonition { severity, title } => Element::Admonition(Admonition {
            severity: severity.clone(),
            title: title.clone(),
            children: elements(tree, id),
        }),
        NodeKind::Syntax {
            syntax_type,
            qualifier,
            lines,
        } => Element::Syntax(Syntax {
            syntax_type: syntax_type.clone(),
            qualifier: qualifier.clone(),
            lines: lines.clone(),
        }),
        NodeKind::Quote => Element::Quote(Quote {
            children: elements(tree, id),
        }),
        NodeKind::Exception(exception) => Element::Exception(exception.clone()),
        // Only reachable through their parents.
        NodeKind::Document | NodeKind::Item | NodeKind::Key(_) | NodeKind::Value => return None,
    };
    Some(element)
}

fn list(tree: &Tree, id: NodeId) -> List {
    let items = tree
        .children(id)
        .iter()
        .map(|&item| Item {
            children: elements(tree, item),
        })
        .collect();
    List { items }
}

fn dictionary(tree: &Tree, id: NodeId) -> Dictionary {
    let mut entries = Vec::new();
    let mut key: Option<Paragraph> = None;
    for &child in tree.children(id) {
        match tree.kind(child) {
            NodeKind::Key(inlines) => key = Some(paragraph(inlines)),
            NodeKind::Value => entries.push(Entry {
                key: key.take().unwrap_or_default(),
                value: elements(tree, child),
            }),
            _ => {}
        }
    }
    Dictionary { entries }
}

pub fn paragraph(inlines: &[Inline]) -> Paragraph {
    Paragraph::new(inlines.iter().map(fragment).collect())
}

pub fn fragment(inline: &Inline) -> Fragment {
    match inline {
        Inline::Text(text) => Fragment::new(FragmentType::Normal, text.clone()),
        Inline::Separator(text) => Fragment::new(FragmentType::LineBreak, text.clone()),
        Inline::Emphasis { weight, text, cast } => {
            let weight = (*weight).clamp(1, 3) as u8;
            Fragment::new(FragmentType::Emphasis(weight), text.clone()).with_cast(cast.clone())
        }
        Inline::Literal { text, cast } => {
            Fragment::new(FragmentType::Literal, text.clone()).with_cast(cast.clone())
        }
        Inline::Reference { raw, cast } => {
            let (include, body) = match raw.strip_prefix('*') {
                Some(rest) => (true, rest),
                None => (false, raw.as_str()),
            };
            let (kind, data) = classify_reference(body);
            Fragment::new(kind, data)
                .with_cast(cast.clone())
                .with_include(include)
        }
    }
}

fn classify_reference(body: &str) -> (FragmentType, &str) {
    if let Some(target) = body.strip_prefix('<').and_then(|rest| rest.strip_suffix('>')) {
        return (FragmentType::Hyperlink, target);
    }
    if let Some(path) = body.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
        return (FragmentType::SectionReference, path);
    }
    (FragmentType::AmbiguousReference, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabmark::config::Profile;
    use crate::tabmark::parsing::parse_tree;
    use rstest::rstest;

    #[rstest]
    #[case("<https://example.com>", FragmentType::Hyperlink, "https://example.com", false)]
    #[case("[Intro >> Usage]", FragmentType::SectionReference, "Intro >> Usage", false)]
    #[case("*[Intro]", FragmentType::SectionReference, "Intro", true)]
    #[case("manual", FragmentType::AmbiguousReference, "manual", false)]
    #[case("*manual", FragmentType::AmbiguousReference, "manual", true)]
    fn test_references(
        #[case] raw: &str,
        #[case] kind: FragmentType,
        #[case] data: &str,
        #[case] include: bool,
    ) {
        let fragment = fragment(&Inline::Reference {
            raw: raw.into(),
            cast: None,
        });
        assert_eq!(fragment.kind, kind);
        assert_eq!(fragment.data, data);
        assert_eq!(fragment.include, include);
    }

    #[test]
    fn test_dictionary_pairs() {
        let tree = parse_tree("/a/\n\tone\n/b/\n\ttwo\n", &Profile::default());
        let document = export(&tree);
        let Element::Dictionary(dictionary) = &document.children[0] else {
            panic!("expected a dictionary, found {:?}", document.children[0]);
        };
        let keys: Vec<String> = dictionary.entries.iter().map(|entry| entry.key.text()).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert!(dictionary.get("b").is_some());
    }

    #[test]
    fn test_separator_is_line_break() {
        let tree = parse_tree("one\ntwo\n", &Profile::default());
        let document = export(&tree);
        let Element::Paragraph(paragraph) = &document.children[0] else {
            panic!("expected a paragraph");
        };
        assert_eq!(
            paragraph.type_strings(),
            vec!["text/normal", "text/line-break", "text/normal"]
        );
    }
}
