//! Recursive tree builder.

use std::collections::HashMap;

use super::cursor::Events;
use crate::tabmark::ast::{Exception, NodeId, NodeKind, Tree};
use crate::tabmark::config::Profile;
use crate::tabmark::inlines::parse_inlines;
use crate::tabmark::token::{Event, EventKind};

/// How a builder step ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No events left.
    Exhausted,
    /// The Exit closing this level was consumed.
    Exited,
    /// An event was pushed back for the caller.
    Replay,
}

pub struct TreeBuilder<'a> {
    events: Events<'a>,
    tree: Tree,
    sections: HashMap<Vec<String>, NodeId>,
    profile: &'a Profile,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(source: &'a str, profile: &'a Profile) -> Self {
        Self {
            events: Events::new(source, profile),
            tree: Tree::new(),
            sections: HashMap::new(),
            profile,
        }
    }

    pub fn build(mut self) -> Tree {
        let root = self.tree.root();
        if self.content(root, 0, None) != Outcome::Exhausted {
            while let Some(event) = self.events.next() {
                self.exception(root, &event, "event after the end of the document");
            }
        }
        self.tree
    }

    /// Content of a container at `level`. `paragraph` continues an already open
    /// paragraph, as for the first line of a list item.
    fn content(&mut self, node: NodeId, level: usize, paragraph: Option<NodeId>) -> Outcome {
        let mut target = node;
        let mut paragraph = paragraph;
        let mut dictionary: Option<NodeId> = None;

        while let Some(event) = self.events.next() {
            match &event.kind {
                EventKind::Exit => {
                    self.close(&mut paragraph);
                    if event.level == level {
                        return Outcome::Exited;
                    }
                    if event.level < level {
                        self.replay(event);
                        return Outcome::Replay;
                    }
                    self.exception(target, &event, "exit with no matching descent");
                    dictionary = None;
                }
                EventKind::Enter => {
                    self.close(&mut paragraph);
                    dictionary = None;
                    let quote = self.tree.push(target, NodeKind::Quote, event.line);
                    if self.nested(quote, &event, None) == Outcome::Exhausted {
                        return Outcome::Exhausted;
                    }
                }
                EventKind::Break => self.close(&mut paragraph),
                EventKind::Decoration => {
                    self.close(&mut paragraph);
                    dictionary = None;
                }
                EventKind::Context(context) => {
                    self.tree.context.get_or_insert_with(|| context.clone());
                }
                EventKind::Warning(message) => {
                    log::debug!("line {}: {}", event.line, message);
                    self.tree.warn(event.line, message.clone());
                }
                EventKind::ParagraphLine(text) => {
                    dictionary = None;
                    let id = match paragraph {
                        Some(id) => id,
                        None => {
                            let id = self.tree.push(target, NodeKind::Paragraph(Vec::new()), event.line);
                            paragraph = Some(id);
                            id
                        }
                    };
                    self.tree.extend_paragraph(id, parse_inlines(text));
                }
                EventKind::SetItem(_) | EventKind::SequenceItem(_) => {
                    self.close(&mut paragraph);
                    dictionary = None;
                    let kind = match event.kind {
                        EventKind::SetItem(_) => NodeKind::Set,
                        _ => NodeKind::Sequence,
                    };
                    let list = self.tree.push(target, kind, event.line);
                    self.replay(event);
                    if self.list(list, level) == Outcome::Exhausted {
                        return Outcome::Exhausted;
                    }
                }
                EventKind::Key(text) => {
                    self.close(&mut paragraph);
                    let dict = match dictionary {
                        Some(id) => id,
                        None => self.tree.push(target, NodeKind::Dictionary, event.line),
                    };
                    dictionary = Some(dict);
                    self.tree.push(dict, NodeKind::Key(parse_inlines(text)), event.line);
                    let value = self.tree.push(dict, NodeKind::Value, event.line);
                    if self.descend(value, level, None) == Outcome::Exhausted {
                        return Outcome::Exhausted;
                    }
                }
                EventKind::Admonition { severity, title } => {
                    self.close(&mut paragraph);
                    dictionary = None;
                    let kind = NodeKind::Admonition {
                        severity: severity.clone(),
                        title: title.clone(),
                    };
                    let admonition = self.tree.push(target, kind, event.line);
                    if self.descend(admonition, level, None) == Outcome::Exhausted {
                        return Outcome::Exhausted;
                    }
                }
                EventKind::SyntaxOpen {
                    syntax_type,
                    qualifier,
                } => {
                    self.close(&mut paragraph);
                    dictionary = None;
                    let kind = NodeKind::Syntax {
                        syntax_type: syntax_type.clone(),
                        qualifier: qualifier.clone(),
                        lines: Vec::new(),
                    };
                    let syntax = self.tree.push(target, kind, event.line);
                    if self.syntax(syntax, level + 1) == Outcome::Exhausted {
                        return Outcome::Exhausted;
                    }
                }
                EventKind::Section { path, multiplicity } => {
                    self.close(&mut paragraph);
                    dictionary = None;
                    if level != 0 {
                        self.exception(target, &event, "section select inside an indented body");
                    } else if path.len() > self.profile.nesting_limit() {
                        let reason = format!(
                            "section path deeper than the nesting limit of {}",
                            self.profile.nesting_limit()
                        );
                        self.exception(target, &event, reason);
                    } else {
                        target = self.select(path, *multiplicity, event.line);
                    }
                }
                EventKind::LiteralLine(_) => {
                    self.close(&mut paragraph);
                    dictionary = None;
                    self.exception(target, &event, "literal line outside a syntax body");
                }
            }
        }

        self.close(&mut paragraph);
        Outcome::Exhausted
    }

    /// Descend into the body of a header at `level`. A single Break may separate
    /// the header from its body.
    fn descend(&mut self, node: NodeId, level: usize, paragraph: Option<NodeId>) -> Outcome {
        let mut paragraph = paragraph;
        let Some(first) = self.events.next() else {
            self.close(&mut paragraph);
            return Outcome::Exhausted;
        };

        match first.kind {
            EventKind::Enter => return self.nested(node, &first, paragraph),
            EventKind::Break => match self.events.next() {
                Some(second) if second.kind == EventKind::Enter => {
                    self.close(&mut paragraph);
                    return self.nested(node, &second, None);
                }
                Some(second) => self.replay(second),
                None => {}
            },
            _ => {}
        }

        log::trace!("line {}: no body below level {}", first.line, level);
        self.close(&mut paragraph);
        self.replay(first);
        Outcome::Replay
    }

    /// Content one level down, entered by `enter`.
    fn nested(&mut self, node: NodeId, enter: &Event, paragraph: Option<NodeId>) -> Outcome {
        let level = enter.level;
        if level <= self.profile.nesting_limit() {
            return self.content(node, level, paragraph);
        }

        let mut paragraph = paragraph;
        self.close(&mut paragraph);
        let reason = format!("nesting limit of {} exceeded", self.profile.nesting_limit());
        self.exception(node, enter, reason);
        self.skip(level)
    }

    /// Drop events up to and including the Exit of `level`.
    fn skip(&mut self, level: usize) -> Outcome {
        for event in self.events.by_ref() {
            if event.kind == EventKind::Exit && event.level == level {
                return Outcome::Exited;
            }
        }
        Outcome::Exhausted
    }

    /// Items of one kind at `level`. Blank lines between items keep the list open.
    fn list(&mut self, list: NodeId, level: usize) -> Outcome {
        let sequence = matches!(self.tree.kind(list), NodeKind::Sequence);

        while let Some(event) = self.events.next() {
            let text = match &event.kind {
                EventKind::Break => match self.events.next() {
                    Some(next) if continues_list(&next, sequence) => {
                        self.replay(next);
                        continue;
                    }
                    Some(next) => {
                        self.replay(next);
                        self.replay(event);
                        return Outcome::Replay;
                    }
                    None => {
                        self.replay(event);
                        return Outcome::Replay;
                    }
                },
                _ if continues_list(&event, sequence) => match &event.kind {
                    EventKind::SetItem(text) | EventKind::SequenceItem(text) => text.clone(),
                    _ => String::new(),
                },
                _ => {
                    self.replay(event);
                    return Outcome::Replay;
                }
            };

            let item = self.tree.push(list, NodeKind::Item, event.line);
            let paragraph = if text.is_empty() {
                None
            } else {
                let id = self.tree.push(item, NodeKind::Paragraph(Vec::new()), event.line);
                self.tree.extend_paragraph(id, parse_inlines(&text));
                Some(id)
            };
            if self.descend(item, level, paragraph) == Outcome::Exhausted {
                return Outcome::Exhausted;
            }
        }
        Outcome::Exhausted
    }

    /// Literal body of a syntax block at `level`.
    fn syntax(&mut self, node: NodeId, level: usize) -> Outcome {
        match self.events.next() {
            Some(event) if event.kind == EventKind::Enter && event.level == level => {}
            Some(event) => {
                self.replay(event);
                return Outcome::Replay;
            }
            None => return Outcome::Exhausted,
        }

        while let Some(event) = self.events.next() {
            match event.kind {
                EventKind::LiteralLine(text) => self.tree.push_literal_line(node, text),
                EventKind::Exit if event.level == level => return Outcome::Exited,
                _ => {
                    self.replay(event);
                    return Outcome::Replay;
                }
            }
        }
        Outcome::Exhausted
    }

    /// The section for `path`, created with any missing ancestors on first use.
    fn select(&mut self, path: &[String], multiplicity: usize, line: usize) -> NodeId {
        let mut parent = self.tree.root();
        for depth in 1..=path.len() {
            let prefix = &path[..depth];
            if let Some(&id) = self.sections.get(prefix) {
                parent = id;
                continue;
            }
            let kind = NodeKind::Section {
                path: prefix.to_vec(),
                multiplicity: if depth == path.len() { multiplicity } else { 1 },
            };
            parent = self.tree.push(parent, kind, line);
            self.sections.insert(prefix.to_vec(), parent);
        }
        parent
    }

    fn close(&mut self, paragraph: &mut Option<NodeId>) {
        if let Some(id) = paragraph.take() {
            self.tree.close_paragraph(id);
        }
    }

    fn replay(&mut self, event: Event) {
        log::trace!("replay {} from line {}", event.name(), event.line);
        self.events.replay(event);
    }

    fn exception(&mut self, parent: NodeId, event: &Event, reason: impl Into<String>) {
        let exception = Exception::from_event(event, reason);
        log::debug!("{}", exception);
        self.tree.push(parent, NodeKind::Exception(exception), event.line);
    }
}

fn continues_list(event: &Event, sequence: bool) -> bool {
    matches!(
        (&event.kind, sequence),
        (EventKind::SetItem(_), false) | (EventKind::SequenceItem(_), true)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabmark::inlines::Inline;

    fn tree(source: &str) -> Tree {
        TreeBuilder::new(source, &Profile::default()).build()
    }

    fn kinds(tree: &Tree, id: NodeId) -> Vec<&'static str> {
        tree.children(id)
            .iter()
            .map(|&child| tree.kind(child).name())
            .collect()
    }

    #[test]
    fn test_paragraph_lines_join() {
        let tree = tree("one\ntwo\n\nthree\n");
        let root = tree.root();
        assert_eq!(kinds(&tree, root), vec!["Paragraph", "Paragraph"]);
        assert_eq!(
            tree.kind(tree.children(root)[0]),
            &NodeKind::Paragraph(vec![
                Inline::Text("one".into()),
                Inline::separator(),
                Inline::Text("two".into()),
            ])
        );
    }

    #[test]
    fn test_list_item_continues_first_paragraph() {
        let tree = tree("- first\n\tcontinued\n- second\n");
        let set = tree.children(tree.root())[0];
        assert_eq!(tree.kind(set), &NodeKind::Set);
        assert_eq!(kinds(&tree, set), vec!["Item", "Item"]);

        let item = tree.children(set)[0];
        assert_eq!(
            tree.kind(tree.children(item)[0]),
            &NodeKind::Paragraph(vec![
                Inline::Text("first".into()),
                Inline::separator(),
                Inline::Text("continued".into()),
            ])
        );
    }

    #[test]
    fn test_list_kinds_do_not_mix() {
        let tree = tree("- a\n# b\n");
        assert_eq!(kinds(&tree, tree.root()), vec!["Set", "Sequence"]);
    }

    #[test]
    fn test_blank_lines_keep_list_open() {
        let tree = tree("- a\n\n- b\n\nafter\n");
        assert_eq!(kinds(&tree, tree.root()), vec!["Set", "Paragraph"]);
        let set = tree.children(tree.root())[0];
        assert_eq!(kinds(&tree, set), vec!["Item", "Item"]);
    }

    #[test]
    fn test_sections_are_reused_by_path() {
        let tree = tree("[One]\na\n[Two]\nb\n[One]\nc\n");
        let root = tree.root();
        assert_eq!(kinds(&tree, root), vec!["Section", "Section"]);
        let one = tree.children(root)[0];
        assert_eq!(kinds(&tree, one), vec!["Paragraph", "Paragraph"]);
    }

    #[test]
    fn test_missing_ancestors_are_created() {
        let tree = tree("[A >> B]\ntext\n");
        let a = tree.children(tree.root())[0];
        assert_eq!(
            tree.kind(a),
            &NodeKind::Section {
                path: vec!["A".into()],
                multiplicity: 1,
            }
        );
        let b = tree.children(a)[0];
        assert_eq!(kinds(&tree, b), vec!["Paragraph"]);
    }

    #[test]
    fn test_section_path_beyond_nesting_limit() {
        let profile = Profile::new(&crate::tabmark::config::ParsingConfig {
            nesting_limit: 3,
            ..Default::default()
        });
        let tree = TreeBuilder::new("[a >> b >> c >> d]
text
[a >> b >> c]
more
", &profile).build();
        assert_eq!(kinds(&tree, tree.root()), vec!["Exception", "Paragraph", "Section"]);
        assert!(tree.exceptions()[0].reason.contains("nesting limit of 3"));
    }

    #[test]
    fn test_unexpected_indentation_is_a_quote() {
        let tree = tree("text\n\tquoted\n");
        assert_eq!(kinds(&tree, tree.root()), vec!["Paragraph", "Quote"]);
    }

    #[test]
    fn test_nested_section_is_an_exception() {
        let tree = tree("! NOTE:\n\t[Inner]\n");
        let admonition = tree.children(tree.root())[0];
        assert_eq!(kinds(&tree, admonition), vec!["Exception"]);
        assert_eq!(tree.exceptions().len(), 1);
    }

    #[test]
    fn test_nesting_limit() {
        let profile = Profile::new(&crate::tabmark::config::ParsingConfig {
            nesting_limit: 2,
            ..Default::default()
        });
        let tree = TreeBuilder::new("a\n\tb\n\t\tc\n\t\t\td\n\t\t\t\te\nf\n", &profile).build();
        let exceptions = tree.exceptions();
        assert_eq!(exceptions.len(), 1);
        assert_eq!(exceptions[0].line, 4);
        assert_eq!(exceptions[0].event, "enter");
        assert_eq!(kinds(&tree, tree.root()), vec!["Paragraph", "Quote", "Paragraph"]);
    }

    #[test]
    fn test_syntax_collects_lines() {
        let tree = tree("#!rust main\n\tfn main() {}\n\n\t\t// nested\n");
        let syntax = tree.children(tree.root())[0];
        assert_eq!(
            tree.kind(syntax),
            &NodeKind::Syntax {
                syntax_type: "rust".into(),
                qualifier: Some("main".into()),
                lines: vec!["fn main() {}".into(), String::new(), "\t// nested".into()],
            }
        );
    }

    #[test]
    fn test_context_is_recorded() {
        let tree = tree("#!tabmark\n\ntext\n");
        assert_eq!(tree.context.as_deref(), Some("tabmark"));
        assert_eq!(kinds(&tree, tree.root()), vec!["Paragraph"]);
    }
}
