use super::diagnostics::{Exception, Warning};
use crate::tabmark::inlines::{Inline, InlineContent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    /// Source line that opened the node. Zero for the document.
    pub line: usize,
    pub children: Vec<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    Section {
        path: Vec<String>,
        multiplicity: usize,
    },
    Paragraph(InlineContent),
    Set,
    Sequence,
    Item,
    /// Children alternate Key and Value.
    Dictionary,
    Key(InlineContent),
    Value,
    Admonition {
        severity: String,
        title: Option<String>,
    },
    Syntax {
        syntax_type: String,
        qualifier: Option<String>,
        lines: Vec<String>,
    },
    Quote,
    Exception(Exception),
}

impl NodeKind {
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Document => "Document",
            NodeKind::Section { .. } => "Section",
            NodeKind::Paragraph(_) => "Paragraph",
            NodeKind::Set => "Set",
            NodeKind::Sequence => "Sequence",
            NodeKind::Item => "Item",
            NodeKind::Dictionary => "Dictionary",
            NodeKind::Key(_) => "Key",
            NodeKind::Value => "Value",
            NodeKind::Admonition { .. } => "Admonition",
            NodeKind::Syntax { .. } => "Syntax",
            NodeKind::Quote => "Quote",
            NodeKind::Exception(_) => "Exception",
        }
    }
}

/// Arena holding the parse result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    nodes: Vec<Node>,
    pub context: Option<String>,
    pub warnings: Vec<Warning>,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                kind: NodeKind::Document,
                line: 0,
                children: Vec::new(),
            }],
            context: None,
            warnings: Vec::new(),
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes[0].children.is_empty()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.0].kind
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Append a new node as the last child of `parent`.
    pub fn push(&mut self, parent: NodeId, kind: NodeKind, line: usize) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            line,
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Append one source line of inline content plus the line-join separator.
    pub fn extend_paragraph(&mut self, id: NodeId, inlines: InlineContent) {
        if let NodeKind::Paragraph(content) = &mut self.nodes[id.0].kind {
            content.extend(inlines);
            content.push(Inline::separator());
        }
    }

    /// Drop the trailing separator of a finished paragraph.
    pub fn close_paragraph(&mut self, id: NodeId) {
        if let NodeKind::Paragraph(content) = &mut self.nodes[id.0].kind {
            if content.last().map(Inline::is_whitespace).unwrap_or(false) {
                content.pop();
            }
        }
    }

    pub fn push_literal_line(&mut self, id: NodeId, text: String) {
        if let NodeKind::Syntax { lines, .. } = &mut self.nodes[id.0].kind {
            lines.push(text);
        }
    }

    pub fn warn(&mut self, line: usize, message: impl Into<String>) {
        self.warnings.push(Warning::new(line, message));
    }

    /// Ids of all nodes below `id` in document order, `id` excluded.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).iter().rev());
        }
        out
    }

    /// All exception nodes in document order.
    pub fn exceptions(&self) -> Vec<&Exception> {
        self.descendants(self.root())
            .into_iter()
            .filter_map(|id| match self.kind(id) {
                NodeKind::Exception(exception) => Some(exception),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_links_children() {
        let mut tree = Tree::new();
        let section = tree.push(
            tree.root(),
            NodeKind::Section {
                path: vec!["A".into()],
                multiplicity: 1,
            },
            1,
        );
        let paragraph = tree.push(section, NodeKind::Paragraph(Vec::new()), 2);

        assert_eq!(tree.children(tree.root()), &[section]);
        assert_eq!(tree.children(section), &[paragraph]);
        assert_eq!(tree.descendants(tree.root()), vec![section, paragraph]);
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_close_paragraph_trims_one_separator() {
        let mut tree = Tree::new();
        let paragraph = tree.push(tree.root(), NodeKind::Paragraph(Vec::new()), 1);
        tree.extend_paragraph(paragraph, vec![Inline::Text("one".into())]);
        tree.extend_paragraph(paragraph, vec![Inline::Text("two".into())]);
        tree.close_paragraph(paragraph);
        tree.close_paragraph(paragraph);

        assert_eq!(
            tree.kind(paragraph),
            &NodeKind::Paragraph(vec![
                Inline::Text("one".into()),
                Inline::separator(),
                Inline::Text("two".into()),
            ])
        );
    }
}
