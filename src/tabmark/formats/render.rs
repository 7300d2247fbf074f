//! Text renderer
//!
//!     Turns a typed document back into tabmark text. Every element kind has one
//!     function producing a block of (level, line) pairs; levels become indentation
//!     units only at the very end, so nested bodies can be rendered without knowing
//!     where they end up.
//!
//!     Sibling blocks are separated by a single blank line. List items and
//!     dictionary entries are not blocks of their own: consecutive items and entries
//!     follow each other directly.
//!
//!     Sections are flat in the text but nested in the tree. A section header is
//!     written before its first content and written again when the section's content
//!     resumes after a nested section.

use crate::tabmark::document::{
    Admonition, Dictionary, Document, Element, Fragment, FragmentType, Item, List, Paragraph, Section, Syntax,
};

use super::registry::{FormatError, Formatter};

type Block = Vec<(usize, String)>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renderer {
    indentation: String,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new("\t")
    }
}

impl Renderer {
    pub fn new(indentation: impl Into<String>) -> Self {
        Self {
            indentation: indentation.into(),
        }
    }

    pub fn render(&self, doc: &Document) -> Vec<String> {
        let mut blocks = Vec::new();
        if let Some(context) = &doc.context {
            blocks.push(vec![(0, format!("#!{context}"))]);
        }
        for element in &doc.children {
            match element {
                Element::Section(section) => self.section(section, &mut blocks),
                other => blocks.push(self.element(other, 0)),
            }
        }
        join(blocks)
            .into_iter()
            .map(|(level, text)| self.indent(level, text))
            .collect()
    }

    /// Rendered text with a trailing newline. Empty documents render to "".
    pub fn render_text(&self, doc: &Document) -> String {
        let lines = self.render(doc);
        if lines.is_empty() {
            return String::new();
        }
        let mut text = lines.join("\n");
        text.push('\n');
        text
    }

    fn indent(&self, level: usize, text: String) -> String {
        if text.is_empty() {
            return text;
        }
        let mut line = self.indentation.repeat(level);
        line.push_str(&text);
        line
    }

    fn section(&self, section: &Section, blocks: &mut Vec<Block>) {
        let header = section_header(section);
        let mut pending = Some(header.clone());
        let mut written = false;

        for child in &section.children {
            match child {
                Element::Section(inner) => {
                    if !written {
                        if let Some(header) = pending.take() {
                            blocks.push(vec![(0, header)]);
                        }
                        written = true;
                    }
                    self.section(inner, blocks);
                    pending = Some(header.clone());
                }
                other => {
                    let mut block = self.element(other, 0);
                    if let Some(header) = pending.take() {
                        block.insert(0, (0, header));
                    }
                    written = true;
                    blocks.push(block);
                }
            }
        }

        if !written {
            blocks.push(vec![(0, header)]);
        }
    }

    fn element(&self, element: &Element, level: usize) -> Block {
        match element {
            Element::Paragraph(paragraph) => paragraph_lines(paragraph)
                .into_iter()
                .map(|line| (level, line))
                .collect(),
            Element::Set(list) => self.list(list, "-", level),
            Element::Sequence(list) => self.list(list, "#", level),
            Element::Dictionary(dictionary) => self.dictionary(dictionary, level),
            Element::Admonition(admonition) => self.admonition(admonition, level),
            Element::Syntax(syntax) => syntax_block(syntax, level),
            Element::Quote(quote) => self.body(&quote.children, level + 1),
            Element::Exception(exception) if exception.source.is_empty() => Block::new(),
            Element::Exception(exception) => vec![(level, exception.source.clone())],
            Element::Section(section) => {
                let mut blocks = Vec::new();
                self.section(section, &mut blocks);
                join(blocks)
            }
        }
    }

    /// Children of a container, blank-line separated.
    fn body(&self, children: &[Element], level: usize) -> Block {
        join(children.iter().map(|child| self.element(child, level)).collect())
    }

    fn list(&self, list: &List, marker: &str, level: usize) -> Block {
        list.items
            .iter()
            .flat_map(|item| self.item(item, marker, level))
            .collect()
    }

    fn item(&self, item: &Item, marker: &str, level: usize) -> Block {
        let (mut block, rest, opened_paragraph) = match item.children.split_first() {
            Some((Element::Paragraph(paragraph), rest)) => {
                let mut lines = paragraph_lines(paragraph).into_iter();
                let first = lines.next().unwrap_or_default();
                let mut block = vec![(level, format!("{marker} {first}"))];
                block.extend(lines.map(|line| (level + 1, line)));
                (block, rest, true)
            }
            _ => (vec![(level, marker.to_string())], item.children.as_slice(), false),
        };
        if rest.is_empty() {
            return block;
        }
        // A body line right below the first paragraph would continue it.
        if opened_paragraph {
            block.push((0, String::new()));
        }
        block.extend(self.body(rest, level + 1));
        block
    }

    fn dictionary(&self, dictionary: &Dictionary, level: usize) -> Block {
        let mut block = Block::new();
        for entry in &dictionary.entries {
            block.push((level, format!("/{}/", inline_text(&entry.key))));
            block.extend(self.body(&entry.value, level + 1));
        }
        block
    }

    fn admonition(&self, admonition: &Admonition, level: usize) -> Block {
        let header = match &admonition.title {
            Some(title) => format!("! {}: {}", admonition.severity, title),
            None => format!("! {}:", admonition.severity),
        };
        let mut block = vec![(level, header)];
        block.extend(self.body(&admonition.children, level + 1));
        block
    }
}

/// The renderer exposed through the format registry.
#[derive(Debug, Clone, Default)]
pub struct TabmarkFormatter {
    renderer: Renderer,
}

impl TabmarkFormatter {
    pub fn new(renderer: Renderer) -> Self {
        Self { renderer }
    }
}

impl Formatter for TabmarkFormatter {
    fn name(&self) -> &str {
        "tabmark"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(self.renderer.render_text(doc))
    }

    fn description(&self) -> &str {
        "Canonical tabmark text"
    }
}

fn join(blocks: Vec<Block>) -> Block {
    let mut out = Block::new();
    for block in blocks.into_iter().filter(|block| !block.is_empty()) {
        if !out.is_empty() {
            out.push((0, String::new()));
        }
        out.extend(block);
    }
    out
}

fn section_header(section: &Section) -> String {
    let count = section.multiplicity.max(1);
    format!(
        "{} {} {}",
        "[".repeat(count),
        section.path_text(),
        "]".repeat(count)
    )
}

fn syntax_block(syntax: &Syntax, level: usize) -> Block {
    let mut header = format!("#!{}", syntax.syntax_type);
    if let Some(qualifier) = &syntax.qualifier {
        header.push(' ');
        header.push_str(qualifier);
    }
    let mut block = vec![(level, header)];
    block.extend(syntax.lines.iter().map(|line| (level + 1, line.clone())));
    block
}

/// Source lines of a paragraph. Line-break fragments start a new line.
pub fn paragraph_lines(paragraph: &Paragraph) -> Vec<String> {
    let mut lines = vec![String::new()];
    for fragment in &paragraph.fragments {
        if fragment.kind == FragmentType::LineBreak {
            lines.push(String::new());
        } else if let Some(line) = lines.last_mut() {
            line.push_str(&render_fragment(fragment));
        }
    }
    lines
}

/// A paragraph on a single line.
fn inline_text(paragraph: &Paragraph) -> String {
    paragraph_lines(paragraph).join(" ")
}

pub fn render_fragment(fragment: &Fragment) -> String {
    let mut out = match fragment.kind {
        FragmentType::Normal | FragmentType::LineBreak => fragment.data.clone(),
        FragmentType::Emphasis(weight) => {
            let marker = "*".repeat(weight as usize);
            format!("{marker}{}{marker}", fragment.data)
        }
        FragmentType::Literal => format!("`{}`", fragment.data.replace('`', "``")),
        FragmentType::Hyperlink => format!("&{}<{}>", include_marker(fragment), fragment.data),
        FragmentType::SectionReference => format!("&{}[{}]", include_marker(fragment), fragment.data),
        FragmentType::AmbiguousReference => format!("&{}{}", include_marker(fragment), fragment.data),
    };
    if let Some(cast) = &fragment.cast {
        out.push('(');
        out.push_str(cast);
        out.push(')');
    }
    out
}

fn include_marker(fragment: &Fragment) -> &'static str {
    if fragment.include {
        "*"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabmark::parse;

    fn round_trip(source: &str) -> String {
        Renderer::default().render_text(&parse(source))
    }

    #[test]
    fn test_paragraphs_round_trip() {
        let source = "Hello *world*\nsecond line\n\nAnother `li``t` para.\n";
        assert_eq!(round_trip(source), source);
    }

    #[test]
    fn test_lists_round_trip() {
        let source = "- one\n\tcontinued\n- two\n\n# first\n# second\n";
        assert_eq!(round_trip(source), source);
    }

    #[test]
    fn test_dictionary_round_trip() {
        let source = "/DictItem1/\n\tDictValue1\n/DictItem2/\n\tDictValue2\n";
        assert_eq!(round_trip(source), source);
    }

    #[test]
    fn test_section_header_is_repeated() {
        let source = "[A]\nbefore\n[A >> B]\ninner\n[A]\nafter\n";
        assert_eq!(
            round_trip(source),
            "[ A ]\nbefore\n\n[ A >> B ]\ninner\n\n[ A ]\nafter\n"
        );
    }

    #[test]
    fn test_indentation_unit() {
        let doc = parse("! NOTE: careful\n\tbody\n");
        assert_eq!(
            Renderer::new("    ").render(&doc),
            vec!["! NOTE: careful", "    body"]
        );
    }

    #[test]
    fn test_render_fragment_casts_and_includes() {
        let fragment = Fragment::new(FragmentType::SectionReference, "Intro")
            .with_include(true)
            .with_cast(Some("see".into()));
        assert_eq!(render_fragment(&fragment), "&*[Intro](see)");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(round_trip(""), "");
    }
}
