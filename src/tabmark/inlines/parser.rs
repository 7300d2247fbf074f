//! Inline stylizer
//!
//!     One line of paragraph text becomes a flat list of [Inline] events. The line is
//!     read in passes:
//!
//!         1. Literals are split out first. A backtick opens a literal that runs to the
//!            next single backtick (a doubled one is an escaped backtick), and nothing
//!            inside it is styled.
//!         2. The areas between literals are scanned for `&` references and for
//!            emphasis runs of one to three asterisks. A run with no matching closer
//!            stays plain text.
//!         3. A parenthesized cast directly after an emphasis, reference or literal is
//!            attached to it.
//!
//!     Plain characters are buffered in a collector and flushed as Text whenever a
//!     styled node is pushed.

use super::nodes::{Inline, InlineContent};

/// Characters that terminate an undelimited reference.
const REFERENCE_STOP: &[char] = &['(', ')', '<', '>', '[', ']', '*', '&', '`', ',', ';', '"', '\''];
/// Punctuation dropped from the end of an undelimited reference.
const REFERENCE_TRAILING: &[char] = &['.', ':', '!', '?'];
const MAX_EMPHASIS: usize = 3;

/// Parse inline events from one line of text.
pub fn parse_inlines(text: &str) -> InlineContent {
    let chars: Vec<char> = text.chars().collect();
    let mut collector = Collector::default();

    let mut area_start = 0;
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == '`' {
            if let Some((literal, end)) = scan_literal(&chars, i) {
                stylize_area(&chars[area_start..i], &mut collector);
                let (cast, end) = scan_cast(&chars, end);
                collector.push_node(Inline::Literal {
                    text: literal,
                    cast,
                });
                i = end;
                area_start = end;
                continue;
            }
        }
        i += 1;
    }
    stylize_area(&chars[area_start..], &mut collector);

    collector.finish()
}

/// References and emphasis inside text that holds no literals.
fn stylize_area(area: &[char], collector: &mut Collector) {
    let mut i = 0;
    while i < area.len() {
        let ch = area[i];
        let prev = if i == 0 { None } else { Some(area[i - 1]) };

        if ch == '&' && !is_word(prev) {
            if let Some((raw, end)) = scan_reference(area, i) {
                let (cast, end) = scan_cast(area, end);
                collector.push_node(Inline::Reference { raw, cast });
                i = end;
                continue;
            }
        }

        if ch == '*' {
            let run = run_length(area, i);
            if is_word(prev) {
                collector.push_chars(&area[i..i + run]);
                i += run;
                continue;
            }
            match scan_emphasis(area, i, run) {
                Some(Span::Emphasis { body, end }) => {
                    let (cast, end) = scan_cast(area, end);
                    collector.push_node(Inline::Emphasis {
                        weight: run,
                        text: body,
                        cast,
                    });
                    i = end;
                }
                Some(Span::Mismatch { end }) => {
                    // Unequal runs: markers and body all stay plain text.
                    collector.push_chars(&area[i..end]);
                    i = end;
                }
                None => {
                    collector.push_chars(&area[i..i + run]);
                    i += run;
                }
            }
            continue;
        }

        collector.push_char(ch);
        i += 1;
    }
}

enum Span {
    Emphasis { body: String, end: usize },
    Mismatch { end: usize },
}

fn scan_emphasis(area: &[char], start: usize, run: usize) -> Option<Span> {
    let after = start + run;
    match area.get(after) {
        Some(ch) if !ch.is_whitespace() => {}
        _ => return None,
    }

    let mut j = after;
    while j < area.len() {
        if area[j] != '*' {
            j += 1;
            continue;
        }
        let close = run_length(area, j);
        let inside = area[j - 1];
        let next = area.get(j + close).copied();
        if !inside.is_whitespace() && !is_word(next) {
            let end = j + close;
            if close == run && run <= MAX_EMPHASIS {
                return Some(Span::Emphasis {
                    body: area[after..j].iter().collect(),
                    end,
                });
            }
            return Some(Span::Mismatch { end });
        }
        j += close;
    }
    None
}

/// `&` then an optional `*`, then `<...>`, `[...]` or an identifier.
fn scan_reference(area: &[char], start: usize) -> Option<(String, usize)> {
    let mut j = start + 1;
    if area.get(j) == Some(&'*') {
        j += 1;
    }
    let end = match area.get(j)? {
        ch if ch.is_whitespace() => return None,
        '<' => find(area, j + 1, '>')? + 1,
        '[' => find(area, j + 1, ']')? + 1,
        _ => {
            let mut k = j;
            while k < area.len() && !area[k].is_whitespace() && !REFERENCE_STOP.contains(&area[k]) {
                k += 1;
            }
            while k > j && REFERENCE_TRAILING.contains(&area[k - 1]) {
                k -= 1;
            }
            if k == j {
                return None;
            }
            k
        }
    };
    Some((area[start + 1..end].iter().collect(), end))
}

/// A grave accent literal starting at `start`. Doubled grave accents are escapes.
fn scan_literal(chars: &[char], start: usize) -> Option<(String, usize)> {
    let mut text = String::new();
    let mut j = start + 1;
    loop {
        match chars.get(j)? {
            '`' if chars.get(j + 1) == Some(&'`') => {
                text.push('`');
                j += 2;
            }
            '`' => return Some((text, j + 1)),
            ch => {
                text.push(*ch);
                j += 1;
            }
        }
    }
}

/// A `(cast)` directly at `at`. Returns the cast and the position after it.
fn scan_cast(chars: &[char], at: usize) -> (Option<String>, usize) {
    if chars.get(at) != Some(&'(') {
        return (None, at);
    }
    let mut k = at + 1;
    while k < chars.len() {
        match chars[k] {
            ')' if k > at + 1 => return (Some(chars[at + 1..k].iter().collect()), k + 1),
            ')' | '(' => return (None, at),
            _ => k += 1,
        }
    }
    (None, at)
}

fn find(chars: &[char], from: usize, target: char) -> Option<usize> {
    chars
        .iter()
        .skip(from)
        .position(|&ch| ch == target)
        .map(|offset| from + offset)
}

fn run_length(chars: &[char], start: usize) -> usize {
    chars[start..].iter().take_while(|&&ch| ch == '*').count()
}

fn is_word(ch: Option<char>) -> bool {
    ch.map(|c| c.is_alphanumeric()).unwrap_or(false)
}

#[derive(Default)]
struct Collector {
    buffer: String,
    nodes: InlineContent,
}

impl Collector {
    fn push_char(&mut self, ch: char) {
        self.buffer.push(ch);
    }

    fn push_chars(&mut self, chars: &[char]) {
        self.buffer.extend(chars);
    }

    fn flush_buffer(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.buffer);
        self.nodes.push(Inline::Text(text));
    }

    fn push_node(&mut self, node: Inline) {
        self.flush_buffer();
        self.nodes.push(node);
    }

    fn finish(mut self) -> InlineContent {
        self.flush_buffer();
        self.nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Inline {
        Inline::Text(s.into())
    }

    fn emphasis(weight: usize, s: &str) -> Inline {
        Inline::Emphasis {
            weight,
            text: s.into(),
            cast: None,
        }
    }

    #[test]
    fn parses_plain_text() {
        assert_eq!(parse_inlines("hello world"), vec![text("hello world")]);
        assert!(parse_inlines("").is_empty());
    }

    #[test]
    fn parses_alternating_emphasis() {
        assert_eq!(
            parse_inlines("Some *emphasis!*, not **twice**, but *thrice*!"),
            vec![
                text("Some "),
                emphasis(1, "emphasis!"),
                text(", not "),
                emphasis(2, "twice"),
                text(", but "),
                emphasis(1, "thrice"),
                text("!"),
            ]
        );
    }

    #[test]
    fn mismatched_runs_stay_plain() {
        assert_eq!(parse_inlines("*foo** bar"), vec![text("*foo** bar")]);
        assert_eq!(parse_inlines("a ***b* c"), vec![text("a ***b* c")]);
    }

    #[test]
    fn unclosed_and_spaced_asterisks_are_text() {
        assert_eq!(parse_inlines("2 * 3 = 6"), vec![text("2 * 3 = 6")]);
        assert_eq!(parse_inlines("*dangling"), vec![text("*dangling")]);
        assert_eq!(parse_inlines("a*b*c"), vec![text("a*b*c")]);
    }

    #[test]
    fn closer_must_not_follow_whitespace() {
        assert_eq!(parse_inlines("*a * b*"), vec![emphasis(1, "a * b")]);
    }

    #[test]
    fn four_asterisks_are_not_emphasis() {
        assert_eq!(parse_inlines("****x****"), vec![text("****x****")]);
    }

    #[test]
    fn parses_literals_with_escapes() {
        assert_eq!(
            parse_inlines("use `a``b` here"),
            vec![
                text("use "),
                Inline::Literal {
                    text: "a`b".into(),
                    cast: None,
                },
                text(" here"),
            ]
        );
    }

    #[test]
    fn literal_contents_are_not_stylized() {
        assert_eq!(
            parse_inlines("`*x* &y`"),
            vec![Inline::Literal {
                text: "*x* &y".into(),
                cast: None,
            }]
        );
    }

    #[test]
    fn unterminated_literal_is_text() {
        assert_eq!(parse_inlines("a `b"), vec![text("a `b")]);
    }

    #[test]
    fn parses_references() {
        assert_eq!(
            parse_inlines("See &<https://example.com> and &*[Intro >> Usage](note)."),
            vec![
                text("See "),
                Inline::Reference {
                    raw: "<https://example.com>".into(),
                    cast: None,
                },
                text(" and "),
                Inline::Reference {
                    raw: "*[Intro >> Usage]".into(),
                    cast: Some("note".into()),
                },
                text("."),
            ]
        );
    }

    #[test]
    fn undelimited_reference_drops_trailing_punctuation() {
        assert_eq!(
            parse_inlines("read &manual."),
            vec![
                text("read "),
                Inline::Reference {
                    raw: "manual".into(),
                    cast: None,
                },
                text("."),
            ]
        );
    }

    #[test]
    fn ampersand_inside_words_is_text() {
        assert_eq!(parse_inlines("AT&T & co"), vec![text("AT&T & co")]);
    }

    #[test]
    fn casts_attach_to_styled_events() {
        assert_eq!(
            parse_inlines("`x`(python) *y*(term) f(x)"),
            vec![
                Inline::Literal {
                    text: "x".into(),
                    cast: Some("python".into()),
                },
                text(" "),
                Inline::Emphasis {
                    weight: 1,
                    text: "y".into(),
                    cast: Some("term".into()),
                },
                text(" f(x)"),
            ]
        );
    }
}
