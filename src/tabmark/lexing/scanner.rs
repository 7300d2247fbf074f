//! Scanner
//!
//!     The scanner walks source lines and produces parse events. It owns the only
//!     state lexing needs:
//!
//!         - The level of the previous content line. Every change is turned into one
//!           Enter or Exit event per level, emitted before the line's own event.
//!         - A pending break. Runs of blank lines collapse into a single Break, which is
//!           released just before the next content line (and before its Exit events,
//!           so a blank line closes paragraphs in the body it appears in).
//!         - A stack of frames. The base frame classifies lines through the command
//!           table. A syntax header at level L pushes a literal frame at L+1: while it
//!           is on top, lines at level L+1 or deeper are not classified at all and come
//!           out verbatim as LiteralLine events.
//!
//!     The scanner is an iterator, so the parser pulls events lazily.

use std::collections::VecDeque;
use std::vec::IntoIter;

use super::line_classification::{classify_with, Command, LineKind, COMMANDS};
use crate::tabmark::config::Profile;
use crate::tabmark::token::{Event, EventKind, SourceLine};

/// How lines are turned into events while a frame is on top of the stack.
#[derive(Debug, Clone, Copy)]
enum Processor {
    Commands(&'static [(&'static str, Command)]),
    Literal,
}

#[derive(Debug, Clone)]
struct Frame {
    processor: Processor,
    level: usize,
    /// Set once the frame has emitted its Enter event.
    entered: bool,
    /// Line numbers of blank lines held back until the next literal line.
    blanks: Vec<usize>,
}

impl Frame {
    fn base() -> Self {
        Self {
            processor: Processor::Commands(COMMANDS),
            level: 0,
            entered: true,
            blanks: Vec::new(),
        }
    }

    fn literal(level: usize) -> Self {
        Self {
            processor: Processor::Literal,
            level,
            entered: false,
            blanks: Vec::new(),
        }
    }
}

pub struct Scanner<'a> {
    lines: IntoIter<SourceLine<'a>>,
    profile: &'a Profile,
    frames: Vec<Frame>,
    pending: VecDeque<Event>,
    previous_level: usize,
    pending_break: Option<usize>,
    last_line: usize,
    started: bool,
    finished: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(lines: Vec<SourceLine<'a>>, profile: &'a Profile) -> Self {
        Self {
            lines: lines.into_iter(),
            profile,
            frames: vec![Frame::base()],
            pending: VecDeque::new(),
            previous_level: 0,
            pending_break: None,
            last_line: 0,
            started: false,
            finished: false,
        }
    }

    fn emit(&mut self, event: Event) {
        self.pending.push_back(event);
    }

    fn process(&mut self, line: SourceLine<'a>) {
        self.last_line = line.number;
        if !self.started {
            self.started = true;
            if self.context_line(&line) {
                return;
            }
        }

        if let Some(frame) = self.frames.last() {
            if let Processor::Literal = frame.processor {
                if self.literal_line(&line) {
                    return;
                }
            }
        }

        let commands = match self.frames.last().map(|frame| frame.processor) {
            Some(Processor::Commands(commands)) => commands,
            _ => COMMANDS,
        };

        match classify_with(line.content, self.profile, commands) {
            LineKind::Blank => {
                self.pending_break.get_or_insert(line.number);
            }
            LineKind::Decoration => {
                self.flush_break();
                let level = self.previous_level;
                self.emit(Event::new(EventKind::Decoration, line.number, level, line.raw));
            }
            kind => {
                self.flush_break();
                self.indent_to(line.level, line.number);
                self.content(kind, &line);
            }
        }
    }

    /// Line 1 starting with `#!` is document metadata unless it opens an indented body.
    /// Blank lines before that body do not count.
    fn context_line(&mut self, line: &SourceLine<'a>) -> bool {
        if line.level != 0 || !line.content.starts_with("#!") {
            return false;
        }
        let has_body = self
            .lines
            .as_slice()
            .iter()
            .find(|next| !next.is_blank())
            .map(|next| next.level > line.level)
            .unwrap_or(false);
        if has_body {
            return false;
        }
        let context = line.content["#!".len()..].trim().to_string();
        self.emit(Event::new(EventKind::Context(context), line.number, 0, line.raw));
        true
    }

    /// Handle a line while a literal frame is on top. Returns false when the line
    /// closed the frame and still needs ordinary processing.
    fn literal_line(&mut self, line: &SourceLine<'a>) -> bool {
        let Some(frame) = self.frames.last_mut() else {
            return false;
        };

        if line.is_blank() {
            frame.blanks.push(line.number);
            return true;
        }

        if line.level >= frame.level {
            let level = frame.level;
            let first = !frame.entered;
            frame.entered = true;
            let blanks = std::mem::take(&mut frame.blanks);
            if first {
                self.emit(Event::marker(EventKind::Enter, line.number, level));
            }
            for number in blanks {
                self.emit(Event::marker(EventKind::LiteralLine(String::new()), number, level));
            }
            let text = line.dedent(level).to_string();
            self.emit(Event::new(EventKind::LiteralLine(text), line.number, level, line.raw));
            return true;
        }

        self.close_literal(line.number);
        false
    }

    fn close_literal(&mut self, line: usize) {
        if let Some(frame) = self.frames.pop() {
            if frame.entered {
                self.emit(Event::marker(EventKind::Exit, line, frame.level));
            }
            if let Some(&first) = frame.blanks.first() {
                self.pending_break.get_or_insert(first);
            }
        }
    }

    fn flush_break(&mut self) {
        if let Some(number) = self.pending_break.take() {
            let level = self.previous_level;
            self.emit(Event::marker(EventKind::Break, number, level));
        }
    }

    fn indent_to(&mut self, level: usize, line: usize) {
        while self.previous_level < level {
            self.previous_level += 1;
            let entered = self.previous_level;
            self.emit(Event::marker(EventKind::Enter, line, entered));
        }
        while self.previous_level > level {
            let exited = self.previous_level;
            self.emit(Event::marker(EventKind::Exit, line, exited));
            self.previous_level -= 1;
        }
    }

    fn content(&mut self, kind: LineKind, line: &SourceLine<'a>) {
        let (number, level) = (line.number, line.level);
        let kind = match kind {
            LineKind::Section {
                path,
                opening,
                closing,
            } => {
                if opening != closing {
                    let message = format!(
                        "section header opens with {opening} bracket(s) but closes with {closing}"
                    );
                    self.emit(Event::new(EventKind::Warning(message), number, level, line.raw));
                }
                if path.is_empty() {
                    let message = "section header has an empty title path".to_string();
                    self.emit(Event::new(EventKind::Warning(message), number, level, line.raw));
                    return;
                }
                EventKind::Section {
                    path,
                    multiplicity: opening,
                }
            }
            LineKind::Admonition { severity, title } => EventKind::Admonition { severity, title },
            LineKind::Key(text) => EventKind::Key(text),
            LineKind::SetItem(text) => EventKind::SetItem(text),
            LineKind::SequenceItem(text) => EventKind::SequenceItem(text),
            LineKind::SyntaxOpen {
                syntax_type,
                qualifier,
            } => {
                self.frames.push(Frame::literal(level + 1));
                EventKind::SyntaxOpen {
                    syntax_type,
                    qualifier,
                }
            }
            LineKind::Paragraph(text) => EventKind::ParagraphLine(text),
            LineKind::Blank | LineKind::Decoration => return,
        };
        self.emit(Event::new(kind, number, level, line.raw));
    }

    fn finish(&mut self, line: usize) {
        while self.frames.len() > 1 {
            if let Some(frame) = self.frames.pop() {
                if frame.entered {
                    self.emit(Event::marker(EventKind::Exit, line, frame.level));
                }
            }
        }
        self.pending_break = None;
        self.indent_to(0, line);
    }
}

impl Iterator for Scanner<'_> {
    type Item = Event;

    fn next(&mut self) -> Option<Event> {
        loop {
            if let Some(event) = self.pending.pop_front() {
                return Some(event);
            }
            if self.finished {
                return None;
            }
            match self.lines.next() {
                Some(line) => self.process(line),
                None => {
                    self.finished = true;
                    self.finish(self.last_line);
                }
            }
        }
    }
}
