//! Event cursor with pushback.

use crate::tabmark::lexing::{source_lines, Scanner};
use crate::tabmark::config::Profile;
use crate::tabmark::token::Event;

/// Pulls events from the scanner. Events handed back with [Events::replay] are
/// returned again before anything new, last in first out.
pub struct Events<'a> {
    scanner: Scanner<'a>,
    replay: Vec<Event>,
}

impl<'a> Events<'a> {
    pub fn new(source: &'a str, profile: &'a Profile) -> Self {
        Self {
            scanner: Scanner::new(source_lines(source), profile),
            replay: Vec::new(),
        }
    }

    pub fn replay(&mut self, event: Event) {
        self.replay.push(event);
    }
}

impl Iterator for Events<'_> {
    type Item = Event;

    fn next(&mut self) -> Option<Event> {
        self.replay.pop().or_else(|| self.scanner.next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabmark::token::EventKind;

    #[test]
    fn test_replay_is_lifo() {
        let profile = Profile::default();
        let mut events = Events::new("a\nb\n", &profile);
        let first = events.next().unwrap();
        let second = events.next().unwrap();

        events.replay(second.clone());
        events.replay(first.clone());
        assert_eq!(events.replay.len(), 2);

        assert_eq!(events.next(), Some(first));
        assert_eq!(events.next(), Some(second));
        assert_eq!(events.next(), None);
    }

    #[test]
    fn test_reads_scanner_lazily() {
        let profile = Profile::default();
        let mut events = Events::new("text", &profile);
        assert_eq!(
            events.next().map(|event| event.kind),
            Some(EventKind::ParagraphLine("text".into()))
        );
        assert_eq!(events.next(), None);
    }
}
