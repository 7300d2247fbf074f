//! Source lines grouped from core tokens.

/// One physical line of the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine<'a> {
    /// 1-based line number.
    pub number: usize,
    /// Count of leading indentation units.
    pub level: usize,
    /// The whole line, without its line terminator.
    pub raw: &'a str,
    /// The line with indentation and surrounding whitespace removed.
    pub content: &'a str,
    /// Byte offset into `raw` just past each leading indentation unit.
    pub indent_ends: Vec<usize>,
}

impl<'a> SourceLine<'a> {
    pub fn is_blank(&self) -> bool {
        self.content.is_empty()
    }

    /// The raw line with exactly `levels` indentation units removed.
    ///
    /// Anything past those units, further indentation included, is kept verbatim.
    pub fn dedent(&self, levels: usize) -> &'a str {
        if levels == 0 {
            return self.raw;
        }
        match self.indent_ends.get(levels - 1) {
            Some(&end) => &self.raw[end..],
            None => self.content,
        }
    }
}
