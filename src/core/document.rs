//! Markdown document split into raw lines around its front matter block
//!
//! The document is kept as the exact lines read from disk (terminators
//! included) so that everything outside the front matter is written back
//! byte for byte.

use crate::core::front_matter::FrontMatter;

/// Front matter delimiter line
pub const DELIMITER: &str = "---";

/// A markdown document as an ordered list of raw lines
#[derive(Debug, Clone)]
pub struct Document {
    lines: Vec<String>,
    bounds: Option<(usize, usize)>,
}

impl Document {
    /// Split content into lines and locate the front matter block
    pub fn parse(content: &str) -> Self {
        let lines = split_lines(content);
        let bounds = find_front_matter(&lines);
        Self { lines, bounds }
    }

    /// Line terminator used for lines the tool inserts
    ///
    /// Taken from the opening delimiter, falling back to `\n`.
    pub fn newline(&self) -> &'static str {
        match self.lines.first() {
            Some(line) if line.ends_with("\r\n") => "\r\n",
            _ => "\n",
        }
    }

    /// Copy of the lines between the delimiters, ready for editing
    pub fn front_matter(&self) -> Option<FrontMatter> {
        let (start, end) = self.bounds?;
        Some(FrontMatter::new(
            self.lines[start + 1..end].to_vec(),
            self.newline(),
        ))
    }

    /// Reassemble the document with an edited front matter block
    ///
    /// Lines before and including the opening delimiter, and from the
    /// closing delimiter onward, are emitted unchanged.
    pub fn render(&self, front_matter: &FrontMatter) -> String {
        let Some((start, end)) = self.bounds else {
            return self.lines.concat();
        };

        let mut out = String::new();
        for line in &self.lines[..=start] {
            out.push_str(line);
        }
        for line in front_matter.lines() {
            out.push_str(line);
        }
        for line in &self.lines[end..] {
            out.push_str(line);
        }
        out
    }
}

/// Split text after every `\n`, keeping terminators attached
pub fn split_lines(content: &str) -> Vec<String> {
    content.split_inclusive('\n').map(str::to_owned).collect()
}

/// Locate a `---` delimited block starting on the first line
///
/// Returns the indices of the opening and closing delimiters.
pub fn find_front_matter<S: AsRef<str>>(lines: &[S]) -> Option<(usize, usize)> {
    let first = lines.first()?;
    if first.as_ref().trim() != DELIMITER {
        return None;
    }
    lines
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, line)| line.as_ref().trim() == DELIMITER)
        .map(|(i, _)| (0, i))
}
