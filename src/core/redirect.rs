//! Parsing of the `redirect_from` field in its two list styles

use crate::core::front_matter::{content, is_top_level, key_value, normalize_value, strip_comment};
use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// Front matter key holding redirect aliases
pub const REDIRECT_KEY: &str = "redirect_from";

static BLOCK_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*-\s*(.+?)\s*(#.*)?$").expect("block item pattern"));

/// How the list is written in the source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectStyle {
    /// `redirect_from: [/a/, /b/]` or `redirect_from: /a/`
    Inline,
    /// `redirect_from:` followed by indented `- item` lines
    Block,
}

/// A located `redirect_from` field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectBlock {
    /// Index of the `redirect_from:` line
    pub index: usize,
    pub style: RedirectStyle,
    pub items: Vec<String>,
    /// Lines after the key belonging to the field (empty for inline)
    pub range: Range<usize>,
}

impl RedirectBlock {
    /// Find and parse the first top-level `redirect_from` key
    pub fn parse<S: AsRef<str>>(lines: &[S]) -> Option<Self> {
        let (index, rest) = lines.iter().enumerate().find_map(|(i, line)| {
            let line = line.as_ref();
            if !is_top_level(line) {
                return None;
            }
            key_value(line, REDIRECT_KEY).map(|rest| (i, rest))
        })?;

        let value = strip_comment(rest).trim();
        if !value.is_empty() {
            return Some(Self {
                index,
                style: RedirectStyle::Inline,
                items: parse_inline(value),
                range: index + 1..index + 1,
            });
        }

        let start = index + 1;
        let mut end = start;
        let mut items = Vec::new();
        while let Some(line) = lines.get(end) {
            let line = content(line.as_ref());
            if line.starts_with(|c: char| !c.is_whitespace()) {
                break;
            }
            if let Some(caps) = BLOCK_ITEM.captures(line) {
                items.push(normalize_value(&caps[1]).to_owned());
            }
            end += 1;
        }

        Some(Self {
            index,
            style: RedirectStyle::Block,
            items,
            range: start..end,
        })
    }

    /// Whether the exact path is already listed
    pub fn contains(&self, path: &str) -> bool {
        self.items.iter().any(|item| item == path)
    }

    /// Full span of the field, key line included
    pub fn span(&self) -> Range<usize> {
        self.index..self.range.end
    }
}

fn parse_inline(value: &str) -> Vec<String> {
    match value.strip_prefix('[').and_then(|v| v.strip_suffix(']')) {
        Some(inner) => inner
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| normalize_value(part).to_owned())
            .collect(),
        None => vec![normalize_value(value).to_owned()],
    }
}
