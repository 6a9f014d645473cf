//! Line-oriented reading and editing of a front matter block
//!
//! The block is kept as raw lines and every edit is a surgical insert,
//! replace or delete, so comments, key order and indentation elsewhere in
//! the block survive untouched.

use crate::core::redirect::{RedirectBlock, RedirectStyle, REDIRECT_KEY};
use chrono::NaiveDate;
use log::debug;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Front matter key of the publication flag
pub const PUBLISHED_KEY: &str = "published";

/// Keys after which a missing `published: false` is inserted
const DATE_KEYS: [&str; 3] = ["date_update", "date_publish", "date"];

static ITEM_INDENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)-\s+").expect("item indent pattern"));

static DATE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d{4}-\d{2}-\d{2})").expect("date prefix pattern"));

/// Editable lines of a front matter block, delimiters excluded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatter {
    lines: Vec<String>,
    newline: &'static str,
}

impl FrontMatter {
    /// Wrap raw lines; `newline` terminates lines inserted by edits
    pub fn new(lines: Vec<String>, newline: &'static str) -> Self {
        Self { lines, newline }
    }

    /// Build from block text, `\n` terminated
    pub fn from_text(text: &str) -> Self {
        Self::new(crate::core::document::split_lines(text), "\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Concatenated block text
    pub fn to_text(&self) -> String {
        self.lines.concat()
    }

    /// Scalar value of a top-level key, empty if the key has no value
    ///
    /// Only the first matching line counts. A trailing `#` comment and one
    /// pair of surrounding quotes are removed.
    pub fn raw_value(&self, key: &str) -> Option<String> {
        let raw = self
            .lines
            .iter()
            .filter(|line| is_top_level(line))
            .find_map(|line| key_value(line, key))?;
        Some(normalize_value(strip_comment(raw)).to_owned())
    }

    /// Like [`FrontMatter::raw_value`], but an empty value reads as absent
    pub fn value(&self, key: &str) -> Option<String> {
        self.raw_value(key).filter(|value| !value.is_empty())
    }

    /// Explicit `slug`, or the file name without its extension
    pub fn slug(&self, path: &Path) -> String {
        self.value("slug").unwrap_or_else(|| {
            path.file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default()
        })
    }

    /// Publication date from `date_publish`, falling back to `date`
    ///
    /// The fallback only applies when `date_publish` is missing; an empty
    /// `date_publish` means no date.
    pub fn publish_date(&self) -> Option<NaiveDate> {
        self.raw_value("date_publish")
            .or_else(|| self.raw_value("date"))
            .and_then(|raw| parse_date(&raw))
    }

    /// Parsed `redirect_from` field, if present
    pub fn redirects(&self) -> Option<RedirectBlock> {
        RedirectBlock::parse(&self.lines)
    }

    /// Make sure `/<collection>/<slug>/` is listed in `redirect_from`
    ///
    /// Returns whether the block changed. Running it again is a no-op.
    pub fn ensure_redirect(&mut self, collection: &str, slug: &str) -> bool {
        let short = format!("/{collection}/{slug}/");
        let nl = self.newline;

        let Some(block) = self.redirects() else {
            if self.lines.last().is_some_and(|line| !line.trim().is_empty()) {
                self.lines.push(nl.to_owned());
            }
            self.lines.push(format!("{REDIRECT_KEY}:{nl}"));
            self.lines.push(format!("  - {short}{nl}"));
            debug!("added redirect_from with {short}");
            return true;
        };

        if block.contains(&short) {
            return false;
        }

        match block.style {
            RedirectStyle::Inline => {
                let rendered = std::iter::once(format!("{REDIRECT_KEY}:{nl}")).chain(
                    block
                        .items
                        .iter()
                        .chain(std::iter::once(&short))
                        .map(|item| format!("  - {item}{nl}")),
                );
                self.lines.splice(block.index..block.index + 1, rendered);
                debug!("rewrote inline redirect_from as a list with {short}");
            }
            RedirectStyle::Block => {
                let indent = self.lines[block.range.clone()]
                    .iter()
                    .find_map(|line| ITEM_INDENT.captures(line))
                    .map_or("  ", |caps| caps.get(1).map_or("  ", |m| m.as_str()))
                    .to_owned();
                self.lines
                    .insert(block.range.end, format!("{indent}- {short}{nl}"));
                debug!("appended {short} to redirect_from");
            }
        }
        true
    }

    /// Set the `published` flag
    ///
    /// An existing flag is overwritten. A missing flag is only inserted
    /// for `false`, since an absent flag already means published.
    pub fn set_published(&mut self, value: bool) -> bool {
        let existing = self
            .lines
            .iter()
            .position(|line| is_top_level(line) && key_value(line, PUBLISHED_KEY).is_some());

        if let Some(i) = existing {
            let terminator = terminator(&self.lines[i]);
            let rendered = format!("{PUBLISHED_KEY}: {value}{terminator}");
            if self.lines[i] == rendered {
                return false;
            }
            self.lines[i] = rendered;
            return true;
        }

        if value {
            return false;
        }

        let insert_at = self
            .lines
            .iter()
            .rposition(|line| {
                is_top_level(line) && DATE_KEYS.iter().any(|key| key_value(line, key).is_some())
            })
            .map_or(self.lines.len(), |i| i + 1);
        self.lines
            .insert(insert_at, format!("{PUBLISHED_KEY}: false{}", self.newline));
        true
    }

    /// Delete the whole `redirect_from` field
    pub fn remove_redirects(&mut self) -> bool {
        match self.redirects() {
            Some(block) => {
                self.lines.drain(block.span());
                true
            }
            None => false,
        }
    }
}

/// Line text without its terminator
pub(crate) fn content(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}

fn terminator(line: &str) -> &str {
    &line[content(line).len()..]
}

/// Whether a line starts at column zero with a non-space character
pub(crate) fn is_top_level(line: &str) -> bool {
    line.chars().next().map_or(true, |c| !c.is_whitespace())
}

/// Text after `<key>\s*:` on a line, if the line holds that key
pub(crate) fn key_value<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    content(line)
        .strip_prefix(key)?
        .trim_start()
        .strip_prefix(':')
}

/// Everything before the first `#`
pub(crate) fn strip_comment(value: &str) -> &str {
    value.split('#').next().unwrap_or(value)
}

/// Trim and remove one pair of matching surrounding quotes
pub fn normalize_value(value: &str) -> &str {
    let value = value.trim();
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Date from a strict `YYYY-MM-DD` prefix
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let caps = DATE_PREFIX.captures(raw)?;
    NaiveDate::parse_from_str(&caps[1], "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_value_reads_top_level_only() {
        let fm = FrontMatter::from_text("meta:\n  slug: nested\nslug: top # comment\n");
        assert_eq!(fm.value("slug").as_deref(), Some("top"));
        assert_eq!(fm.value("missing"), None);
    }

    #[test]
    fn test_value_empty_is_absent() {
        let fm = FrontMatter::from_text("slug:\nslug_extra: x\ntitle: ''\n");
        assert_eq!(fm.value("slug"), None);
        assert_eq!(fm.value("title"), None);
        assert_eq!(fm.value("slug_extra").as_deref(), Some("x"));
    }

    #[test]
    fn test_value_allows_space_before_colon() {
        let fm = FrontMatter::from_text("date_publish : \"2024-02-01\"\n");
        assert_eq!(fm.value("date_publish").as_deref(), Some("2024-02-01"));
    }

    #[test]
    fn test_slug_quoted_and_fallback() {
        let fm = FrontMatter::from_text("slug: \"custom-slug\"\n");
        assert_eq!(fm.slug(Path::new("_blog/2024-01-01-post.md")), "custom-slug");

        let fm = FrontMatter::from_text("title: x\n");
        assert_eq!(fm.slug(Path::new("_blog/my-post.markdown")), "my-post");
    }

    #[test]
    fn test_publish_date() {
        let fm = FrontMatter::from_text("date: 2020-05-06 10:00\n");
        assert_eq!(fm.publish_date(), NaiveDate::from_ymd_opt(2020, 5, 6));

        let fm = FrontMatter::from_text("date_publish: 2999-01-01\ndate: 2020-05-06\n");
        assert_eq!(fm.publish_date(), NaiveDate::from_ymd_opt(2999, 1, 1));

        let fm = FrontMatter::from_text("date_publish:\ndate: 2020-05-06\n");
        assert_eq!(fm.publish_date(), None);

        let fm = FrontMatter::from_text("title: x\n  date_publish: nested\ndate: 2020-05-06\n");
        assert_eq!(fm.publish_date(), NaiveDate::from_ymd_opt(2020, 5, 6));
    }

    #[test]
    fn test_raw_value_keeps_empty() {
        let fm = FrontMatter::from_text("date_publish: # later\nslug: ''\n");
        assert_eq!(fm.raw_value("date_publish").as_deref(), Some(""));
        assert_eq!(fm.raw_value("slug").as_deref(), Some(""));
        assert_eq!(fm.value("slug"), None);
        assert_eq!(fm.raw_value("date"), None);
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("  2024-12-31T10:00"), NaiveDate::from_ymd_opt(2024, 12, 31));
        assert_eq!(parse_date("2024-02-30"), None);
        assert_eq!(parse_date("24-01-01"), None);
        assert_eq!(parse_date("soon"), None);
    }

    #[test]
    fn test_normalize_value() {
        assert_eq!(normalize_value(" 'a' "), "a");
        assert_eq!(normalize_value("\"a\""), "a");
        assert_eq!(normalize_value("\"a'"), "\"a'");
        assert_eq!(normalize_value("\""), "\"");
    }

    #[test]
    fn test_ensure_redirect_adds_block() {
        let mut fm = FrontMatter::from_text("title: Hello\n");
        assert!(fm.ensure_redirect("blog", "hello"));
        assert_eq!(
            fm.to_text(),
            "title: Hello\n\nredirect_from:\n  - /blog/hello/\n"
        );

        let block = fm.redirects().unwrap();
        assert_eq!(block.style, RedirectStyle::Block);
        assert_eq!(block.items, vec!["/blog/hello/"]);
    }

    #[test]
    fn test_ensure_redirect_no_separator_after_blank() {
        let mut fm = FrontMatter::from_text("title: Hello\n\n");
        assert!(fm.ensure_redirect("blog", "hello"));
        assert_eq!(
            fm.to_text(),
            "title: Hello\n\nredirect_from:\n  - /blog/hello/\n"
        );
    }

    #[test]
    fn test_ensure_redirect_is_idempotent() {
        let mut fm = FrontMatter::from_text("title: Hello\n");
        assert!(fm.ensure_redirect("projects", "tool"));
        let once = fm.clone();
        assert!(!fm.ensure_redirect("projects", "tool"));
        assert_eq!(fm, once);
    }

    #[test]
    fn test_ensure_redirect_rewrites_inline() {
        let mut fm = FrontMatter::from_text("title: x\nredirect_from: [/a/, /b/]\ntags: [t]\n");
        assert!(fm.ensure_redirect("blog", "c"));
        assert_eq!(
            fm.to_text(),
            "title: x\nredirect_from:\n  - /a/\n  - /b/\n  - /blog/c/\ntags: [t]\n"
        );
        assert_eq!(fm.redirects().unwrap().style, RedirectStyle::Block);
        assert!(!fm.ensure_redirect("blog", "c"));
    }

    #[test]
    fn test_ensure_redirect_inline_already_present() {
        let mut fm = FrontMatter::from_text("redirect_from: /blog/c/\n");
        assert!(!fm.ensure_redirect("blog", "c"));
        assert_eq!(fm.to_text(), "redirect_from: /blog/c/\n");
    }

    #[test]
    fn test_ensure_redirect_appends_with_existing_indent() {
        let mut fm =
            FrontMatter::from_text("redirect_from:\n    - /old/\n    - /older/\ntitle: x\n");
        assert!(fm.ensure_redirect("blog", "new"));
        assert_eq!(
            fm.to_text(),
            "redirect_from:\n    - /old/\n    - /older/\n    - /blog/new/\ntitle: x\n"
        );
    }

    #[test]
    fn test_ensure_redirect_empty_block_uses_default_indent() {
        let mut fm = FrontMatter::from_text("redirect_from:\ntitle: x\n");
        assert!(fm.ensure_redirect("blog", "new"));
        assert_eq!(fm.to_text(), "redirect_from:\n  - /blog/new/\ntitle: x\n");
    }

    #[test]
    fn test_ensure_redirect_uses_document_newline() {
        let mut fm = FrontMatter::new(vec!["title: x\r\n".into()], "\r\n");
        fm.ensure_redirect("blog", "x");
        assert_eq!(fm.to_text(), "title: x\r\n\r\nredirect_from:\r\n  - /blog/x/\r\n");
    }

    #[test]
    fn test_set_published_overwrites() {
        let mut fm = FrontMatter::from_text("published: true\n");
        assert!(fm.set_published(false));
        assert_eq!(fm.to_text(), "published: false\n");
        assert!(!fm.set_published(false));

        let mut fm = FrontMatter::from_text("published: yes # draft\n");
        assert!(fm.set_published(true));
        assert_eq!(fm.to_text(), "published: true\n");
    }

    #[test]
    fn test_set_published_true_never_inserts() {
        let mut fm = FrontMatter::from_text("title: x\n");
        assert!(!fm.set_published(true));
        assert_eq!(fm.to_text(), "title: x\n");
    }

    #[test]
    fn test_set_published_false_inserts_after_last_date_key() {
        let mut fm = FrontMatter::from_text(
            "title: x\ndate: 2020-01-01\ndate_update: 2021-01-01\n  date: nested\ntags: []\n",
        );
        assert!(fm.set_published(false));
        assert_eq!(
            fm.to_text(),
            "title: x\ndate: 2020-01-01\ndate_update: 2021-01-01\npublished: false\n  date: nested\ntags: []\n"
        );
    }

    #[test]
    fn test_set_published_false_appends_without_date() {
        let mut fm = FrontMatter::from_text("title: x\n");
        assert!(fm.set_published(false));
        assert_eq!(fm.to_text(), "title: x\npublished: false\n");
    }

    #[test]
    fn test_remove_redirects() {
        let mut fm = FrontMatter::from_text("a: 1\nredirect_from:\n  - /x/\n  - /y/\nb: 2\n");
        assert!(fm.remove_redirects());
        assert_eq!(fm.to_text(), "a: 1\nb: 2\n");
        assert!(!fm.remove_redirects());

        let mut fm = FrontMatter::from_text("a: 1\nredirect_from: [/x/]\nb: 2\n");
        assert!(fm.remove_redirects());
        assert_eq!(fm.to_text(), "a: 1\nb: 2\n");
    }
}
