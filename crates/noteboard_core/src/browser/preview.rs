//! Page content previews for list rows and calendar cards.
//!
//! # Invariants
//! - `snippet` is one line: at most 80 chars, then `...` when cut.
//! - `excerpt` holds at most three non-blank lines in source order.
//! - Content is shown as typed; no markup is interpreted.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

const SNIPPET_MAX_CHARS: usize = 80;
const EXCERPT_MAX_LINES: usize = 3;
const ELLIPSIS: &str = "...";

/// Card text for a page without content.
pub const EMPTY_PAGE_EXCERPT: &str = "No content.";

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));
static INLINE_WHITESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\S\n]+").expect("valid inline ws regex"));

/// Preview fields shown next to a page title.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagePreview {
    /// Single-line text for the page list; `None` for blank content.
    pub snippet: Option<String>,
    /// Leading lines for a calendar card.
    pub excerpt: Vec<String>,
}

impl PagePreview {
    /// Excerpt lines joined for display, or [`EMPTY_PAGE_EXCERPT`].
    pub fn card_text(&self) -> String {
        if self.excerpt.is_empty() {
            EMPTY_PAGE_EXCERPT.to_string()
        } else {
            self.excerpt.join("\n")
        }
    }
}

/// Derives the list snippet and card excerpt of raw page `content`.
pub fn derive_page_preview(content: &str) -> PagePreview {
    PagePreview {
        snippet: snippet(content),
        excerpt: excerpt(content),
    }
}

fn snippet(content: &str) -> Option<String> {
    let collapsed = WHITESPACE_RE.replace_all(content, " ");
    let line = collapsed.trim();
    if line.is_empty() {
        return None;
    }
    if line.chars().count() <= SNIPPET_MAX_CHARS {
        return Some(line.to_string());
    }

    let mut cut: String = line.chars().take(SNIPPET_MAX_CHARS).collect();
    cut.truncate(cut.trim_end().len());
    cut.push_str(ELLIPSIS);
    Some(cut)
}

fn excerpt(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| INLINE_WHITESPACE_RE.replace_all(line, " ").trim().to_string())
        .filter(|line| !line.is_empty())
        .take(EXCERPT_MAX_LINES)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{derive_page_preview, EMPTY_PAGE_EXCERPT};

    #[test]
    fn snippet_flattens_lines_and_keeps_markup() {
        let preview = derive_page_preview("# Plan\n\n- **ship**   v1\r\n");
        assert_eq!(preview.snippet.as_deref(), Some("# Plan - **ship** v1"));
    }

    #[test]
    fn long_snippet_is_cut_with_ellipsis() {
        let long = "word ".repeat(30);
        let snippet = derive_page_preview(&long).snippet.unwrap();
        assert!(snippet.ends_with("..."));
        assert_eq!(snippet.chars().count(), 79 + 3);
        assert!(!snippet.contains(" ..."));
    }

    #[test]
    fn excerpt_keeps_first_three_non_blank_lines() {
        let preview = derive_page_preview("one\n\n  two\t\tlines \nthree\nfour");
        assert_eq!(preview.excerpt, vec!["one", "two lines", "three"]);
        assert_eq!(preview.card_text(), "one\ntwo lines\nthree");
    }

    #[test]
    fn blank_content_has_no_snippet_and_placeholder_card() {
        let preview = derive_page_preview("  \n\t\n");
        assert_eq!(preview.snippet, None);
        assert!(preview.excerpt.is_empty());
        assert_eq!(preview.card_text(), EMPTY_PAGE_EXCERPT);
    }
}
