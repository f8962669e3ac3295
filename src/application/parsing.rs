//! # Feed Parsing
//!
//! Turns a raw RSS document into ordered `MenuEntry` values and normalizes the
//! HTML-ish description bodies into plain text.
//!
//! Description cleanup is deliberately naive: tags are removed by bracket-span
//! matching, not by walking an HTML tree, so unbalanced brackets can garble text.
//! Only the literal `&amp;` sequence is unescaped; other entities such as `&lt;`
//! are left as-is.

use crate::domain::types::MenuEntry;
use crate::strings::logs;
use regex::Regex;
use std::sync::LazyLock;

static LINE_BREAK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)&lt;br\s*/?&gt;|<br\s*/?>").expect("line break regex is valid")
});
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("tag regex is valid"));
static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace regex is valid"));

/// Parse an RSS document into menu entries, in document order.
///
/// Returns an empty list (and logs) if the document cannot be parsed.
/// Items without both a `title` and a `description` child are skipped.
pub fn parse_menu_items(rss_content: &str) -> Vec<MenuEntry> {
    // RSS 0.91 feeds commonly carry a DOCTYPE, which roxmltree refuses by default.
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..Default::default()
    };
    let doc = match roxmltree::Document::parse_with_options(rss_content, options) {
        Ok(doc) => doc,
        Err(e) => {
            tracing::warn!("{}", logs::parse_failed(&e.to_string()));
            return Vec::new();
        }
    };

    doc.descendants()
        .filter(|node| node.has_tag_name("item"))
        .filter_map(|item| {
            let title = item.children().find(|c| c.has_tag_name("title"))?;
            let description = item.children().find(|c| c.has_tag_name("description"))?;

            Some(MenuEntry::new(
                title.text().unwrap_or_default(),
                clean_description(description.text().unwrap_or_default()),
            ))
        })
        .collect()
}

/// Normalize a description body to single-line plain text.
///
/// Line breaks become newlines first, then `&amp;` is unescaped, remaining tags are
/// stripped, and finally all whitespace runs (the new newlines included) collapse
/// to one space.
pub fn clean_description(raw: &str) -> String {
    let text = LINE_BREAK_RE.replace_all(raw, "\n");
    let text = text.replace("&amp;", "&");
    let text = TAG_RE.replace_all(&text, "");
    WHITESPACE_RE.replace_all(&text, " ").trim().to_string()
}
