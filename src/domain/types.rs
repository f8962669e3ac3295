//! # Domain Types
//!
//! Menu data extracted from the restaurant feeds, and the fixed feed locations.

/// Feed of the current day.
pub const CURRENT_DAY_URL: &str =
    "https://www.compass-group.fi/menuapi/feed/rss/current-day?costNumber=0605&language=fi";

/// Feed of the current week.
pub const CURRENT_WEEK_URL: &str =
    "https://www.compass-group.fi/menuapi/feed/rss/current-week?costNumber=0605&language=fi";

/// A single `(day, menu)` pair taken from one feed item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    /// Upstream label, e.g. a weekday name or a date string.
    pub day: String,
    /// Cleaned menu text.
    pub menu: String,
}

impl MenuEntry {
    pub fn new(day: impl Into<String>, menu: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            menu: menu.into(),
        }
    }
}

/// Which of the two feeds to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedKind {
    Day,
    Week,
}

impl FeedKind {
    pub fn url(&self) -> &'static str {
        match self {
            FeedKind::Day => CURRENT_DAY_URL,
            FeedKind::Week => CURRENT_WEEK_URL,
        }
    }
}
