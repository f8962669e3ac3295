//! # Menu Service
//!
//! Fetches a feed, parses it, and renders the text block returned by the menu tools.
//! Every outcome is a displayable string: fetch and parse failures become sentinels.

use std::sync::Arc;

use crate::application::date::current_date_context;
use crate::application::parsing::parse_menu_items;
use crate::domain::traits::FeedSource;
use crate::domain::types::{FeedKind, MenuEntry};
use crate::strings::{messages, prompts};

/// The four ways menu data is presented to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuView {
    Day,
    Week,
    DayAnalysis,
    WeekPlanning,
}

impl MenuView {
    pub fn feed(&self) -> FeedKind {
        match self {
            MenuView::Day | MenuView::DayAnalysis => FeedKind::Day,
            MenuView::Week | MenuView::WeekPlanning => FeedKind::Week,
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            MenuView::Day => messages::DAY_MENU_HEADING,
            MenuView::Week => messages::WEEK_MENU_HEADING,
            MenuView::DayAnalysis => messages::DAY_ANALYSIS_HEADING,
            MenuView::WeekPlanning => messages::WEEK_PLANNING_HEADING,
        }
    }

    pub fn fetch_failed(&self) -> &'static str {
        match self.feed() {
            FeedKind::Day => messages::DAY_FETCH_FAILED,
            FeedKind::Week => messages::WEEK_FETCH_FAILED,
        }
    }

    pub fn empty(&self) -> &'static str {
        match self.feed() {
            FeedKind::Day => messages::DAY_MENU_EMPTY,
            FeedKind::Week => messages::WEEK_MENU_EMPTY,
        }
    }

    pub fn guidance(&self) -> Option<String> {
        match self {
            MenuView::Day | MenuView::Week => None,
            MenuView::DayAnalysis => Some(prompts::daily_analysis_instructions()),
            MenuView::WeekPlanning => Some(prompts::weekly_planning_instructions()),
        }
    }
}

/// Lay out parsed entries under the view heading and date line, followed by any guidance.
pub fn render_menu(view: MenuView, entries: &[MenuEntry], date_context: &str) -> String {
    let mut result = format!("{}\n{}\n\n", view.heading(), date_context);

    for entry in entries {
        result.push_str(&messages::menu_entry(&entry.day, &entry.menu));
    }

    if let Some(guidance) = view.guidance() {
        result.push_str(&guidance);
    }

    result
}

pub struct MenuService {
    source: Arc<dyn FeedSource>,
}

impl MenuService {
    pub fn new(source: Arc<dyn FeedSource>) -> Self {
        Self { source }
    }

    /// Entries for one feed, or `None` if the feed could not be fetched.
    /// An empty body counts as nothing fetched.
    pub async fn entries(&self, kind: FeedKind) -> Option<Vec<MenuEntry>> {
        let content = self.source.fetch(kind.url()).await?;
        if content.is_empty() {
            return None;
        }
        Some(parse_menu_items(&content))
    }

    /// Full tool output for `view`.
    pub async fn render(&self, view: MenuView) -> String {
        let Some(entries) = self.entries(view.feed()).await else {
            return view.fetch_failed().to_string();
        };

        if entries.is_empty() {
            return view.empty().to_string();
        }

        render_menu(view, &entries, &current_date_context())
    }
}
