pub const DAY_MENU_HEADING: &str = "🍽️ **TEKUILA - TODAY'S MENU**";
pub const WEEK_MENU_HEADING: &str = "🍽️ **TEKUILA - THIS WEEK'S MENU**";
pub const DAY_ANALYSIS_HEADING: &str = "🍽️ **TEKUILA - TODAY'S MENU WITH ANALYSIS GUIDE**";
pub const WEEK_PLANNING_HEADING: &str = "🍽️ **TEKUILA - THIS WEEK'S MENU WITH PLANNING GUIDE**";

pub const DAY_FETCH_FAILED: &str = "Unable to fetch today's menu.";
pub const WEEK_FETCH_FAILED: &str = "Unable to fetch this week's menu.";
pub const DAY_MENU_EMPTY: &str = "No menu found for today.";
pub const WEEK_MENU_EMPTY: &str = "No menu found for this week.";

pub const SERVER_INSTRUCTIONS: &str = "Tekuila restaurant menus. Use the menu tools to read today's or this \
week's lunch options, and the analysis/planning tools or prompts for guided recommendations.";

pub fn date_context(long_date: &str, iso_date: &str) -> String {
    format!("Current date: {long_date} ({iso_date})")
}

pub fn menu_entry(day: &str, menu: &str) -> String {
    format!("**{day}**\n{menu}\n\n")
}
