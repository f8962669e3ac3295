use crate::strings::messages;
use chrono::{DateTime, Local, TimeZone};

/// Human-readable date line for the host's current local time.
pub fn current_date_context() -> String {
    date_context_at(&Local::now())
}

pub fn date_context_at<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    messages::date_context(
        &now.format("%A, %B %d, %Y").to_string(),
        &now.format("%Y-%m-%d").to_string(),
    )
}
