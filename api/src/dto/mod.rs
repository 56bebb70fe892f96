//! Request and response bodies of the HTTP API

pub mod auth;
pub mod setting;
pub mod user;

use chrono::{DateTime, Utc};

/// Timestamp layout used in every response body
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub(crate) fn format_date(date: &DateTime<Utc>) -> String {
    date.format(DATE_TIME_FORMAT).to_string()
}

/// Missing timestamps serialize as an empty string
pub(crate) fn format_optional_date(date: Option<&DateTime<Utc>>) -> String {
    date.map(format_date).unwrap_or_default()
}
