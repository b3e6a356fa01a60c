//! Field-level validation helpers shared across entities.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

static USER_ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^user_\d+$").expect("valid pattern"));

/// User ids follow the `user_<digits>` scheme used as document keys
/// in the remote store.
pub fn is_user_id(id: &str) -> bool {
    USER_ID_RE.is_match(id)
}

/// Accepts the ISO-8601 shapes found in persisted records: a plain date,
/// a naive datetime, or a datetime with offset.
pub fn is_iso8601(date: &str) -> bool {
    date.parse::<NaiveDate>().is_ok()
        || date.parse::<NaiveDateTime>().is_ok()
        || DateTime::parse_from_rfc3339(date).is_ok()
}
