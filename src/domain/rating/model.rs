//! Rating entity

use crate::domain::{DomainError, DomainResult};
use crate::shared::validations::{is_iso8601, is_user_id};

/// A star rating left by a user for one charging station.
///
/// Fields are validated at construction and read-only afterwards; ratings
/// are append-only review-log entries and are never edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rating {
    user_id: String,
    station_id: i32,
    date: String,
    value: i32,
    comment: String,
}

impl Rating {
    pub fn new(
        user_id: impl Into<String>,
        station_id: i32,
        date: impl Into<String>,
        value: i32,
        comment: impl Into<String>,
    ) -> DomainResult<Self> {
        let user_id = user_id.into();
        if !is_user_id(&user_id) {
            return Err(DomainError::Validation("Invalid user ID format".into()));
        }
        if !(1..=5).contains(&value) {
            return Err(DomainError::Validation(
                "Rating must be between 1 and 5".into(),
            ));
        }
        let date = date.into();
        if !is_iso8601(&date) {
            return Err(DomainError::Validation(
                "Date must be in ISO 8601 format".into(),
            ));
        }
        Ok(Self {
            user_id,
            station_id,
            date,
            value,
            comment: comment.into(),
        })
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn station_id(&self) -> i32 {
        self.station_id
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }
}
