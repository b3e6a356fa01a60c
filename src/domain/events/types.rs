//! Domain event types
//!
//! Payloads are fully constructed entities, so a delivered event always
//! carries a valid object.

use chrono::{DateTime, Utc};

use crate::domain::rating::Rating;
use crate::domain::user::User;

/// Event types published by the domain
#[derive(Debug, Clone)]
pub enum Event {
    RatingAdded(RatingAddedEvent),
    UserCreated(UserCreatedEvent),
}

impl Event {
    pub fn event_type(&self) -> &'static str {
        match self {
            Event::RatingAdded(_) => "rating_added",
            Event::UserCreated(_) => "user_created",
        }
    }
}

/// A rating was appended to a station's review log.
#[derive(Debug, Clone)]
pub struct RatingAddedEvent {
    pub rating: Rating,
}

impl RatingAddedEvent {
    pub fn new(rating: Rating) -> Self {
        Self { rating }
    }
}

/// A new portal account was created.
#[derive(Debug, Clone)]
pub struct UserCreatedEvent {
    pub user: User,
}

impl UserCreatedEvent {
    pub fn new(user: User) -> Self {
        Self { user }
    }
}

/// Wrapper for sending events with metadata
#[derive(Debug, Clone)]
pub struct EventMessage {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub event: Event,
}

impl EventMessage {
    pub fn new(event: Event) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            event,
        }
    }
}
