//! Charging station entity and rated aggregate

use std::fmt;
use std::sync::Arc;

use crate::domain::events::{Event, EventPublisher, NoopPublisher, RatingAddedEvent};
use crate::domain::rating::Rating;
use crate::domain::value_objects::{Location, PostalCode, RushHours, Status};
use crate::domain::{DomainError, DomainResult};

/// Base station identity: who runs it and how much power it delivers.
#[derive(Debug, Clone, PartialEq)]
pub struct ChargingStation {
    station_id: i32,
    name: String,
    operator: String,
    power: f64,
}

impl ChargingStation {
    pub fn new(
        station_id: i32,
        name: impl Into<String>,
        operator: impl Into<String>,
        power: f64,
    ) -> DomainResult<Self> {
        if !power.is_finite() {
            return Err(DomainError::Validation(
                "power must be a finite number".into(),
            ));
        }
        Ok(Self {
            station_id,
            name: name.into(),
            operator: operator.into(),
            power,
        })
    }

    pub fn station_id(&self) -> i32 {
        self.station_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn operator(&self) -> &str {
        &self.operator
    }

    /// Rated power in kW.
    pub fn power(&self) -> f64 {
        self.power
    }
}

/// Aggregate root: a charging station with its location, simulated live
/// data and an owned, insertion-ordered review log.
///
/// Ratings are append-only; there is no removal or update path. Every
/// successful [`add_rating`](Self::add_rating) publishes exactly one
/// [`RatingAddedEvent`], synchronously, after the append.
#[derive(Clone)]
pub struct RatedChargingStation {
    station: ChargingStation,
    location: Location,
    postal_code: PostalCode,
    status: Status,
    rush_hour_data: RushHours,
    ratings: Vec<Rating>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl RatedChargingStation {
    /// Build the aggregate with a no-op publisher.
    pub fn new(
        station: ChargingStation,
        location: Location,
        postal_code: PostalCode,
        status: Status,
        rush_hour_data: RushHours,
    ) -> Self {
        Self::with_publisher(
            station,
            location,
            postal_code,
            status,
            rush_hour_data,
            Arc::new(NoopPublisher),
        )
    }

    /// Build the aggregate with an injected event publisher.
    pub fn with_publisher(
        station: ChargingStation,
        location: Location,
        postal_code: PostalCode,
        status: Status,
        rush_hour_data: RushHours,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            station,
            location,
            postal_code,
            status,
            rush_hour_data,
            ratings: Vec::new(),
            event_publisher,
        }
    }

    pub fn station_id(&self) -> i32 {
        self.station.station_id()
    }

    pub fn name(&self) -> &str {
        self.station.name()
    }

    pub fn operator(&self) -> &str {
        self.station.operator()
    }

    pub fn power(&self) -> f64 {
        self.station.power()
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn postal_code(&self) -> &PostalCode {
        &self.postal_code
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn rush_hour_data(&self) -> &RushHours {
        &self.rush_hour_data
    }

    /// Review log, in insertion order.
    pub fn ratings(&self) -> &[Rating] {
        &self.ratings
    }

    /// Append a rating and publish a [`RatingAddedEvent`].
    pub fn add_rating(&mut self, rating: Rating) {
        self.ratings.push(rating.clone());
        self.event_publisher
            .publish(Event::RatingAdded(RatingAddedEvent::new(rating)));
    }

    /// Arithmetic mean of all rating values, or `0.0` for an unrated
    /// station. The zero is definitional, not an error.
    pub fn average_rating(&self) -> f64 {
        if self.ratings.is_empty() {
            return 0.0;
        }
        let sum: i32 = self.ratings.iter().map(|r| r.value()).sum();
        sum as f64 / self.ratings.len() as f64
    }
}

impl fmt::Debug for RatedChargingStation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RatedChargingStation")
            .field("station", &self.station)
            .field("location", &self.location)
            .field("postal_code", &self.postal_code)
            .field("status", &self.status)
            .field("rush_hour_data", &self.rush_hour_data)
            .field("ratings", &self.ratings)
            .finish_non_exhaustive()
    }
}
