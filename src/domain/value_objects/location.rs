//! Geographic location value object

use crate::domain::{DomainError, DomainResult};

/// Bounding box of the serviceable region (greater Berlin area).
pub const MIN_LATITUDE: f64 = 52.3380;
pub const MAX_LATITUDE: f64 = 52.6755;
pub const MIN_LONGITUDE: f64 = 13.0880;
pub const MAX_LONGITUDE: f64 = 13.7612;

/// Latitude/longitude pair. Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    latitude: f64,
    longitude: f64,
}

impl Location {
    /// Create a location from finite coordinates.
    pub fn new(latitude: f64, longitude: f64) -> DomainResult<Self> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(DomainError::Validation(
                "Latitude and longitude must be numeric values".into(),
            ));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Create a location that must lie inside the serviceable region.
    pub fn bounded(latitude: f64, longitude: f64) -> DomainResult<Self> {
        let location = Self::new(latitude, longitude)?;
        if !location.in_service_area() {
            return Err(DomainError::Validation(format!(
                "Coordinates ({}, {}) are outside the serviceable region",
                latitude, longitude
            )));
        }
        Ok(location)
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Whether the location falls inside the serviceable bounding box.
    pub fn in_service_area(&self) -> bool {
        (MIN_LATITUDE..=MAX_LATITUDE).contains(&self.latitude)
            && (MIN_LONGITUDE..=MAX_LONGITUDE).contains(&self.longitude)
    }
}
