//! Simulated station telemetry
//!
//! The portal has no live occupancy feed, so status and rush-hour series
//! are drawn from random distributions behind the `TelemetrySimulator`
//! port. Swapping in a real feed is a wiring change only.

use crate::domain::ports::TelemetrySimulator;
use crate::domain::value_objects::{RushHours, Status};
use crate::domain::DomainResult;

/// Draws a uniform status and a clamped-normal occupancy series.
#[derive(Debug, Clone)]
pub struct RandomTelemetry {
    pub mean: f64,
    pub std_dev: f64,
    pub min_val: f64,
    pub max_val: f64,
}

impl Default for RandomTelemetry {
    fn default() -> Self {
        Self {
            mean: 2.5,
            std_dev: 1.0,
            min_val: 0.0,
            max_val: 5.0,
        }
    }
}

impl TelemetrySimulator for RandomTelemetry {
    fn station_status(&self) -> Status {
        Status::random()
    }

    fn rush_hours(&self, time_slots: &[&str]) -> DomainResult<RushHours> {
        RushHours::generate_random(time_slots, self.mean, self.std_dev, self.min_val, self.max_val)
    }
}
