//! # Charging Portal Core
//!
//! Domain core for a municipal EV charging portal: residents browse
//! charging stations, see simulated occupancy data and leave star ratings.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Entities, value objects, aggregates, events, repository traits
//! - **application**: Business logic services composing repository operations
//! - **infrastructure**: External concerns (document store, CSV seed data, crypto)
//! - **notifications**: Broadcast event bus for domain events
//!
//! The web/UI layer lives outside this crate and consumes the service and
//! repository surfaces re-exported below.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod notifications;
pub mod shared;

pub use config::Config;

// Re-export the service layer
pub use application::services::{ChargingStationService, UserService};

// Re-export commonly used domain types
pub use domain::{
    ChargingStation, DomainError, DomainResult, Location, PostalCode, RatedChargingStation,
    Rating, RushHours, Status, User,
};

// Re-export notifications
pub use notifications::{create_event_bus, EventBus, SharedEventBus};
