//! Charging station aggregate and repository interfaces

pub mod model;
pub mod repository;

pub use model::{ChargingStation, RatedChargingStation};
pub use repository::{StationRatingRepositoryInterface, StationRepositoryInterface};
