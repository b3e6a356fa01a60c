//! Application services
//!
//! Use-case orchestration over the repository interfaces. The web layer
//! should be a thin wrapper that delegates here.

pub mod charging_station;
pub mod user;

pub use charging_station::ChargingStationService;
pub use user::UserService;
