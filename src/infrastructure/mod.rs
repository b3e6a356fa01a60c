//! Infrastructure layer
//!
//! Concrete implementations of the domain's outbound ports and
//! repository interfaces.

pub mod crypto;
pub mod repositories;
pub mod simulation;
pub mod storage;

pub use repositories::{
    CsvStationRepository, DocumentRatingRepository, DocumentUserRepository,
    StationRatingRepository,
};
pub use simulation::RandomTelemetry;
pub use storage::{MemoryDocumentStore, RestDocumentStore};
