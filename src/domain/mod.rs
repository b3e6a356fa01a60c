pub mod error;
pub mod events;
pub mod ports;
pub mod rating;
pub mod station;
pub mod user;
pub mod value_objects;

// Re-export commonly used types
pub use error::{DomainError, DomainResult};
pub use events::{Event, EventPublisher, NoopPublisher, RatingAddedEvent, UserCreatedEvent};
pub use ports::{DocumentStore, TelemetrySimulator};
pub use rating::Rating;
pub use station::{ChargingStation, RatedChargingStation};
pub use user::User;
pub use value_objects::{Location, PostalCode, RushHours, Status};
