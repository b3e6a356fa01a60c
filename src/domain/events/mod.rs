//! Domain events
//!
//! Immutable notifications published when aggregate state changes.

pub mod publisher;
pub mod types;

pub use publisher::{EventPublisher, NoopPublisher};
pub use types::{Event, EventMessage, RatingAddedEvent, UserCreatedEvent};
