//! Value objects
//!
//! Immutable, self-validating primitives. Construction is the only mutator;
//! invalid input fails construction and no partial object is observable.

pub mod location;
pub mod postal_code;
pub mod rush_hours;
pub mod status;

pub use location::Location;
pub use postal_code::PostalCode;
pub use rush_hours::{RushHours, DEFAULT_TIME_SLOTS};
pub use status::Status;
