//! Real-time notification plumbing for UI subscribers.

pub mod event_bus;

pub use event_bus::{create_event_bus, EventBus, EventSubscriber, SharedEventBus};
