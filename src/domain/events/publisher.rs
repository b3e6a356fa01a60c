//! Event publisher capability
//!
//! Aggregates and repositories publish through this trait rather than a
//! bare callback, so the wiring layer can plug in the broadcast bus, a
//! test capture, or nothing at all.

use std::sync::Arc;

use super::types::Event;

/// Synchronous publish capability injected into aggregates.
pub trait EventPublisher: Send + Sync {
    fn publish(&self, event: Event);
}

/// Default publisher that drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopPublisher;

impl EventPublisher for NoopPublisher {
    fn publish(&self, _event: Event) {}
}

/// Shared publisher handle
pub type SharedPublisher = Arc<dyn EventPublisher>;

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Mutex;

    use super::*;

    /// Captures published events for assertions.
    #[derive(Default)]
    pub struct CapturePublisher {
        pub events: Mutex<Vec<Event>>,
    }

    impl EventPublisher for CapturePublisher {
        fn publish(&self, event: Event) {
            self.events.lock().expect("publisher lock").push(event);
        }
    }

    impl CapturePublisher {
        pub fn count(&self) -> usize {
            self.events.lock().expect("publisher lock").len()
        }
    }
}
