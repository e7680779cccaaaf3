//! Recording event publisher for testing.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::application::ports::{EventPublishError, EventPublisherPort};
use crate::domain::order_flow::events::VaultEvent;

/// Event publisher that records everything it is handed.
#[derive(Debug, Default)]
pub struct RecordingEventPublisher {
    events: RwLock<Vec<VaultEvent>>,
}

impl RecordingEventPublisher {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All events published so far, in order.
    #[must_use]
    pub fn events(&self) -> Vec<VaultEvent> {
        self.events.read().expect("events lock").clone()
    }

    /// Event type names published so far, in order.
    #[must_use]
    pub fn event_types(&self) -> Vec<&'static str> {
        self.events
            .read()
            .expect("events lock")
            .iter()
            .map(VaultEvent::event_type)
            .collect()
    }

    /// Drop all recorded events.
    pub fn clear(&self) {
        self.events.write().expect("events lock").clear();
    }
}

#[async_trait]
impl EventPublisherPort for RecordingEventPublisher {
    async fn publish_events(&self, events: Vec<VaultEvent>) -> Result<(), EventPublishError> {
        self.events.write().expect("events lock").extend(events);
        Ok(())
    }
}
