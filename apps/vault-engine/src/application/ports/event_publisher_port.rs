//! Event Publisher Port (Driven Port)
//!
//! Interface for publishing domain events to external monitors.

use async_trait::async_trait;

use crate::domain::order_flow::events::VaultEvent;

/// Event publishing error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum EventPublishError {
    /// Connection error.
    #[error("Event publish connection error: {message}")]
    ConnectionError {
        /// Error details.
        message: String,
    },

    /// Publishing failed.
    #[error("Event publish failed: {message}")]
    PublishFailed {
        /// Error details.
        message: String,
    },
}

/// Port for publishing vault events.
#[async_trait]
pub trait EventPublisherPort: Send + Sync {
    /// Publish vault events.
    async fn publish_events(&self, events: Vec<VaultEvent>) -> Result<(), EventPublishError>;

    /// Publish a single vault event.
    async fn publish_event(&self, event: VaultEvent) -> Result<(), EventPublishError> {
        self.publish_events(vec![event]).await
    }
}

/// No-op event publisher for testing.
#[derive(Debug, Clone, Default)]
pub struct NoOpEventPublisher;

#[async_trait]
impl EventPublisherPort for NoOpEventPublisher {
    async fn publish_events(&self, _events: Vec<VaultEvent>) -> Result<(), EventPublishError> {
        Ok(())
    }
}
