//! Update Config Use Case
//!
//! Controller-initiated configuration changes, validated eagerly and
//! immediately visible to subsequent operations.

use std::sync::Arc;

use super::publish_drained;
use crate::application::ports::EventPublisherPort;
use crate::domain::order_flow::value_objects::ConfigChange;
use crate::domain::order_flow::Vault;
use crate::domain::shared::{AccountId, Timestamp, VaultError};

/// Use case for vault configuration changes.
pub struct UpdateConfigUseCase<E>
where
    E: EventPublisherPort,
{
    publisher: Arc<E>,
}

impl<E> UpdateConfigUseCase<E>
where
    E: EventPublisherPort,
{
    /// Create a new `UpdateConfigUseCase`.
    pub const fn new(publisher: Arc<E>) -> Self {
        Self { publisher }
    }

    /// Apply a single-field configuration change.
    ///
    /// # Errors
    ///
    /// [`VaultError::Unauthorized`] for non-controllers or
    /// [`VaultError::ConfigInvalid`] from field validation.
    pub async fn apply(
        &self,
        vault: &mut Vault,
        caller: &AccountId,
        change: ConfigChange,
    ) -> Result<(), VaultError> {
        let field = change.field();
        vault.update_config(caller, change, Timestamp::now())?;
        tracing::info!(field = %field, "vault config updated");

        publish_drained(vault, self.publisher.as_ref()).await;
        Ok(())
    }
}
