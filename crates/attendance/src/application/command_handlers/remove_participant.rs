use std::sync::Arc;

use crate::application::errors::ActionError;
use crate::core::ports::ParticipantStore;

/// Issues one delete call. There is no existence precondition: the store
/// decides, and deleting an already-removed id succeeds.
pub struct RemoveParticipantHandler<TStore>
where
    TStore: ParticipantStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> RemoveParticipantHandler<TStore>
where
    TStore: ParticipantStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, participant_id: &str) -> Result<(), ActionError> {
        self.store.delete(participant_id).await?;
        Ok(())
    }
}
