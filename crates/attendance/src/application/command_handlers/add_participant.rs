use std::sync::Arc;

use crate::application::errors::{ActionError, ValidationError};
use crate::core::config::AppConfig;
use crate::core::participant::{NewParticipant, Participant, blank_attendance};
use crate::core::ports::ParticipantStore;

/// Validates a new participant against the current snapshot, then issues
/// exactly one create call. Local state is never touched; the next snapshot
/// carries the new record back.
pub struct AddParticipantHandler<TStore>
where
    TStore: ParticipantStore + Send + Sync + 'static,
{
    config: AppConfig,
    store: Arc<TStore>,
}

impl<TStore> AddParticipantHandler<TStore>
where
    TStore: ParticipantStore + Send + Sync + 'static,
{
    pub fn new(config: AppConfig, store: Arc<TStore>) -> Self {
        Self { config, store }
    }

    pub async fn handle(
        &self,
        name: &str,
        current: &[Participant],
    ) -> Result<String, ActionError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if current.len() >= self.config.max_participants {
            return Err(ValidationError::CapacityExceeded {
                max: self.config.max_participants,
            }
            .into());
        }
        let needle = trimmed.to_lowercase();
        if current
            .iter()
            .any(|participant| participant.name.trim().to_lowercase() == needle)
        {
            return Err(ValidationError::DuplicateName {
                name: trimmed.to_string(),
            }
            .into());
        }

        let id = self
            .store
            .create(NewParticipant {
                name: trimmed.to_string(),
                attendance: blank_attendance(self.config.total_sign_ins),
            })
            .await?;
        Ok(id)
    }
}
