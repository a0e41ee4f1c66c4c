use std::sync::Arc;

use crate::application::errors::{ActionError, ValidationError};
use crate::core::config::AppConfig;
use crate::core::participant::Participant;
use crate::core::ports::ParticipantStore;

/// What the handler did with the toggle. Submission says nothing about
/// visibility: the flipped slot only shows up locally once the next snapshot
/// arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Submitted,
    /// The id resolved to no current participant. No write is issued and no
    /// error is raised; a stale row in another session behaves the same way.
    UnknownParticipant,
}

pub struct ToggleAttendanceHandler<TStore>
where
    TStore: ParticipantStore + Send + Sync + 'static,
{
    config: AppConfig,
    store: Arc<TStore>,
}

impl<TStore> ToggleAttendanceHandler<TStore>
where
    TStore: ParticipantStore + Send + Sync + 'static,
{
    pub fn new(config: AppConfig, store: Arc<TStore>) -> Self {
        Self { config, store }
    }

    pub async fn handle(
        &self,
        participant_id: &str,
        sign_in_index: usize,
        current: &[Participant],
    ) -> Result<ToggleOutcome, ActionError> {
        let total = self.config.total_sign_ins;
        if sign_in_index >= total {
            return Err(ValidationError::SignInOutOfRange {
                index: sign_in_index,
                total,
            }
            .into());
        }

        let Some(participant) = current.iter().find(|p| p.id == participant_id) else {
            tracing::debug!(participant_id, "toggle for an unknown participant ignored");
            return Ok(ToggleOutcome::UnknownParticipant);
        };

        let mut attendance = participant.attendance.clone();
        if attendance.len() < total {
            // Malformed remote record; pad so the flip lands on a real slot.
            attendance.resize(total, false);
        }
        attendance[sign_in_index] = !attendance[sign_in_index];

        self.store
            .update_attendance(participant_id, &attendance)
            .await?;
        Ok(ToggleOutcome::Submitted)
    }
}
