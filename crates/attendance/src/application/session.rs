// Local session state, fed exclusively by the store subscription.
//
// Purpose
// - Hold the read-only cached projection of the remote collection plus the
//   loading phase and the last reported store fault.
//
// Responsibilities
// - Replace the cached collection wholesale on every snapshot. Handlers
//   never write here; the subscription is the only path back into state.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::core::config::AppConfig;
use crate::core::participant::Participant;
use crate::core::ports::{StoreError, StoreEvent, Subscription};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Nothing delivered yet.
    Loading,
    /// At least one snapshot or error has arrived; re-entered on every
    /// later snapshot.
    Ready,
}

#[derive(Debug)]
pub struct Session {
    phase: SessionPhase,
    participants: Vec<Participant>,
    last_store_error: Option<StoreError>,
    total_sign_ins: usize,
}

impl Session {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            phase: SessionPhase::Loading,
            participants: Vec::new(),
            last_store_error: None,
            total_sign_ins: config.total_sign_ins,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn last_store_error(&self) -> Option<&StoreError> {
        self.last_store_error.as_ref()
    }

    pub fn apply(&mut self, event: StoreEvent) {
        match event {
            StoreEvent::Snapshot(participants) => {
                for participant in &participants {
                    if participant.attendance.len() != self.total_sign_ins {
                        tracing::warn!(
                            participant_id = %participant.id,
                            len = participant.attendance.len(),
                            expected = self.total_sign_ins,
                            "snapshot carries a malformed attendance vector"
                        );
                    }
                }
                self.participants = participants;
                self.phase = SessionPhase::Ready;
            }
            StoreEvent::Error(cause) => {
                tracing::warn!(%cause, "participant subscription reported a fault");
                self.last_store_error = Some(cause);
                self.phase = SessionPhase::Ready;
            }
        }
    }

    /// Record a failed write so the shell can show a transient notice. The
    /// cached collection is untouched; there was no optimistic change to
    /// roll back.
    pub fn record_store_error(&mut self, cause: StoreError) {
        self.last_store_error = Some(cause);
    }

    /// Cleared when the operator retries an action, not when a snapshot
    /// happens to arrive.
    pub fn clear_store_error(&mut self) {
        self.last_store_error = None;
    }
}

/// Apply every event the subscription delivers until the store side goes
/// away. Owns the subscription, so the listener is released exactly once,
/// when this future is dropped or runs out.
pub async fn drive(mut subscription: Subscription, session: Arc<RwLock<Session>>) {
    while let Some(event) = subscription.next().await {
        session.write().await.apply(event);
    }
}
