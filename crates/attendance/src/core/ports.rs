// Ports define what the core needs from the outside world, without implementing it.
//
// Purpose
// - Describe the remote participant store as a trait (subscribe plus CRUD).
//
// Responsibilities
// - Keep the core independent of any concrete document store by coding
//   against traits.
//
// Boundaries
// - No concrete input or output here. Adapters implement these traits in the
//   adapters layer.
//
// Testing guidance
// - Provide in memory implementations for tests and local development.

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::mpsc;

use crate::core::participant::{NewParticipant, Participant};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("participant not found: {0}")]
    NotFound(String),

    #[error("backend error: {0}")]
    Backend(String),
}

/// One delivery on a subscription: the full collection after a change, or a
/// fault reported by the store.
#[derive(Debug, Clone)]
pub enum StoreEvent {
    /// Full current collection, ordered by name ascending. Replaces local
    /// state wholesale.
    Snapshot(Vec<Participant>),
    Error(StoreError),
}

/// A live listener on the participant collection. Dropping it unsubscribes;
/// the release happens exactly once, when the owning scope ends.
pub struct Subscription {
    receiver: mpsc::UnboundedReceiver<StoreEvent>,
}

impl Subscription {
    pub fn new(receiver: mpsc::UnboundedReceiver<StoreEvent>) -> Self {
        Self { receiver }
    }

    /// Next event, or `None` once the store side has gone away.
    pub async fn next(&mut self) -> Option<StoreEvent> {
        self.receiver.recv().await
    }
}

#[async_trait]
pub trait ParticipantStore: Send + Sync {
    /// Start listening. The current collection is delivered immediately as
    /// the first snapshot; every subsequent change delivers a fresh one.
    async fn subscribe(&self) -> Result<Subscription, StoreError>;

    /// Insert a new record. The store assigns and returns the id.
    async fn create(&self, record: NewParticipant) -> Result<String, StoreError>;

    /// Replace the attendance field only, never the whole record.
    async fn update_attendance(&self, id: &str, attendance: &[bool]) -> Result<(), StoreError>;

    /// Remove a record. Deleting an absent id is not an error; the store
    /// decides.
    async fn delete(&self, id: &str) -> Result<(), StoreError>;
}
