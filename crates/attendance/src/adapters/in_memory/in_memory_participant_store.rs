// In memory implementation of the ParticipantStore port.
//
// Purpose
// - Support handler tests and local development without a remote document
//   store.
//
// Responsibilities
// - Store participant records in memory keyed by id.
// - Push a fresh name-ordered snapshot to every live subscriber after each
//   successful mutation. Closed subscriptions are pruned on publish.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::{RwLock, mpsc};
use uuid::Uuid;

use crate::core::participant::{NewParticipant, Participant};
use crate::core::ports::{ParticipantStore, StoreError, StoreEvent, Subscription};

#[derive(Default)]
pub struct InMemoryParticipantStore {
    records: RwLock<HashMap<String, Participant>>,
    subscribers: RwLock<Vec<mpsc::UnboundedSender<StoreEvent>>>,
    is_offline: bool,
}

impl InMemoryParticipantStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn offline_error() -> StoreError {
        StoreError::Backend("participant store offline".to_string())
    }

    async fn snapshot(&self) -> Vec<Participant> {
        let guard = self.records.read().await;
        let mut collection: Vec<Participant> = guard.values().cloned().collect();
        collection.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        collection
    }

    async fn publish(&self) {
        let snapshot = self.snapshot().await;
        let mut subscribers = self.subscribers.write().await;
        subscribers.retain(|sender| sender.send(StoreEvent::Snapshot(snapshot.clone())).is_ok());
    }
}

#[async_trait]
impl ParticipantStore for InMemoryParticipantStore {
    async fn subscribe(&self) -> Result<Subscription, StoreError> {
        let (sender, receiver) = mpsc::unbounded_channel();
        if self.is_offline {
            // Fault is reported through the subscription, like a remote
            // listener whose first callback is an error.
            let _ = sender.send(StoreEvent::Error(Self::offline_error()));
        } else {
            let _ = sender.send(StoreEvent::Snapshot(self.snapshot().await));
            self.subscribers.write().await.push(sender);
        }
        Ok(Subscription::new(receiver))
    }

    async fn create(&self, record: NewParticipant) -> Result<String, StoreError> {
        if self.is_offline {
            return Err(Self::offline_error());
        }
        let id = Uuid::now_v7().to_string();
        let participant = Participant {
            id: id.clone(),
            name: record.name,
            attendance: record.attendance,
        };
        self.records.write().await.insert(id.clone(), participant);
        self.publish().await;
        Ok(id)
    }

    async fn update_attendance(&self, id: &str, attendance: &[bool]) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(Self::offline_error());
        }
        {
            let mut guard = self.records.write().await;
            let record = guard
                .get_mut(id)
                .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
            record.attendance = attendance.to_vec();
        }
        self.publish().await;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(Self::offline_error());
        }
        let removed = self.records.write().await.remove(id).is_some();
        if removed {
            self.publish().await;
        }
        Ok(())
    }
}
