// Shared test fixtures for participant records.

use crate::core::participant::Participant;

pub struct ParticipantBuilder {
    inner: Participant,
}

impl Default for ParticipantBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ParticipantBuilder {
    pub fn new() -> Self {
        Self {
            inner: Participant {
                id: "participant-fixed-0001".to_string(),
                name: "Amy".to_string(),
                attendance: vec![false; 6],
            },
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn attendance(mut self, v: Vec<bool>) -> Self {
        self.inner.attendance = v;
        self
    }

    pub fn build(self) -> Participant {
        self.inner
    }
}

/// A roster of distinct participants with blank attendance, in the given
/// order.
pub fn make_roster(names: &[&str]) -> Vec<Participant> {
    names
        .iter()
        .enumerate()
        .map(|(index, name)| {
            ParticipantBuilder::new()
                .id(format!("participant-fixed-{index:04}"))
                .name(*name)
                .build()
        })
        .collect()
}
