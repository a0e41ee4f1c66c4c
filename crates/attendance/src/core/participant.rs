// Participant is the canonical record held by the document store.
//
// Purpose
// - One participant identity plus one boolean slot per sign-in event.
//
// Boundaries
// - This file must not perform input or output.
// - Keep it framework-free.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Opaque identifier assigned by the store at creation. Immutable.
    pub id: String,
    pub name: String,
    /// Slot `i` means "attended sign-in `i`". Length is the configured
    /// total number of sign-ins; any other length is a malformed remote
    /// record.
    pub attendance: Vec<bool>,
}

impl Participant {
    pub fn has_perfect_attendance(&self) -> bool {
        self.attendance.iter().all(|&attended| attended)
    }
}

/// The create payload: a participant record before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewParticipant {
    pub name: String,
    pub attendance: Vec<bool>,
}

pub fn blank_attendance(total_sign_ins: usize) -> Vec<bool> {
    vec![false; total_sign_ins]
}
