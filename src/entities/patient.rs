//! Patient model

use crate::core::entity::EntityId;
use crate::impl_entity;
use serde::{Deserialize, Serialize};

/// A patient record. Name and email are free text; no uniqueness or format
/// rule is enforced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    #[serde(default)]
    pub id: Option<EntityId>,
    pub name: String,
    pub email: String,
}

impl_entity!(Patient, "patient", "patients");

impl Patient {
    /// Create an unsaved patient
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
        }
    }
}
