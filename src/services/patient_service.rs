//! Patient service

use crate::core::entity::{Entity, EntityId};
use crate::core::store::PatientRepository;
use crate::entities::Patient;
use anyhow::Result;
use std::sync::Arc;

/// CRUD operations over patients
#[derive(Clone)]
pub struct PatientService {
    repository: Arc<dyn PatientRepository>,
}

impl PatientService {
    /// Create a service over the given store handle
    pub fn new(repository: Arc<dyn PatientRepository>) -> Self {
        Self { repository }
    }

    /// Persist a new patient and return what the store kept
    ///
    /// Any id on `patient` is dropped so creation never overwrites an
    /// existing record.
    pub async fn create_patient(&self, patient: Patient) -> Result<Patient> {
        if let Some(id) = patient.id() {
            tracing::debug!(id, "ignoring client-supplied id on create");
        }

        let saved = self
            .repository
            .save(Patient { id: None, ..patient })
            .await?;
        tracing::info!(id = ?saved.id(), "patient created");
        Ok(saved)
    }

    /// Every stored patient, in store order
    pub async fn get_all_patients(&self) -> Result<Vec<Patient>> {
        self.repository.find_all().await
    }

    /// Look up one patient; absence is `None`, not an error
    pub async fn get_patient_by_id(&self, id: EntityId) -> Result<Option<Patient>> {
        tracing::debug!(id, "fetching patient");
        self.repository.find_by_id(id).await
    }

    /// Replace the patient stored under `id`; `None` if there is none.
    pub async fn update_patient(&self, id: EntityId, patient: Patient) -> Result<Option<Patient>> {
        if self.repository.find_by_id(id).await?.is_none() {
            tracing::warn!(id, "update of unknown patient ignored");
            return Ok(None);
        }

        let saved = self.repository.save(patient.with_id(id)).await?;
        tracing::info!(id, "patient updated");
        Ok(Some(saved))
    }

    /// Delete the patient stored under `id`; `false` if there is none.
    pub async fn delete_patient(&self, id: EntityId) -> Result<bool> {
        if self.repository.find_by_id(id).await?.is_none() {
            tracing::warn!(id, "delete of unknown patient ignored");
            return Ok(false);
        }

        self.repository.delete_by_id(id).await?;
        tracing::info!(id, "patient deleted");
        Ok(true)
    }
}
