//! Invoice service

use crate::core::entity::{Entity, EntityId};
use crate::core::store::FactureRepository;
use crate::entities::Facture;
use anyhow::Result;
use std::sync::Arc;

/// CRUD operations over invoices
#[derive(Clone)]
pub struct FactureService {
    repository: Arc<dyn FactureRepository>,
}

impl FactureService {
    /// Create a service over the given store handle
    pub fn new(repository: Arc<dyn FactureRepository>) -> Self {
        Self { repository }
    }

    /// Persist a new invoice and return what the store kept
    ///
    /// Any id on `facture` is dropped: creation always inserts, and the id
    /// comes from the store.
    pub async fn create_facture(&self, facture: Facture) -> Result<Facture> {
        if let Some(id) = facture.id() {
            tracing::debug!(id, "ignoring client-supplied id on create");
        }

        let saved = self
            .repository
            .save(Facture { id: None, ..facture })
            .await?;
        tracing::info!(id = ?saved.id(), patient_id = saved.patient_id, "facture created");
        Ok(saved)
    }

    /// Every stored invoice, in store order
    pub async fn get_all_factures(&self) -> Result<Vec<Facture>> {
        self.repository.find_all().await
    }

    pub async fn get_facture_by_id(&self, id: EntityId) -> Result<Option<Facture>> {
        tracing::debug!(id, "fetching facture");
        self.repository.find_by_id(id).await
    }

    pub async fn get_factures_by_patient_id(&self, patient_id: EntityId) -> Result<Vec<Facture>> {
        tracing::debug!(patient_id, "fetching factures for patient");
        self.repository.find_by_patient_id(patient_id).await
    }

    /// Replace the invoice stored under `id`
    ///
    /// Returns `None` without writing when `id` is unknown. The lookup id
    /// wins over any id carried by `facture`.
    pub async fn update_facture(&self, id: EntityId, facture: Facture) -> Result<Option<Facture>> {
        if self.repository.find_by_id(id).await?.is_none() {
            tracing::warn!(id, "update of unknown facture ignored");
            return Ok(None);
        }

        let saved = self.repository.save(facture.with_id(id)).await?;
        tracing::info!(id, "facture updated");
        Ok(Some(saved))
    }

    /// Delete the invoice stored under `id`
    ///
    /// Returns `false` without calling delete when `id` is unknown.
    pub async fn delete_facture(&self, id: EntityId) -> Result<bool> {
        if self.repository.find_by_id(id).await?.is_none() {
            tracing::warn!(id, "delete of unknown facture ignored");
            return Ok(false);
        }

        self.repository.delete_by_id(id).await?;
        tracing::info!(id, "facture deleted");
        Ok(true)
    }
}
