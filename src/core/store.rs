//! Store traits: the persistence capabilities services depend on
//!
//! Services are written against these traits only. The backing store
//! (in-memory, PostgreSQL, ...) is chosen at startup and injected as an
//! `Arc<dyn ...>` handle.

use crate::core::entity::{Entity, EntityId};
use crate::entities::{Facture, Patient};
use anyhow::Result;
use async_trait::async_trait;

/// Generic CRUD capabilities for a single entity kind
///
/// Implementations are responsible for any concurrency safety; callers
/// never hold locks across calls.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Insert or fully replace an entity
    ///
    /// An entity without an id is inserted and receives a fresh id. An entity
    /// carrying an id replaces whatever is stored under it.
    async fn save(&self, entity: T) -> Result<T>;

    /// List every stored entity in store order
    async fn find_all(&self) -> Result<Vec<T>>;

    /// Look up a single entity
    async fn find_by_id(&self, id: EntityId) -> Result<Option<T>>;

    /// Remove an entity by id
    ///
    /// Removing an unknown id is not an error.
    async fn delete_by_id(&self, id: EntityId) -> Result<()>;
}

/// Store for invoices, adding the patient-scoped query
#[async_trait]
pub trait FactureRepository: Repository<Facture> {
    /// All invoices whose patient reference equals `patient_id`
    async fn find_by_patient_id(&self, patient_id: EntityId) -> Result<Vec<Facture>>;
}

/// Store for patients
///
/// Patients expose no queries beyond the generic ones.
pub trait PatientRepository: Repository<Patient> {}
