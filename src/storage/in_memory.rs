//! In-memory implementation of the store traits for testing and development

use crate::core::entity::{Entity, EntityId};
use crate::core::store::{FactureRepository, PatientRepository, Repository};
use crate::entities::{Facture, Patient};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

#[derive(Debug)]
struct Table<T> {
    rows: BTreeMap<EntityId, T>,
    next_id: EntityId,
}

/// In-memory repository for a single entity kind
///
/// Rows are kept ordered by id. Ids start at 1 and are never reused, even
/// after a delete. Cloning shares the underlying table.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<T> {
    table: Arc<RwLock<Table<T>>>,
}

impl<T: Entity> InMemoryRepository<T> {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            table: Arc::new(RwLock::new(Table {
                rows: BTreeMap::new(),
                next_id: 1,
            })),
        }
    }

    /// Keep only the rows matching `predicate`, in id order
    fn select(&self, predicate: impl Fn(&T) -> bool) -> Result<Vec<T>> {
        let table = self
            .table
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(table
            .rows
            .values()
            .filter(|row| predicate(row))
            .cloned()
            .collect())
    }
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    async fn save(&self, entity: T) -> Result<T> {
        let mut table = self
            .table
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let (id, entity) = match entity.id() {
            Some(id) => (id, entity),
            None => (table.next_id, entity.with_id(table.next_id)),
        };

        // Generated ids stay clear of every id already handed out
        let after = id
            .checked_add(1)
            .ok_or_else(|| anyhow!("id sequence exhausted at {}", id))?;
        table.next_id = table.next_id.max(after);
        table.rows.insert(id, entity.clone());

        Ok(entity)
    }

    async fn find_all(&self) -> Result<Vec<T>> {
        self.select(|_| true)
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<T>> {
        let table = self
            .table
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(table.rows.get(&id).cloned())
    }

    async fn delete_by_id(&self, id: EntityId) -> Result<()> {
        let mut table = self
            .table
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        table.rows.remove(&id);

        Ok(())
    }
}

#[async_trait]
impl FactureRepository for InMemoryRepository<Facture> {
    async fn find_by_patient_id(&self, patient_id: EntityId) -> Result<Vec<Facture>> {
        self.select(|facture| facture.patient_id == patient_id)
    }
}

impl PatientRepository for InMemoryRepository<Patient> {}
