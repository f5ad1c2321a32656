//! Storage implementations for different backends

pub mod in_memory;
#[cfg(feature = "postgres")]
pub mod postgres;

pub use in_memory::InMemoryRepository;
#[cfg(feature = "postgres")]
pub use postgres::{PostgresFactureRepository, PostgresPatientRepository};

use crate::config::{StorageBackend, StorageConfig};
use crate::core::store::{FactureRepository, PatientRepository};
use crate::entities::{Facture, Patient};
use anyhow::Result;
use std::sync::Arc;

/// Open the invoice store selected by `config`
pub async fn facture_repository(config: &StorageConfig) -> Result<Arc<dyn FactureRepository>> {
    match config.backend {
        StorageBackend::InMemory => Ok(Arc::new(InMemoryRepository::<Facture>::new())),
        StorageBackend::Postgres => {
            #[cfg(feature = "postgres")]
            {
                let pool = postgres_pool(config).await?;
                Ok(Arc::new(PostgresFactureRepository::new(pool)))
            }
            #[cfg(not(feature = "postgres"))]
            {
                anyhow::bail!("postgres backend requested but the `postgres` feature is disabled")
            }
        }
    }
}

/// Open the patient store selected by `config`
pub async fn patient_repository(config: &StorageConfig) -> Result<Arc<dyn PatientRepository>> {
    match config.backend {
        StorageBackend::InMemory => Ok(Arc::new(InMemoryRepository::<Patient>::new())),
        StorageBackend::Postgres => {
            #[cfg(feature = "postgres")]
            {
                let pool = postgres_pool(config).await?;
                Ok(Arc::new(PostgresPatientRepository::new(pool)))
            }
            #[cfg(not(feature = "postgres"))]
            {
                anyhow::bail!("postgres backend requested but the `postgres` feature is disabled")
            }
        }
    }
}

#[cfg(feature = "postgres")]
async fn postgres_pool(config: &StorageConfig) -> Result<sqlx::PgPool> {
    let url = config
        .database_url
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("storage.database_url is required for postgres"))?;
    let pool = postgres::connect(url, config.max_connections).await?;
    postgres::ensure_schema(&pool).await?;
    tracing::info!("PostgreSQL store ready");
    Ok(pool)
}
