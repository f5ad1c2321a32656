//! # Billing services
//!
//! Two independent CRUD microservices sharing one crate:
//!
//! - **Facturation**: invoices ([`Facture`](entities::Facture)) keyed by
//!   patient, with a patient-scoped query
//! - **Patients**: patient records ([`Patient`](entities::Patient))
//!
//! Each service is a stateless layer over an injected store. Missing records
//! come back as `None` (lookups, updates) or `false` (deletes); only store
//! failures surface as errors.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use billing::prelude::*;
//!
//! let service = FactureService::new(Arc::new(InMemoryRepository::<Facture>::new()));
//!
//! let saved = service
//!     .create_facture(Facture::new(1, Decimal::new(10000, 2), today))
//!     .await?;
//!
//! assert!(service.get_facture_by_id(saved.id.unwrap()).await?.is_some());
//! assert!(!service.delete_facture(999).await?);
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod services;
pub mod storage;
pub mod telemetry;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Traits ===
    pub use crate::core::{
        entity::{Entity, EntityId},
        error::{ApiError, ConfigError},
        store::{FactureRepository, PatientRepository, Repository},
    };

    // === Models ===
    pub use crate::entities::{Facture, Patient};

    // === Services ===
    pub use crate::services::{FactureService, PatientService};

    // === Storage ===
    pub use crate::storage::InMemoryRepository;
    #[cfg(feature = "postgres")]
    pub use crate::storage::{PostgresFactureRepository, PostgresPatientRepository};

    // === Config ===
    pub use crate::config::{ServiceConfig, StorageBackend};

    // === Server ===
    pub use crate::server::{FactureDescriptor, PatientDescriptor, ServerBuilder};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::NaiveDate;
    pub use rust_decimal::Decimal;
    pub use std::sync::Arc;
}
