//! Core module containing fundamental traits and types

pub mod entity;
pub mod error;
pub mod store;

pub use entity::{Entity, EntityId};
pub use error::{ApiError, ConfigError, ErrorResponse};
pub use store::{FactureRepository, PatientRepository, Repository};
