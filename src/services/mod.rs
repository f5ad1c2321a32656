//! Service layer: stateless orchestration over an injected store
//!
//! Each service validates that an id exists where the operation needs it and
//! forwards to the store. "Not found" is reported as `None` or `false`, never
//! as an error; only store failures travel through `Err`.

pub mod facture_service;
pub mod patient_service;

pub use facture_service::FactureService;
pub use patient_service::PatientService;
