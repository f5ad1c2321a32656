//! Server module for exposing the billing services over HTTP
//!
//! - `rest`: per-entity descriptors, REST handlers and the health endpoint
//! - `builder`: fluent assembly and graceful serving

pub mod builder;
pub mod rest;

pub use builder::ServerBuilder;
pub use rest::{EntityDescriptor, FactureDescriptor, PatientDescriptor};
