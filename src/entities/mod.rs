//! Data models for the billing services

pub mod facture;
pub mod macros;
pub mod patient;

pub use facture::Facture;
pub use patient::Patient;
