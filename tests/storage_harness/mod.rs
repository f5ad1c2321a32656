//! Shared test harness for store backend testing
//!
//! Provides fixtures for both entity kinds and the
//! `repository_contract_tests!` macro, which any backend can invoke to check
//! that it honours the store contract the services rely on.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//!
//! use storage_harness::*;
//!
//! repository_contract_tests!(
//!     InMemoryRepository::<Facture>::new(),
//!     InMemoryRepository::<Patient>::new()
//! );
//! ```

#![allow(dead_code)]

#[macro_use]
pub mod contract_tests;

use billing::entities::{Facture, Patient};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Fixed issue date so assertions are deterministic
pub fn issue_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()
}

/// Amount from a string such as `"100.00"`
pub fn amount(value: &str) -> Decimal {
    value.parse().unwrap()
}

/// Unsaved invoice for `patient_id`
pub fn facture(patient_id: i64, value: &str) -> Facture {
    Facture::new(patient_id, amount(value), issue_date())
}

/// Unsaved patient
pub fn patient(name: &str, email: &str) -> Patient {
    Patient::new(name, email)
}

/// `count` unsaved patients with distinct names
pub fn patient_batch(count: usize) -> Vec<Patient> {
    (1..=count)
        .map(|i| patient(&format!("Patient {}", i), &format!("patient{}@example.com", i)))
        .collect()
}
