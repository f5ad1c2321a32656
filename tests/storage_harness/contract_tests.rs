//! Macro-generated test suite for the store contract.
//!
//! # Generated Tests
//!
//! ## Invoices
//! - `test_save_assigns_id`: unsaved invoice receives an id
//! - `test_find_by_id_roundtrip`: saved invoice is found with equal fields
//! - `test_find_by_id_missing`: unknown id returns None
//! - `test_save_with_id_replaces`: full replacement keeps the row count
//! - `test_find_by_patient_id`: only matching invoices are returned
//! - `test_delete_by_id`: deleted invoice is gone
//! - `test_delete_missing_is_ok`: deleting an unknown id succeeds
//! - `test_amount_precision_kept`: decimal scale survives a round trip
//!
//! ## Patients
//! - `test_patient_list_multiple`: every saved patient is listed
//! - `test_patient_update_and_delete`: replace then remove
//! - `test_concurrent_saves`: parallel saves get distinct ids

/// Generate the store contract test suite.
///
/// `$factures` and `$patients` must evaluate to fresh, empty stores
/// implementing `FactureRepository` and `PatientRepository`. The patient
/// store must also be `Clone + 'static` for the concurrency test.
#[macro_export]
macro_rules! repository_contract_tests {
    ($factures:expr, $patients:expr) => {
        mod repository_contract_tests {
            use super::*;
            use billing::core::entity::Entity;
            use billing::core::store::{FactureRepository, Repository};
            use std::collections::HashSet;

            // ==================================================================
            // Invoices
            // ==================================================================

            #[tokio::test]
            async fn test_save_assigns_id() {
                let store = $factures;
                let saved = store.save(facture(1, "100.00")).await.unwrap();

                assert!(saved.id().is_some(), "store should assign an id");
                assert_eq!(saved.patient_id, 1);
                assert_eq!(saved.amount, amount("100.00"));
            }

            #[tokio::test]
            async fn test_find_by_id_roundtrip() {
                let store = $factures;
                let saved = store.save(facture(3, "42.50")).await.unwrap();
                let id = saved.id().unwrap();

                let found = store.find_by_id(id).await.unwrap();
                assert_eq!(found, Some(saved));
            }

            #[tokio::test]
            async fn test_find_by_id_missing() {
                let store = $factures;
                store.save(facture(1, "1.00")).await.unwrap();

                assert!(store.find_by_id(987_654).await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_save_with_id_replaces() {
                let store = $factures;
                let saved = store.save(facture(1, "100.00")).await.unwrap();
                let id = saved.id().unwrap();

                let replaced = store
                    .save(facture(1, "150.00").with_id(id))
                    .await
                    .unwrap();
                assert_eq!(replaced.id(), Some(id));
                assert_eq!(replaced.amount, amount("150.00"));

                let all = store.find_all().await.unwrap();
                assert_eq!(all.len(), 1, "replacement must not add a row");
                assert_eq!(all[0].amount, amount("150.00"));
            }

            #[tokio::test]
            async fn test_find_by_patient_id() {
                let store = $factures;
                store.save(facture(1, "100.00")).await.unwrap();
                store.save(facture(2, "75.00")).await.unwrap();
                store.save(facture(1, "200.00")).await.unwrap();

                let for_one = store.find_by_patient_id(1).await.unwrap();
                assert_eq!(for_one.len(), 2);
                assert!(for_one.iter().all(|f| f.patient_id == 1));

                let for_none = store.find_by_patient_id(404).await.unwrap();
                assert!(for_none.is_empty());
            }

            #[tokio::test]
            async fn test_delete_by_id() {
                let store = $factures;
                let saved = store.save(facture(1, "10.00")).await.unwrap();
                let id = saved.id().unwrap();

                store.delete_by_id(id).await.unwrap();
                assert!(store.find_by_id(id).await.unwrap().is_none());
                assert!(store.find_all().await.unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_delete_missing_is_ok() {
                let store = $factures;
                assert!(store.delete_by_id(55).await.is_ok());
            }

            #[tokio::test]
            async fn test_amount_precision_kept() {
                let store = $factures;
                let saved = store.save(facture(1, "0.10")).await.unwrap();

                let found = store.find_by_id(saved.id().unwrap()).await.unwrap().unwrap();
                assert_eq!(found.amount.to_string(), "0.10");
            }

            // ==================================================================
            // Patients
            // ==================================================================

            #[tokio::test]
            async fn test_patient_list_multiple() {
                let store = $patients;
                for p in patient_batch(5) {
                    store.save(p).await.unwrap();
                }

                let all = store.find_all().await.unwrap();
                assert_eq!(all.len(), 5);

                let ids: HashSet<_> = all.iter().filter_map(|p| p.id()).collect();
                assert_eq!(ids.len(), 5, "ids should be distinct");
            }

            #[tokio::test]
            async fn test_patient_update_and_delete() {
                let store = $patients;
                let saved = store.save(patient("Old Name", "old@example.com")).await.unwrap();
                let id = saved.id().unwrap();

                store
                    .save(patient("New Name", "new@example.com").with_id(id))
                    .await
                    .unwrap();
                let found = store.find_by_id(id).await.unwrap().unwrap();
                assert_eq!(found.name, "New Name");
                assert_eq!(found.email, "new@example.com");

                store.delete_by_id(id).await.unwrap();
                assert!(store.find_by_id(id).await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_concurrent_saves() {
                let store = $patients;
                let mut handles = Vec::new();

                for p in patient_batch(10) {
                    let store = store.clone();
                    handles.push(tokio::spawn(async move { store.save(p).await.unwrap() }));
                }

                let mut ids = HashSet::new();
                for handle in handles {
                    ids.insert(handle.await.unwrap().id().unwrap());
                }

                assert_eq!(ids.len(), 10);
                assert_eq!(store.find_all().await.unwrap().len(), 10);
            }
        }
    };
}
