//! Tests for error propagation and HTTP error mapping
//!
//! These tests verify that:
//! - Store failures propagate through the services as `Err`
//! - Store failures become 500 `STORAGE_ERROR` responses
//! - Missing records become 404 `ENTITY_NOT_FOUND`, never 500

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum_test::TestServer;
use billing::prelude::*;
use serde_json::Value;

/// Store whose every call fails, standing in for a lost connection
struct UnavailableStore;

#[async_trait]
impl Repository<Patient> for UnavailableStore {
    async fn save(&self, _entity: Patient) -> Result<Patient> {
        Err(anyhow::anyhow!("database unavailable"))
    }

    async fn find_all(&self) -> Result<Vec<Patient>> {
        Err(anyhow::anyhow!("database unavailable"))
    }

    async fn find_by_id(&self, _id: EntityId) -> Result<Option<Patient>> {
        Err(anyhow::anyhow!("database unavailable"))
    }

    async fn delete_by_id(&self, _id: EntityId) -> Result<()> {
        Err(anyhow::anyhow!("database unavailable"))
    }
}

impl PatientRepository for UnavailableStore {}

fn unavailable_service() -> PatientService {
    PatientService::new(Arc::new(UnavailableStore))
}

mod service_propagation_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_propagates() {
        let err = unavailable_service()
            .create_patient(Patient::new("A", "a@example.com"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("database unavailable"));
    }

    #[tokio::test]
    async fn test_update_and_delete_propagate_lookup_failure() {
        let service = unavailable_service();

        assert!(
            service
                .update_patient(1, Patient::new("A", "a@example.com"))
                .await
                .is_err()
        );
        assert!(service.delete_patient(1).await.is_err());
    }
}

mod http_mapping_tests {
    use super::*;

    fn server() -> TestServer {
        let app = ServerBuilder::new("patient-service")
            .register(PatientDescriptor::new(unavailable_service()))
            .build()
            .unwrap();
        TestServer::new(app)
    }

    #[tokio::test]
    async fn test_store_failure_returns_500() {
        let response = server().get("/patients").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json();
        assert_eq!(body["code"], "STORAGE_ERROR");
        assert!(body.get("details").is_none());
    }

    #[tokio::test]
    async fn test_store_failure_on_delete_returns_500() {
        server()
            .delete("/patients/1")
            .await
            .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_not_found_into_response() {
        let response = ApiError::not_found::<Facture>(3).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_error_matching() {
        let err = ApiError::not_found::<Patient>(8);
        match err {
            ApiError::NotFound { entity_type, id } => {
                assert_eq!(entity_type, "patient");
                assert_eq!(id, 8);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
