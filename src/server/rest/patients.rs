//! Patient routes

use super::EntityDescriptor;
use crate::core::entity::{Entity, EntityId};
use crate::core::error::ApiError;
use crate::entities::Patient;
use crate::services::PatientService;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

/// Descriptor exposing [`PatientService`] under `/patients`
pub struct PatientDescriptor {
    service: PatientService,
}

impl PatientDescriptor {
    pub fn new(service: PatientService) -> Self {
        Self { service }
    }
}

impl EntityDescriptor for PatientDescriptor {
    fn resource(&self) -> &str {
        Patient::resource_name()
    }

    fn build_routes(&self) -> Router {
        Router::new()
            .route("/patients", get(list_patients).post(create_patient))
            .route(
                "/patients/{id}",
                get(get_patient).put(update_patient).delete(delete_patient),
            )
            .with_state(self.service.clone())
    }
}

pub async fn create_patient(
    State(service): State<PatientService>,
    Json(patient): Json<Patient>,
) -> Result<(StatusCode, Json<Patient>), ApiError> {
    let created = service.create_patient(patient).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_patients(
    State(service): State<PatientService>,
) -> Result<Json<Vec<Patient>>, ApiError> {
    Ok(Json(service.get_all_patients().await?))
}

pub async fn get_patient(
    State(service): State<PatientService>,
    Path(id): Path<EntityId>,
) -> Result<Json<Patient>, ApiError> {
    service
        .get_patient_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found::<Patient>(id))
}

pub async fn update_patient(
    State(service): State<PatientService>,
    Path(id): Path<EntityId>,
    Json(patient): Json<Patient>,
) -> Result<Json<Patient>, ApiError> {
    service
        .update_patient(id, patient)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found::<Patient>(id))
}

pub async fn delete_patient(
    State(service): State<PatientService>,
    Path(id): Path<EntityId>,
) -> Result<StatusCode, ApiError> {
    if service.delete_patient(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found::<Patient>(id))
    }
}
