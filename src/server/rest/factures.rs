//! Invoice routes

use super::EntityDescriptor;
use crate::core::entity::{Entity, EntityId};
use crate::core::error::ApiError;
use crate::entities::Facture;
use crate::services::FactureService;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

/// Descriptor exposing [`FactureService`] under `/factures`
pub struct FactureDescriptor {
    service: FactureService,
}

impl FactureDescriptor {
    pub fn new(service: FactureService) -> Self {
        Self { service }
    }
}

impl EntityDescriptor for FactureDescriptor {
    fn resource(&self) -> &str {
        Facture::resource_name()
    }

    fn build_routes(&self) -> Router {
        Router::new()
            .route("/factures", get(list_factures).post(create_facture))
            .route(
                "/factures/{id}",
                get(get_facture).put(update_facture).delete(delete_facture),
            )
            .route(
                "/factures/patient/{patient_id}",
                get(list_factures_for_patient),
            )
            .with_state(self.service.clone())
    }
}

pub async fn create_facture(
    State(service): State<FactureService>,
    Json(facture): Json<Facture>,
) -> Result<(StatusCode, Json<Facture>), ApiError> {
    let created = service.create_facture(facture).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_factures(
    State(service): State<FactureService>,
) -> Result<Json<Vec<Facture>>, ApiError> {
    Ok(Json(service.get_all_factures().await?))
}

pub async fn get_facture(
    State(service): State<FactureService>,
    Path(id): Path<EntityId>,
) -> Result<Json<Facture>, ApiError> {
    service
        .get_facture_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found::<Facture>(id))
}

pub async fn list_factures_for_patient(
    State(service): State<FactureService>,
    Path(patient_id): Path<EntityId>,
) -> Result<Json<Vec<Facture>>, ApiError> {
    Ok(Json(service.get_factures_by_patient_id(patient_id).await?))
}

pub async fn update_facture(
    State(service): State<FactureService>,
    Path(id): Path<EntityId>,
    Json(facture): Json<Facture>,
) -> Result<Json<Facture>, ApiError> {
    service
        .update_facture(id, facture)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found::<Facture>(id))
}

pub async fn delete_facture(
    State(service): State<FactureService>,
    Path(id): Path<EntityId>,
) -> Result<StatusCode, ApiError> {
    if service.delete_facture(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found::<Facture>(id))
    }
}
