//! REST exposure for the billing services
//!
//! Handlers translate the services' `Option`/`bool` results into HTTP
//! statuses. That translation lives only here; the services themselves
//! never treat a missing record as an error.

pub mod factures;
pub mod patients;

pub use factures::FactureDescriptor;
pub use patients::PatientDescriptor;

use axum::extract::State;
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use std::sync::Arc;

/// One entity kind exposed over REST
pub trait EntityDescriptor: Send + Sync {
    /// Collection name, served at `/{resource}`
    fn resource(&self) -> &str;

    /// Routes for the collection, with the service already bound as state
    fn build_routes(&self) -> Router;
}

/// Build health check routes reporting `service_name`
pub fn health_routes(service_name: &str) -> Router {
    let name: Arc<str> = Arc::from(service_name);
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
        .with_state(name)
}

async fn health_check(State(service): State<Arc<str>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": &*service,
    }))
}
