//! Patient microservice: patient records over REST

use anyhow::Result;
use billing::config::ServiceConfig;
use billing::server::{PatientDescriptor, ServerBuilder};
use billing::services::PatientService;
use billing::{storage, telemetry};

const SERVICE_NAME: &str = "patient-service";
const DEFAULT_PORT: u16 = 8081;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServiceConfig::load(SERVICE_NAME, DEFAULT_PORT)?;
    telemetry::init_tracing(&config.logging);

    tracing::info!(backend = ?config.storage.backend, "Starting {}", config.service_name);

    let repository = storage::patient_repository(&config.storage).await?;
    let service = PatientService::new(repository);

    ServerBuilder::new(config.service_name.clone())
        .register(PatientDescriptor::new(service))
        .serve(&config.bind_address())
        .await
}
