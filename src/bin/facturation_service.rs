//! Facturation microservice: invoices over REST

use anyhow::Result;
use billing::config::ServiceConfig;
use billing::server::{FactureDescriptor, ServerBuilder};
use billing::services::FactureService;
use billing::{storage, telemetry};

const SERVICE_NAME: &str = "facturation-service";
const DEFAULT_PORT: u16 = 8082;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServiceConfig::load(SERVICE_NAME, DEFAULT_PORT)?;
    telemetry::init_tracing(&config.logging);

    tracing::info!(backend = ?config.storage.backend, "Starting {}", config.service_name);

    let repository = storage::facture_repository(&config.storage).await?;
    let service = FactureService::new(repository);

    ServerBuilder::new(config.service_name.clone())
        .register(FactureDescriptor::new(service))
        .serve(&config.bind_address())
        .await
}
