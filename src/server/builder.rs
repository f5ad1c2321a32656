//! ServerBuilder for fluent API to build HTTP servers

use super::rest::{EntityDescriptor, health_routes};
use anyhow::Result;
use axum::Router;
use std::collections::HashSet;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Builder for creating a service's HTTP router
///
/// # Example
///
/// ```ignore
/// let service = FactureService::new(Arc::new(InMemoryRepository::new()));
///
/// ServerBuilder::new("facturation-service")
///     .register(FactureDescriptor::new(service))
///     .serve("0.0.0.0:8082")
///     .await?;
/// ```
pub struct ServerBuilder {
    service_name: String,
    descriptors: Vec<Box<dyn EntityDescriptor>>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder for the named service
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            descriptors: Vec::new(),
        }
    }

    /// Expose an entity through its descriptor
    pub fn register(mut self, descriptor: impl EntityDescriptor + 'static) -> Self {
        self.descriptors.push(Box::new(descriptor));
        self
    }

    /// Collection paths served, in registration order
    fn resource_paths(&self) -> Vec<String> {
        self.descriptors
            .iter()
            .map(|d| format!("/{}", d.resource()))
            .collect()
    }

    /// Build the final REST router
    ///
    /// Fails if no entity was registered, or if two descriptors claim the
    /// same collection (their routes would overlap).
    pub fn build(self) -> Result<Router> {
        if self.descriptors.is_empty() {
            anyhow::bail!(
                "No entity registered for '{}'. Call .register()",
                self.service_name
            );
        }

        let mut seen = HashSet::new();
        let mut app = health_routes(&self.service_name);
        for descriptor in &self.descriptors {
            if !seen.insert(descriptor.resource()) {
                anyhow::bail!(
                    "'/{}' registered twice for '{}'",
                    descriptor.resource(),
                    self.service_name
                );
            }
            app = app.merge(descriptor.build_routes());
        }

        Ok(app.layer(TraceLayer::new_for_http()))
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Bind to the provided address
    /// - Start serving requests
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    pub async fn serve(self, addr: &str) -> Result<()> {
        let service_name = self.service_name.clone();
        let resources = self.resource_paths();
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!(service = %service_name, ?resources, "Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!(service = %service_name, "Server shutdown complete");
        Ok(())
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
