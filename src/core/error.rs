//! Typed errors for the HTTP boundary and configuration loading
//!
//! Services never fail on a missing record: absence is reported as `None` or
//! `false`. These types exist for the layers around them.
//!
//! - [`ApiError`]: what a REST handler returns; maps to a status code and a
//!   JSON [`ErrorResponse`]
//! - [`ConfigError`]: failures while reading or validating configuration

use crate::core::entity::EntityId;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by the REST exposure
#[derive(Debug, Error)]
pub enum ApiError {
    /// The requested record does not exist
    #[error("{entity_type} with id '{id}' not found")]
    NotFound {
        entity_type: &'static str,
        id: EntityId,
    },

    /// The backing store failed (connectivity, poisoned lock, ...)
    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// Shorthand for a not-found error on entity type `E`
    pub fn not_found<E: crate::core::Entity>(id: EntityId) -> Self {
        ApiError::NotFound {
            entity_type: E::resource_name_singular(),
            id,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::NotFound { .. } => "ENTITY_NOT_FOUND",
            ApiError::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            ApiError::NotFound { entity_type, id } => Some(serde_json::json!({
                "entity_type": entity_type,
                "id": id,
            })),
            ApiError::Storage(_) => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Storage(err) = &self {
            tracing::error!(error = %err, "store call failed");
        }
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

/// Errors related to configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid YAML for the expected shape
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// A field holds a value the services cannot run with
    #[error("Invalid value '{value}' for field '{field}': {message}")]
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },
}
