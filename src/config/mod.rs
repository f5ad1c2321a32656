//! Configuration loading and management
//!
//! Each microservice reads a YAML file named by `BILLING_CONFIG`, or starts
//! from built-in defaults. A handful of environment variables override the
//! file so container deployments need no file at all.

use crate::core::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Environment variable naming the YAML configuration file
pub const CONFIG_ENV: &str = "BILLING_CONFIG";

/// Complete configuration for one microservice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Name reported by the health endpoint and in logs
    pub service_name: String,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Listener settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    /// Left unset in a file, the service's own default port applies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

/// Which store backs the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    #[default]
    InMemory,
    Postgres,
}

/// Store settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,

    /// Connection string, required for `postgres`
    #[serde(default)]
    pub database_url: Option<String>,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info,billing=debug`
    #[serde(default = "default_filter")]
    pub filter: String,

    #[serde(default)]
    pub format: LogFormat,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: None,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            database_url: None,
            max_connections: default_max_connections(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            format: LogFormat::default(),
        }
    }
}

impl ServiceConfig {
    /// Defaults for a named service listening on `port`
    pub fn for_service(service_name: &str, port: u16) -> Self {
        Self {
            service_name: service_name.to_string(),
            server: ServerConfig {
                port: Some(port),
                ..ServerConfig::default()
            },
            storage: StorageConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Resolve the configuration for a service at startup
    ///
    /// Reads the file named by `BILLING_CONFIG` when set, otherwise uses
    /// [`for_service`](Self::for_service) defaults. Environment overrides
    /// are applied last, then the result is validated.
    pub fn load(service_name: &str, default_port: u16) -> Result<Self, ConfigError> {
        let path = std::env::var(CONFIG_ENV).ok();
        Self::resolve(path.as_deref(), service_name, default_port, |key| {
            std::env::var(key).ok()
        })
    }

    /// [`load`](Self::load) with the file path and variable lookup supplied
    ///
    /// A file without `server.port` gets `default_port`, so each service
    /// keeps its own port when sharing one config layout.
    pub fn resolve(
        path: Option<&str>,
        service_name: &str,
        default_port: u16,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_yaml_file(path)?,
            None => Self::for_service(service_name, default_port),
        };
        config.server.port.get_or_insert(default_port);

        let config = config.with_overrides(lookup)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a variable lookup
    ///
    /// Recognised keys: `BILLING_HOST`, `BILLING_PORT`, `DATABASE_URL`,
    /// `RUST_LOG`. Taking the lookup as a closure keeps this testable
    /// without touching the process environment.
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(host) = lookup("BILLING_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("BILLING_PORT") {
            self.server.port = Some(port.parse().map_err(|_| ConfigError::InvalidValue {
                field: "server.port".to_string(),
                value: port.clone(),
                message: "not a valid port number".to_string(),
            })?);
        }
        if let Some(url) = lookup("DATABASE_URL") {
            self.storage.database_url = Some(url);
        }
        if let Some(filter) = lookup("RUST_LOG") {
            self.logging.filter = filter;
        }
        Ok(self)
    }

    /// Reject settings the services cannot start with
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.server.port {
            None => {
                return Err(ConfigError::InvalidValue {
                    field: "server.port".to_string(),
                    value: String::new(),
                    message: "no port configured".to_string(),
                });
            }
            Some(0) => {
                return Err(ConfigError::InvalidValue {
                    field: "server.port".to_string(),
                    value: "0".to_string(),
                    message: "port must be non-zero".to_string(),
                });
            }
            Some(_) => {}
        }
        if self.storage.backend == StorageBackend::Postgres
            && self.storage.database_url.as_deref().is_none_or(str::is_empty)
        {
            return Err(ConfigError::InvalidValue {
                field: "storage.database_url".to_string(),
                value: String::new(),
                message: "required when storage.backend is postgres".to_string(),
            });
        }
        if self.storage.max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                field: "storage.max_connections".to_string(),
                value: "0".to_string(),
                message: "at least one connection is required".to_string(),
            });
        }
        Ok(())
    }

    /// Socket address string for the listener
    ///
    /// An unset port renders as `0`; [`validate`](Self::validate) rejects
    /// that before the binaries bind.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port.unwrap_or(0))
    }
}
