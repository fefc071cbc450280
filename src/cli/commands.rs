//! CLI command implementations
//!
//! `init` is safe to re-run: the schema DDL is idempotent and an
//! existing config file is loaded rather than overwritten.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::db::SqliteClient;
use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{log_event, log_event_with_fields, Event};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// SQLite database file
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// HTTP server settings
    #[serde(default)]
    pub http: HttpServerConfig,
}

fn default_database_path() -> String {
    "./gamestore.db".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            http: HttpServerConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    fn validate(&self) -> CliResult<()> {
        if self.database_path.is_empty() {
            return Err(CliError::config_error("database_path must not be empty"));
        }
        if self.http.host.is_empty() {
            return Err(CliError::config_error("http.host must not be empty"));
        }
        Ok(())
    }
}

/// Entry point called from main
pub fn run() -> CliResult<()> {
    match Cli::parse_args().command {
        Command::Init { config } => init(&config),
        Command::Start { config } => start(&config),
    }
}

/// Create the config file if absent, then the database file and schema
pub fn init(config_path: &Path) -> CliResult<()> {
    let config = if config_path.exists() {
        Config::load(config_path)?
    } else {
        let config = Config::default();
        fs::write(config_path, serde_json::to_string_pretty(&config)?)?;
        config
    };

    let client = SqliteClient::open(&config.database_path)?;
    client.apply_schema()?;
    log_event_with_fields(
        Event::SchemaApplied,
        &[("database_path", config.database_path.as_str())],
    );
    Ok(())
}

/// Boot the HTTP server and serve until stopped
pub fn start(config_path: &Path) -> CliResult<()> {
    log_event(Event::BootStart);

    let config = Config::load(config_path)?;
    log_event_with_fields(
        Event::ConfigLoaded,
        &[("database_path", config.database_path.as_str())],
    );

    let client = SqliteClient::open(&config.database_path)?;
    client.apply_schema()?;
    log_event(Event::SchemaApplied);

    let server = HttpServer::new(config.http, Arc::new(client));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime
        .block_on(server.start())
        .map_err(|e| CliError::serve_failed(e.to_string()))
}
