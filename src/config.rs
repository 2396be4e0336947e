use anyhow::{bail, Result};
use dotenvy::dotenv;
use serde::Deserialize;
use std::env;

use crate::error::StatusMode;

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    pub fn parse(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => bail!("unknown LOG_FORMAT '{}', expected 'pretty' or 'json'", other),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub db_max_connections: u32,
    pub log_level: String,
    pub log_format: LogFormat,
    pub status_mode: StatusMode,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        dotenv().ok();

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8010".to_string())
            .parse()
            .unwrap_or(8010);

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://rides.db?mode=rwc".to_string());
        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .unwrap_or(5);

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let log_format =
            LogFormat::parse(&env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string()))?;

        let status_mode =
            StatusMode::parse(&env::var("ERROR_STATUS_MODE").unwrap_or_else(|_| "http".to_string()))?;

        Ok(Self {
            host,
            port,
            database_url,
            db_max_connections,
            log_level,
            log_format,
            status_mode,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
