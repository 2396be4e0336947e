use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, LogFormat};

pub fn init(config: &AppConfig) {
    let filter = EnvFilter::new(&config.log_level);

    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}
