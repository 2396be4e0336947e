pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod state;
pub mod telemetry;
pub mod validation;

use anyhow::Result;

use crate::db::{DbPool, RideRepository};
use crate::error::StatusMode;
use crate::state::AppState;

/// Builds the rides router over `pool`, creating the schema if needed.
pub async fn build_app(pool: DbPool, status_mode: StatusMode) -> Result<axum::Router> {
    db::init_schema(&pool).await?;
    let state = AppState::new(RideRepository::new(pool), status_mode);
    Ok(handlers::router(state))
}
