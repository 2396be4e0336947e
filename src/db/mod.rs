use anyhow::Result;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};

pub mod queries;
pub mod rides;

pub use rides::RideRepository;

pub type DbPool = Pool<Sqlite>;

pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<DbPool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// Single-connection pool over a private in-memory database. The connection
/// never expires, so the database lives as long as the pool.
pub async fn init_memory_pool() -> Result<DbPool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;
    Ok(pool)
}

pub async fn init_schema(pool: &DbPool) -> Result<()> {
    sqlx::query(queries::CREATE_RIDES_TABLE)
        .execute(pool)
        .await?;
    Ok(())
}
