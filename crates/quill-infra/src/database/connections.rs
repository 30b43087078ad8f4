use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DbConn};

use quill_core::error::RepoError;

/// Configuration for the database connection pool.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Open the connection pool from configuration.
pub async fn connect(config: &DatabaseConfig) -> Result<DbConn, RepoError> {
    tracing::info!("Initializing database connection...");

    let options = ConnectOptions::new(&config.url)
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(300))
        .sqlx_logging(true)
        .to_owned();

    let conn = Database::connect(options)
        .await
        .map_err(|e| RepoError::Connection(e.to_string()))?;

    tracing::info!("Database connected (pool: {})", config.max_connections);
    Ok(conn)
}
