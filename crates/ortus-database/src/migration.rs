//! Database migration runner.

use sqlx::PgPool;
use tracing::info;

use ortus_core::ApiError;

/// Run all pending database migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), ApiError> {
    info!("Running database migrations...");

    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| ApiError::internal(format!("Failed to run migrations: {e}")))?;

    info!("Database migrations completed successfully");
    Ok(())
}
