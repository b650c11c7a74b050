use crate::config::DatabaseConfig;
use crate::error::AppError;
use crate::models::OrderNotificationRecord;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

#[derive(Clone)]
pub struct NotificationDb {
    pool: PgPool,
}

impl NotificationDb {
    /// Initialize the connection pool.
    ///
    /// The pool is lazy: connections are established on first use, so the
    /// service can start while the database is still coming up.
    pub fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(30))
            .connect_lazy(&config.url)
            .map_err(|e| {
                tracing::error!("Failed to initialize PostgreSQL pool: {}", e);
                AppError::DatabaseError(anyhow::Error::new(e))
            })?;

        tracing::info!("PostgreSQL pool initialized");
        Ok(Self { pool })
    }

    /// Apply the embedded migrations.
    pub async fn run_migrations(&self) -> Result<(), AppError> {
        tracing::info!("Running database migrations");
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to run migrations: {}", e);
                AppError::DatabaseError(anyhow::Error::new(e))
            })?;
        tracing::info!("Database migrations completed");
        Ok(())
    }

    /// Check database connectivity.
    pub async fn health_check(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Fetch one notification row by id.
    pub async fn find_by_id(
        &self,
        id: &str,
    ) -> Result<Option<OrderNotificationRecord>, AppError> {
        let record = sqlx::query_as::<_, OrderNotificationRecord>(
            "SELECT id, status, order_id, user_id, message, created_at, updated_at \
             FROM order_notifications WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    /// List notification rows for an order, newest first.
    pub async fn list_for_order(
        &self,
        order_id: &str,
        limit: i64,
    ) -> Result<Vec<OrderNotificationRecord>, AppError> {
        let records = sqlx::query_as::<_, OrderNotificationRecord>(
            "SELECT id, status, order_id, user_id, message, created_at, updated_at \
             FROM order_notifications WHERE order_id = $1 \
             ORDER BY created_at DESC LIMIT $2",
        )
        .bind(order_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }
}
