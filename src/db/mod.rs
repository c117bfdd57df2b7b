pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use log::{info, warn};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use crate::config::AppConfig;
use crate::errors::AppError;
use crate::models::employee::Employee;

pub use memory::InMemoryEmployeeRepository;
pub use postgres::PgEmployeeRepository;

/// Storage operations behind the employee endpoints.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Employee>, AppError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Employee>, AppError>;

    /// Case-insensitive substring match on `name`.
    async fn find_by_name_contains_ignore_case(
        &self,
        search_string: &str,
    ) -> Result<Vec<Employee>, AppError>;

    /// The best-paid employee, or `None` when there are no employees.
    async fn find_max_salary(&self) -> Result<Option<Employee>, AppError>;

    /// Up to `limit` employees, highest salary first.
    async fn find_top_by_salary(&self, limit: usize) -> Result<Vec<Employee>, AppError>;

    /// Inserts the employee or overwrites the one with the same id.
    async fn save(&self, employee: &Employee) -> Result<Employee, AppError>;

    async fn delete_by_id(&self, id: &str) -> Result<(), AppError>;
}

/// Picks the storage backend from configuration. Without a database URL the
/// service runs on the in-memory store.
pub async fn create_repository(config: &AppConfig) -> Result<Arc<dyn EmployeeRepository>, AppError> {
    let Some(database_url) = config.database_url.as_deref() else {
        warn!("DATABASE_URL is not set, employees are kept in memory only");
        return Ok(Arc::new(InMemoryEmployeeRepository::new()));
    };

    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(database_url)
        .await
        .map_err(|err| AppError::DatabaseError(format!("Failed to connect to the database: {}", err)))?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|err| AppError::DatabaseError(format!("Failed to run migrations: {}", err)))?;

    info!("Connected to Postgres with {} max connections", config.database_max_connections);
    Ok(Arc::new(PgEmployeeRepository::new(pool)))
}
