use async_trait::async_trait;
use sqlx::PgPool;
use crate::errors::AppError;
use crate::models::employee::Employee;
use super::EmployeeRepository;

/// `employees` table access over a shared Postgres pool.
#[derive(Clone)]
pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

fn map_sqlx_error(err: sqlx::Error) -> AppError {
    log::error!("Database error: {:?}", err);
    AppError::DatabaseError(err.to_string())
}

/// Escapes `LIKE` wildcards so the search string matches literally.
fn escape_like(search_string: &str) -> String {
    let mut escaped = String::with_capacity(search_string.len());
    for c in search_string.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    async fn find_all(&self) -> Result<Vec<Employee>, AppError> {
        sqlx::query_as::<_, Employee>("SELECT id, name, salary, age FROM employees")
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Employee>, AppError> {
        sqlx::query_as::<_, Employee>("SELECT id, name, salary, age FROM employees WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)
    }

    async fn find_by_name_contains_ignore_case(
        &self,
        search_string: &str,
    ) -> Result<Vec<Employee>, AppError> {
        sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, name, salary, age
            FROM employees
            WHERE name ILIKE $1 ESCAPE '\'
            "#,
        )
        .bind(format!("%{}%", escape_like(search_string)))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }

    async fn find_max_salary(&self) -> Result<Option<Employee>, AppError> {
        sqlx::query_as::<_, Employee>(
            "SELECT id, name, salary, age FROM employees ORDER BY salary DESC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }

    async fn find_top_by_salary(&self, limit: usize) -> Result<Vec<Employee>, AppError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        sqlx::query_as::<_, Employee>(
            "SELECT id, name, salary, age FROM employees ORDER BY salary DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }

    async fn save(&self, employee: &Employee) -> Result<Employee, AppError> {
        sqlx::query_as::<_, Employee>(
            r#"
            INSERT INTO employees (id, name, salary, age)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE
            SET name = EXCLUDED.name, salary = EXCLUDED.salary, age = EXCLUDED.age
            RETURNING id, name, salary, age
            "#,
        )
        .bind(&employee.id)
        .bind(&employee.name)
        .bind(employee.salary)
        .bind(&employee.age)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::escape_like;

    #[test]
    fn escapes_like_wildcards() {
        assert_eq!(escape_like("100%_a\\b"), "100\\%\\_a\\\\b");
        assert_eq!(escape_like("Find Me"), "Find Me");
    }
}
