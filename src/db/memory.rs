use async_trait::async_trait;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use crate::errors::AppError;
use crate::models::employee::Employee;
use super::EmployeeRepository;

/// Process-local employee store. Insertion order is preserved, which also
/// decides the order of salary ties.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeRepository {
    employees: RwLock<Vec<Employee>>,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Employee>>, AppError> {
        self.employees
            .read()
            .map_err(|_| AppError::DatabaseError("employee store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Employee>>, AppError> {
        self.employees
            .write()
            .map_err(|_| AppError::DatabaseError("employee store lock poisoned".to_string()))
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn find_all(&self) -> Result<Vec<Employee>, AppError> {
        Ok(self.read()?.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Employee>, AppError> {
        Ok(self.read()?.iter().find(|employee| employee.id == id).cloned())
    }

    async fn find_by_name_contains_ignore_case(
        &self,
        search_string: &str,
    ) -> Result<Vec<Employee>, AppError> {
        let needle = search_string.to_lowercase();
        Ok(self
            .read()?
            .iter()
            .filter(|employee| employee.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn find_max_salary(&self) -> Result<Option<Employee>, AppError> {
        Ok(self.find_top_by_salary(1).await?.into_iter().next())
    }

    async fn find_top_by_salary(&self, limit: usize) -> Result<Vec<Employee>, AppError> {
        let mut employees = self.read()?.clone();
        employees.sort_by(|a, b| b.salary.cmp(&a.salary));
        employees.truncate(limit);
        Ok(employees)
    }

    async fn save(&self, employee: &Employee) -> Result<Employee, AppError> {
        let mut employees = self.write()?;
        match employees.iter_mut().find(|existing| existing.id == employee.id) {
            Some(existing) => *existing = employee.clone(),
            None => employees.push(employee.clone()),
        }
        Ok(employee.clone())
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), AppError> {
        self.write()?.retain(|employee| employee.id != id);
        Ok(())
    }
}
