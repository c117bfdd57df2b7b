use log::info;
use serde_json::{Map, Value};
use std::sync::Arc;
use uuid::Uuid;
use crate::db::EmployeeRepository;
use crate::errors::AppError;
use crate::models::employee::{Employee, NewEmployee};

const TOP_EARNERS_LIMIT: usize = 10;

/// Employee operations exposed over HTTP, independent of the storage backend.
#[derive(Clone)]
pub struct EmployeeService {
    repository: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    pub fn new(repository: Arc<dyn EmployeeRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_all_employees(&self) -> Result<Vec<Employee>, AppError> {
        let employees = self.repository.find_all().await?;
        info!("Found {} total employees.", employees.len());
        Ok(employees)
    }

    /// Employees whose name contains `search_string`, ignoring case.
    pub async fn get_employees_by_name_search(
        &self,
        search_string: &str,
    ) -> Result<Vec<Employee>, AppError> {
        let employees = self
            .repository
            .find_by_name_contains_ignore_case(search_string)
            .await?;
        info!("Found {} employees containing name: {}", employees.len(), search_string);
        Ok(employees)
    }

    pub async fn get_employee_by_id(&self, id: &str) -> Result<Employee, AppError> {
        let employee = self.find_employee_by_id(id).await?;
        info!("Found employee {} with ID {}.", employee.name, id);
        Ok(employee)
    }

    /// Fails with `NotFound` when there are no employees at all.
    pub async fn get_highest_salary_of_employees(&self) -> Result<i32, AppError> {
        let employee = self
            .repository
            .find_max_salary()
            .await?
            .ok_or_else(|| AppError::NotFound("Could not find any employees.".to_string()))?;
        info!("Found highest earning salary {} from employee {}", employee.salary, employee.id);
        Ok(employee.salary)
    }

    pub async fn get_top_ten_highest_earning_employee_names(&self) -> Result<Vec<String>, AppError> {
        let employee_names: Vec<String> = self
            .repository
            .find_top_by_salary(TOP_EARNERS_LIMIT)
            .await?
            .into_iter()
            .map(|employee| employee.name)
            .collect();
        info!("Found {} highest earning employees: {:?}", employee_names.len(), employee_names);
        Ok(employee_names)
    }

    /// Coerces the field-bag, assigns a fresh id and stores the employee.
    pub async fn create_employee(
        &self,
        employee_input: &Map<String, Value>,
    ) -> Result<Employee, AppError> {
        let invalid = || AppError::invalid_employee_input(&Value::Object(employee_input.clone()));

        let new_employee = NewEmployee::from_field_bag(employee_input).map_err(|reason| {
            let err = invalid();
            info!("{} ({})", err.message(), reason);
            err
        })?;

        let id = Uuid::new_v4().to_string();
        let employee = new_employee.into_employee(id).ok_or_else(invalid)?;

        let employee = self.repository.save(&employee).await?;
        info!("Created employee: {:?}", employee);
        Ok(employee)
    }

    /// Removes the employee and returns its name.
    pub async fn delete_employee_by_id(&self, id: &str) -> Result<String, AppError> {
        let employee = self.find_employee_by_id(id).await?;
        self.repository.delete_by_id(id).await?;
        info!("Deleted employee {}: {:?}", id, employee);
        Ok(employee.name)
    }

    async fn find_employee_by_id(&self, id: &str) -> Result<Employee, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::employee_not_found(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::InMemoryEmployeeRepository;
    use serde_json::json;

    fn service() -> EmployeeService {
        EmployeeService::new(Arc::new(InMemoryEmployeeRepository::new()))
    }

    fn input(name: &str, salary: i32) -> Map<String, Value> {
        match json!({ "name": name, "salary": salary, "age": "30" }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[tokio::test]
    async fn create_assigns_distinct_ids() {
        let service = service();

        let first = service.create_employee(&input("A", 1)).await.unwrap();
        let second = service.create_employee(&input("A", 1)).await.unwrap();

        assert_ne!(first.id, second.id);
        assert!(Uuid::parse_str(&first.id).is_ok());
        assert_eq!(service.get_all_employees().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn create_rejects_bad_salary_with_input_in_message() {
        let mut bad = input("Test Name", 0);
        bad.insert("salary".to_string(), json!("Wrong"));

        let err = service().create_employee(&bad).await.unwrap_err();

        match err {
            AppError::Validation(msg) => {
                assert!(msg.starts_with("Cannot create employee with invalid input: "));
                assert!(msg.contains("\"Wrong\""));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn delete_returns_name_then_not_found() {
        let service = service();
        let created = service.create_employee(&input("Delete Me", 5)).await.unwrap();

        assert_eq!(service.delete_employee_by_id(&created.id).await.unwrap(), "Delete Me");
        assert_eq!(
            service.delete_employee_by_id(&created.id).await.unwrap_err(),
            AppError::employee_not_found(&created.id)
        );
    }

    #[tokio::test]
    async fn highest_salary_on_empty_store_is_not_found() {
        let err = service().get_highest_salary_of_employees().await.unwrap_err();

        assert_eq!(err, AppError::NotFound("Could not find any employees.".to_string()));
    }
}
