use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};
use log::info;
use serde_json::{Map, Value};
use crate::errors::AppError;
use crate::services::employee::EmployeeService;

pub async fn get_all_employees(
    service: web::Data<EmployeeService>,
) -> Result<HttpResponse, AppError> {
    info!("Retrieving all employees");
    let employees = service.get_all_employees().await?;
    Ok(HttpResponse::Ok().json(employees))
}

pub async fn get_employees_by_name_search(
    service: web::Data<EmployeeService>,
    search_string: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let search_string = search_string.into_inner();
    info!("Retrieving employees with name containing: {}", search_string);
    let employees = service.get_employees_by_name_search(&search_string).await?;
    Ok(HttpResponse::Ok().json(employees))
}

pub async fn get_employee_by_id(
    service: web::Data<EmployeeService>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    info!("Retrieving employee with ID: {}", id);
    let employee = service.get_employee_by_id(&id).await?;
    Ok(HttpResponse::Ok().json(employee))
}

pub async fn get_highest_salary_of_employees(
    service: web::Data<EmployeeService>,
) -> Result<HttpResponse, AppError> {
    info!("Retrieving highest salary.");
    let salary = service.get_highest_salary_of_employees().await?;
    Ok(HttpResponse::Ok().json(salary))
}

pub async fn get_top_ten_highest_earning_employee_names(
    service: web::Data<EmployeeService>,
) -> Result<HttpResponse, AppError> {
    info!("Retrieving names of top ten highest earning employees.");
    let names = service.get_top_ten_highest_earning_employee_names().await?;
    Ok(HttpResponse::Ok().json(names))
}

pub async fn create_employee(
    service: web::Data<EmployeeService>,
    employee_input: web::Json<Map<String, Value>>,
) -> Result<HttpResponse, AppError> {
    let employee_input = employee_input.into_inner();
    info!("Creating employee with attributes: {}", Value::Object(employee_input.clone()));
    let employee = service.create_employee(&employee_input).await?;
    Ok(HttpResponse::Ok().json(employee))
}

pub async fn delete_employee_by_id(
    service: web::Data<EmployeeService>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    info!("Deleting employee with ID: {}", id);
    let name = service.delete_employee_by_id(&id).await?;
    Ok(HttpResponse::Ok().content_type(ContentType::plaintext()).body(name))
}
