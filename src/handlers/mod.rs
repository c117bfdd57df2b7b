pub mod employee;

use actix_web::error::JsonPayloadError;
use actix_web::{web, HttpRequest};
use log::info;
use crate::errors::AppError;

/// A create body that is not a JSON object is a validation failure like any
/// other bad input.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    info!("Rejected employee payload: {}", err);
    AppError::Validation(format!("Cannot create employee with invalid input: {}", err)).into()
}

/// Registers the employee routes. The fixed aggregate paths come before
/// `/{id}` so they are not captured as ids.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(
            web::resource("/")
                .route(web::get().to(employee::get_all_employees))
                .route(web::post().to(employee::create_employee)),
        )
        .service(
            web::resource("/search/{search_string}")
                .route(web::get().to(employee::get_employees_by_name_search)),
        )
        .service(
            web::resource("/highestSalary")
                .route(web::get().to(employee::get_highest_salary_of_employees)),
        )
        .service(
            web::resource("/topTenHighestEarningEmployeeNames")
                .route(web::get().to(employee::get_top_ten_highest_earning_employee_names)),
        )
        .service(
            web::resource("/{id}")
                .route(web::get().to(employee::get_employee_by_id))
                .route(web::delete().to(employee::delete_employee_by_id)),
        );
}
