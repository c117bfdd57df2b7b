use actix_web::http::{header::ContentType, StatusCode};
use actix_web::{HttpResponse, ResponseError};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    NotFound(String),
    Validation(String),
    DatabaseError(String),
}

impl AppError {
    pub fn employee_not_found(id: &str) -> Self {
        AppError::NotFound(format!("Could not find employee {}.", id))
    }

    pub fn invalid_employee_input(input: &serde_json::Value) -> Self {
        AppError::Validation(format!("Cannot create employee with invalid input: {}", input))
    }

    /// Message sent back to the caller. Database details stay in the logs.
    pub fn message(&self) -> &str {
        match self {
            AppError::NotFound(msg) | AppError::Validation(msg) => msg,
            AppError::DatabaseError(_) => "Internal Server Error",
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::Validation(msg) => write!(f, "Validation Failed: {}", msg),
            AppError::DatabaseError(msg) => write!(f, "Database Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

// Not-found is reported as 400 alongside validation failures.
impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type(ContentType::plaintext())
            .body(self.message().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::MessageBody;

    fn body_text(response: HttpResponse) -> String {
        let bytes = response.into_body().try_into_bytes().unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn not_found_maps_to_bad_request_with_plain_message() {
        let err = AppError::employee_not_found("abc");
        let response = err.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response), "Could not find employee abc.");
    }

    #[test]
    fn validation_maps_to_bad_request() {
        let input = serde_json::json!({ "salary": "Wrong" });
        let err = AppError::invalid_employee_input(&input);

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.message(),
            r#"Cannot create employee with invalid input: {"salary":"Wrong"}"#
        );
    }

    #[test]
    fn database_error_hides_detail() {
        let err = AppError::DatabaseError("connection refused".to_string());
        let response = err.error_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(response), "Internal Server Error");
        assert_eq!(err.to_string(), "Database Error: connection refused");
    }
}
