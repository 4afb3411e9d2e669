use actix_web::HttpResponse;

use crate::dto::products::ErrorResponse;
use crate::services::ServiceError;

pub mod products;

/// Converts a service failure into a JSON error response.
///
/// Storage details are logged by the service layer and not sent to clients.
pub fn error_response(err: &ServiceError) -> HttpResponse {
    match err {
        ServiceError::InvalidSearch(message) => HttpResponse::BadRequest().json(ErrorResponse {
            error: format!("invalid search pattern: {message}"),
        }),
        ServiceError::Repository(_) => HttpResponse::InternalServerError().json(ErrorResponse {
            error: "internal server error".to_string(),
        }),
    }
}
