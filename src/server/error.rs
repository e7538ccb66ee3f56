use crate::errors::AppError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

use super::response::ErrorResponse;

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            e if e.is_validation() => StatusCode::BAD_REQUEST,
            e if e.is_not_found() => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Server-side failures are logged and answered with a generic message.
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let error = if status.is_server_error() {
            log::error!("{self}");
            "Internal Server Error".to_string()
        } else {
            log::warn!("{status}: {self}");
            self.to_string()
        };
        HttpResponse::build(status).json(ErrorResponse { error })
    }
}
