use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Db(sqlx::Error),
    Session(String),
    Unauthorized,
    Forbidden(String),
    OrganizationNotFound,
}

/// Wire envelope for error responses: `{"error": {"code", "message"}}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl ErrorBody {
    pub fn new(code: &str, message: &str) -> Self {
        ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message: message.to_string(),
            },
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Db(e) => write!(f, "Database error: {e}"),
            AppError::Session(e) => write!(f, "Session error: {e}"),
            AppError::Unauthorized => write!(f, "Unauthorized"),
            AppError::Forbidden(role) => write!(f, "Forbidden: requires the {role} role"),
            AppError::OrganizationNotFound => write!(f, "Organization not found"),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::OrganizationNotFound => HttpResponse::NotFound().json(ErrorBody::new(
                "ORGANIZATION_NOT_FOUND",
                "No organization profile found for this user.",
            )),
            AppError::Unauthorized => HttpResponse::Unauthorized()
                .json(ErrorBody::new("UNAUTHORIZED", "Authentication required.")),
            AppError::Forbidden(role) => HttpResponse::Forbidden().json(ErrorBody::new(
                "FORBIDDEN",
                &format!("This endpoint requires the {role} role."),
            )),
            _ => {
                log::error!("{self}");
                HttpResponse::InternalServerError()
                    .json(ErrorBody::new("INTERNAL_ERROR", "Internal Server Error"))
            }
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::Db(e)
    }
}
