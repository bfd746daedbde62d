use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::db::StoreError;

pub type Result<T> = std::result::Result<T, AppError>;

/// A single failed field in a rejected request body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Store error: {0}")]
    Database(#[from] StoreError),

    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    #[error("Authorization error: {0}")]
    Authorization(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Vec<FieldError>>,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Authorization(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let error_type = match self {
            AppError::Database(_) => "STORE_ERROR",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Authorization(_) => "AUTHORIZATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Conflict(_) => "CONFLICT",
            AppError::Upstream(_) => "UPSTREAM_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        };

        // Collaborator failures are logged for operators; callers only see a
        // generic message.
        let message = match self {
            AppError::Database(cause) => {
                tracing::error!(%cause, "document store failure");
                "Internal server error".to_string()
            }
            AppError::Upstream(cause) => {
                tracing::error!(%cause, "upstream collaborator failure");
                "Upstream service unavailable".to_string()
            }
            AppError::Internal(cause) => {
                tracing::error!(%cause, "internal error");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        let errors = match self {
            AppError::Validation(fields) => Some(fields.clone()),
            _ => None,
        };

        HttpResponse::build(status_code).json(ErrorResponse {
            error: error_type.to_string(),
            message,
            errors,
        })
    }
}

// Convert validator errors to the structured field list
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let fields = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| FieldError {
                    field: field.to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field)),
                })
            })
            .collect();

        AppError::Validation(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Debug, Validate)]
    struct Dto {
        #[validate(length(min = 1, message = "Status is required"))]
        status: String,
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::NotFound("profile".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Conflict("already liked".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::Authorization("not the owner".into()).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::Validation(vec![]).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_validator_errors_become_field_list() {
        let err = Dto {
            status: String::new(),
        }
        .validate()
        .unwrap_err();

        match AppError::from(err) {
            AppError::Validation(fields) => {
                assert_eq!(fields.len(), 1);
                assert_eq!(fields[0].field, "status");
                assert_eq!(fields[0].message, "Status is required");
            }
            other => panic!("expected Validation, got {:?}", other),
        }
    }
}
