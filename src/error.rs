use std::collections::HashMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Not found")]
    NotFound,

    #[error("Forbidden")]
    Forbidden,

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<recipebook_shared::Error> for AppError {
    fn from(err: recipebook_shared::Error) -> Self {
        match err {
            recipebook_shared::Error::Validate(errors) => AppError::Validation(errors),
            recipebook_shared::Error::NotFound => AppError::NotFound,
            recipebook_shared::Error::Forbidden => AppError::Forbidden,
            recipebook_shared::Error::Server(msg) => AppError::Internal(anyhow::anyhow!(msg)),
            recipebook_shared::Error::Unknown(err) => AppError::Internal(err),
        }
    }
}

/// Field name to human readable messages.
fn field_messages(errors: &validator::ValidationErrors) -> HashMap<String, Vec<String>> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errors)| {
            let messages = errors
                .iter()
                .map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("Invalid value ({})", e.code),
                })
                .collect();

            (field.to_string(), messages)
        })
        .collect()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({
                    "error": "ValidationFailed",
                    "message": "Invalid input",
                    "fields": field_messages(&errors),
                })),
            )
                .into_response(),
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({"error": "NotFound", "message": "Not found"})),
            )
                .into_response(),
            AppError::Forbidden => (
                StatusCode::FORBIDDEN,
                Json(json!({"error": "Forbidden", "message": "Forbidden"})),
            )
                .into_response(),
            AppError::Internal(err) => {
                tracing::error!(err = %err, "Request failed");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "InternalError",
                        "message": "Something went wrong, please retry later",
                    })),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::{ValidationError, ValidationErrors};

    #[test]
    fn test_status_codes() {
        let mut errors = ValidationErrors::new();
        errors.add("min_servings", ValidationError::new("servings_range"));

        assert_eq!(
            AppError::Validation(errors).into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::from(recipebook_shared::Error::NotFound)
                .into_response()
                .status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::from(recipebook_shared::Error::Forbidden)
                .into_response()
                .status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::Internal(anyhow::anyhow!("boom"))
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_field_messages() {
        let mut errors = ValidationErrors::new();
        errors.add(
            "min_servings",
            ValidationError::new("servings_range").with_message("Too many".into()),
        );
        errors.add("max_servings", ValidationError::new("range"));

        let fields = field_messages(&errors);
        assert_eq!(fields["min_servings"], vec!["Too many".to_string()]);
        assert_eq!(fields["max_servings"], vec!["Invalid value (range)".to_string()]);
    }
}
