//! Crate-wide error type.
//!
//! Recoverable failures (authorization backend errors, post-hoc validation
//! failures, missing required fields) are reported as [`AppError`] values.
//! Contract violations such as an unsupported link source or a malformed
//! colour literal are not errors: they panic.

use serde::Serialize;
use serde_json::{Value, json};

use crate::model::MetaData;

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: ErrorInfo<'a>,
}

#[derive(Serialize)]
struct ErrorInfo<'a> {
    code: &'static str,
    message: String,
    details: &'a Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A stored value has the wrong format.
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// A field marked `required` holds no value.
    #[error("{field} is required")]
    Required { field: String, details: Value },

    /// The request context was denied access.
    #[error("{message}")]
    Unauthorized { message: String, details: Value },

    /// A collaborator (token store, page backend, ...) failed.
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    /// Builds the error reported when a required field is empty.
    pub fn required(meta: &MetaData) -> Self {
        Self::Required {
            field: meta.label().to_string(),
            details: json!({ "field": meta.name() }),
        }
    }

    pub fn unauthorized(message: impl Into<String>, details: Value) -> Self {
        Self::Unauthorized {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "validation_error",
            AppError::Required { .. } => "required",
            AppError::Unauthorized { .. } => "unauthorized",
            AppError::Internal { .. } => "internal_error",
        }
    }

    pub fn details(&self) -> &Value {
        match self {
            AppError::Validation { details, .. }
            | AppError::Required { details, .. }
            | AppError::Unauthorized { details, .. }
            | AppError::Internal { details, .. } => details,
        }
    }

    /// Renders the error as `{"error": {"code", "message", "details"}}`.
    pub fn to_json(&self) -> Value {
        let body = ErrorBody {
            error: ErrorInfo {
                code: self.code(),
                message: self.to_string(),
                details: self.details(),
            },
        };

        serde_json::to_value(body).unwrap_or_else(|_| json!({}))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_uses_label() {
        let meta = MetaData::parse("bg_color", "required|label=Background");
        let err = AppError::required(&meta);

        assert_eq!(err.to_string(), "Background is required");
        assert_eq!(err.code(), "required");
        assert_eq!(err.details()["field"], "bg_color");
    }

    #[test]
    fn test_to_json_shape() {
        let err = AppError::bad_request("Invalid hex web-color: #zz", json!({ "value": "#zz" }));
        let body = err.to_json();

        assert_eq!(body["error"]["code"], "validation_error");
        assert_eq!(body["error"]["message"], "Invalid hex web-color: #zz");
        assert_eq!(body["error"]["details"]["value"], "#zz");
    }

    #[test]
    fn test_codes_are_distinct() {
        let errors = [
            AppError::bad_request("a", json!({})),
            AppError::unauthorized("b", json!({})),
            AppError::internal("c", json!({})),
        ];
        let codes: Vec<_> = errors.iter().map(AppError::code).collect();

        assert_eq!(codes, ["validation_error", "unauthorized", "internal_error"]);
    }
}
