// Shared pieces of the HTTP inbound adapters.
//
// The caller identity comes from headers set by the identity provider in front
// of this service; this adapter only reads them.

use crate::modules::attendance::core::justification::JustificationError;
use crate::modules::attendance::use_cases::errors::ApplicationError;
use axum::{
    Json,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};

pub const EMPLOYEE_HEADER: &str = "x-employee-id";
pub const ROLE_HEADER: &str = "x-role";

pub fn employee_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get(EMPLOYEE_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

pub fn role(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(ROLE_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
}

pub fn error_body(status: StatusCode, reason: impl Into<String>) -> Response {
    (status, Json(serde_json::json!({ "error": reason.into() }))).into_response()
}

pub fn error_response(error: ApplicationError) -> Response {
    let status = match &error {
        ApplicationError::Gate(_) => StatusCode::CONFLICT,
        ApplicationError::Justification(JustificationError::NotAuthorized) => StatusCode::FORBIDDEN,
        ApplicationError::Justification(_) => StatusCode::CONFLICT,
        ApplicationError::NotFound => StatusCode::NOT_FOUND,
        ApplicationError::StoreUnavailable(_) | ApplicationError::Contention { .. } => {
            StatusCode::SERVICE_UNAVAILABLE
        }
    };
    error_body(status, error.to_string())
}
