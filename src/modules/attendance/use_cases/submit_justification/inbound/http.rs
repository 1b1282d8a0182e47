use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::attendance::adapters::inbound::http_support::{
    employee_id, error_body, error_response,
};
use crate::modules::attendance::core::record::JustificationKind;
use crate::modules::attendance::use_cases::submit_justification::command::SubmitJustification;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitJustificationBody {
    pub record_id: Uuid,
    pub kind: JustificationKind,
    pub text: String,
}

pub async fn handle(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<SubmitJustificationBody>, JsonRejection>,
) -> impl IntoResponse {
    let Some(employee_id) = employee_id(&headers) else {
        return error_body(StatusCode::UNAUTHORIZED, "missing employee identity");
    };
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            return error_body(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text());
        }
    };

    let command = SubmitJustification {
        employee_id,
        record_id: body.record_id,
        kind: body.kind,
        text: body.text,
    };
    match state.submit_justification.handle(command).await {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}
