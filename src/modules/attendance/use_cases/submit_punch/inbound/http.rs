use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::attendance::adapters::inbound::http_support::{
    employee_id, error_body, error_response,
};
use crate::modules::attendance::core::punch::PunchType;
use crate::modules::attendance::use_cases::submit_punch::command::SubmitPunch;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitPunchBody {
    pub punch_type: PunchType,
}

pub async fn handle(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<SubmitPunchBody>, JsonRejection>,
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

    let command = SubmitPunch {
        employee_id,
        punch_type: body.punch_type,
    };
    match state.submit_punch.handle(command).await {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}
