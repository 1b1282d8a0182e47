use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::attendance::adapters::inbound::http_support::{
    error_body, error_response, role,
};
use crate::modules::attendance::core::events::JustificationDecision;
use crate::modules::attendance::core::record::JustificationKind;
use crate::modules::attendance::use_cases::decide_justification::command::{
    DecideJustification, Role,
};
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecideJustificationBody {
    pub record_id: Uuid,
    pub kind: JustificationKind,
    pub decision: JustificationDecision,
}

pub async fn handle(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<DecideJustificationBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            return error_body(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text());
        }
    };

    let command = DecideJustification {
        record_id: body.record_id,
        kind: body.kind,
        decision: body.decision,
        decided_by: role(&headers).and_then(Role::parse),
    };
    match state.decide_justification.handle(command).await {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}
