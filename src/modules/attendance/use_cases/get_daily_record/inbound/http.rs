use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use chrono::NaiveDate;

use crate::modules::attendance::adapters::inbound::http_support::{
    employee_id, error_body, error_response,
};
use crate::shell::state::AppState;

pub async fn handle_today(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    let Some(employee_id) = employee_id(&headers) else {
        return error_body(StatusCode::UNAUTHORIZED, "missing employee identity");
    };
    match state.daily_records.today(&employee_id).await {
        Ok(record) => Json(record).into_response(),
        Err(error) => error_response(error),
    }
}

pub async fn handle_for_day(
    State(state): State<AppState>,
    Path((employee_id, date)): Path<(String, NaiveDate)>,
) -> impl IntoResponse {
    match state.daily_records.for_day(&employee_id, date).await {
        Ok(record) => Json(record).into_response(),
        Err(error) => error_response(error),
    }
}
