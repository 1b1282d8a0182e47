use axum::{Json, extract::State, response::IntoResponse};

use crate::modules::attendance::adapters::inbound::http_support::error_response;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.pending_justifications.list().await {
        Ok(entries) => Json(entries).into_response(),
        Err(error) => error_response(error),
    }
}
