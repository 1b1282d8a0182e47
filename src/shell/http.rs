use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::attendance::use_cases::compute_monthly::inbound::http as monthly_http;
use crate::modules::attendance::use_cases::decide_justification::inbound::http as decide_http;
use crate::modules::attendance::use_cases::get_daily_record::inbound::http as daily_http;
use crate::modules::attendance::use_cases::list_pending_justifications::inbound::http as pending_http;
use crate::modules::attendance::use_cases::submit_justification::inbound::http as justify_http;
use crate::modules::attendance::use_cases::submit_punch::inbound::http as punch_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/attendance/punches", post(punch_http::handle))
        .route("/attendance/today", get(daily_http::handle_today))
        .route(
            "/attendance/records/{employee_id}/{date}",
            get(daily_http::handle_for_day),
        )
        .route("/attendance/justifications", post(justify_http::handle))
        .route(
            "/attendance/justifications/decisions",
            post(decide_http::handle),
        )
        .route(
            "/attendance/justifications/pending",
            get(pending_http::handle),
        )
        .route(
            "/attendance/monthly/{employee_id}/{year}/{month}",
            get(monthly_http::handle),
        )
        .with_state(state)
}
