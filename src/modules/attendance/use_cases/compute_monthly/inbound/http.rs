use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::attendance::adapters::inbound::http_support::{error_body, error_response};
use crate::shared::core::primitives::YearMonth;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path((employee_id, year, month)): Path<(String, i32, u32)>,
) -> impl IntoResponse {
    let Some(year_month) = YearMonth::new(year, month) else {
        return error_body(
            StatusCode::BAD_REQUEST,
            format!("invalid month {year}-{month}"),
        );
    };
    match state.monthly_reports.compute(&employee_id, year_month).await {
        Ok(stats) => Json(stats).into_response(),
        Err(error) => error_response(error),
    }
}

#[cfg(test)]
mod compute_monthly_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::shared::infrastructure::clock::fixed::FixedClock;
    use crate::shared::infrastructure::record_store::AttendanceRecordStore;
    use crate::shared::infrastructure::record_store::in_memory::InMemoryRecordStore;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::records::{DailyRecordBuilder, at, day, on};

    use super::handle;

    async fn app() -> Router {
        let store = Arc::new(InMemoryRecordStore::new());
        store
            .save(&DailyRecordBuilder::new().full_day().build(), 0)
            .await
            .unwrap();
        let clock = Arc::new(FixedClock::new(on(day(2024, 3, 31), at(20, 0, 0))));
        Router::new()
            .route(
                "/attendance/monthly/{employee_id}/{year}/{month}",
                get(handle),
            )
            .with_state(AppState::new(store, clock))
    }

    #[tokio::test]
    async fn it_should_return_200_with_report_keys() {
        let response = app()
            .await
            .oneshot(
                Request::get("/attendance/monthly/emp-0001/2024/3")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["employeeId"], "emp-0001");
        assert_eq!(json["joursPresent"], 1);
        assert_eq!(json["totalHeures"], "8h00");
        assert_eq!(json["heuresTheoriques"], "8h00");
    }

    #[tokio::test]
    async fn it_should_return_400_for_month_thirteen() {
        let response = app()
            .await
            .oneshot(
                Request::get("/attendance/monthly/emp-0001/2024/13")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
