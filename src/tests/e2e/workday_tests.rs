// One employee, one week of March 2024: a late but complete day, an absent day,
// the justification round trip, and the month-end report.

use crate::modules::attendance::core::events::JustificationDecision;
use crate::modules::attendance::core::gate::GateError;
use crate::modules::attendance::core::justification::JustificationError;
use crate::modules::attendance::core::punch::PunchType;
use crate::modules::attendance::core::record::{
    AttendanceStatus, DailyAttendanceRecord, JustificationKind, JustificationStatus,
};
use crate::modules::attendance::use_cases::decide_justification::command::{
    DecideJustification, Role,
};
use crate::modules::attendance::use_cases::errors::ApplicationError;
use crate::modules::attendance::use_cases::submit_justification::command::SubmitJustification;
use crate::modules::attendance::use_cases::submit_punch::command::SubmitPunch;
use crate::shared::core::primitives::YearMonth;
use crate::shared::infrastructure::clock::fixed::FixedClock;
use crate::shared::infrastructure::record_store::AttendanceRecordStore;
use crate::shared::infrastructure::record_store::in_memory::InMemoryRecordStore;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::records::{DailyRecordBuilder, at, day, on};
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use rstest::{fixture, rstest};
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

const EMPLOYEE: &str = "emp-0001";

struct World {
    state: AppState,
    clock: Arc<FixedClock>,
    late_day: DailyAttendanceRecord,
    absent_day: DailyAttendanceRecord,
}

/// Lateness and absence arrive from upstream before any punch of the day.
#[fixture]
async fn before_each() -> World {
    let store = Arc::new(InMemoryRecordStore::new());
    let late_day = store
        .save(
            &DailyRecordBuilder::new()
                .date(day(2024, 3, 4))
                .late_minutes(25)
                .build(),
            0,
        )
        .await
        .unwrap();
    let absent_day = store
        .save(
            &DailyRecordBuilder::new()
                .record_id(Uuid::now_v7())
                .date(day(2024, 3, 5))
                .status(AttendanceStatus::Absent)
                .build(),
            0,
        )
        .await
        .unwrap();
    let clock = Arc::new(FixedClock::new(on(day(2024, 3, 4), at(5, 45, 0))));
    World {
        state: AppState::new(store, clock.clone()),
        clock,
        late_day,
        absent_day,
    }
}

async fn punch(
    world: &World,
    hour: u32,
    minute: u32,
    punch_type: PunchType,
) -> Result<DailyAttendanceRecord, ApplicationError> {
    world.clock.set(on(day(2024, 3, 4), at(hour, minute, 0)));
    world
        .state
        .submit_punch
        .handle(SubmitPunch {
            employee_id: EMPLOYEE.to_string(),
            punch_type,
        })
        .await
}

#[rstest]
#[tokio::test]
async fn it_should_carry_a_late_day_through_punches_justification_and_report(
    #[future] before_each: World,
) {
    let world = before_each.await;

    // Before the arrival window opens.
    assert!(matches!(
        punch(&world, 5, 45, PunchType::Arrival).await,
        Err(ApplicationError::Gate(GateError::TooEarly { .. }))
    ));

    punch(&world, 8, 25, PunchType::Arrival).await.unwrap();
    assert_eq!(
        punch(&world, 8, 26, PunchType::Arrival).await,
        Err(ApplicationError::Gate(GateError::AlreadyPunched {
            punch: PunchType::Arrival
        }))
    );
    punch(&world, 12, 30, PunchType::BreakOut).await.unwrap();
    punch(&world, 13, 15, PunchType::BreakIn).await.unwrap();
    let finished = punch(&world, 17, 30, PunchType::Departure).await.unwrap();

    assert_eq!(finished.record_id, world.late_day.record_id);
    assert_eq!(finished.arrival, Some(at(8, 25, 0)));
    assert_eq!(finished.departure, Some(at(17, 30, 0)));
    assert_eq!(finished.late_minutes, 25);

    let today = world.state.daily_records.today(EMPLOYEE).await.unwrap();
    assert_eq!(today, finished);

    // Lateness: submitted, refused to a plain employee, approved by a supervisor.
    world
        .state
        .submit_justification
        .handle(SubmitJustification {
            employee_id: EMPLOYEE.to_string(),
            record_id: world.late_day.record_id,
            kind: JustificationKind::Lateness,
            text: "train cancelled".to_string(),
        })
        .await
        .unwrap();
    // Absence: submitted and rejected.
    world
        .state
        .submit_justification
        .handle(SubmitJustification {
            employee_id: EMPLOYEE.to_string(),
            record_id: world.absent_day.record_id,
            kind: JustificationKind::Absence,
            text: "overslept".to_string(),
        })
        .await
        .unwrap();

    let pending = world.state.pending_justifications.list().await.unwrap();
    assert_eq!(pending.len(), 2);
    assert_eq!(pending[0].kind, JustificationKind::Lateness);
    assert_eq!(pending[1].kind, JustificationKind::Absence);

    let verdict = |record_id, kind, decision, decided_by| DecideJustification {
        record_id,
        kind,
        decision,
        decided_by,
    };
    assert_eq!(
        world
            .state
            .decide_justification
            .handle(verdict(
                world.late_day.record_id,
                JustificationKind::Lateness,
                JustificationDecision::Approved,
                Some(Role::Employee),
            ))
            .await,
        Err(ApplicationError::Justification(JustificationError::NotAuthorized))
    );
    let approved = world
        .state
        .decide_justification
        .handle(verdict(
            world.late_day.record_id,
            JustificationKind::Lateness,
            JustificationDecision::Approved,
            Some(Role::Supervisor),
        ))
        .await
        .unwrap();
    assert_eq!(approved.late_justification_status, JustificationStatus::Approved);
    world
        .state
        .decide_justification
        .handle(verdict(
            world.absent_day.record_id,
            JustificationKind::Absence,
            JustificationDecision::Rejected,
            Some(Role::Supervisor),
        ))
        .await
        .unwrap();
    assert!(world.state.pending_justifications.list().await.unwrap().is_empty());

    let march = YearMonth::new(2024, 3).unwrap();
    let stats = world.state.monthly_reports.compute(EMPLOYEE, march).await.unwrap();
    assert_eq!(stats.days_present, 1);
    // 09h05 on site minus a 45 minute break.
    assert_eq!(stats.total_hours, "8h20");
    assert_eq!(stats.days_absent, 1);
    assert_eq!(stats.justified_absences, 0);
    assert_eq!(stats.total_late, "0h25");
    assert_eq!(stats.justified_lates, 1);
    assert_eq!(stats.payable_hours, "8h00");
    assert_eq!(stats.unjustified_absence_hours, "8h00");
    assert_eq!(stats.justified_late_hours, "0h15");
    assert_eq!(stats.unjustified_late_hours, "0h00");
}

#[rstest]
#[tokio::test]
async fn it_should_serve_the_same_workday_over_http(#[future] before_each: World) {
    let world = before_each.await;
    let app = router(world.state.clone());

    for (hour, minute, punch_type) in [
        (8, 25, "arrival"),
        (12, 30, "breakOut"),
        (13, 30, "breakIn"),
        (17, 30, "departure"),
    ] {
        world.clock.set(on(day(2024, 3, 4), at(hour, minute, 0)));
        let response = app
            .clone()
            .oneshot(
                Request::post("/attendance/punches")
                    .header("content-type", "application/json")
                    .header("x-employee-id", EMPLOYEE)
                    .body(Body::from(format!(r#"{{"punchType":"{punch_type}"}}"#)))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{punch_type}");
    }

    let response = app
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
    assert_eq!(json["totalHeures"], "8h05");
    assert_eq!(json["retardsSignificatifs"], 1);
    assert_eq!(json["retardsNonJustifiesHeures"], "0h15");
}
