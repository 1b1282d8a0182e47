use crate::modules::attendance::core::events::AttendanceEvent;
use crate::modules::attendance::core::evolve::evolve;
use crate::modules::attendance::core::record::DailyAttendanceRecord;
use crate::modules::attendance::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::record_store::{AttendanceRecordStore, RecordStoreError};
use chrono::NaiveDate;
use tracing::warn;
use uuid::Uuid;

pub const MAX_WRITE_ATTEMPTS: u32 = 3;

/// How a use case addresses the record it mutates.
#[derive(Debug, Clone, Copy)]
pub enum RecordKey<'a> {
    /// Today's record of an employee, started blank when it does not exist yet.
    Day {
        employee_id: &'a str,
        date: NaiveDate,
    },
    /// An existing record; missing means `NotFound`.
    Id(Uuid),
}

async fn load<TStore>(
    store: &TStore,
    key: RecordKey<'_>,
) -> Result<DailyAttendanceRecord, ApplicationError>
where
    TStore: AttendanceRecordStore + ?Sized,
{
    match key {
        RecordKey::Day { employee_id, date } => Ok(store
            .find_by_day(employee_id, date)
            .await?
            .unwrap_or_else(|| DailyAttendanceRecord::blank(employee_id, date))),
        RecordKey::Id(record_id) => store
            .find_by_id(record_id)
            .await?
            .ok_or(ApplicationError::NotFound),
    }
}

/// Load, decide, apply and save with the loaded version as precondition.
///
/// When another writer got in between, the record is loaded again and the
/// decision re-run against it, so the loser of a race sees the winner's write
/// (a duplicate punch then fails with `AlreadyPunched`). A rejected decision or
/// a failed save leaves the store untouched.
pub async fn commit_decision<TStore, TDecide>(
    store: &TStore,
    key: RecordKey<'_>,
    mut decide: TDecide,
) -> Result<DailyAttendanceRecord, ApplicationError>
where
    TStore: AttendanceRecordStore + ?Sized,
    TDecide: FnMut(&DailyAttendanceRecord) -> Result<AttendanceEvent, ApplicationError>,
{
    for attempt in 1..=MAX_WRITE_ATTEMPTS {
        let current = load(store, key).await?;
        let event = decide(&current)?;
        let expected_version = current.version;
        let next = evolve(current, event);
        match store.save(&next, expected_version).await {
            Ok(saved) => return Ok(saved),
            Err(RecordStoreError::VersionMismatch { expected, actual }) => {
                warn!(
                    record_id = %next.record_id,
                    expected,
                    actual,
                    attempt,
                    "attendance record changed underneath, reloading"
                );
            }
            Err(error) => return Err(error.into()),
        }
    }
    Err(ApplicationError::Contention {
        attempts: MAX_WRITE_ATTEMPTS,
    })
}
