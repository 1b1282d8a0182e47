use crate::modules::attendance::core::record::{
    DailyAttendanceRecord, JustificationKind, JustificationStatus,
};
use crate::modules::attendance::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::record_store::AttendanceRecordStore;
use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

/// One entry of the supervisor work queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingJustification {
    pub record_id: Uuid,
    pub employee_id: String,
    pub date: NaiveDate,
    pub kind: JustificationKind,
    pub text: String,
    pub late_minutes: u32,
}

fn pending_entries(
    record: &DailyAttendanceRecord,
) -> impl Iterator<Item = PendingJustification> + '_ {
    [JustificationKind::Lateness, JustificationKind::Absence]
        .into_iter()
        .filter_map(move |kind| match record.justification(kind) {
            (text, JustificationStatus::Pending) => Some(PendingJustification {
                record_id: record.record_id,
                employee_id: record.employee_id.clone(),
                date: record.date,
                kind,
                text: text.unwrap_or_default().to_string(),
                late_minutes: record.late_minutes,
            }),
            _ => None,
        })
}

pub struct PendingJustificationQueries<TStore>
where
    TStore: AttendanceRecordStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> PendingJustificationQueries<TStore>
where
    TStore: AttendanceRecordStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<PendingJustification>, ApplicationError> {
        let records = self.store.list_pending_justifications().await?;
        Ok(records.iter().flat_map(pending_entries).collect())
    }
}
