use crate::modules::attendance::adapters::outbound::record_commit::{RecordKey, commit_decision};
use crate::modules::attendance::core::record::DailyAttendanceRecord;
use crate::modules::attendance::use_cases::errors::ApplicationError;
use crate::modules::attendance::use_cases::submit_justification::command::SubmitJustification;
use crate::modules::attendance::use_cases::submit_justification::decide::decide_submit_justification;
use crate::shared::infrastructure::record_store::AttendanceRecordStore;
use std::sync::Arc;
use tracing::{info, warn};

pub struct SubmitJustificationHandler<TStore>
where
    TStore: AttendanceRecordStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> SubmitJustificationHandler<TStore>
where
    TStore: AttendanceRecordStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        command: SubmitJustification,
    ) -> Result<DailyAttendanceRecord, ApplicationError> {
        let result = commit_decision(&*self.store, RecordKey::Id(command.record_id), |record| {
            // Someone else's day is reported exactly like a missing one.
            if record.employee_id != command.employee_id {
                return Err(ApplicationError::NotFound);
            }
            decide_submit_justification(record, &command).map_err(ApplicationError::from)
        })
        .await;

        match &result {
            Ok(_) => info!(
                employee_id = %command.employee_id,
                record_id = %command.record_id,
                kind = %command.kind,
                "justification submitted"
            ),
            Err(error) => warn!(
                employee_id = %command.employee_id,
                record_id = %command.record_id,
                kind = %command.kind,
                error = %error,
                "justification not submitted"
            ),
        }
        result
    }
}
