use crate::modules::attendance::adapters::outbound::record_commit::{RecordKey, commit_decision};
use crate::modules::attendance::core::record::DailyAttendanceRecord;
use crate::modules::attendance::use_cases::errors::ApplicationError;
use crate::modules::attendance::use_cases::submit_punch::command::SubmitPunch;
use crate::modules::attendance::use_cases::submit_punch::decide::decide_punch;
use crate::shared::infrastructure::clock::Clock;
use crate::shared::infrastructure::record_store::AttendanceRecordStore;
use std::sync::Arc;
use tracing::{error, info, warn};

pub struct SubmitPunchHandler<TStore>
where
    TStore: AttendanceRecordStore + 'static,
{
    store: Arc<TStore>,
    clock: Arc<dyn Clock>,
}

impl<TStore> SubmitPunchHandler<TStore>
where
    TStore: AttendanceRecordStore + 'static,
{
    pub fn new(store: Arc<TStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub async fn handle(
        &self,
        command: SubmitPunch,
    ) -> Result<DailyAttendanceRecord, ApplicationError> {
        let now = self.clock.now();
        let key = RecordKey::Day {
            employee_id: &command.employee_id,
            date: now.date(),
        };
        let result = commit_decision(&*self.store, key, |record| {
            decide_punch(record, &command, now.time()).map_err(ApplicationError::from)
        })
        .await;

        match &result {
            Ok(record) => info!(
                employee_id = %command.employee_id,
                record_id = %record.record_id,
                punch_type = %command.punch_type,
                at = %now.time(),
                "punch recorded"
            ),
            Err(ApplicationError::StoreUnavailable(reason)) => error!(
                employee_id = %command.employee_id,
                punch_type = %command.punch_type,
                error = %reason,
                "punch could not be stored"
            ),
            Err(rejection) => warn!(
                employee_id = %command.employee_id,
                punch_type = %command.punch_type,
                error = %rejection,
                "punch rejected"
            ),
        }
        result
    }
}
