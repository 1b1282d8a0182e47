use crate::modules::attendance::core::record::DailyAttendanceRecord;
use crate::modules::attendance::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::clock::Clock;
use crate::shared::infrastructure::record_store::AttendanceRecordStore;
use chrono::NaiveDate;
use std::sync::Arc;

/// Read access to single days. A day nobody punched is `NotFound`.
pub struct DailyRecordQueries<TStore>
where
    TStore: AttendanceRecordStore + 'static,
{
    store: Arc<TStore>,
    clock: Arc<dyn Clock>,
}

impl<TStore> DailyRecordQueries<TStore>
where
    TStore: AttendanceRecordStore + 'static,
{
    pub fn new(store: Arc<TStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub async fn for_day(
        &self,
        employee_id: &str,
        date: NaiveDate,
    ) -> Result<DailyAttendanceRecord, ApplicationError> {
        self.store
            .find_by_day(employee_id, date)
            .await?
            .ok_or(ApplicationError::NotFound)
    }

    pub async fn today(
        &self,
        employee_id: &str,
    ) -> Result<DailyAttendanceRecord, ApplicationError> {
        self.for_day(employee_id, self.clock.today()).await
    }
}
