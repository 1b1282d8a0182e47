use crate::modules::attendance::use_cases::compute_monthly::aggregate::{
    AggregateStats, aggregate_month,
};
use crate::modules::attendance::use_cases::errors::ApplicationError;
use crate::shared::core::primitives::YearMonth;
use crate::shared::infrastructure::record_store::AttendanceRecordStore;
use std::sync::Arc;
use tracing::{debug, error};

/// Reporting entry point. Each employee is aggregated from one fetch of the month.
pub struct MonthlyReportHandler<TStore>
where
    TStore: AttendanceRecordStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> MonthlyReportHandler<TStore>
where
    TStore: AttendanceRecordStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn compute(
        &self,
        employee_id: &str,
        year_month: YearMonth,
    ) -> Result<AggregateStats, ApplicationError> {
        let records = match self
            .store
            .list_by_employee(employee_id, year_month.range())
            .await
        {
            Ok(records) => records,
            Err(e) => {
                error!(
                    employee_id,
                    year = year_month.year(),
                    month = year_month.month(),
                    error = %e,
                    "monthly fetch failed"
                );
                return Err(e.into());
            }
        };
        debug!(
            employee_id,
            year = year_month.year(),
            month = year_month.month(),
            records = records.len(),
            "aggregating month"
        );
        Ok(aggregate_month(employee_id, year_month, &records))
    }

    pub async fn compute_team(
        &self,
        employee_ids: &[String],
        year_month: YearMonth,
    ) -> Result<Vec<AggregateStats>, ApplicationError> {
        let mut stats = Vec::with_capacity(employee_ids.len());
        for employee_id in employee_ids {
            stats.push(self.compute(employee_id, year_month).await?);
        }
        Ok(stats)
    }
}
