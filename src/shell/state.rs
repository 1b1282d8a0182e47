use crate::modules::attendance::use_cases::compute_monthly::handler::MonthlyReportHandler;
use crate::modules::attendance::use_cases::decide_justification::handler::DecideJustificationHandler;
use crate::modules::attendance::use_cases::get_daily_record::handler::DailyRecordQueries;
use crate::modules::attendance::use_cases::list_pending_justifications::handler::PendingJustificationQueries;
use crate::modules::attendance::use_cases::submit_justification::handler::SubmitJustificationHandler;
use crate::modules::attendance::use_cases::submit_punch::handler::SubmitPunchHandler;
use crate::shared::infrastructure::clock::Clock;
use crate::shared::infrastructure::record_store::in_memory::InMemoryRecordStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub submit_punch: Arc<SubmitPunchHandler<InMemoryRecordStore>>,
    pub submit_justification: Arc<SubmitJustificationHandler<InMemoryRecordStore>>,
    pub decide_justification: Arc<DecideJustificationHandler<InMemoryRecordStore>>,
    pub daily_records: Arc<DailyRecordQueries<InMemoryRecordStore>>,
    pub pending_justifications: Arc<PendingJustificationQueries<InMemoryRecordStore>>,
    pub monthly_reports: Arc<MonthlyReportHandler<InMemoryRecordStore>>,
}

impl AppState {
    /// Wires every use case onto one store and one clock.
    pub fn new(store: Arc<InMemoryRecordStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            submit_punch: Arc::new(SubmitPunchHandler::new(store.clone(), clock.clone())),
            submit_justification: Arc::new(SubmitJustificationHandler::new(store.clone())),
            decide_justification: Arc::new(DecideJustificationHandler::new(store.clone())),
            daily_records: Arc::new(DailyRecordQueries::new(store.clone(), clock)),
            pending_justifications: Arc::new(PendingJustificationQueries::new(store.clone())),
            monthly_reports: Arc::new(MonthlyReportHandler::new(store)),
        }
    }
}
