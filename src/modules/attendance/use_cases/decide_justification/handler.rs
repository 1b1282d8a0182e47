use crate::modules::attendance::adapters::outbound::record_commit::{RecordKey, commit_decision};
use crate::modules::attendance::core::record::DailyAttendanceRecord;
use crate::modules::attendance::use_cases::decide_justification::command::DecideJustification;
use crate::modules::attendance::use_cases::decide_justification::decide::{
    authorize, decide_justification,
};
use crate::modules::attendance::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::record_store::AttendanceRecordStore;
use std::sync::Arc;
use tracing::{info, warn};

pub struct DecideJustificationHandler<TStore>
where
    TStore: AttendanceRecordStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> DecideJustificationHandler<TStore>
where
    TStore: AttendanceRecordStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        command: DecideJustification,
    ) -> Result<DailyAttendanceRecord, ApplicationError> {
        if let Err(refused) = authorize(&command) {
            warn!(
                record_id = %command.record_id,
                kind = %command.kind,
                "decision without supervisor role"
            );
            return Err(refused.into());
        }

        let result = commit_decision(&*self.store, RecordKey::Id(command.record_id), |record| {
            decide_justification(record, &command).map_err(ApplicationError::from)
        })
        .await;

        match &result {
            Ok(_) => info!(
                record_id = %command.record_id,
                kind = %command.kind,
                decision = ?command.decision,
                "justification decided"
            ),
            Err(error) => warn!(
                record_id = %command.record_id,
                kind = %command.kind,
                error = %error,
                "justification not decided"
            ),
        }
        result
    }
}
