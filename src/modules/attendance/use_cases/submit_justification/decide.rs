// Pure decision function for submitting a justification.
//
// Responsibilities
// - Only a day that calls for it can be justified: an absence for an absence,
//   a lateness above the significant threshold for a lateness.
// - Each kind is submitted once: `none -> pending`, never again afterwards.

use crate::modules::attendance::core::events::AttendanceEvent;
use crate::modules::attendance::core::justification::JustificationError;
use crate::modules::attendance::core::record::{DailyAttendanceRecord, JustificationStatus};
use crate::modules::attendance::use_cases::submit_justification::command::SubmitJustification;

pub fn decide_submit_justification(
    record: &DailyAttendanceRecord,
    command: &SubmitJustification,
) -> Result<AttendanceEvent, JustificationError> {
    let kind = command.kind;
    if !record.calls_for_justification(kind) {
        return Err(JustificationError::NotEligible { kind });
    }
    let (text, status) = record.justification(kind);
    if text.is_some() || status != JustificationStatus::None {
        return Err(JustificationError::AlreadySubmitted { kind });
    }
    let text = command.text.trim();
    if text.is_empty() {
        return Err(JustificationError::BlankJustification);
    }
    Ok(AttendanceEvent::JustificationSubmitted {
        kind,
        text: text.to_string(),
    })
}
