// Pure decision function for a supervisor verdict.
//
// `pending -> approved | rejected` is the only accepted transition; both
// outcomes are final. The caller must present the supervisor role.

use crate::modules::attendance::core::events::AttendanceEvent;
use crate::modules::attendance::core::justification::JustificationError;
use crate::modules::attendance::core::record::{DailyAttendanceRecord, JustificationStatus};
use crate::modules::attendance::use_cases::decide_justification::command::{
    DecideJustification, Role,
};

pub fn authorize(command: &DecideJustification) -> Result<(), JustificationError> {
    match command.decided_by {
        Some(Role::Supervisor) => Ok(()),
        _ => Err(JustificationError::NotAuthorized),
    }
}

pub fn decide_justification(
    record: &DailyAttendanceRecord,
    command: &DecideJustification,
) -> Result<AttendanceEvent, JustificationError> {
    authorize(command)?;
    let kind = command.kind;
    let (_, status) = record.justification(kind);
    if status != JustificationStatus::Pending {
        return Err(JustificationError::NotPending { kind, status });
    }
    Ok(AttendanceEvent::JustificationDecided {
        kind,
        decision: command.decision,
    })
}
