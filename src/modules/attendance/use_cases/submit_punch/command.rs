// Command data type for punching the clock.
//
// Carries who punches and which punch. The time never comes from the caller:
// the handler reads it from the server clock.

use crate::modules::attendance::core::punch::PunchType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitPunch {
    pub employee_id: String,
    pub punch_type: PunchType,
}
