// Command data type for an employee explaining a lateness or an absence.

use crate::modules::attendance::core::record::JustificationKind;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitJustification {
    pub employee_id: String,
    pub record_id: Uuid,
    pub kind: JustificationKind,
    pub text: String,
}
