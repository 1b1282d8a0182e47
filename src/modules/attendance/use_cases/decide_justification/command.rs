// Command data type for a supervisor verdict on a pending justification.

use crate::modules::attendance::core::events::JustificationDecision;
use crate::modules::attendance::core::record::JustificationKind;
use uuid::Uuid;

/// Caller role as resolved by the identity provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Employee,
    Supervisor,
}

impl Role {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "employee" => Some(Role::Employee),
            "supervisor" => Some(Role::Supervisor),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecideJustification {
    pub record_id: Uuid,
    pub kind: JustificationKind,
    pub decision: JustificationDecision,
    pub decided_by: Option<Role>,
}
