use crate::modules::attendance::core::punch::PunchType;
use crate::modules::attendance::core::record::{JustificationKind, JustificationStatus};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Supervisor verdict on a pending justification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JustificationDecision {
    Approved,
    Rejected,
}

impl From<JustificationDecision> for JustificationStatus {
    fn from(decision: JustificationDecision) -> Self {
        match decision {
            JustificationDecision::Approved => JustificationStatus::Approved,
            JustificationDecision::Rejected => JustificationStatus::Rejected,
        }
    }
}

/// What a decider accepted. Applied to a record with `evolve`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AttendanceEvent {
    PunchRecorded {
        punch_type: PunchType,
        at: NaiveTime,
    },
    JustificationSubmitted {
        kind: JustificationKind,
        text: String,
    },
    JustificationDecided {
        kind: JustificationKind,
        decision: JustificationDecision,
    },
}
