// Why the punch gate refused a punch.

use crate::modules::attendance::core::punch::{AdmissionWindow, PunchType};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GateError {
    #[error("{punch} already punched today")]
    AlreadyPunched { punch: PunchType },

    #[error("{punch} is not accepted before {opens_at}")]
    TooEarly {
        punch: PunchType,
        opens_at: AdmissionWindow,
    },

    #[error("{punch} requires {requires} first")]
    MissingPriorPunch {
        punch: PunchType,
        requires: PunchType,
    },

    #[error("{punch} is out of sequence with {conflicts_with}")]
    SequenceViolation {
        punch: PunchType,
        conflicts_with: PunchType,
    },
}
