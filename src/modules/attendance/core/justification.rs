use crate::modules::attendance::core::record::{JustificationKind, JustificationStatus};

/// Why the justification workflow refused a submission or a decision.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum JustificationError {
    #[error("no {kind} to justify on this day")]
    NotEligible { kind: JustificationKind },

    #[error("a {kind} justification was already submitted")]
    AlreadySubmitted { kind: JustificationKind },

    #[error("{kind} justification is {status}, not pending")]
    NotPending {
        kind: JustificationKind,
        status: JustificationStatus,
    },

    #[error("justification text must not be blank")]
    BlankJustification,

    #[error("only a supervisor may decide on a justification")]
    NotAuthorized,
}
