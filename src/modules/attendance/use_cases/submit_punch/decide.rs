// Pure decision function for a punch.
//
// Responsibilities
// - Check the punch against today's record and the server time, rule by rule,
//   in a fixed order per punch type. The first failing rule is the answer.
// - Emit PunchRecorded on success. Never perform input or output.

use crate::modules::attendance::core::events::AttendanceEvent;
use crate::modules::attendance::core::gate::GateError;
use crate::modules::attendance::core::punch::PunchType;
use crate::modules::attendance::core::record::DailyAttendanceRecord;
use crate::modules::attendance::use_cases::submit_punch::command::SubmitPunch;
use chrono::NaiveTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    /// The given punch must already be set.
    Requires(PunchType),
    /// The given punch must not be set yet.
    NotAfter(PunchType),
    /// The punched field itself must be unset.
    Unset,
    /// `now` must be inside the admission window.
    Window,
}

fn admission_rules(punch: PunchType) -> &'static [Rule] {
    match punch {
        PunchType::Arrival => &[Rule::Unset, Rule::Window],
        PunchType::BreakOut => &[
            Rule::Requires(PunchType::Arrival),
            Rule::NotAfter(PunchType::Departure),
            Rule::Unset,
            Rule::Window,
        ],
        PunchType::BreakIn => &[
            Rule::Requires(PunchType::BreakOut),
            Rule::Unset,
            Rule::NotAfter(PunchType::Departure),
        ],
        PunchType::Departure => &[
            Rule::Requires(PunchType::Arrival),
            Rule::Unset,
            Rule::Window,
        ],
    }
}

fn check(
    rule: Rule,
    record: &DailyAttendanceRecord,
    punch: PunchType,
    now: NaiveTime,
) -> Result<(), GateError> {
    match rule {
        Rule::Requires(requires) if record.punch(requires).is_none() => {
            Err(GateError::MissingPriorPunch { punch, requires })
        }
        Rule::NotAfter(conflicts_with) if record.punch(conflicts_with).is_some() => {
            Err(GateError::SequenceViolation {
                punch,
                conflicts_with,
            })
        }
        Rule::Unset if record.punch(punch).is_some() => Err(GateError::AlreadyPunched { punch }),
        Rule::Window => match punch.admission_window() {
            Some(opens_at) if !opens_at.admits(now) => Err(GateError::TooEarly { punch, opens_at }),
            _ => Ok(()),
        },
        _ => Ok(()),
    }
}

pub fn decide_punch(
    record: &DailyAttendanceRecord,
    command: &SubmitPunch,
    now: NaiveTime,
) -> Result<AttendanceEvent, GateError> {
    let punch = command.punch_type;
    for rule in admission_rules(punch) {
        check(*rule, record, punch, now)?;
    }
    // Keep the day's punches in order even if the clock was moved back.
    if let Some(conflicts_with) = punch
        .earlier()
        .iter()
        .copied()
        .find(|earlier| record.punch(*earlier).is_some_and(|t| t > now))
    {
        return Err(GateError::SequenceViolation {
            punch,
            conflicts_with,
        });
    }
    Ok(AttendanceEvent::PunchRecorded {
        punch_type: punch,
        at: now,
    })
}
