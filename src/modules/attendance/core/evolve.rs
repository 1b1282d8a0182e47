use crate::modules::attendance::core::events::AttendanceEvent;
use crate::modules::attendance::core::punch::PunchType;
use crate::modules::attendance::core::record::{
    DailyAttendanceRecord, JustificationKind, JustificationStatus,
};

/// Apply an accepted event. Touches exactly the fields the event names.
pub fn evolve(mut record: DailyAttendanceRecord, event: AttendanceEvent) -> DailyAttendanceRecord {
    match event {
        AttendanceEvent::PunchRecorded { punch_type, at } => {
            let slot = match punch_type {
                PunchType::Arrival => &mut record.arrival,
                PunchType::BreakOut => &mut record.break_out,
                PunchType::BreakIn => &mut record.break_in,
                PunchType::Departure => &mut record.departure,
            };
            *slot = Some(at);
        }
        AttendanceEvent::JustificationSubmitted { kind, text } => match kind {
            JustificationKind::Lateness => {
                record.late_justification = Some(text);
                record.late_justification_status = JustificationStatus::Pending;
            }
            JustificationKind::Absence => {
                record.absence_justification = Some(text);
                record.absence_justification_status = JustificationStatus::Pending;
            }
        },
        AttendanceEvent::JustificationDecided { kind, decision } => match kind {
            JustificationKind::Lateness => record.late_justification_status = decision.into(),
            JustificationKind::Absence => record.absence_justification_status = decision.into(),
        },
    }
    record
}

#[cfg(test)]
mod attendance_evolve_tests {
    use super::*;
    use crate::modules::attendance::core::events::JustificationDecision;
    use crate::tests::fixtures::records::{DailyRecordBuilder, at};
    use rstest::{fixture, rstest};

    #[fixture]
    fn record() -> DailyAttendanceRecord {
        DailyRecordBuilder::new().build()
    }

    #[rstest]
    #[case(PunchType::Arrival)]
    #[case(PunchType::BreakOut)]
    #[case(PunchType::BreakIn)]
    #[case(PunchType::Departure)]
    fn it_should_set_only_the_punched_field(
        record: DailyAttendanceRecord,
        #[case] punch: PunchType,
    ) {
        let next = evolve(
            record.clone(),
            AttendanceEvent::PunchRecorded {
                punch_type: punch,
                at: at(13, 0, 0),
            },
        );
        for other in PunchType::ALL {
            if other == punch {
                assert_eq!(next.punch(other), Some(at(13, 0, 0)));
            } else {
                assert_eq!(next.punch(other), record.punch(other));
            }
        }
        assert_eq!(next.version, record.version);
        assert_eq!(next.status, record.status);
    }

    #[rstest]
    fn it_should_move_a_submitted_justification_to_pending(record: DailyAttendanceRecord) {
        let next = evolve(
            record,
            AttendanceEvent::JustificationSubmitted {
                kind: JustificationKind::Absence,
                text: "medical appointment".into(),
            },
        );
        assert_eq!(
            next.justification(JustificationKind::Absence),
            (Some("medical appointment"), JustificationStatus::Pending)
        );
        assert_eq!(
            next.justification(JustificationKind::Lateness),
            (None, JustificationStatus::None)
        );
    }

    #[rstest]
    fn it_should_record_the_decision_and_keep_the_text() {
        let record = DailyRecordBuilder::new()
            .late_minutes(30)
            .late_justification("train strike", JustificationStatus::Pending)
            .build();
        let next = evolve(
            record,
            AttendanceEvent::JustificationDecided {
                kind: JustificationKind::Lateness,
                decision: JustificationDecision::Rejected,
            },
        );
        assert_eq!(
            next.justification(JustificationKind::Lateness),
            (Some("train strike"), JustificationStatus::Rejected)
        );
    }
}
