// DailyAttendanceRecord is the canonical state of one employee's day.
//
// Boundaries
// - No input or output here.
// - `late_minutes` is computed upstream of this crate and only read here.
// - `version` belongs to the record store; 0 means the record was never persisted.

use crate::modules::attendance::core::punch::PunchType;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lateness strictly above this many minutes is significant.
pub const SIGNIFICANT_LATENESS_MINUTES: u32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    #[default]
    Present,
    Absent,
    Holiday,
    Weekend,
}

impl AttendanceStatus {
    /// Holidays and weekends are outside lateness and absence logic.
    pub fn is_working_day(&self) -> bool {
        matches!(self, AttendanceStatus::Present | AttendanceStatus::Absent)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum JustificationStatus {
    #[default]
    None,
    Pending,
    Approved,
    Rejected,
}

impl std::fmt::Display for JustificationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            JustificationStatus::None => "none",
            JustificationStatus::Pending => "pending",
            JustificationStatus::Approved => "approved",
            JustificationStatus::Rejected => "rejected",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JustificationKind {
    Lateness,
    Absence,
}

impl std::fmt::Display for JustificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JustificationKind::Lateness => f.write_str("lateness"),
            JustificationKind::Absence => f.write_str("absence"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyAttendanceRecord {
    pub record_id: Uuid,
    pub employee_id: String,
    pub date: NaiveDate,
    pub arrival: Option<NaiveTime>,
    pub break_out: Option<NaiveTime>,
    pub break_in: Option<NaiveTime>,
    pub departure: Option<NaiveTime>,
    pub late_minutes: u32,
    pub status: AttendanceStatus,
    pub late_justification: Option<String>,
    pub late_justification_status: JustificationStatus,
    pub absence_justification: Option<String>,
    pub absence_justification_status: JustificationStatus,
    pub version: i64,
}

impl DailyAttendanceRecord {
    /// The record a first punch of the day starts from.
    pub fn blank(employee_id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            record_id: Uuid::now_v7(),
            employee_id: employee_id.into(),
            date,
            arrival: None,
            break_out: None,
            break_in: None,
            departure: None,
            late_minutes: 0,
            status: AttendanceStatus::Present,
            late_justification: None,
            late_justification_status: JustificationStatus::None,
            absence_justification: None,
            absence_justification_status: JustificationStatus::None,
            version: 0,
        }
    }

    pub fn punch(&self, punch_type: PunchType) -> Option<NaiveTime> {
        match punch_type {
            PunchType::Arrival => self.arrival,
            PunchType::BreakOut => self.break_out,
            PunchType::BreakIn => self.break_in,
            PunchType::Departure => self.departure,
        }
    }

    pub fn justification(&self, kind: JustificationKind) -> (Option<&str>, JustificationStatus) {
        match kind {
            JustificationKind::Lateness => (
                self.late_justification.as_deref(),
                self.late_justification_status,
            ),
            JustificationKind::Absence => (
                self.absence_justification.as_deref(),
                self.absence_justification_status,
            ),
        }
    }

    pub fn is_significantly_late(&self) -> bool {
        self.late_minutes > SIGNIFICANT_LATENESS_MINUTES
    }

    /// Whether a justification of `kind` makes sense for this day at all.
    pub fn calls_for_justification(&self, kind: JustificationKind) -> bool {
        match kind {
            JustificationKind::Absence => self.status == AttendanceStatus::Absent,
            JustificationKind::Lateness => {
                self.status.is_working_day() && self.is_significantly_late()
            }
        }
    }
}
