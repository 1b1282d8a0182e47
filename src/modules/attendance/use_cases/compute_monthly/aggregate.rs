// Monthly statistics, folded from one employee's daily records.
//
// Responsibilities
// - Count present and absent days, worked time, lateness, and what of it was
//   justified and approved.
// - Derive payable hours: every present day and every approved absence counts
//   a full day; every significant lateness counts a flat quarter hour.
//
// Boundaries
// - Pure. The fold is order independent: worked time is summed in seconds and
//   everything else is a count.

use crate::modules::attendance::core::duration::{
    format_duration, format_minutes, worked_duration,
};
use crate::modules::attendance::core::record::{
    AttendanceStatus, DailyAttendanceRecord, JustificationStatus,
};
use crate::shared::core::primitives::YearMonth;
use chrono::TimeDelta;
use serde::Serialize;

pub const PAYABLE_HOURS_PER_DAY: i64 = 8;
/// Hours credited or docked per significant lateness, in minutes.
pub const LATENESS_CREDIT_MINUTES: i64 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MonthlyTally {
    pub days_present: u32,
    pub worked: TimeDelta,
    pub days_absent: u32,
    pub justified_absences: u32,
    pub total_late_minutes: u64,
    pub significant_lates: u32,
    pub justified_lates: u32,
}

impl MonthlyTally {
    pub fn add(mut self, record: &DailyAttendanceRecord) -> Self {
        match record.status {
            AttendanceStatus::Present => {
                self.days_present += 1;
                self.worked += worked_duration(record);
            }
            AttendanceStatus::Absent => {
                self.days_absent += 1;
                if record.absence_justification_status == JustificationStatus::Approved {
                    self.justified_absences += 1;
                }
            }
            AttendanceStatus::Holiday | AttendanceStatus::Weekend => {}
        }
        self.total_late_minutes += u64::from(record.late_minutes);
        if record.is_significantly_late() {
            self.significant_lates += 1;
            if record.late_justification_status == JustificationStatus::Approved {
                self.justified_lates += 1;
            }
        }
        self
    }

    pub fn payable_days(&self) -> u32 {
        self.days_present + self.justified_absences
    }

    pub fn unjustified_absences(&self) -> u32 {
        self.days_absent - self.justified_absences
    }

    pub fn unjustified_lates(&self) -> u32 {
        self.significant_lates - self.justified_lates
    }
}

/// What reports and exports consume, keyed the way the payroll reports name the columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregateStats {
    #[serde(rename = "employeeId")]
    pub employee_id: String,
    pub year: i32,
    pub month: u32,
    #[serde(rename = "joursPresent")]
    pub days_present: u32,
    #[serde(rename = "totalHeures")]
    pub total_hours: String,
    #[serde(rename = "joursAbsent")]
    pub days_absent: u32,
    #[serde(rename = "absencesJustifiees")]
    pub justified_absences: u32,
    #[serde(rename = "totalRetardMinutes")]
    pub total_late_minutes: u64,
    #[serde(rename = "totalRetard")]
    pub total_late: String,
    #[serde(rename = "retardsSignificatifs")]
    pub significant_lates: u32,
    #[serde(rename = "retardsJustifies")]
    pub justified_lates: u32,
    #[serde(rename = "heuresTheoriques")]
    pub payable_hours: String,
    #[serde(rename = "heuresAbsencesNonJustifiees")]
    pub unjustified_absence_hours: String,
    #[serde(rename = "retardsJustifiesHeures")]
    pub justified_late_hours: String,
    #[serde(rename = "retardsNonJustifiesHeures")]
    pub unjustified_late_hours: String,
}

impl AggregateStats {
    pub fn from_tally(
        employee_id: impl Into<String>,
        year_month: YearMonth,
        tally: &MonthlyTally,
    ) -> Self {
        let day_minutes = PAYABLE_HOURS_PER_DAY * 60;
        Self {
            employee_id: employee_id.into(),
            year: year_month.year(),
            month: year_month.month(),
            days_present: tally.days_present,
            total_hours: format_duration(tally.worked),
            days_absent: tally.days_absent,
            justified_absences: tally.justified_absences,
            total_late_minutes: tally.total_late_minutes,
            total_late: format_minutes(
                i64::try_from(tally.total_late_minutes).unwrap_or(i64::MAX),
            ),
            significant_lates: tally.significant_lates,
            justified_lates: tally.justified_lates,
            payable_hours: format_minutes(i64::from(tally.payable_days()) * day_minutes),
            unjustified_absence_hours: format_minutes(
                i64::from(tally.unjustified_absences()) * day_minutes,
            ),
            justified_late_hours: format_minutes(
                i64::from(tally.justified_lates) * LATENESS_CREDIT_MINUTES,
            ),
            unjustified_late_hours: format_minutes(
                i64::from(tally.unjustified_lates()) * LATENESS_CREDIT_MINUTES,
            ),
        }
    }
}

pub fn aggregate_month<'a>(
    employee_id: &str,
    year_month: YearMonth,
    records: impl IntoIterator<Item = &'a DailyAttendanceRecord>,
) -> AggregateStats {
    let tally = records
        .into_iter()
        .fold(MonthlyTally::default(), |tally, record| tally.add(record));
    AggregateStats::from_tally(employee_id, year_month, &tally)
}
