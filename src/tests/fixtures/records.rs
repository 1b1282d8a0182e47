// Shared test fixtures for daily attendance records.
// Compiled only for tests, reachable as `crate::tests::fixtures::records`.

use crate::modules::attendance::core::record::{
    AttendanceStatus, DailyAttendanceRecord, JustificationStatus,
};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use uuid::Uuid;

const DAILY_RECORD_JSON: &str = include_str!("json/daily_record.json");

pub fn at(hour: u32, minute: u32, second: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, second).unwrap()
}

pub fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn on(date: NaiveDate, time: NaiveTime) -> NaiveDateTime {
    date.and_time(time)
}

pub struct DailyRecordBuilder {
    inner: DailyAttendanceRecord,
}

impl Default for DailyRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl DailyRecordBuilder {
    pub fn new() -> Self {
        Self {
            inner: serde_json::from_str(DAILY_RECORD_JSON).unwrap(),
        }
    }

    pub fn record_id(mut self, v: Uuid) -> Self {
        self.inner.record_id = v;
        self
    }

    pub fn employee_id(mut self, v: impl Into<String>) -> Self {
        self.inner.employee_id = v.into();
        self
    }

    pub fn date(mut self, v: NaiveDate) -> Self {
        self.inner.date = v;
        self
    }

    pub fn arrival(mut self, v: NaiveTime) -> Self {
        self.inner.arrival = Some(v);
        self
    }

    pub fn break_out(mut self, v: NaiveTime) -> Self {
        self.inner.break_out = Some(v);
        self
    }

    pub fn break_in(mut self, v: NaiveTime) -> Self {
        self.inner.break_in = Some(v);
        self
    }

    pub fn departure(mut self, v: NaiveTime) -> Self {
        self.inner.departure = Some(v);
        self
    }

    /// Arrival 08:00, break 12:00-13:00, departure 17:00: eight hours worked.
    pub fn full_day(self) -> Self {
        self.arrival(at(8, 0, 0))
            .break_out(at(12, 0, 0))
            .break_in(at(13, 0, 0))
            .departure(at(17, 0, 0))
    }

    pub fn late_minutes(mut self, v: u32) -> Self {
        self.inner.late_minutes = v;
        self
    }

    pub fn status(mut self, v: AttendanceStatus) -> Self {
        self.inner.status = v;
        self
    }

    pub fn late_justification(
        mut self,
        text: impl Into<String>,
        status: JustificationStatus,
    ) -> Self {
        self.inner.late_justification = Some(text.into());
        self.inner.late_justification_status = status;
        self
    }

    pub fn absence_justification(
        mut self,
        text: impl Into<String>,
        status: JustificationStatus,
    ) -> Self {
        self.inner.absence_justification = Some(text.into());
        self.inner.absence_justification_status = status;
        self
    }

    pub fn build(self) -> DailyAttendanceRecord {
        self.inner
    }
}

#[cfg(test)]
mod daily_record_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = DailyRecordBuilder::default().build();
        assert_eq!(built.employee_id, "emp-0001");
        assert_eq!(built.date, day(2024, 3, 4));
        assert_eq!(built.status, AttendanceStatus::Present);
        assert_eq!(built.version, 0);
        assert_eq!(built.arrival, None);
    }

    #[rstest]
    fn full_day_sets_all_four_punches() {
        let built = DailyRecordBuilder::new().full_day().build();
        assert_eq!(built.arrival, Some(at(8, 0, 0)));
        assert_eq!(built.break_out, Some(at(12, 0, 0)));
        assert_eq!(built.break_in, Some(at(13, 0, 0)));
        assert_eq!(built.departure, Some(at(17, 0, 0)));
    }
}
