// Worked-time arithmetic and the "{H}h{MM}" rendering shared by daily and monthly figures.
//
// Durations are summed in whole seconds so that totals do not depend on the
// order records are folded in. Hours only appear at the edges.

use crate::modules::attendance::core::record::DailyAttendanceRecord;
use chrono::TimeDelta;

/// Lunch assumed when the break was not punched.
pub const UNLOGGED_BREAK_SECS: i64 = 3600;

/// Time worked on one day. Zero unless both arrival and departure are set.
pub fn worked_duration(record: &DailyAttendanceRecord) -> TimeDelta {
    let (Some(arrival), Some(departure)) = (record.arrival, record.departure) else {
        return TimeDelta::zero();
    };
    let base = (departure - arrival).num_seconds();
    let break_secs = match (record.break_out, record.break_in) {
        (Some(out), Some(back)) => (back - out).num_seconds(),
        _ => UNLOGGED_BREAK_SECS,
    };
    TimeDelta::seconds((base - break_secs).max(0))
}

pub fn worked_hours(record: &DailyAttendanceRecord) -> f64 {
    worked_duration(record).num_seconds() as f64 / 3600.0
}

/// Render fractional hours as `{H}h{MM}`, minutes rounded to the nearest minute.
pub fn format_hours(hours: f64) -> String {
    format_minutes((hours * 60.0).round() as i64)
}

pub fn format_minutes(total_minutes: i64) -> String {
    let sign = if total_minutes < 0 { "-" } else { "" };
    let minutes = total_minutes.unsigned_abs();
    format!("{sign}{}h{:02}", minutes / 60, minutes % 60)
}

pub fn format_duration(duration: TimeDelta) -> String {
    format_hours(duration.num_seconds() as f64 / 3600.0)
}
