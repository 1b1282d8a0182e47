use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// The four daily punch events, in the order they happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PunchType {
    Arrival,
    BreakOut,
    BreakIn,
    Departure,
}

impl PunchType {
    pub const ALL: [PunchType; 4] = [
        PunchType::Arrival,
        PunchType::BreakOut,
        PunchType::BreakIn,
        PunchType::Departure,
    ];

    /// Earliest time of day at which this punch is accepted.
    pub fn admission_window(&self) -> Option<AdmissionWindow> {
        match self {
            PunchType::Arrival => Some(AdmissionWindow::from_hms(6, 0, 0)),
            PunchType::BreakOut => Some(AdmissionWindow::from_hms(12, 30, 0)),
            PunchType::BreakIn => None,
            PunchType::Departure => Some(AdmissionWindow::from_hms(17, 30, 0)),
        }
    }

    /// Punches that come before this one in the day.
    pub fn earlier(&self) -> &'static [PunchType] {
        let index = *self as usize;
        &Self::ALL[..index]
    }
}

impl std::fmt::Display for PunchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            PunchType::Arrival => "arrival",
            PunchType::BreakOut => "break out",
            PunchType::BreakIn => "break in",
            PunchType::Departure => "departure",
        };
        f.write_str(label)
    }
}

/// Opening time of a punch window, held as seconds since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AdmissionWindow {
    opens_at_secs: u32,
}

impl AdmissionWindow {
    pub const fn from_hms(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            opens_at_secs: hour * 3600 + minute * 60 + second,
        }
    }

    pub fn admits(&self, now: NaiveTime) -> bool {
        now.num_seconds_from_midnight() >= self.opens_at_secs
    }
}

impl std::fmt::Display for AdmissionWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let secs = self.opens_at_secs;
        write!(
            f,
            "{:02}:{:02}:{:02}",
            secs / 3600,
            (secs % 3600) / 60,
            secs % 60
        )
    }
}
