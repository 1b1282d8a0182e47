// Record store port: what the attendance core needs from persistence.
//
// Responsibilities
// - Fetch one record by (employee, date) or by id; list records by date range.
// - Save with optimistic concurrency: the write only lands if the stored version
//   still equals `expected_version`. A new record is saved with expected version 0
//   and must not collide with another record for the same (employee, date).
//
// Testing guidance
// - Use the in memory implementation for handler tests and local runs.

use crate::modules::attendance::core::record::DailyAttendanceRecord;
use crate::shared::core::primitives::DateRange;
use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordStoreError {
    #[error("version mismatch: expected {expected}, actual {actual}")]
    VersionMismatch { expected: i64, actual: i64 },

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait AttendanceRecordStore: Send + Sync {
    async fn find_by_day(
        &self,
        employee_id: &str,
        date: NaiveDate,
    ) -> Result<Option<DailyAttendanceRecord>, RecordStoreError>;

    async fn find_by_id(
        &self,
        record_id: Uuid,
    ) -> Result<Option<DailyAttendanceRecord>, RecordStoreError>;

    /// Returns the stored record with its new version.
    async fn save(
        &self,
        record: &DailyAttendanceRecord,
        expected_version: i64,
    ) -> Result<DailyAttendanceRecord, RecordStoreError>;

    /// Records of one employee within `range`, ordered by date.
    async fn list_by_employee(
        &self,
        employee_id: &str,
        range: DateRange,
    ) -> Result<Vec<DailyAttendanceRecord>, RecordStoreError>;

    /// Records with at least one justification awaiting a decision, ordered by date then employee.
    async fn list_pending_justifications(
        &self,
    ) -> Result<Vec<DailyAttendanceRecord>, RecordStoreError>;
}

pub mod in_memory;
