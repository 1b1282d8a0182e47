// In memory implementation of the AttendanceRecordStore port.
//
// Purpose
// - Support handler tests and local runs without a database.
//
// Responsibilities
// - Keep records by id with a (employee, date) index.
// - Enforce the expected version under a single write lock.

use crate::modules::attendance::core::record::{DailyAttendanceRecord, JustificationStatus};
use crate::shared::core::primitives::DateRange;
use crate::shared::infrastructure::record_store::{AttendanceRecordStore, RecordStoreError};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
struct Tables {
    records: HashMap<Uuid, DailyAttendanceRecord>,
    by_day: HashMap<(String, NaiveDate), Uuid>,
}

#[derive(Default)]
pub struct InMemoryRecordStore {
    tables: RwLock<Tables>,
    is_offline: bool,
    delay_save_ms: AtomicU64,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Sleep before taking the write lock in `save`, so concurrent writers interleave.
    pub fn set_delay_save_ms(&self, ms: u64) {
        self.delay_save_ms.store(ms, Ordering::Relaxed);
    }

    fn ensure_online(&self) -> Result<(), RecordStoreError> {
        if self.is_offline {
            return Err(RecordStoreError::Backend("Record store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl AttendanceRecordStore for InMemoryRecordStore {
    async fn find_by_day(
        &self,
        employee_id: &str,
        date: NaiveDate,
    ) -> Result<Option<DailyAttendanceRecord>, RecordStoreError> {
        self.ensure_online()?;
        let guard = self.tables.read().await;
        Ok(guard
            .by_day
            .get(&(employee_id.to_string(), date))
            .and_then(|id| guard.records.get(id))
            .cloned())
    }

    async fn find_by_id(
        &self,
        record_id: Uuid,
    ) -> Result<Option<DailyAttendanceRecord>, RecordStoreError> {
        self.ensure_online()?;
        Ok(self.tables.read().await.records.get(&record_id).cloned())
    }

    async fn save(
        &self,
        record: &DailyAttendanceRecord,
        expected_version: i64,
    ) -> Result<DailyAttendanceRecord, RecordStoreError> {
        self.ensure_online()?;
        let delay = self.delay_save_ms.load(Ordering::Relaxed);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        let mut guard = self.tables.write().await;
        let day_key = (record.employee_id.clone(), record.date);
        let actual = match guard.records.get(&record.record_id) {
            Some(stored) => stored.version,
            None => match guard.by_day.get(&day_key) {
                // Another record already owns this day.
                Some(other) => guard.records.get(other).map(|r| r.version).unwrap_or(0),
                None => 0,
            },
        };
        let owns_day = guard
            .by_day
            .get(&day_key)
            .is_none_or(|id| *id == record.record_id);
        if actual != expected_version || !owns_day {
            return Err(RecordStoreError::VersionMismatch {
                expected: expected_version,
                actual,
            });
        }

        let mut stored = record.clone();
        stored.version = expected_version + 1;
        guard.by_day.insert(day_key, stored.record_id);
        guard.records.insert(stored.record_id, stored.clone());
        Ok(stored)
    }

    async fn list_by_employee(
        &self,
        employee_id: &str,
        range: DateRange,
    ) -> Result<Vec<DailyAttendanceRecord>, RecordStoreError> {
        self.ensure_online()?;
        let guard = self.tables.read().await;
        let mut items: Vec<DailyAttendanceRecord> = guard
            .records
            .values()
            .filter(|r| r.employee_id == employee_id && range.contains(r.date))
            .cloned()
            .collect();
        items.sort_by_key(|r| r.date);
        Ok(items)
    }

    async fn list_pending_justifications(
        &self,
    ) -> Result<Vec<DailyAttendanceRecord>, RecordStoreError> {
        self.ensure_online()?;
        let guard = self.tables.read().await;
        let mut items: Vec<DailyAttendanceRecord> = guard
            .records
            .values()
            .filter(|r| {
                r.late_justification_status == JustificationStatus::Pending
                    || r.absence_justification_status == JustificationStatus::Pending
            })
            .cloned()
            .collect();
        items.sort_by(|a, b| (a.date, &a.employee_id).cmp(&(b.date, &b.employee_id)));
        Ok(items)
    }
}
