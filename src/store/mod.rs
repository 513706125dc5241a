//! File-backed record store.
//!
//! An insertion-ordered collection of [`TimeRecord`]s persisted as a JSON
//! array. Every mutation is written through immediately; if the write fails
//! the in-memory change is rolled back and [`AppError::Storage`] surfaces,
//! so callers never observe a mutation that was not made durable.

mod file;

use crate::errors::{AppError, AppResult};
use crate::models::TimeRecord;
use chrono::Utc;
use std::path::{Path, PathBuf};

pub struct JsonStore {
    path: PathBuf,
    records: Vec<TimeRecord>,
}

impl JsonStore {
    /// Hydrate from `path`, creating an empty store when the file is absent.
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();
        let records = file::read_records(&path)?;
        Ok(Self { path, records })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Next record id: millisecond timestamp, bumped past the current max so
    /// two mutations inside the same millisecond still get distinct ids.
    pub fn next_id(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let max = self.records.iter().map(|r| r.id).max().unwrap_or(0);
        now.max(max + 1)
    }

    pub fn list(&self) -> &[TimeRecord] {
        &self.records
    }

    pub fn get(&self, id: i64) -> Option<&TimeRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn filter<'a>(
        &'a self,
        predicate: impl Fn(&TimeRecord) -> bool + 'a,
    ) -> impl Iterator<Item = &'a TimeRecord> {
        self.records.iter().filter(move |r| predicate(r))
    }

    /// The open session for `user_id`, if any. The store invariant keeps at
    /// most one per user.
    pub fn active_session(&self, user_id: &str) -> Option<&TimeRecord> {
        self.records
            .iter()
            .find(|r| r.user_id == user_id && r.is_open())
    }

    pub fn add(&mut self, record: TimeRecord) -> AppResult<TimeRecord> {
        if self.records.iter().any(|r| r.id == record.id) {
            return Err(AppError::Validation(format!(
                "Duplicate record id: {}",
                record.id
            )));
        }
        self.records.push(record.clone());
        if let Err(e) = self.persist() {
            self.records.pop();
            return Err(e);
        }
        Ok(record)
    }

    /// Apply `mutate` to the record with `id` and persist. The previous state
    /// is restored when the write fails.
    pub fn update(
        &mut self,
        id: i64,
        mutate: impl FnOnce(&mut TimeRecord) -> AppResult<()>,
    ) -> AppResult<TimeRecord> {
        let idx = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or(AppError::NotFound(id))?;

        let before = self.records[idx].clone();
        if let Err(e) = mutate(&mut self.records[idx]) {
            self.records[idx] = before;
            return Err(e);
        }

        if let Err(e) = self.persist() {
            self.records[idx] = before;
            return Err(e);
        }
        Ok(self.records[idx].clone())
    }

    /// Remove the record with `id`; `false` when it does not exist.
    pub fn remove(&mut self, id: i64) -> AppResult<bool> {
        let Some(idx) = self.records.iter().position(|r| r.id == id) else {
            return Ok(false);
        };
        let removed = self.records.remove(idx);
        if let Err(e) = self.persist() {
            self.records.insert(idx, removed);
            return Err(e);
        }
        Ok(true)
    }

    /// Replace the whole collection (restore with `replaceExisting`).
    pub fn replace_all(&mut self, records: Vec<TimeRecord>) -> AppResult<()> {
        let before = std::mem::replace(&mut self.records, records);
        if let Err(e) = self.persist() {
            self.records = before;
            return Err(e);
        }
        Ok(())
    }

    /// Merge `records` in, skipping ids that already exist. Returns the
    /// number actually added.
    pub fn merge(&mut self, records: Vec<TimeRecord>) -> AppResult<usize> {
        let before_len = self.records.len();
        for r in records {
            if self.records.iter().all(|existing| existing.id != r.id) {
                self.records.push(r);
            }
        }
        let added = self.records.len() - before_len;
        if let Err(e) = self.persist() {
            self.records.truncate(before_len);
            return Err(e);
        }
        Ok(added)
    }

    fn persist(&self) -> AppResult<()> {
        file::write_records(&self.path, &self.records)
    }
}
