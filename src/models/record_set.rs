use crate::errors::{AppError, AppResult};
use crate::models::day_record::DayRecord;
use serde::{Deserialize, Serialize};

/// Ordered collection of day rows for the current session.
///
/// Rows are addressed by position; `day` is not a key and may repeat.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordSet {
    rows: Vec<DayRecord>,
}

impl RecordSet {
    pub fn new(rows: Vec<DayRecord>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[DayRecord] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut [DayRecord] {
        &mut self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DayRecord> {
        self.rows.iter()
    }

    pub fn get(&self, index: usize) -> AppResult<&DayRecord> {
        let len = self.rows.len();
        self.rows.get(index).ok_or(AppError::InvalidRow(index, len))
    }

    pub fn get_mut(&mut self, index: usize) -> AppResult<&mut DayRecord> {
        let len = self.rows.len();
        self.rows
            .get_mut(index)
            .ok_or(AppError::InvalidRow(index, len))
    }

    pub fn push(&mut self, record: DayRecord) {
        self.rows.push(record);
    }

    /// Insert at `index` (`index == len` appends).
    pub fn insert(&mut self, index: usize, record: DayRecord) -> AppResult<()> {
        if index > self.rows.len() {
            return Err(AppError::InvalidRow(index, self.rows.len()));
        }
        self.rows.insert(index, record);
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> AppResult<DayRecord> {
        if index >= self.rows.len() {
            return Err(AppError::InvalidRow(index, self.rows.len()));
        }
        Ok(self.rows.remove(index))
    }

    /// Next display day for an appended row: one past the largest day,
    /// saturating at `u32::MAX`.
    pub fn next_day(&self) -> u32 {
        self.rows
            .iter()
            .map(|r| r.day)
            .max()
            .map_or(1, |d| d.saturating_add(1))
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a DayRecord;
    type IntoIter = std::slice::Iter<'a, DayRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl FromIterator<DayRecord> for RecordSet {
    fn from_iter<I: IntoIterator<Item = DayRecord>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}
