use crate::config::Config;
use crate::core::calculator::summary::summarize;
use crate::core::calculator::totals::{RecomputeReport, needs_recompute, recompute_totals};
use crate::core::ledger::{self, RowEdit};
use crate::core::validate::{Problem, validate};
use crate::errors::AppResult;
use crate::export::csv_text::export_csv;
use crate::models::{RecordSet, Summary};

/// Owner of one user's ledger for the lifetime of a session.
///
/// Every operation goes through an explicit `LedgerSession`, so two sessions
/// never see each other's rows.
#[derive(Debug, Clone)]
pub struct LedgerSession {
    records: RecordSet,
    days: u32,
    dirty: bool,
}

impl LedgerSession {
    /// New session holding the default month grid.
    pub fn new(cfg: &Config) -> Self {
        let days = cfg.days_in_month;
        Self {
            records: ledger::initialize(days),
            days,
            dirty: false,
        }
    }

    /// Session preloaded with rows (e.g. from an imported CSV). Totals
    /// count as stale only when a recompute would change something.
    pub fn from_records(cfg: &Config, records: RecordSet) -> Self {
        let dirty = needs_recompute(&records);
        Self {
            records,
            days: cfg.days_in_month,
            dirty,
        }
    }

    pub fn records(&self) -> &RecordSet {
        &self.records
    }

    /// True when rows changed since the last recompute.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn reset(&mut self) {
        self.records = ledger::initialize(self.days);
        self.dirty = false;
        log::info!("session reset to {} default rows", self.days);
    }

    pub fn clear_values(&mut self) {
        ledger::clear_values(&mut self.records);
        self.dirty = false;
    }

    pub fn apply_edits(&mut self, edits: &[RowEdit]) -> AppResult<()> {
        ledger::apply_edits(&mut self.records, edits)?;
        if !edits.is_empty() {
            self.dirty = true;
        }
        Ok(())
    }

    pub fn recompute(&mut self) -> RecomputeReport {
        let report = recompute_totals(&mut self.records);
        self.dirty = false;
        report
    }

    pub fn summary(&self) -> Summary {
        summarize(&self.records)
    }

    pub fn validate(&self) -> Vec<Problem> {
        validate(&self.records)
    }

    pub fn export_csv(&self) -> AppResult<String> {
        export_csv(&self.records)
    }
}
