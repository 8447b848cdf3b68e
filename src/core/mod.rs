//! Derivation and summary engine plus the session that owns the rows.

pub mod calculator;
pub mod config;
pub mod ledger;
pub mod session;
pub mod validate;

pub use crate::export::csv_text::export_csv;
pub use crate::export::import::import_csv;
pub use calculator::summary::summarize;
pub use calculator::totals::{RecomputeReport, needs_recompute, recompute_totals};
pub use ledger::{RowEdit, apply_edits, clear_values, initialize};
pub use session::LedgerSession;
pub use validate::{Problem, ProblemKind, validate};
