pub mod clear;
pub mod config;
pub mod export;
pub mod init;
pub mod new;
pub mod recompute;
pub mod session;
pub mod show;
pub mod validate;

use crate::config::Config;
use crate::core::LedgerSession;
use crate::errors::AppResult;
use crate::export::import::load_file;
use crate::utils::path::expand_tilde;

/// Open a CSV ledger as a session.
pub(crate) fn load_session(file: &str, cfg: &Config) -> AppResult<LedgerSession> {
    let path = expand_tilde(file);
    let records = load_file(&path)?;
    log::info!("loaded {} rows from {}", records.len(), path.display());
    Ok(LedgerSession::from_records(cfg, records))
}
