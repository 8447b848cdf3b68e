use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::LedgerSession;
use crate::errors::AppResult;
use crate::export::{ExportFormat, ExportLogic};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::New { output, force } = cmd {
        let session = LedgerSession::new(cfg);
        ExportLogic::export(
            session.records(),
            ExportFormat::Csv,
            output.as_deref(),
            *force,
            cfg,
        )?;
    }
    Ok(())
}
