use crate::cli::commands::load_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{ExportFormat, ExportLogic};
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear {
        file,
        output,
        force,
    } = cmd
    {
        let mut session = load_session(file, cfg)?;
        session.clear_values();
        success(format!("Cleared values on {} rows.", session.records().len()));

        let (target, force) = match output {
            Some(o) => (o.as_str(), *force),
            None => (file.as_str(), true),
        };
        ExportLogic::export(session.records(), ExportFormat::Csv, Some(target), force, cfg)?;
    }
    Ok(())
}
