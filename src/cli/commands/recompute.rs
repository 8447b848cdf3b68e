use crate::cli::commands::load_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{ExportFormat, ExportLogic};
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Recompute {
        file,
        output,
        force,
    } = cmd
    {
        let mut session = load_session(file, cfg)?;
        let report = session.recompute();

        if report.coerced > 0 {
            info(format!(
                "{} non-numeric value(s) were replaced with 0.",
                report.coerced
            ));
        }
        success(format!("Totals updated on {} rows.", report.rows));

        // Without --output the source file is rewritten in place.
        let (target, force) = match output {
            Some(o) => (o.as_str(), *force),
            None => (file.as_str(), true),
        };
        ExportLogic::export(session.records(), ExportFormat::Csv, Some(target), force, cfg)?;
    }
    Ok(())
}
