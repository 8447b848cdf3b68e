use crate::cli::commands::load_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        file,
        format,
        output,
        recompute,
        force,
    } = cmd
    {
        let mut session = load_session(file, cfg)?;
        if *recompute {
            session.recompute();
        }
        ExportLogic::export(session.records(), *format, output.as_deref(), *force, cfg)?;
    }
    Ok(())
}
