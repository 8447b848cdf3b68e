use crate::cli::commands::load_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::LedgerSession;
use crate::errors::AppResult;
use crate::shell::Shell;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Session { file } = cmd {
        let session = match file {
            Some(f) => load_session(f, cfg)?,
            None => LedgerSession::new(cfg),
        };
        Shell::new(session, cfg).run()?;
    }
    Ok(())
}
