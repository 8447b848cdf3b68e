use crate::cli::commands::load_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::render::print_problems;

/// Validation warnings never fail the command.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Validate { file } = cmd {
        let session = load_session(file, cfg)?;
        print_problems(&session.validate());
    }
    Ok(())
}
