use crate::cli::commands::load_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::ui::render::{print_grid, print_summary};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Show { file } => {
            let session = load_session(file, cfg)?;
            print_grid(session.records(), cfg);
            print_summary(&session.summary(), cfg);
            if session.records().iter().any(|r| !r.total_payment.is_coerced()) {
                info("Some totals are not numeric yet: run `recompute` to update them.");
            }
        }
        Commands::Summary { file } => {
            let session = load_session(file, cfg)?;
            print_summary(&session.summary(), cfg);
        }
        _ => {}
    }
    Ok(())
}
