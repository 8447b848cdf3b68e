use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::info;
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        if !*print_config && !*check && !*edit_config {
            info(format!("Configuration file: {}", path.display()));
            return Ok(());
        }

        if *print_config {
            ConfigLogic::print(cfg)?;
        }

        if *check {
            ConfigLogic::check(path)?;
        }

        if *edit_config {
            if !path.exists() {
                cfg.save_to(path)?;
            }
            ConfigLogic::edit(path, editor)?;
        }
    }
    Ok(())
}
