//! Interactive editing session: reads commands from stdin and applies them
//! to one `LedgerSession` until `quit` or end of input.

pub mod command;

use crate::config::Config;
use crate::core::{LedgerSession, RowEdit};
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, ExportLogic};
use crate::models::{DayRecord, Field};
use crate::ui::messages::{error, info, success, warning};
use crate::ui::render::{print_grid, print_problems, print_summary};
use command::{ShellCommand, help_text};
use std::io::{self, Write};

/// Whether the loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell<'a> {
    session: LedgerSession,
    cfg: &'a Config,
}

impl<'a> Shell<'a> {
    pub fn new(session: LedgerSession, cfg: &'a Config) -> Self {
        Self { session, cfg }
    }

    pub fn session(&self) -> &LedgerSession {
        &self.session
    }

    /// Read-eval loop on stdin. Command errors are printed and the loop
    /// goes on; only an I/O failure on stdin ends it with an error.
    pub fn run(&mut self) -> AppResult<()> {
        info(format!(
            "Session started with {} rows. Type `help` for commands.",
            self.session.records().len()
        ));

        loop {
            print!("didledger> ");
            io::stdout().flush().ok();

            let mut line = String::new();
            if io::stdin().read_line(&mut line)? == 0 {
                println!();
                break;
            }

            match command::parse(&line).and_then(|cmd| self.execute(cmd)) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(e) => error(e),
            }
        }

        if self.session.is_dirty() {
            warning("Totals were not updated after the last edits.");
        }
        info("Session ended. Rows not exported are discarded.");
        Ok(())
    }

    pub fn execute(&mut self, cmd: ShellCommand) -> AppResult<Flow> {
        match cmd {
            ShellCommand::Empty => {}
            ShellCommand::Show => print_grid(self.session.records(), self.cfg),
            ShellCommand::Set { row, field, value } => {
                self.session
                    .apply_edits(&[RowEdit::Set { row, field, value }])?;
                success(format!("Row {} {} updated.", row + 1, field));
            }
            ShellCommand::Add { day, values } => {
                let record = self.build_row(day.as_deref(), &values)?;
                let day = record.day;
                self.session.apply_edits(&[RowEdit::Insert {
                    at: None,
                    record,
                }])?;
                success(format!(
                    "Row {} added (day {}).",
                    self.session.records().len(),
                    day
                ));
            }
            ShellCommand::Remove { row } => {
                self.session.apply_edits(&[RowEdit::Remove { row }])?;
                success(format!("Row {} removed.", row + 1));
            }
            ShellCommand::Clear => {
                self.session.clear_values();
                success("All values cleared.");
            }
            ShellCommand::Reset => {
                self.session.reset();
                success("Ledger reset to the default month.");
            }
            ShellCommand::Update => {
                let report = self.session.recompute();
                if report.coerced > 0 {
                    warning(format!(
                        "{} non-numeric value(s) were replaced with 0.",
                        report.coerced
                    ));
                }
                success("Totals updated successfully!");
            }
            ShellCommand::Summary => {
                if self.session.is_dirty() {
                    info("Edits since the last `update`: totals may be stale.");
                }
                print_summary(&self.session.summary(), self.cfg);
            }
            ShellCommand::Validate => print_problems(&self.session.validate()),
            ShellCommand::Export { file, format, force } => {
                let format = format
                    .or_else(|| {
                        file.as_deref()
                            .and_then(|f| ExportFormat::from_path(std::path::Path::new(f)))
                    })
                    .unwrap_or(ExportFormat::Csv);

                // stdin carries the command stream, so an existing file is
                // refused here instead of prompting
                let path = ExportLogic::target_path(format, file.as_deref(), self.cfg)?;
                if path.exists() && !force {
                    return Err(AppError::Cancelled(format!(
                        "'{}' already exists, repeat with --force to overwrite",
                        path.display()
                    )));
                }
                ExportLogic::export(
                    self.session.records(),
                    format,
                    file.as_deref(),
                    true,
                    self.cfg,
                )?;
            }
            ShellCommand::Help => println!("{}", help_text()),
            ShellCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Row for `add`: positional city, km, working, extra after the day.
    fn build_row(&self, day: Option<&str>, values: &[String]) -> AppResult<DayRecord> {
        if values.len() > 4 {
            return Err(AppError::InvalidCommand(
                "add takes at most: day city km working extra".into(),
            ));
        }

        let mut record = DayRecord::blank(self.session.records().next_day());
        if let Some(d) = day {
            record.set(Field::Date, d)?;
        }

        let fields = [
            Field::City,
            Field::Km,
            Field::WorkingPayment,
            Field::ExtraPayment,
        ];
        for (field, value) in fields.iter().zip(values) {
            record.set(*field, value)?;
        }
        Ok(record)
    }
}
