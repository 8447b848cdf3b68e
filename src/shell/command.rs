use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::models::Field;
use regex::Regex;
use std::sync::OnceLock;

/// One line typed in the interactive session.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    Show,
    /// `row` is 0-based here; the user types 1-based positions.
    Set {
        row: usize,
        field: Field,
        value: String,
    },
    Add {
        day: Option<String>,
        values: Vec<String>,
    },
    Remove {
        row: usize,
    },
    Clear,
    Reset,
    Update,
    Summary,
    Validate,
    Export {
        file: Option<String>,
        format: Option<ExportFormat>,
        /// Overwrite an existing file; the shell never prompts.
        force: bool,
    },
    Help,
    Quit,
    Empty,
}

const HELP: &str = "\
Commands:
  show                              print the grid
  set <row> <field> <value>         edit one cell (fields: {fields})
  add [day] [city] [km] [working] [extra]
                                    append a row (day defaults to last day + 1)
  remove <row>                      delete a row
  clear                             blank every city and zero every amount
  reset                             back to the default month
  update                            coerce numbers and recompute totals
  summary                           print the monthly sums
  validate                          look for negative values
  export [file] [csv|json|xlsx|pdf] [--force]
                                    write the ledger to a file
  help                              this text
  quit                              end the session (rows not exported are lost)
Rows are the numbers in the # column. Quote values with spaces: set 3 city \"San Marino\"";

/// Help text for the session, with the field names the parser accepts.
pub fn help_text() -> String {
    let fields: Vec<&str> = Field::ALL.iter().map(Field::short).collect();
    HELP.replace("{fields}", &fields.join(", "))
}

fn token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#""([^"]*)"|(\S+)"#).expect("valid token regex"))
}

/// Split a line into words; double-quoted text is one word (quotes removed).
pub fn tokenize(line: &str) -> Vec<String> {
    token_re()
        .captures_iter(line)
        .filter_map(|c| c.get(1).or_else(|| c.get(2)))
        .map(|m| m.as_str().to_string())
        .collect()
}

fn parse_row(raw: Option<&String>) -> AppResult<usize> {
    let raw = raw.ok_or_else(|| AppError::InvalidCommand("missing row number".into()))?;
    match raw.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(AppError::InvalidCommand(format!(
            "row must be a positive number, got '{raw}'"
        ))),
    }
}

pub fn parse(line: &str) -> AppResult<ShellCommand> {
    let tokens = tokenize(line);
    let Some(verb) = tokens.first() else {
        return Ok(ShellCommand::Empty);
    };
    let args = &tokens[1..];

    let cmd = match verb.to_lowercase().as_str() {
        "show" | "ls" => ShellCommand::Show,
        "set" => {
            let row = parse_row(args.first())?;
            let field: Field = args
                .get(1)
                .ok_or_else(|| AppError::InvalidCommand("missing field name".into()))?
                .parse()?;
            // `set 3 city` with no value empties the cell
            let value = args.get(2..).map(|v| v.join(" ")).unwrap_or_default();
            ShellCommand::Set { row, field, value }
        }
        "add" => ShellCommand::Add {
            day: args.first().cloned(),
            values: args.iter().skip(1).cloned().collect(),
        },
        "remove" | "rm" | "del" => ShellCommand::Remove {
            row: parse_row(args.first())?,
        },
        "clear" => ShellCommand::Clear,
        "reset" => ShellCommand::Reset,
        "update" | "recompute" => ShellCommand::Update,
        "summary" => ShellCommand::Summary,
        "validate" => ShellCommand::Validate,
        "export" => {
            let mut file = None;
            let mut format = None;
            let mut force = false;
            for a in args {
                if a == "--force" || a == "-f" {
                    force = true;
                    continue;
                }
                match ExportFormat::from_name(a) {
                    Some(f) if format.is_none() => format = Some(f),
                    _ if file.is_none() => file = Some(a.clone()),
                    _ => {
                        return Err(AppError::InvalidCommand(format!(
                            "unexpected export argument '{a}'"
                        )));
                    }
                }
            }
            ShellCommand::Export {
                file,
                format,
                force,
            }
        }
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        other => {
            return Err(AppError::InvalidCommand(format!(
                "unknown command '{other}' (type `help`)"
            )));
        }
    };
    Ok(cmd)
}
