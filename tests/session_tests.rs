use didledger::config::Config;
use didledger::core::{LedgerSession, RowEdit, import_csv, initialize, recompute_totals};
use didledger::models::{CellValue, DayRecord, Field, RecordSet};
use didledger::shell::command::{ShellCommand, help_text, parse, tokenize};
use didledger::export::ExportFormat;
use didledger::shell::{Flow, Shell};

fn cfg() -> Config {
    Config::default()
}

#[test]
fn test_session_lifecycle() {
    let cfg = cfg();
    let mut session = LedgerSession::new(&cfg);
    assert_eq!(session.records().len(), 31);
    assert!(!session.is_dirty());

    session
        .apply_edits(&[RowEdit::Set {
            row: 0,
            field: Field::WorkingPayment,
            value: "40".into(),
        }])
        .expect("edit");
    assert!(session.is_dirty());
    assert_eq!(session.summary().total_payment, 0.0);

    session.recompute();
    assert!(!session.is_dirty());
    assert_eq!(session.summary().total_payment, 40.0);

    session.reset();
    assert_eq!(session.records().len(), 31);
    assert_eq!(session.summary().total_working, 0.0);
}

#[test]
fn test_sessions_are_isolated() {
    let cfg = cfg();
    let mut a = LedgerSession::new(&cfg);
    let b = LedgerSession::new(&cfg);

    a.apply_edits(&[RowEdit::Remove { row: 0 }]).expect("remove");

    assert_eq!(a.records().len(), 30);
    assert_eq!(b.records().len(), 31);
}

#[test]
fn test_days_in_month_from_config() {
    let cfg = Config {
        days_in_month: 28,
        ..Config::default()
    };
    let mut session = LedgerSession::new(&cfg);
    session
        .apply_edits(&[RowEdit::Remove { row: 0 }])
        .expect("remove");
    session.reset();
    assert_eq!(session.records().len(), 28);
}

#[test]
fn test_session_export_csv() {
    let session = LedgerSession::new(&cfg());
    let text = session.export_csv().expect("export");
    assert_eq!(text.lines().count(), 32);
}

#[test]
fn test_tokenize_quoted_words() {
    assert_eq!(
        tokenize(r#"set 3 city "San Marino""#),
        vec!["set", "3", "city", "San Marino"]
    );
    assert_eq!(tokenize("  add   "), vec!["add"]);
    assert!(tokenize("").is_empty());
}

#[test]
fn test_parse_shell_commands() {
    assert_eq!(
        parse("set 2 km 12.5").expect("set"),
        ShellCommand::Set {
            row: 1,
            field: Field::Km,
            value: "12.5".into()
        }
    );
    assert_eq!(
        parse("set 1 city Reggio Emilia").expect("multi-word"),
        ShellCommand::Set {
            row: 0,
            field: Field::City,
            value: "Reggio Emilia".into()
        }
    );
    assert_eq!(
        parse("export out.xlsx").expect("export"),
        ShellCommand::Export {
            file: Some("out.xlsx".into()),
            format: None,
            force: false
        }
    );
    assert_eq!(
        parse("export --force out.csv csv").expect("export forced"),
        ShellCommand::Export {
            file: Some("out.csv".into()),
            format: Some(ExportFormat::Csv),
            force: true
        }
    );
    assert_eq!(parse("   ").expect("empty"), ShellCommand::Empty);
    assert_eq!(parse("QUIT").expect("quit"), ShellCommand::Quit);

    assert!(parse("set 0 km 1").is_err());
    assert!(parse("set 1 speed 1").is_err());
    assert!(parse("remove").is_err());
    assert!(parse("dance").is_err());
}

#[test]
fn test_shell_execute_add_and_update() {
    let cfg = cfg();
    let mut shell = Shell::new(LedgerSession::new(&cfg), &cfg);

    let flow = shell
        .execute(parse(r#"add 32 "Lecce" 100 50 x"#).expect("parse"))
        .expect("add");
    assert_eq!(flow, Flow::Continue);

    let last = shell.session().records().rows()[31].clone();
    assert_eq!(last.day, 32);
    assert_eq!(last.location, "Lecce");
    assert_eq!(last.extra_payment, CellValue::Text("x".into()));

    shell.execute(ShellCommand::Update).expect("update");
    let last = &shell.session().records().rows()[31];
    assert_eq!(last.extra_payment, CellValue::Number(0.0));
    assert_eq!(last.total_payment, CellValue::Number(50.0));
    assert_eq!(shell.session().summary().total_distance, 100.0);

    assert_eq!(shell.execute(ShellCommand::Quit).expect("quit"), Flow::Quit);
}

#[test]
fn test_shell_add_defaults_day_and_rejects_bad_rows() {
    let cfg = cfg();
    let mut shell = Shell::new(LedgerSession::new(&cfg), &cfg);

    shell.execute(parse("add").expect("parse")).expect("add");
    assert_eq!(shell.session().records().rows()[31].day, 32);

    assert!(shell.execute(parse("remove 99").expect("parse")).is_err());
    assert!(shell.execute(parse("add x").expect("parse")).is_err());
    assert_eq!(shell.session().records().len(), 32);
}

#[test]
fn test_shell_add_after_largest_possible_day() {
    let cfg = cfg();
    let mut shell = Shell::new(LedgerSession::new(&cfg), &cfg);

    shell
        .execute(parse("set 31 date 4294967295").expect("parse"))
        .expect("set date");
    shell.execute(parse("add").expect("parse")).expect("add");

    let rows = shell.session().records().rows();
    assert_eq!(rows.len(), 32);
    assert_eq!(rows[31].day, u32::MAX);
}

#[test]
fn test_shell_export_refuses_existing_file_without_force() {
    let cfg = cfg();
    let mut shell = Shell::new(LedgerSession::new(&cfg), &cfg);

    let mut out = std::env::temp_dir();
    out.push("didledger_shell_existing.csv");
    std::fs::write(&out, "keep me\n").expect("write fixture");
    let out = out.to_string_lossy().to_string();

    let err = shell
        .execute(parse(&format!("export {out}")).expect("parse"))
        .unwrap_err();
    assert!(err.to_string().contains("--force"));
    assert_eq!(std::fs::read_to_string(&out).expect("read"), "keep me\n");

    shell
        .execute(parse(&format!("export {out} --force")).expect("parse"))
        .expect("forced export");
    assert_eq!(std::fs::read_to_string(&out).expect("read").lines().count(), 32);
}

#[test]
fn test_help_lists_field_names() {
    let help = help_text();
    assert!(help.contains("date, city, km, working, extra, total"));
    for field in Field::ALL {
        assert_eq!(Field::from_name(field.short()), Some(field));
    }
}

#[test]
fn test_loaded_session_is_clean_only_when_totals_match() {
    let cfg = cfg();

    let mut set = initialize(3);
    set.get_mut(0).expect("row").working_payment = CellValue::Number(40.0);
    recompute_totals(&mut set);
    let session = LedgerSession::from_records(&cfg, set.clone());
    assert!(!session.is_dirty());

    set.get_mut(1).expect("row").extra_payment = CellValue::Number(5.0);
    assert!(LedgerSession::from_records(&cfg, set).is_dirty());

    let text = "Date,City,KM,Working Payment,Extra Payment,Total Payment\n\
                1,Bari,10,abc,0,0\n";
    let imported = import_csv(text).expect("import");
    assert!(LedgerSession::from_records(&cfg, imported).is_dirty());

    let blank: RecordSet = (1..=2).map(DayRecord::blank).collect();
    assert!(!LedgerSession::from_records(&cfg, blank).is_dirty());
}
