mod common;

use common::{HEADER, dl_isolated, sample_csv, temp_path, write_csv};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

#[test]
fn test_new_writes_default_month() {
    let out = temp_path("new_default", "csv");

    dl_isolated("new_default")
        .args(["new", "--output", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read csv");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 32);
    assert_eq!(lines[0], HEADER);
    assert_eq!(lines[31], "31,,0.0,0.0,0.0,0.0");
}

#[test]
fn test_new_refuses_overwrite_without_confirmation() {
    let out = write_csv("new_exists", "keep me");

    dl_isolated("new_exists")
        .args(["new", "--output", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("not overwritten"));

    assert_eq!(fs::read_to_string(&out).expect("read"), "keep me");

    dl_isolated("new_exists")
        .args(["new", "--output", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).expect("read").starts_with(HEADER));
}

#[test]
fn test_recompute_in_place() {
    let file = write_csv("recompute_in_place", &sample_csv());

    dl_isolated("recompute_in_place")
        .args(["recompute", "--file", &file])
        .assert()
        .success()
        .stdout(contains("1 non-numeric value(s)").and(contains("Totals updated on 3 rows")));

    let content = fs::read_to_string(&file).expect("read");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[1], "1,Milano,10.0,100.0,20.0,120.0");
    assert_eq!(lines[2], "2,Torino,-5.0,0.0,5.0,5.0");
    assert_eq!(lines[3], "3,,0.0,12.5,0.0,12.5");
}

#[test]
fn test_recompute_to_other_file_leaves_source() {
    let file = write_csv("recompute_src", &sample_csv());
    let out = temp_path("recompute_dst", "csv");

    dl_isolated("recompute_src")
        .args(["recompute", "--file", &file, "--output", &out])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&file).expect("read"), sample_csv());
    assert!(fs::read_to_string(&out).expect("read").contains("Milano,10.0,100.0,20.0,120.0"));
}

#[test]
fn test_validate_reports_but_does_not_fail() {
    let file = write_csv("validate_neg", &sample_csv());

    dl_isolated("validate_neg")
        .args(["validate", "--file", &file])
        .assert()
        .success()
        .stdout(contains("Some KM values are negative.").and(contains("rows: 2")));
}

#[test]
fn test_validate_clean_file() {
    let file = write_csv(
        "validate_ok",
        &format!("{HEADER}\n1,Milano,10,100,20,120\n"),
    );

    dl_isolated("validate_ok")
        .args(["validate", "--file", &file])
        .assert()
        .success()
        .stdout(contains("All data looks valid!"));
}

#[test]
fn test_summary_command() {
    let file = write_csv(
        "summary_cmd",
        &format!("{HEADER}\n1,A,10,1,2,3\n2,B,20,4,5,9\n"),
    );

    dl_isolated("summary_cmd")
        .args(["summary", "--file", &file])
        .assert()
        .success()
        .stdout(contains("30.00").and(contains("12.00")));
}

#[test]
fn test_show_renders_grid() {
    let file = write_csv("show_cmd", &sample_csv());

    dl_isolated("show_cmd")
        .args(["show", "--file", &file])
        .assert()
        .success()
        .stdout(contains("Working Payment").and(contains("Torino")));
}

#[test]
fn test_clear_command() {
    let file = write_csv("clear_cmd", &sample_csv());

    dl_isolated("clear_cmd")
        .args(["clear", "--file", &file])
        .assert()
        .success();

    let content = fs::read_to_string(&file).expect("read");
    assert_eq!(
        content,
        format!("{HEADER}\n1,,0.0,0.0,0.0,0.0\n2,,0.0,0.0,0.0,0.0\n3,,0.0,0.0,0.0,0.0\n")
    );
}

#[test]
fn test_export_json_with_recompute() {
    let file = write_csv("export_json_src", &sample_csv());
    let out = temp_path("export_json_out", "json");

    dl_isolated("export_json_src")
        .args([
            "export",
            "--file",
            &file,
            "--format",
            "json",
            "--output",
            &out,
            "--recompute",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read json");
    let value: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(value["records"].as_array().map(Vec::len), Some(3));
    assert_eq!(value["records"][0]["City"], "Milano");
    assert_eq!(value["summary"]["total_payment"], 137.5);
}

#[test]
fn test_export_xlsx_and_pdf() {
    let file = write_csv("export_bin_src", &sample_csv());

    for ext in ["xlsx", "pdf"] {
        let out = temp_path("export_bin_out", ext);
        dl_isolated("export_bin_src")
            .args(["export", "--file", &file, "--format", ext, "--output", &out])
            .assert()
            .success();

        let bytes = fs::read(&out).expect("read output");
        assert!(!bytes.is_empty());
        if ext == "pdf" {
            assert!(bytes.starts_with(b"%PDF"));
        } else {
            assert!(bytes.starts_with(b"PK"));
        }
    }
}

#[test]
fn test_pdf_keeps_accented_city_names() {
    let file = write_csv(
        "pdf_accents_src",
        &format!("{HEADER}\n1,Città,10,100,20,120\n"),
    );
    let out = temp_path("pdf_accents_out", "pdf");

    dl_isolated("pdf_accents")
        .args(["export", "--file", &file, "--format", "pdf", "--output", &out])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("read output");
    let text = String::from_utf8_lossy(&bytes);
    assert_eq!(text.matches("/Encoding /WinAnsiEncoding").count(), 2);
    // "Città" as WinAnsi bytes, written as a hex string
    assert!(text.contains("<43697474E0>"));
}

#[test]
fn test_import_error_is_reported() {
    let file = write_csv("bad_day", &format!("{HEADER}\nfirst,A,0,0,0,0\n"));

    dl_isolated("bad_day")
        .args(["show", "--file", &file])
        .assert()
        .failure()
        .stderr(contains("line 2"));
}

#[test]
fn test_session_edit_update_export() {
    let out = temp_path("session_out", "csv");
    let script = format!(
        "set 1 city \"San Marino\"\n\
         set 1 working 12.5\n\
         set 1 extra abc\n\
         bogus\n\
         update\n\
         add 32 Bari 40 10 5\n\
         update\n\
         summary\n\
         validate\n\
         export {out}\n\
         quit\n"
    );

    dl_isolated("session_run")
        .arg("session")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(contains("Totals updated successfully!").and(contains("All data looks valid!")))
        .stderr(contains("unknown command 'bogus'"));

    let content = fs::read_to_string(&out).expect("read export");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 33);
    assert_eq!(lines[1], "1,San Marino,0.0,12.5,0.0,12.5");
    assert_eq!(lines[32], "32,Bari,40.0,10.0,5.0,15.0");
}

#[test]
fn test_session_export_to_existing_file_keeps_reading_commands() {
    let out = write_csv("session_existing", "keep me\n");
    let script = format!(
        "export {out}\n\
         set 1 km 5\n\
         update\n\
         export {out} --force\n\
         quit\n"
    );

    dl_isolated("session_existing")
        .arg("session")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(contains("Overwrite?").not())
        .stderr(contains("already exists"));

    let content = fs::read_to_string(&out).expect("read export");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 32);
    assert_eq!(lines[1], "1,,5.0,0.0,0.0,0.0");
}

#[test]
fn test_session_ends_on_eof() {
    dl_isolated("session_eof")
        .arg("session")
        .write_stdin("set 1 km 5\n")
        .assert()
        .success()
        .stdout(contains("Totals were not updated").and(contains("Session ended")));
}

#[test]
fn test_init_and_config_check() {
    let cfg_path = temp_path("init_cfg", "conf");

    common::dl()
        .args(["--config", &cfg_path, "init"])
        .assert()
        .success();

    let content = fs::read_to_string(&cfg_path).expect("read config");
    assert!(content.contains("days_in_month: 31"));
    assert!(content.contains("DID_monthly_records.csv"));

    fs::write(&cfg_path, "days_in_month: 30\n").expect("write config");
    common::dl()
        .args(["--config", &cfg_path, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("export_file").and(contains("decimals")));

    let out = temp_path("init_cfg_new", "csv");
    common::dl()
        .args(["--config", &cfg_path, "new", "--output", &out])
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&out).expect("read").lines().count(), 31);
}
