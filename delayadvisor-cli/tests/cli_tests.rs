//! CLI integration tests

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

/// Build command for the delayadvisor-cli binary (finds it in target/debug when run via cargo test).
fn delayadvisor_cli() -> Command {
    cargo_bin_cmd!("delayadvisor-cli")
}

#[test]
fn test_cli_help() {
    let mut cmd = delayadvisor_cli();

    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("555"));
}

#[test]
fn test_cli_version() {
    let mut cmd = delayadvisor_cli();

    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_advise_with_flags() {
    let mut cmd = delayadvisor_cli();

    cmd.arg("advise")
        .arg("--delay")
        .arg("1.0")
        .arg("--voltage")
        .arg("12")
        .arg("--load")
        .arg("30");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("9.1 µF"))
        .stdout(predicate::str::contains("BC548 (Low power NPN transistor)"));
}

#[test]
fn test_cli_advise_interactive() {
    let mut cmd = delayadvisor_cli();

    cmd.arg("advise").write_stdin("1.0\n12\n30\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("9.1 µF"))
        .stdout(predicate::str::contains("Delay (seconds)"));
}

#[test]
fn test_cli_advise_partial_flags_prompts_for_rest() {
    let mut cmd = delayadvisor_cli();

    cmd.arg("advise")
        .arg("--delay")
        .arg("2.0")
        .write_stdin("12\n600\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("TIP41"));
}

#[test]
fn test_cli_advise_json_output() {
    let mut cmd = delayadvisor_cli();

    cmd.arg("advise")
        .arg("--delay")
        .arg("1.0")
        .arg("--voltage")
        .arg("12")
        .arg("--load")
        .arg("30")
        .arg("--format")
        .arg("json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"wiring_guide\""))
        .stdout(predicate::str::contains("\"part_number\": \"BC548\""));
}

#[test]
fn test_cli_report_has_eight_wiring_lines() {
    let mut cmd = delayadvisor_cli();

    cmd.arg("advise")
        .arg("--delay")
        .arg("5.0")
        .arg("--voltage")
        .arg("9")
        .arg("--load")
        .arg("2000");

    let output = cmd.output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let wiring_lines = stdout.lines().filter(|l| l.starts_with("Pin ")).count();
    assert_eq!(wiring_lines, 8);
}

#[test]
fn test_cli_rejects_zero_delay() {
    let mut cmd = delayadvisor_cli();

    cmd.arg("advise")
        .arg("--delay")
        .arg("0")
        .arg("--voltage")
        .arg("12")
        .arg("--load")
        .arg("30");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_cli_rejects_non_numeric_input() {
    let mut cmd = delayadvisor_cli();

    cmd.arg("advise").write_stdin("not-a-number\n");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_cli_rejects_missing_stdin_entry() {
    let mut cmd = delayadvisor_cli();

    // Only two of the three prompts answered
    cmd.arg("advise").write_stdin("1.0\n12\n");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("missing entry"));
}

#[test]
fn test_cli_custom_catalog() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"name":"custom","parts":[
            {{"part_number":"2N2222","description":"General purpose NPN","min_load_ma":0.0}}
        ]}}"#
    )
    .unwrap();

    let mut cmd = delayadvisor_cli();
    cmd.arg("advise")
        .arg("--delay")
        .arg("1.0")
        .arg("--voltage")
        .arg("12")
        .arg("--load")
        .arg("30")
        .arg("--catalog")
        .arg(file.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("2N2222"));
}

#[test]
fn test_cli_catalog_without_fallback_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"name":"no-fallback","parts":[
            {{"part_number":"IRF540","description":"Power MOSFET","min_load_ma":500.0}}
        ]}}"#
    )
    .unwrap();

    // A 100mA load satisfies no bracket in this catalog; it must be
    // refused at load time instead of recommending an unmatched part
    let mut cmd = delayadvisor_cli();
    cmd.arg("advise")
        .arg("--delay")
        .arg("1.0")
        .arg("--voltage")
        .arg("12")
        .arg("--load")
        .arg("100")
        .arg("--catalog")
        .arg(file.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("fallback"));
}

#[test]
fn test_cli_nonexistent_catalog() {
    let mut cmd = delayadvisor_cli();

    cmd.arg("advise")
        .arg("--delay")
        .arg("1.0")
        .arg("--voltage")
        .arg("12")
        .arg("--load")
        .arg("30")
        .arg("--catalog")
        .arg("does_not_exist.json");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_cli_transistors_command() {
    let mut cmd = delayadvisor_cli();

    cmd.arg("transistors");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("IRFZ44N"))
        .stdout(predicate::str::contains("BC548"));
}

#[test]
fn test_cli_transistors_verbose() {
    let mut cmd = delayadvisor_cli();

    cmd.arg("transistors").arg("--verbose");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Power MOSFET"))
        .stdout(predicate::str::contains("1500"));
}

#[test]
fn test_cli_exit_codes() {
    let mut cmd = delayadvisor_cli();
    cmd.arg("advise")
        .arg("--delay")
        .arg("1.0")
        .arg("--voltage")
        .arg("12")
        .arg("--load")
        .arg("30");
    cmd.assert().code(0);

    let mut cmd = delayadvisor_cli();
    cmd.arg("advise")
        .arg("--delay=-1")
        .arg("--voltage")
        .arg("12")
        .arg("--load")
        .arg("30");
    cmd.assert().code(1);
}

#[test]
fn test_cli_output_formats_are_different() {
    let args = ["--delay", "1.0", "--voltage", "12", "--load", "30"];

    let mut cmd_human = delayadvisor_cli();
    cmd_human.arg("advise").args(args).arg("--format").arg("human");
    let human_output = cmd_human.output().unwrap();

    let mut cmd_json = delayadvisor_cli();
    cmd_json.arg("advise").args(args).arg("--format").arg("json");
    let json_output = cmd_json.output().unwrap();

    assert_ne!(
        human_output.stdout,
        json_output.stdout,
        "Different formats should produce different output"
    );
}
