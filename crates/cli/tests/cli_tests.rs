use assert_cmd::Command;
use predicates::prelude::*;

fn salescript() -> Command {
    Command::cargo_bin("salescript").unwrap()
}

#[test]
fn test_cli_help() {
    salescript()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sales call script generator"));
}

#[test]
fn test_cli_serve_help() {
    salescript()
        .args(["serve", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("port"))
        .stdout(predicate::str::contains("memory"));
}

#[test]
fn test_cli_parse_stdin() {
    let output = salescript()
        .arg("parse")
        .write_stdin("[SUMMARY]\nFoo\n[OPENING]\nBar\n[CLOSING]\nBaz")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let sections: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(sections["summary"], "Foo");
    assert_eq!(sections["opening"], "Bar");
    assert_eq!(sections["qualifying_questions"], "");
    assert_eq!(sections["closing"], "Baz");
    assert_eq!(sections["coach_tips"], "");
}

#[test]
fn test_cli_parse_empty_input() {
    salescript()
        .arg("parse")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"summary\": \"\""));
}

#[test]
fn test_cli_parse_missing_file() {
    salescript()
        .args(["parse", "/nonexistent/output.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn test_cli_serve_requires_api_key() {
    salescript()
        .args(["serve", "--memory"])
        .env_remove("SALESCRIPT_API_KEY")
        .env_remove("OPENAI_API_KEY")
        .assert()
        .failure()
        .stderr(predicate::str::contains("SALESCRIPT_API_KEY"));
}

#[test]
fn test_cli_migrate_requires_database_url() {
    salescript()
        .arg("migrate")
        .env_remove("DATABASE_URL")
        .assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL"));
}
