use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn missing_database_host_is_reported() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["run", "--sql", "SELECT 1", "--prompt", "Classify"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Environment variable 'DB_HOST' is required"));
}

#[test]
fn dotenv_file_supplies_database_settings() {
    let ctx = TestContext::new();
    ctx.write_file("prompt.txt", "Classify");
    ctx.write_file(".env", "DB_HOST=127.0.0.1\nDB_PORT=not-a-port\nDB_NAME=c\nDB_USER=u\n");

    ctx.cli()
        .args(["run", "--sql", "SELECT 1", "--prompt-file", "prompt.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse DB_PORT"));
}

#[test]
fn unknown_config_keys_are_rejected() {
    let ctx = TestContext::new();
    ctx.write_file("skulens.toml", "[model]\nmodle = \"gpt-4o\"\n");

    ctx.cli_with_database(3306)
        .args(["run", "--sql", "SELECT 1", "--prompt", "Classify"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("TOML parse error"));
}

#[test]
fn explicit_config_file_must_exist() {
    let ctx = TestContext::new();

    ctx.cli_with_database(3306)
        .args(["run", "--sql", "SELECT 1", "--prompt", "Classify", "--config", "nope.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn invalid_temperature_is_rejected() {
    let ctx = TestContext::new();
    ctx.write_file("custom.toml", "[model]\ntemperature = 5.0\n");

    ctx.cli_with_database(3306)
        .args(["run", "--sql", "SELECT 1", "--prompt", "Classify", "--config", "custom.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("temperature must be between 0 and 2"));
}
