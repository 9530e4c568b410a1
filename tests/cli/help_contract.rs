use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn run_help_lists_input_flags() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["run", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--sql"))
        .stdout(predicate::str::contains("--prompt-file"))
        .stdout(predicate::str::contains("--prompt-preview"));
}

#[test]
fn run_alias_is_accepted() {
    let ctx = TestContext::new();

    ctx.cli().args(["r", "--help"]).assert().success();
}

#[test]
fn sql_flag_and_file_conflict() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["run", "--sql", "SELECT 1", "--sql-file", "query.sql", "-p", "t"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
