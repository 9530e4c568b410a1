use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn missing_sql_is_rejected_before_configuration() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["run", "--prompt", "Classify this product."])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: SQL query is required"))
        .stderr(predicate::str::contains("DB_HOST").not());
}

#[test]
fn blank_prompt_is_rejected() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["run", "--sql", "SELECT * FROM products", "--prompt", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Prompt template is required"));
}

#[test]
fn empty_prompt_file_is_rejected() {
    let ctx = TestContext::new();
    ctx.write_file("prompt.txt", "\n\n");

    ctx.cli()
        .args(["run", "--sql", "SELECT 1", "--prompt-file", "prompt.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Prompt template is required"));
}

#[test]
fn unreadable_sql_file_is_reported() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["run", "--sql-file", "missing.sql", "--prompt", "Classify"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read SQL query"));
}

#[test]
fn missing_input_writes_no_report() {
    let ctx = TestContext::new();

    ctx.cli().args(["run", "--prompt", "Classify"]).assert().failure();

    assert!(!ctx.work_dir().join("skulens-report.html").exists());
}
