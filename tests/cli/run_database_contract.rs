use crate::harness::TestContext;
use predicates::prelude::*;
use std::net::TcpListener;

/// A local port with nothing listening on it.
fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    port
}

#[test]
fn unreachable_database_aborts_and_reports_error() {
    let ctx = TestContext::new();

    ctx.cli_with_database(closed_port())
        .args(["run", "--sql", "SELECT 1", "--prompt", "Classify", "--report", "out/report.html"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Database error"))
        .stderr(predicate::str::contains("secret").not());

    let html = ctx.read_file("out/report.html");
    assert!(html.contains("Database error"));
}
