use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn splitly(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("splitly").unwrap();
    cmd.env("SPLITLY_DATA_DIR", dir.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

fn run(dir: &TempDir, args: &[&str]) -> String {
    let output = splitly(dir).args(args).assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

/// Alice, Bob and Carol in a group called Trip; returns the join code
fn trip(dir: &TempDir) -> String {
    run(dir, &["init"]);
    for name in ["Alice", "Bob", "Carol"] {
        run(dir, &["member", "add", name]);
    }

    let created = run(dir, &["group", "create", "Trip", "--as", "Alice"]);
    let code = created
        .lines()
        .find_map(|line| line.trim().strip_prefix("Join code: "))
        .unwrap()
        .to_string();

    run(dir, &["group", "join", &code, "--as", "Bob"]);
    run(dir, &["group", "join", &code, "--as", "Carol"]);
    code
}

#[test]
fn commands_before_init_fail() {
    let dir = TempDir::new().unwrap();

    splitly(&dir)
        .args(["member", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("splitly init"));
}

#[test]
fn init_again_keeps_existing_data() {
    let dir = TempDir::new().unwrap();
    run(&dir, &["init"]);
    run(&dir, &["member", "add", "Alice"]);

    splitly(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already initialized"));

    splitly(&dir)
        .args(["member", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice"));
}

#[test]
fn verbose_diagnostics_name_their_fields() {
    let dir = TempDir::new().unwrap();
    run(&dir, &["init"]);

    splitly(&dir)
        .args(["-v", "member", "add", "Alice"])
        .assert()
        .success()
        .stderr(predicate::str::contains("created member"))
        .stderr(predicate::str::contains("name=Alice"));
}

#[test]
fn shared_dinner_flow() {
    let dir = TempDir::new().unwrap();
    trip(&dir);

    splitly(&dir)
        .args(["expense", "add", "Trip", "90", "Dinner", "--paid-by", "Alice"])
        .assert()
        .success();

    splitly(&dir)
        .args(["settle", "balances", "Trip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("+ 60.00"))
        .stdout(predicate::str::contains("- 30.00"));

    splitly(&dir)
        .args(["settle", "suggest", "Trip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bob pays Alice 30.00"))
        .stdout(predicate::str::contains("Carol pays Alice 30.00"));
}

#[test]
fn recorded_payment_settles_the_group() {
    let dir = TempDir::new().unwrap();
    trip(&dir);

    run(&dir, &["exp", "add", "Trip", "40", "Taxi", "-p", "Bob", "-s", "Alice,Bob"]);
    run(&dir, &["settle", "record", "Trip", "--from", "Alice", "--to", "Bob", "20"]);

    splitly(&dir)
        .args(["settle", "suggest", "Trip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Everyone is settled up."));

    splitly(&dir)
        .args(["settle", "history", "Trip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice paid Bob 20.00"));
}

#[test]
fn outsider_cannot_add_expense() {
    let dir = TempDir::new().unwrap();
    trip(&dir);
    run(&dir, &["member", "add", "Eve"]);

    splitly(&dir)
        .args(["expense", "add", "Trip", "10", "Snacks", "--paid-by", "Eve"])
        .assert()
        .failure();
}

#[test]
fn json_report_and_audit_trail() {
    let dir = TempDir::new().unwrap();
    let code = trip(&dir);
    run(&dir, &["expense", "add", "Trip", "90", "Dinner", "--paid-by", "Alice"]);

    let report = run(&dir, &["report", "Trip", "--format", "json"]);
    let value: serde_json::Value = serde_json::from_str(&report).unwrap();
    assert_eq!(value["report"]["group_code"], code.as_str());
    assert_eq!(value["report"]["suggested_settlements"].as_array().unwrap().len(), 2);

    splitly(&dir)
        .args(["audit", "-n", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE Expense"))
        .stdout(predicate::str::contains("Dinner"));
}
