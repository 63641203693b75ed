use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};
use tempfile::TempDir;

const BIN_NAME: &str = "pocket";

fn pocket(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("POCKET_LEDGER_DATA_DIR", data_dir.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

fn initialized() -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    pocket(&dir).arg("init").assert().success();
    dir
}

#[test]
fn init_creates_settings_and_event_files() {
    let dir = TempDir::new().expect("temp dir");

    pocket(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Initialization complete!").and(contains("Bank, Savings, Cash")));

    assert!(dir.path().join("config.json").exists());
    assert!(dir.path().join("data").join("expenses.json").exists());
}

#[test]
fn commands_require_init() {
    let dir = TempDir::new().expect("temp dir");

    pocket(&dir)
        .args(["summary"])
        .assert()
        .failure()
        .stderr(contains("pocket init"));
}

#[test]
fn income_then_expense_updates_summary() {
    let dir = initialized();

    pocket(&dir)
        .args(["income", "add", "Bank", "1000", "--source", "Salary"])
        .assert()
        .success()
        .stdout(contains("Recorded income: Nu. 1,000.00 into Bank"));

    pocket(&dir)
        .args(["expense", "add", "bank", "300", "--category", "groceries"])
        .assert()
        .success()
        .stdout(contains("Remaining: Nu. 700.00"));

    pocket(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(
            contains("Total Income:      Nu. 1,000.00")
                .and(contains("Net Balance:       Nu. 700.00"))
                .and(contains("Top Category:      Groceries")),
        );
}

#[test]
fn expense_over_balance_is_rejected() {
    let dir = initialized();

    pocket(&dir)
        .args(["income", "add", "Bank", "700"])
        .assert()
        .success();

    pocket(&dir)
        .args(["expense", "add", "Bank", "800", "-c", "Rent"])
        .assert()
        .failure()
        .stderr(contains(
            "Insufficient funds in account 'Bank': requested 800.00, available 700.00",
        ));

    pocket(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(contains("No expenses found."));

    pocket(&dir)
        .args(["audit"])
        .assert()
        .success()
        .stdout(contains("REJECT").and(contains("Reason: Insufficient funds")));

    // Spending the exact balance is accepted
    pocket(&dir)
        .args(["expense", "add", "Bank", "700", "-c", "Rent"])
        .assert()
        .success();
}

#[test]
fn oversized_amount_is_refused() {
    let dir = initialized();

    pocket(&dir)
        .args(["income", "add", "Bank", "50000000000000000.00"])
        .assert()
        .failure()
        .stderr(contains("exceeds the largest single amount"));

    pocket(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(contains("Total Income:      Nu. 0.00"));
}

#[test]
fn transfer_to_same_account_fails() {
    let dir = initialized();

    pocket(&dir)
        .args(["transfer", "add", "Bank", "bank", "50"])
        .assert()
        .failure()
        .stderr(contains("Cannot transfer from 'Bank' to itself"));
}

#[test]
fn transfer_moves_balance() {
    let dir = initialized();

    pocket(&dir)
        .args(["income", "add", "Bank", "500"])
        .assert()
        .success();
    pocket(&dir)
        .args(["transfer", "add", "Bank", "Cash", "200", "--note", "ATM"])
        .assert()
        .success();

    pocket(&dir)
        .args(["expense", "add", "Cash", "200", "-c", "Cash Withdrawals"])
        .assert()
        .success()
        .stdout(contains("Remaining: Nu. 0.00"));

    pocket(&dir)
        .args(["summary", "--output", "csv"])
        .assert()
        .success()
        .stdout(contains("Cash,0.00,200.00,200.00,200.00,0.00,0.00").and(contains("TOTAL")));
}

#[test]
fn unknown_category_is_rejected() {
    let dir = initialized();

    pocket(&dir)
        .args(["expense", "add", "Bank", "5", "-c", "Yachts"])
        .assert()
        .failure()
        .stderr(contains("Unknown expense category: Yachts"));
}

#[test]
fn period_shows_billing_cycle() {
    let dir = TempDir::new().expect("temp dir");

    pocket(&dir)
        .args(["period", "--date", "2025-02-03"])
        .assert()
        .success()
        .stdout(contains("2025-01-27..2025-02-26").and(contains("Jan 27 - Feb 26, 2025")));
}

#[test]
fn config_switches_cycle_policy() {
    let dir = initialized();

    pocket(&dir)
        .args(["config", "--cycle", "weekly"])
        .assert()
        .failure()
        .stderr(contains("Unknown cycle policy 'weekly'"));

    pocket(&dir)
        .args(["config", "--cycle", "calendar-month"])
        .assert()
        .success()
        .stdout(contains("Cycle policy set to calendar_month"));

    pocket(&dir)
        .args(["period", "--date", "2025-02-03"])
        .assert()
        .success()
        .stdout(contains("February 2025 (2025-02-01..2025-02-28)"));
}

#[test]
fn insights_json_rejects_bad_rate() {
    let dir = initialized();

    pocket(&dir)
        .args(["insights", "--target-rate", "1.5"])
        .assert()
        .failure()
        .stderr(contains("Target savings rate must be between 0 and 1"));

    pocket(&dir)
        .args(["insights", "--target-rate", "0.2", "--json"])
        .assert()
        .success()
        .stdout(contains("\"target_savings_rate\": 0.2"));
}

#[test]
fn export_all_writes_json() {
    let dir = initialized();
    let output = dir.path().join("export.json");

    pocket(&dir)
        .args(["income", "add", "Savings", "25"])
        .assert()
        .success();
    pocket(&dir)
        .args(["export", "all"])
        .arg(&output)
        .assert()
        .success();

    let contents = std::fs::read_to_string(&output).expect("export written");
    assert!(contents.contains("\"schema_version\":\"1.0.0\""));
    assert!(contents.contains("Savings"));
}

#[test]
fn export_check_reads_back_json_and_yaml() {
    let dir = initialized();
    let json_out = dir.path().join("ledger.json");
    let yaml_out = dir.path().join("ledger.yaml");

    pocket(&dir)
        .args(["income", "add", "Bank", "100"])
        .assert()
        .success();
    pocket(&dir)
        .args(["export", "all", "--pretty"])
        .arg(&json_out)
        .assert()
        .success();
    pocket(&dir)
        .args(["export", "all", "--format", "yaml"])
        .arg(&yaml_out)
        .assert()
        .success();

    for file in [&json_out, &yaml_out] {
        pocket(&dir)
            .args(["export", "check"])
            .arg(file)
            .assert()
            .success()
            .stdout(contains("Export is valid").and(contains("Income:         1")));
    }

    let broken = dir.path().join("broken.json");
    std::fs::write(&broken, "{\"schema_version\": \"9.9.9\"}").expect("write");
    pocket(&dir)
        .args(["export", "check"])
        .arg(&broken)
        .assert()
        .failure();
}
