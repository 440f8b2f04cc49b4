use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn gracehome(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("gracehome").unwrap();
    cmd.env("GRACEHOME_DATA_DIR", dir.path())
        .env_remove("GEMINI_API_KEY")
        .env_remove("GRACEHOME_LOG");
    cmd
}

fn english(dir: &TempDir) {
    gracehome(dir).args(["settings", "language", "en"]).assert().success();
}

#[test]
fn config_reports_data_dir() {
    let dir = TempDir::new().unwrap();
    gracehome(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains(dir.path().to_string_lossy().to_string()))
        .stdout(predicate::str::contains("Currency:    SEK"));
}

#[test]
fn finance_add_and_list() {
    let dir = TempDir::new().unwrap();
    gracehome(&dir)
        .args(["finance", "add", "45.50", "--category", "groceries", "--date", "2024-03-09", "--notes", "Weekly shop"])
        .assert()
        .success();

    gracehome(&dir)
        .args(["finance", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-03-09"))
        .stdout(predicate::str::contains("kr45.50"))
        .stdout(predicate::str::contains("Weekly shop"));

    assert!(dir.path().join("data").join("transactions.json").exists());
}

#[test]
fn finance_rejects_non_positive_amount() {
    let dir = TempDir::new().unwrap();
    gracehome(&dir)
        .args(["finance", "add", "0", "--category", "rent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("greater than zero"));
}

#[test]
fn finance_rejects_bad_date() {
    let dir = TempDir::new().unwrap();
    gracehome(&dir)
        .args(["finance", "add", "10", "--date", "03/09/2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("YYYY-MM-DD"));
}

#[test]
fn calendar_month_expands_weekly_event() {
    let dir = TempDir::new().unwrap();
    gracehome(&dir)
        .args(["calendar", "add", "Sunday Service", "--date", "2024-01-07", "--recurring", "weekly"])
        .assert()
        .success();

    gracehome(&dir)
        .args(["calendar", "month", "2024-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01-07"))
        .stdout(predicate::str::contains("2024-01-14"))
        .stdout(predicate::str::contains("2024-01-21"))
        .stdout(predicate::str::contains("2024-01-28"))
        .stdout(predicate::str::contains("2024-01-31").not());
}

#[test]
fn calendar_monthly_on_31st_skips_february() {
    let dir = TempDir::new().unwrap();
    english(&dir);
    gracehome(&dir)
        .args(["calendar", "add", "Review", "--date", "2024-01-31", "--recurring", "monthly"])
        .assert()
        .success();

    gracehome(&dir)
        .args(["calendar", "month", "2024-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No events"));
}

#[test]
fn budget_show_flags_full_goal() {
    let dir = TempDir::new().unwrap();
    english(&dir);
    gracehome(&dir).args(["budget", "set", "rent", "1200"]).assert().success();
    gracehome(&dir)
        .args(["finance", "add", "1200", "--category", "rent"])
        .assert()
        .success();

    gracehome(&dir)
        .args(["budget", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("kr1200.00 of kr1200.00"))
        .stdout(predicate::str::contains("Over limit"));
}

#[test]
fn dashboard_falls_back_to_default_verse() {
    let dir = TempDir::new().unwrap();
    english(&dir);
    gracehome(&dir)
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome back, Family!"))
        .stdout(predicate::str::contains("Philippians 4:13"))
        .stdout(predicate::str::contains("No budget set for this month."));
}

#[test]
fn shopping_toggle_moves_item() {
    let dir = TempDir::new().unwrap();
    english(&dir);
    gracehome(&dir)
        .args(["shopping", "add", "Milk", "--quantity", "2"])
        .assert()
        .success();

    let list = gracehome(&dir).args(["shopping", "list"]).output().unwrap();
    let stdout = String::from_utf8(list.stdout).unwrap();
    assert!(stdout.contains("To Buy (1)"));
    let id = stdout
        .split_whitespace()
        .find(|word| word.starts_with("itm-"))
        .unwrap()
        .to_string();

    gracehome(&dir).args(["shopping", "toggle", &id]).assert().success();
    gracehome(&dir)
        .args(["shopping", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Purchased Items (1)"));
}

#[test]
fn delete_unknown_event_fails() {
    let dir = TempDir::new().unwrap();
    gracehome(&dir)
        .args(["calendar", "delete", "evt-00000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn devotional_answer_updates_score() {
    let dir = TempDir::new().unwrap();
    english(&dir);
    gracehome(&dir)
        .args(["devotional", "answer", "giving_1", "Cheerful"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 1/"));

    gracehome(&dir)
        .args(["devotional", "answer", "no_such_blank", "x"])
        .assert()
        .failure();
}

#[test]
fn audit_lists_changes() {
    let dir = TempDir::new().unwrap();
    gracehome(&dir)
        .args(["shopping", "add", "Bread"])
        .assert()
        .success();

    gracehome(&dir)
        .args(["audit", "--limit", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE ShoppingItem"))
        .stdout(predicate::str::contains("(Bread)"));
}

#[test]
fn finance_rejects_malformed_amounts() {
    let dir = TempDir::new().unwrap();
    for amount in ["--5", "1.-5", "99999999999999999", "1.\u{20ac}5"] {
        gracehome(&dir)
            .args(["finance", "add", "--category", "rent", "--", amount])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid amount"));
    }
    assert!(!dir.path().join("data").join("transactions.json").exists());
}

#[test]
fn calendar_upcoming_rejects_oversized_window() {
    let dir = TempDir::new().unwrap();
    gracehome(&dir)
        .args(["calendar", "upcoming", "--days", "100000"])
        .assert()
        .failure();
}
