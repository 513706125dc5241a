use predicates::str::contains;

mod common;
use common::{add_session, setup_data_file, tc};

fn today() -> String {
    chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

#[test]
fn test_today_bucket_sums_sessions() {
    let data = setup_data_file("summary_today");
    let today = today();

    // 2h + 3h + 4h on the same day
    add_session(&data, &today, "06:00", "08:00");
    add_session(&data, &today, "09:00", "12:00");
    add_session(&data, &today, "13:00", "17:00");

    tc().args(["--data", &data, "--test", "summary"])
        .assert()
        .success()
        .stdout(contains("Sessions:   3"))
        .stdout(contains("Today:      9.00 h"))
        .stdout(contains("Total:      9.00 h"))
        .stdout(contains("Average:    3.00 h/session"));
}

#[test]
fn test_summary_ignores_open_sessions() {
    let data = setup_data_file("summary_open");
    let today = today();

    add_session(&data, &today, "06:00", "08:00");
    tc().args(["--data", &data, "--test", "in"])
        .assert()
        .success();

    tc().args(["--data", &data, "--test", "summary"])
        .assert()
        .success()
        .stdout(contains("Sessions:   1"))
        .stdout(contains("Today:      2.00 h"));
}

#[test]
fn test_summary_range_with_breakdown() {
    let data = setup_data_file("summary_range");

    add_session(&data, "2024-01-10", "09:00", "11:00");
    add_session(&data, "2024-01-11", "09:00", "12:00");
    add_session(&data, "2024-02-01", "09:00", "10:00");

    tc().args([
        "--data",
        &data,
        "--test",
        "summary",
        "--from",
        "2024-01-01",
        "--to",
        "2024-01-31",
        "--breakdown",
    ])
    .assert()
    .success()
    .stdout(contains("Sessions:   2"))
    .stdout(contains("Total:      5.00 h"))
    .stdout(contains("2024-01-10  2.00"))
    .stdout(contains("2024-01-11  3.00"));
}

#[test]
fn test_summary_range_requires_both_bounds() {
    let data = setup_data_file("summary_bounds");

    tc().args(["--data", &data, "--test", "summary", "--from", "2024-01-01"])
        .assert()
        .failure()
        .stderr(contains("--from and --to must be given together"));
}
