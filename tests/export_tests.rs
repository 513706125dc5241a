use predicates::str::contains;

mod common;
use common::{add_session, setup_data_file, tc, temp_out};

#[test]
fn test_export_csv_has_sheet_columns() {
    let data = setup_data_file("export_csv");
    let out = temp_out("export_csv", "csv");

    add_session(&data, "2025-09-01", "09:00", "17:30");

    tc().args([
        "--data", &data, "--test", "export", "--format", "csv", "--file", &out,
    ])
    .assert()
    .success()
    .stdout(contains("CSV export completed"));

    let content = std::fs::read_to_string(&out).unwrap();
    let mut lines = content.lines();
    assert_eq!(
        lines.next().unwrap(),
        "Date,Clock In,Clock Out,Duration (Hours),Notes"
    );
    let row = lines.next().unwrap();
    assert!(row.contains("2025-09-01"));
    assert!(row.contains("8.50"));
}

#[test]
fn test_export_marks_open_sessions_in_progress() {
    let data = setup_data_file("export_open");
    let out = temp_out("export_open", "csv");

    tc().args(["--data", &data, "--test", "in"])
        .assert()
        .success();

    tc().args([
        "--data", &data, "--test", "export", "--format", "csv", "--file", &out,
    ])
    .assert()
    .success();

    let content = std::fs::read_to_string(&out).unwrap();
    assert!(content.contains("In Progress"));
}

#[test]
fn test_export_refuses_to_overwrite_without_force() {
    let data = setup_data_file("export_force");
    let out = temp_out("export_force", "csv");

    add_session(&data, "2025-09-01", "09:00", "17:00");
    std::fs::write(&out, "existing").unwrap();

    tc().args([
        "--data", &data, "--test", "export", "--format", "csv", "--file", &out,
    ])
    .assert()
    .failure()
    .stderr(contains("already exists"));

    tc().args([
        "--data", &data, "--test", "export", "--format", "csv", "--file", &out, "--force",
    ])
    .assert()
    .success();
}

#[test]
fn test_export_xlsx_writes_file() {
    let data = setup_data_file("export_xlsx");
    let out = temp_out("export_xlsx", "xlsx");

    add_session(&data, "2025-09-01", "09:00", "17:00");

    tc().args([
        "--data", &data, "--test", "export", "--format", "xlsx", "--file", &out,
    ])
    .assert()
    .success()
    .stdout(contains("XLSX export completed"));

    assert!(std::fs::metadata(&out).unwrap().len() > 0);
}
