use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db_with_data, setup_test_db, setup_test_settings, temp_out, wl};

#[test]
fn test_export_summaries_csv() {
    let db_path = setup_test_db("export_csv");
    let settings = setup_test_settings("export_csv");
    init_db_with_data(&db_path, &settings);

    let out = temp_out("export_csv", "csv");

    wl().args([
        "--db",
        &db_path,
        "--settings",
        &settings,
        "export",
        "--format",
        "csv",
        "--file",
        &out,
    ])
    .assert()
    .success()
    .stdout(contains("Summaries export completed"));

    let content = fs::read_to_string(&out).expect("read export");
    assert!(content.starts_with("date,total_ml,entry_count,last_updated"));
    assert!(content.contains("2024-01-01,800,2,"));
}

#[test]
fn test_export_entries_json() {
    let db_path = setup_test_db("export_json");
    let settings = setup_test_settings("export_json");
    init_db_with_data(&db_path, &settings);

    let out = temp_out("export_json", "json");

    wl().args([
        "--db",
        &db_path,
        "--settings",
        &settings,
        "export",
        "--format",
        "json",
        "--file",
        &out,
        "--entries",
    ])
    .assert()
    .success()
    .stdout(contains("Entries export completed"));

    let content = fs::read_to_string(&out).expect("read export");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = parsed.as_array().expect("array of entries");
    assert_eq!(rows.len(), 2);
    // newest first: the 12:30 entry precedes the 09:00 one
    assert_eq!(rows[0]["date"], "2024-01-01");
    assert_eq!(rows[0]["amount_ml"], 300);
    assert_eq!(rows[1]["amount_ml"], 500);
}

#[test]
fn test_export_refuses_to_overwrite_without_force() {
    let db_path = setup_test_db("export_force");
    let settings = setup_test_settings("export_force");
    init_db_with_data(&db_path, &settings);

    let out = temp_out("export_force", "csv");
    fs::write(&out, "placeholder").expect("create existing file");

    wl().args([
        "--db",
        &db_path,
        "--settings",
        &settings,
        "export",
        "--file",
        &out,
    ])
    .assert()
    .failure()
    .stderr(contains("already exists"));

    // unchanged
    assert_eq!(fs::read_to_string(&out).unwrap(), "placeholder");

    wl().args([
        "--db",
        &db_path,
        "--settings",
        &settings,
        "export",
        "--file",
        &out,
        "--force",
    ])
    .assert()
    .success();

    assert!(fs::read_to_string(&out).unwrap().starts_with("date,"));
}
