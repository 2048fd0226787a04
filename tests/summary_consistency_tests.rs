//! Library-level tests for the entry/summary consistency guarantees.

use chrono::NaiveDate;
use std::env;
use std::fs;
use std::sync::Arc;
use std::thread;
use waterlog::config::Config;
use waterlog::errors::AppError;
use waterlog::repo::WaterRepo;

fn test_repo(name: &str) -> WaterRepo {
    let mut db = env::temp_dir();
    db.push(format!("{}_waterlog_lib.sqlite", name));
    fs::remove_file(&db).ok();

    let mut settings = env::temp_dir();
    settings.push(format!("{}_waterlog_lib_settings.yml", name));
    fs::remove_file(&settings).ok();

    let cfg = Config {
        database: db.to_string_lossy().to_string(),
        settings: settings.to_string_lossy().to_string(),
    };
    WaterRepo::open(&cfg).expect("open repo")
}

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn summary_tracks_recorded_entries() {
    let repo = test_repo("summary_tracks");
    let day = d("2024-01-01");

    repo.add_water_intake(500, day, 1_704_100_000_000).unwrap();
    repo.add_water_intake(300, day, 1_704_110_000_000).unwrap();

    let summary = repo.summary_for_date(day).unwrap().expect("summary row");
    assert_eq!(summary.total_ml, 800);
    assert_eq!(summary.entry_count, 2);
    assert_eq!(repo.today_total(day).unwrap(), 800);
}

#[test]
fn summary_tracks_removals() {
    let repo = test_repo("summary_removals");
    let day = d("2024-02-10");

    let first = repo.add_water_intake(250, day, 1).unwrap();
    repo.add_water_intake(400, day, 2).unwrap();
    repo.add_water_intake(150, day, 3).unwrap();

    repo.delete_water_entry(&first).unwrap();

    let summary = repo.summary_for_date(day).unwrap().unwrap();
    assert_eq!(summary.total_ml, 550);
    assert_eq!(summary.entry_count, 2);
}

#[test]
fn deleting_only_entry_leaves_zeroed_summary_row() {
    let repo = test_repo("zeroed_row");
    let day = d("2024-03-05");

    let entry = repo.add_water_intake(600, day, 10).unwrap();
    repo.delete_water_entry(&entry).unwrap();

    // The row survives with zeroed aggregates, it is not removed.
    let summary = repo.summary_for_date(day).unwrap().expect("summary row kept");
    assert_eq!(summary.total_ml, 0);
    assert_eq!(summary.entry_count, 0);
    assert!(repo.entries_for_date(day).unwrap().is_empty());
}

#[test]
fn deleting_missing_id_is_a_noop() {
    let repo = test_repo("missing_id");
    let day = d("2024-03-06");

    repo.add_water_intake(500, day, 10).unwrap();
    let before = repo.summary_for_date(day).unwrap().unwrap();

    assert!(!repo.remove_entry_by_id(9999).unwrap());

    let after = repo.summary_for_date(day).unwrap().unwrap();
    assert_eq!(before, after);
}

#[test]
fn dates_are_isolated() {
    let repo = test_repo("date_isolation");
    let jan = d("2024-01-01");
    let feb = d("2024-02-01");

    repo.add_water_intake(500, jan, 1).unwrap();
    let feb_entry = repo.add_water_intake(700, feb, 2).unwrap();

    repo.delete_water_entry(&feb_entry).unwrap();

    let jan_summary = repo.summary_for_date(jan).unwrap().unwrap();
    assert_eq!(jan_summary.total_ml, 500);
    assert_eq!(jan_summary.entry_count, 1);

    let feb_summary = repo.summary_for_date(feb).unwrap().unwrap();
    assert_eq!(feb_summary.total_ml, 0);
    assert_eq!(feb_summary.entry_count, 0);
}

#[test]
fn summaries_are_ordered_descending_by_date() {
    let repo = test_repo("summary_order");

    repo.add_water_intake(100, d("2024-01-01"), 1).unwrap();
    repo.add_water_intake(200, d("2024-03-01"), 2).unwrap();
    repo.add_water_intake(300, d("2024-02-01"), 3).unwrap();

    let summaries = repo.all_daily_summaries().unwrap();
    let dates: Vec<String> = summaries.iter().map(|s| s.date_str()).collect();
    assert_eq!(dates, vec!["2024-03-01", "2024-02-01", "2024-01-01"]);
}

#[test]
fn entries_for_date_ordered_by_timestamp_descending() {
    let repo = test_repo("entry_order");
    let day = d("2024-04-01");

    repo.add_water_intake(100, day, 100).unwrap();
    repo.add_water_intake(200, day, 300).unwrap();
    repo.add_water_intake(300, day, 200).unwrap();

    let entries = repo.entries_for_date(day).unwrap();
    let stamps: Vec<i64> = entries.iter().map(|e| e.timestamp).collect();
    assert_eq!(stamps, vec![300, 200, 100]);
}

#[test]
fn non_positive_amounts_are_rejected() {
    let repo = test_repo("bad_amount");
    let day = d("2024-05-01");

    assert!(matches!(
        repo.add_water_intake(0, day, 1),
        Err(AppError::InvalidAmount(0))
    ));
    assert!(matches!(
        repo.add_water_intake(-250, day, 1),
        Err(AppError::InvalidAmount(-250))
    ));

    // nothing was written
    assert!(repo.summary_for_date(day).unwrap().is_none());
}

#[test]
fn watch_today_total_receives_post_commit_values() {
    let repo = test_repo("watch_total");
    let day = d("2024-06-01");

    let (current, rx) = repo.watch_today_total(day).unwrap();
    assert_eq!(current, 0);

    repo.add_water_intake(500, day, 1).unwrap();
    assert_eq!(rx.recv().unwrap(), 500);

    let entry = repo.add_water_intake(300, day, 2).unwrap();
    assert_eq!(rx.recv().unwrap(), 800);

    repo.delete_water_entry(&entry).unwrap();
    assert_eq!(rx.recv().unwrap(), 500);
}

#[test]
fn watch_today_total_ignores_other_dates() {
    let repo = test_repo("watch_total_other_date");
    let watched = d("2024-06-02");

    let (_, rx) = repo.watch_today_total(watched).unwrap();
    repo.add_water_intake(999, d("2024-06-03"), 1).unwrap();

    assert!(rx.try_recv().is_err());
}

#[test]
fn watch_daily_summaries_receives_full_list() {
    let repo = test_repo("watch_summaries");

    let (initial, rx) = repo.watch_daily_summaries().unwrap();
    assert!(initial.is_empty());

    repo.add_water_intake(400, d("2024-07-01"), 1).unwrap();
    let update = rx.recv().unwrap();
    assert_eq!(update.len(), 1);
    assert_eq!(update[0].total_ml, 400);
    assert_eq!(update[0].entry_count, 1);
}

#[test]
fn concurrent_writers_leave_watcher_on_final_total() {
    let repo = Arc::new(test_repo("concurrent_writers"));
    let day = d("2024-09-01");

    let (current, rx) = repo.watch_today_total(day).unwrap();
    assert_eq!(current, 0);

    let mut writers = Vec::new();
    for t in 0..4 {
        let repo = Arc::clone(&repo);
        writers.push(thread::spawn(move || {
            for i in 0..25 {
                repo.add_water_intake(10, day, (t * 1000 + i) as i64).unwrap();
            }
        }));
    }
    for w in writers {
        w.join().unwrap();
    }

    let committed = repo.today_total(day).unwrap();
    assert_eq!(committed, 1000);

    // totals are published in commit order, so draining the channel must
    // end on the final committed total
    let mut last = current;
    while let Ok(v) = rx.try_recv() {
        last = v;
    }
    assert_eq!(last, committed);
}

#[test]
fn dropped_watcher_does_not_affect_writes() {
    let repo = test_repo("dropped_watcher");
    let day = d("2024-08-01");

    let (_, rx) = repo.watch_today_total(day).unwrap();
    drop(rx);

    repo.add_water_intake(500, day, 1).unwrap();
    assert_eq!(repo.today_total(day).unwrap(), 500);
}
