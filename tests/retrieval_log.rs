// tests/retrieval_log.rs
use std::fs;

use sep_scrape::log::append_retrieval;
use sep_scrape::params::RETRIEVAL_LOG_FILE;
use sep_scrape::rate::RateSlice;
use sep_scrape::runner::{self, CheckError};

fn sample_slice() -> RateSlice {
    RateSlice {
        index_name: "Variable".into(),
        columns: vec!["2024".into(), "2025".into()],
        row_labels: ["Median".into(), "June projection".into()],
        current: vec![4.4, 3.4],
        prior: vec![4.9, 4.1],
        change: vec![-0.5, -0.7],
        direction: vec![None, Some(sep_scrape::rate::Direction::BigDove)],
    }
}

#[test]
fn creates_dir_and_appends_one_line() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("logs");
    assert!(!dir.exists());

    append_retrieval(&dir, "2024-12-18 10:30:00").unwrap();

    let contents = fs::read_to_string(dir.join(RETRIEVAL_LOG_FILE)).unwrap();
    assert_eq!(contents, "Data retrieved at: 2024-12-18 10:30:00\n");
}

#[test]
fn existing_dir_is_fine_and_lines_accumulate() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("logs");

    append_retrieval(&dir, "2024-12-18 10:30:00").unwrap();
    // dir now exists; second run must neither fail nor truncate
    append_retrieval(&dir, "2024-12-18 10:31:07").unwrap();

    let contents = fs::read_to_string(dir.join(RETRIEVAL_LOG_FILE)).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "Data retrieved at: 2024-12-18 10:30:00");
    assert_eq!(lines[1], "Data retrieved at: 2024-12-18 10:31:07");
}

#[test]
fn failed_check_writes_zero_log_entries() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("logs");

    let res = runner::finish(Err(CheckError::NotFound), Some(&dir));
    assert!(res.is_err());
    // no log file, not even an empty one
    assert!(!dir.join(RETRIEVAL_LOG_FILE).exists());

    let res = runner::finish(Err(CheckError::NoTable), Some(&dir));
    assert!(res.is_err());
    assert!(!dir.exists());
}

#[test]
fn successful_check_appends_exactly_one_line() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("logs");

    let outcome = runner::finish(Ok(sample_slice()), Some(&dir)).unwrap();
    assert_eq!(outcome.headers, vec!["Variable", "2024", "2025"]);
    assert_eq!(outcome.rows.len(), 4);

    let contents = fs::read_to_string(dir.join(RETRIEVAL_LOG_FILE)).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 1);
    assert_eq!(
        lines[0],
        format!("Data retrieved at: {}", outcome.retrieved_at)
    );
}

#[test]
fn logging_off_leaves_the_filesystem_alone() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("logs");

    runner::finish(Ok(sample_slice()), None).unwrap();
    assert!(!dir.exists());
}

#[test]
fn every_line_matches_the_fixed_format() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().to_path_buf();

    for ts in ["2023-06-14 09:00:00", "2024-03-20 15:45:12"] {
        append_retrieval(&dir, ts).unwrap();
    }

    let contents = fs::read_to_string(dir.join(RETRIEVAL_LOG_FILE)).unwrap();
    for line in contents.lines() {
        let ts = line.strip_prefix("Data retrieved at: ").expect("prefix");
        assert!(chrono::NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M:%S").is_ok());
    }
}
