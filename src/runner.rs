// src/runner.rs

// Frontend-agnostic pipeline: Date -> fetch -> first table -> rate slice.
// GUI and CLI both call check_for_data() and render the same grid.

use std::error::Error;
use std::fmt;
use std::path::Path;

use chrono::{Local, NaiveDate};

use crate::log;
use crate::net;
use crate::rate::{self, AnalyzeError, RateSlice};
use crate::table;

#[derive(Debug)]
pub enum CheckError {
    /// The server has no page for this date (HTTP status != 200).
    NotFound,
    /// The page came back without a parseable table.
    NoTable,
    /// Transport-level failure (DNS, TLS, connect, read).
    Net(reqwest::Error),
    /// The table was found but its shape or content defeated the slice.
    Analyze(AnalyzeError),
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckError::NotFound => write!(f, "no projection table published for this date"),
            CheckError::NoTable => write!(f, "page contains no parseable table"),
            CheckError::Net(e) => write!(f, "request failed: {e}"),
            CheckError::Analyze(e) => write!(f, "analysis failed: {e}"),
        }
    }
}

impl Error for CheckError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CheckError::Net(e) => Some(e),
            CheckError::Analyze(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for CheckError {
    fn from(e: reqwest::Error) -> Self {
        CheckError::Net(e)
    }
}

impl From<AnalyzeError> for CheckError {
    fn from(e: AnalyzeError) -> Self {
        CheckError::Analyze(e)
    }
}

/// Every failure collapses to this one message in both frontends; the debug
/// log keeps the distinguishing detail.
pub const USER_ERROR_MSG: &str =
    "Data could not be retrieved. Please check the date or try again later.";

/// Run the full pipeline for one meeting date. No side effects beyond the
/// debug log; the retrieval log is the frontend's call, on success only.
pub fn check_for_data(date: NaiveDate) -> Result<RateSlice, CheckError> {
    let body = net::fetch_projection_page(date)?.ok_or(CheckError::NotFound)?;

    let raw = table::first_table(&body).ok_or_else(|| {
        loge!("Extract: no table in page for {date}");
        CheckError::NoTable
    })?;

    logd!(
        "Extract: table {}x{} for {date}",
        raw.rows.len(),
        raw.column_count()
    );

    let slice = rate::analyze(&raw).inspect_err(|e| loge!("Analyze: {date}: {e}"))?;
    logf!("Check: {date} ok");
    Ok(slice)
}

/// What a frontend renders after a successful check.
pub struct CheckOutcome {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub retrieved_at: String,
}

/// Post-pipeline step shared by GUI and CLI: build the display grid and
/// append one retrieval line. The retrieval log is touched on `Ok` only;
/// a failed check leaves it exactly as it was. `log_dir` is `None` when
/// logging is switched off. A failed log write goes to the debug log and
/// does not fail the run.
pub fn finish(
    result: Result<RateSlice, CheckError>,
    log_dir: Option<&Path>,
) -> Result<CheckOutcome, CheckError> {
    let slice = result?;
    let (headers, rows) = display_rows(&slice);

    let retrieved_at = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    if let Some(dir) = log_dir {
        if let Err(e) = log::append_retrieval(dir, &retrieved_at) {
            loge!("Log: retrieval log write failed: {e}");
        }
    }

    Ok(CheckOutcome { headers, rows, retrieved_at })
}

/// Render the slice as a display grid: header row is the label column name
/// plus the year columns; body is current, prior, Change (two decimals),
/// Direction (blank when unlabeled).
pub fn display_rows(slice: &RateSlice) -> (Vec<String>, Vec<Vec<String>>) {
    let mut headers = vec![slice.index_name.clone()];
    headers.extend(slice.columns.iter().cloned());

    let num_row = |label: &str, vals: &[f64]| -> Vec<String> {
        let mut row = vec![s!(label)];
        row.extend(vals.iter().map(|v| v.to_string()));
        row
    };

    let mut change = vec![s!("Change")];
    change.extend(slice.change.iter().map(|v| format!("{v:.2}")));

    let mut direction = vec![s!("Direction")];
    direction.extend(
        slice
            .direction
            .iter()
            .map(|d| d.map(|d| s!(d.as_str())).unwrap_or_default()),
    );

    let rows = vec![
        num_row(&slice.row_labels[0], &slice.current),
        num_row(&slice.row_labels[1], &slice.prior),
        change,
        direction,
    ];
    (headers, rows)
}
