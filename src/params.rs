// src/params.rs
use chrono::NaiveDate;

pub const HOST: &str = "www.federalreserve.gov";
pub const PREFIX: &str = "/monetarypolicy/";

/// The server rejects clients without a browser-like User-Agent.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.6261.69 Safari/537.36";

// Row/column offsets into the SEP table. The federal funds rate projections
// land at these exact positions in the published table; a shape change on
// the Fed's side means changing these, nothing else.
pub const CURRENT_ROW_OFFSET: usize = 9;
pub const PRIOR_ROW_OFFSET: usize = 10;
pub const SLICE_COLUMN_COUNT: usize = 5;

pub const LOG_DIR: &str = "logs";
pub const RETRIEVAL_LOG_FILE: &str = "retrieval_log.txt";

/// SEP publication dates offered as one-click buttons, newest first.
/// (y, m, d) tuples; `meeting_dates()` turns them into `NaiveDate`s.
pub const MEETING_DATES: &[(i32, u32, u32)] = &[
    (2024, 12, 18),
    (2024, 9, 18),
    (2024, 6, 12),
    (2024, 3, 20),
    (2023, 12, 13),
    (2023, 9, 20),
    (2023, 6, 14),
    (2023, 3, 22),
    (2022, 12, 14),
    (2022, 9, 21),
    (2022, 6, 15),
    (2022, 3, 16),
];

pub fn meeting_dates() -> Vec<NaiveDate> {
    MEETING_DATES
        .iter()
        .filter_map(|&(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))
        .collect()
}

#[derive(Clone)]
pub struct Params {
    pub date: Option<NaiveDate>, // date to check (CLI); GUI picks interactively
    pub list_dates: bool,        // print the known SEP dates then exit
    pub log_retrievals: bool,    // append to the retrieval log on success
}

impl Params {
    pub fn new() -> Self {
        Self {
            date: None,
            list_dates: false,
            log_retrievals: true,
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}
