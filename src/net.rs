// src/net.rs

// One-shot blocking GET against the Fed's projection pages.

use chrono::{Datelike, NaiveDate};
use reqwest::blocking::Client;

use crate::params::{HOST, PREFIX, USER_AGENT};

/// URL of the SEP projection table published for `date`.
/// Shape: `https://<host>/monetarypolicy/fomcprojtabl{YYYY}{MM}{DD}.htm`
pub fn projection_url(date: NaiveDate) -> String {
    format!(
        "https://{}{}fomcprojtabl{}{:02}{:02}.htm",
        HOST,
        PREFIX,
        date.year(),
        date.month(),
        date.day()
    )
}

/// Fetch the projection page for `date`.
///
/// `Ok(Some(body))` on HTTP 200, `Ok(None)` on any other status — dates
/// without a scheduled SEP publication simply have no page, which is a
/// normal outcome rather than an error. Transport failures (DNS, TLS,
/// connect) come back as `Err`.
pub fn fetch_projection_page(date: NaiveDate) -> Result<Option<String>, reqwest::Error> {
    let url = projection_url(date);
    let client = Client::builder().user_agent(USER_AGENT).build()?;
    let resp = client.get(&url).send()?;

    let status = resp.status();
    if status != reqwest::StatusCode::OK {
        logd!("Fetch: {} -> {}", url, status);
        return Ok(None);
    }

    logf!("Fetch: {} -> 200", url);
    let body = resp.text()?;
    Ok(Some(body))
}
