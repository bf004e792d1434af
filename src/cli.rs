// src/cli.rs
use std::env;
use std::path::Path;

use chrono::NaiveDate;

use crate::params::{LOG_DIR, Params, meeting_dates};
use crate::runner::{self, USER_ERROR_MSG};

pub enum Mode {
    Cli(Params),
    Gui(Params),
}

// Decide CLI vs GUI
pub fn detect_mode() -> Result<Mode, Box<dyn std::error::Error>> {
    let mut params = Params::new();

    if env::args().len() == 1 {
        // only program name
        return Ok(Mode::Gui(params));
    }
    parse_cli(&mut params)?;
    Ok(Mode::Cli(params))
}

pub fn run(params: Params) -> Result<(), Box<dyn std::error::Error>> {
    if params.list_dates {
        for d in meeting_dates() {
            println!("{}", d.format("%Y-%m-%d"));
        }
        return Ok(());
    }

    let date = params.date.ok_or("Specify --date YYYY-MM-DD or --list-dates")?;

    let log_dir = params.log_retrievals.then(|| Path::new(LOG_DIR));
    let outcome = match runner::finish(runner::check_for_data(date), log_dir) {
        Ok(outcome) => outcome,
        Err(e) => {
            loge!("CLI: {date}: {e}");
            return Err(USER_ERROR_MSG.into());
        }
    };

    print_grid(&outcome.headers, &outcome.rows);
    println!("Data retrieved at: {}", outcome.retrieved_at);
    Ok(())
}

/// Column-aligned plain-text grid.
fn print_grid(headers: &[String], rows: &[Vec<String>]) {
    let cols = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(cols) {
            if cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
    }

    let print_row = |cells: &[String]| {
        let line = cells
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{:<w$}", c, w = widths.get(i).copied().unwrap_or(0)))
            .collect::<Vec<_>>()
            .join("  ");
        println!("{}", line.trim_end());
    };

    print_row(headers);
    for row in rows {
        print_row(row);
    }
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "-d" | "--date" => {
                let v = args.next().ok_or("Missing value for --date")?;
                let d = NaiveDate::parse_from_str(&v, "%Y-%m-%d")
                    .map_err(|_| format!("Bad date (want YYYY-MM-DD): {}", v))?;
                params.date = Some(d);
            }
            "--list-dates" => params.list_dates = true,
            "--no-log" => params.log_retrievals = false,
            "-h" | "--help" => {
                eprintln!("Usage: --date YYYY-MM-DD [--no-log] | --list-dates");
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }
    Ok(())
}
