// src/gui.rs
use std::error::Error;
use std::path::Path;

use chrono::{Datelike, Local, NaiveDate};
use eframe::egui;
use egui_extras::{Column, DatePickerButton, TableBuilder};

use crate::params::{LOG_DIR, Params, meeting_dates};
use crate::runner::{self, USER_ERROR_MSG};

pub fn run(params: Params) -> Result<(), Box<dyn Error>> {
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "FOMC SEP Data Checker",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(params)))),
    )?;
    Ok(())
}

pub struct App {
    params: Params,

    // date palette, newest first, plus free-form picker state
    dates: Vec<NaiveDate>,
    picked: NaiveDate,

    // last run
    status: String,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    error: Option<String>,
    retrieved_at: Option<String>,
}

impl App {
    pub fn new(params: Params) -> Self {
        let dates = meeting_dates();
        let picked = dates.first().copied().unwrap_or_else(|| {
            // palette is hardcoded and valid; this is unreachable in practice
            Local::now().date_naive()
        });

        Self {
            params,
            dates,
            picked,
            status: s!("Idle"),
            headers: Vec::new(),
            rows: Vec::new(),
            error: None,
            retrieved_at: None,
        }
    }

    /// Both input paths (palette button, date picker) land here.
    /// Synchronous on the UI thread: one user, one fetch at a time.
    fn fetch(&mut self, date: NaiveDate) {
        self.status = format!("You selected: {}", date.format("%m/%d/%y"));
        self.error = None;
        self.retrieved_at = None;
        self.headers.clear();
        self.rows.clear();

        let log_dir = self.params.log_retrievals.then(|| Path::new(LOG_DIR));
        match runner::finish(runner::check_for_data(date), log_dir) {
            Ok(outcome) => {
                self.headers = outcome.headers;
                self.rows = outcome.rows;
                self.retrieved_at = Some(outcome.retrieved_at);
            }
            Err(e) => {
                loge!("GUI: {date}: {e}");
                self.error = Some(s!(USER_ERROR_MSG));
            }
        }
    }

    fn draw_date_palette(&mut self, ui: &mut egui::Ui) {
        // Group by year, newest year first; four buttons per year line up
        // in one row since each year has at most four SEP releases.
        let mut years: Vec<i32> = Vec::new();
        for d in &self.dates {
            if !years.contains(&d.year()) {
                years.push(d.year());
            }
        }

        let mut clicked: Option<NaiveDate> = None;
        for year in years {
            ui.label(egui::RichText::new(format!("Year {year}")).strong());
            ui.horizontal(|ui| {
                for d in self.dates.iter().filter(|d| d.year() == year) {
                    if ui.button(d.format("%m/%d/%y").to_string()).clicked() {
                        clicked = Some(*d);
                    }
                }
            });
        }
        if let Some(d) = clicked {
            self.fetch(d);
        }
    }

    fn draw_result_table(&self, ui: &mut egui::Ui) {
        if self.headers.is_empty() {
            return;
        }

        let mut table = TableBuilder::new(ui)
            .striped(true)
            .column(Column::auto().resizable(true).at_least(120.0));
        for _ in 1..self.headers.len() {
            table = table.column(Column::auto().at_least(70.0));
        }

        table
            .header(20.0, |mut header| {
                for h in &self.headers {
                    header.col(|ui| {
                        ui.label(h);
                    });
                }
            })
            .body(|mut body| {
                body.rows(18.0, self.rows.len(), |mut row| {
                    let row_idx = row.index();
                    if let Some(data) = self.rows.get(row_idx) {
                        for cell in data {
                            row.col(|ui| {
                                ui.label(cell);
                            });
                        }
                    }
                });
            });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("FOMC SEP Data Checker");
            ui.separator();

            self.draw_date_palette(ui);

            ui.separator();

            // Free-form variant: any date, same pipeline
            let mut fetch_picked = false;
            ui.horizontal(|ui| {
                ui.label("Other date:");
                ui.add(DatePickerButton::new(&mut self.picked));
                if ui.button("Fetch").clicked() {
                    fetch_picked = true;
                }
            });
            if fetch_picked {
                let d = self.picked;
                self.fetch(d);
            }

            ui.separator();
            ui.label(&self.status);

            if let Some(err) = &self.error {
                ui.colored_label(egui::Color32::RED, err);
            }

            self.draw_result_table(ui);

            if let Some(ts) = &self.retrieved_at {
                ui.separator();
                ui.label(format!("Data retrieved at: {ts}"));
            }
        });
    }
}
