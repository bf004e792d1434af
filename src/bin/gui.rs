// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use sep_scrape::gui;
use sep_scrape::params::Params;

fn main() {
    if let Err(e) = gui::run(Params::new()) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
