// src/bin/cli.rs
use sep_scrape::cli::{self, Mode};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    match cli::detect_mode() {
        Ok(Mode::Cli(params)) => cli::run(params).map_err(|e| color_eyre::eyre::eyre!("{e}")),
        Ok(Mode::Gui(params)) => {
            sep_scrape::gui::run(params).map_err(|e| color_eyre::eyre::eyre!("{e}"))
        }
        Err(e) => Err(color_eyre::eyre::eyre!("{e}")),
    }
}
