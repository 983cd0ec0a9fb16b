use anyhow::{Context, Result};
use clap::Parser;
use sheetdump_core::DumpConfig;
use std::io;

#[derive(Parser)]
#[command(name = "sheetdump")]
#[command(
    about = "Dump sheet names and the first rows of page_elements_with_defaults.xlsx as JSON",
    long_about = "Looks for page_elements_with_defaults.xlsx under <root>/Maanshan3DMap/ and then \
                  <root>/, where <root> is the parent of the directory holding this executable. \
                  Prints the first 21 rows of every sheet to stdout."
)]
#[command(version)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    let config = DumpConfig::default();
    let stdout = io::stdout().lock();

    match sheetdump_core::run(&config, stdout) {
        Ok(()) => Ok(()),
        Err(err) if err.is_reported() => {
            eprintln!("{err}");
            std::process::exit(1);
        }
        Err(err) => Err(err).context("Failed to dump workbook"),
    }
}
