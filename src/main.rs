use std::io::{self, Write};
use std::process::ExitCode;

use book_stats::BookStats;
use book_stats::ingestion::LoadOptions;
use book_stats::report::StatsReport;

const DEFAULT_PATH: &str = "books.csv";

fn main() -> ExitCode {
    let mut path = DEFAULT_PATH.to_string();
    let mut json = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            "-h" | "--help" => {
                println!("usage: book-stats [PATH] [--json]   (PATH defaults to {DEFAULT_PATH})");
                return ExitCode::SUCCESS;
            }
            _ => path = arg,
        }
    }

    match run(&path, json) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("book-stats: {path}: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(path: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let stats = BookStats::load(path, &LoadOptions::default())?;
    let report = StatsReport::from_stats(&stats)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        writeln!(out, "{}", report.to_json()?)?;
    } else {
        report.write_text(&mut out)?;
    }
    Ok(())
}
