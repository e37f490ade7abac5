mod commands;
mod output;

use clap::Parser;
use respira_core::extraction::pdftotext::PdftotextExtractor;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "respira",
    version,
    about = "Extract weekly respiratory virus counts from SZU surveillance PDFs"
)]
struct Cli {
    /// Path to the weekly PDF (e.g. "Výsledky-viry 51.KT 2025.pdf")
    pdf_path: PathBuf,

    /// Append the CSV row to this file (header is written when the file is new)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print JSON instead of CSV
    #[arg(long)]
    json: bool,

    /// pdftotext executable to use
    #[arg(
        long,
        value_name = "PATH",
        env = "RESPIRA_PDFTOTEXT",
        default_value = "pdftotext"
    )]
    pdftotext: PathBuf,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let extractor = PdftotextExtractor::with_binary(&cli.pdftotext);
    let result = commands::extract::run(&cli.pdf_path, cli.output, cli.json, &extractor);

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
