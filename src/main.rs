//! Precis CLI - Extractive Text Summarizer
//!
//! Summarizes a local text file or web page into its top sentences, writes
//! the word-wrapped summary to `summary.txt` and prints it.

use clap::Parser;
use log::error;
use precis::{present, read_source, Config, Result, Summarizer, DEFAULT_LENGTH};

#[derive(Parser)]
#[command(name = "precis")]
#[command(version)]
#[command(about = "Summarizes text retrieved from a text file or HTML page", long_about = None)]
struct Cli {
    /// File name or URL of text to summarize
    filepath: String,

    /// Number of sentences to return
    #[arg(short, long, default_value_t = DEFAULT_LENGTH, value_parser = parse_length)]
    length: usize,
}

fn parse_length(s: &str) -> std::result::Result<usize, String> {
    let length: usize = s.parse().map_err(|e| format!("{e}"))?;
    if length == 0 {
        return Err("length must be at least 1".to_string());
    }
    Ok(length)
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut config = Config::default();
    config.summary.length = cli.length;

    match run(&cli.filepath, &config) {
        Ok(rendered) => println!("{rendered}"),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}

fn run(location: &str, config: &Config) -> Result<String> {
    let raw = read_source(location, &config.source)?;

    let summarizer = Summarizer::new();
    let summary = summarizer.summarize(&raw, config.summary.length)?;

    present(&summary.text, &config.wrap, &config.output)
}
