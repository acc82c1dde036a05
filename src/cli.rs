use clap::Parser;

use crate::config::{ScrapeConfig, DEFAULT_INPUT_CSV, DEFAULT_MAX_RETRIES, DEFAULT_OUTPUT_CSV};

#[derive(Parser, Debug)]
#[command(name = "profile-scraper")]
#[command(about = "Scrape company profile pages listed in a CSV file into a CSV dataset")]
#[command(version)]
pub struct Cli {
    /// CSV file whose first column lists the profile URLs (no header row)
    #[arg(long, default_value = DEFAULT_INPUT_CSV)]
    pub input_csv: String,

    /// CSV file to write the scraped records to
    #[arg(long, default_value = DEFAULT_OUTPUT_CSV)]
    pub output_csv: String,

    /// Maximum attempts for fetching and for scraping each URL
    #[arg(long, default_value_t = DEFAULT_MAX_RETRIES, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_retries: u32,

    /// Print a line per URL (pass `--verbose false` to silence)
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub verbose: bool,
}

impl Cli {
    pub fn scrape_config(&self) -> ScrapeConfig {
        ScrapeConfig {
            max_retries: self.max_retries,
            verbose: self.verbose,
        }
    }
}
