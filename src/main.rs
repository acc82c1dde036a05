use std::error::Error;

use clap::Parser;
use log::{error, info};

use profile_scraper_lib::cli::Cli;
use profile_scraper_lib::{dataset_io, logger, HttpTransport, ScrapeError, Scraper};

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let config = cli.scrape_config();
    logger::init(logger::level_for(config.verbose));
    info!("Starting profile scraper...");

    let urls = dataset_io::load_urls(&cli.input_csv)?;

    let scraper = Scraper::new(HttpTransport::new()?, config);
    let dataset = scraper.run(&urls);

    if let Err(e) = dataset_io::save_dataset(&cli.output_csv, &dataset) {
        if let ScrapeError::EmptyDataset = e {
            error!("Nothing scraped from {}; {} not written", cli.input_csv, cli.output_csv);
        }
        return Err(e.into());
    }

    info!("Scraping completed. {} records saved to {}", dataset.len(), cli.output_csv);
    Ok(())
}
