use log::{debug, info, warn};
use scraper::Html;

use crate::config::ScrapeConfig;
use crate::error::ScrapeError;
use crate::extractor::{ProfileExtractor, RecordExtractor};
use crate::fetcher::{Fetcher, Transport};
use crate::record::{CompanyRecord, Dataset};

/// Drives each URL through fetch and extraction, one at a time.
pub struct Scraper<T, E = ProfileExtractor> {
    fetcher: Fetcher<T>,
    extractor: E,
    config: ScrapeConfig,
}

impl<T: Transport> Scraper<T, ProfileExtractor> {
    pub fn new(transport: T, config: ScrapeConfig) -> Self {
        Self::with_extractor(transport, ProfileExtractor::new(), config)
    }
}

impl<T: Transport, E: RecordExtractor> Scraper<T, E> {
    pub fn with_extractor(transport: T, extractor: E, config: ScrapeConfig) -> Self {
        Scraper {
            fetcher: Fetcher::new(transport),
            extractor,
            config,
        }
    }

    /// Scrapes every URL in order. URLs that exhaust a retry budget are skipped.
    pub fn run(&self, urls: &[String]) -> Dataset {
        let mut dataset = Dataset::with_capacity(urls.len());

        for (i, url) in urls.iter().enumerate() {
            info!("Processing {} / {} : {}", i + 1, urls.len(), url);

            match self.scrape_url(url) {
                Ok(record) => {
                    if self.config.verbose {
                        println!("Successfully scraped: {}", url);
                    }
                    dataset.push(record);
                }
                Err(e) => {
                    warn!("{}", e);
                    if self.config.verbose {
                        match e {
                            ScrapeError::ExtractionExhausted { .. } => println!("Failed to scrape {}", url),
                            _ => println!("Failed to fetch {}", url),
                        }
                    }
                }
            }
        }

        info!("Scraped {} of {} URLs", dataset.len(), urls.len());
        dataset
    }

    /// Fetches and extracts one URL, stamping it onto the record.
    pub fn scrape_url(&self, url: &str) -> Result<CompanyRecord, ScrapeError> {
        let max_retries = self.config.max_retries;
        let html = self.fetcher.fetch(url, max_retries)?;
        let page = Html::parse_document(&html);

        for attempt in 1..=max_retries {
            match self.extractor.extract(&page) {
                Ok(record) => return Ok(record.with_url(url)),
                Err(e) => debug!("Extraction attempt {}/{} for {}: {}", attempt, max_retries, url, e),
            }
        }

        Err(ScrapeError::ExtractionExhausted {
            url: url.to_string(),
            attempts: max_retries,
        })
    }
}
