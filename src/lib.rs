pub mod cli;
pub mod config;
pub mod dataset_io;
pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod logger;
pub mod record;
pub mod scraper;

// Exporting types for convenience
pub use self::config::ScrapeConfig;
pub use self::error::{ExtractionFailure, ScrapeError, TransportError};
pub use self::extractor::{ProfileExtractor, RecordExtractor};
pub use self::fetcher::{Fetcher, HttpTransport, PageResponse, Transport};
pub use self::record::{CompanyRecord, Dataset, RECORD_FIELDS};
pub use self::scraper::Scraper;
