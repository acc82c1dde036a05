use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Failed to fetch {url} after {attempts} attempt(s)")]
    FetchExhausted { url: String, attempts: u32 },

    #[error("Failed to scrape {url} after {attempts} attempt(s)")]
    ExtractionExhausted { url: String, attempts: u32 },

    #[error("No records to write: the dataset is empty")]
    EmptyDataset,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

/// A single failed GET attempt. The fetcher never looks inside it.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Unreachable(String),
}

/// Signalled by an extractor that could not make sense of a page.
#[derive(Debug, Error)]
#[error("extraction failed: {reason}")]
pub struct ExtractionFailure {
    pub reason: String,
}
