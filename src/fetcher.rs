use std::time::Duration;

use log::{debug, warn};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE, USER_AGENT};
use reqwest::StatusCode;

use crate::error::{ScrapeError, TransportError};

/// The only status that counts as a successful fetch.
pub const ACCEPTED_STATUS: u16 = 200;

const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Status and body of one GET.
#[derive(Debug, Clone)]
pub struct PageResponse {
    pub status: u16,
    pub body: String,
}

/// Performs a single GET. Implemented over HTTP in production and scripted in tests.
pub trait Transport {
    fn get(&self, url: &str) -> Result<PageResponse, TransportError>;
}

pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, ScrapeError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .default_headers(headers)
            .build()?;

        Ok(HttpTransport { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<PageResponse, TransportError> {
        let resp = self.client.get(url).send()?;
        let status = resp.status();
        // Non-OK bodies are never used.
        let body = if status == StatusCode::OK {
            resp.text()?
        } else {
            String::new()
        };
        Ok(PageResponse {
            status: status.as_u16(),
            body,
        })
    }
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str) -> Result<PageResponse, TransportError> {
        (**self).get(url)
    }
}

pub struct Fetcher<T> {
    transport: T,
}

impl<T: Transport> Fetcher<T> {
    pub fn new(transport: T) -> Self {
        Fetcher { transport }
    }

    /// Tries `url` up to `max_retries` times, back to back, and returns the body of
    /// the first 200 response. Errors and other statuses are all just another attempt.
    pub fn fetch(&self, url: &str, max_retries: u32) -> Result<String, ScrapeError> {
        for attempt in 1..=max_retries {
            match self.transport.get(url) {
                Ok(resp) if resp.status == ACCEPTED_STATUS => {
                    debug!("Fetched {} on attempt {}/{}", url, attempt, max_retries);
                    return Ok(resp.body);
                }
                Ok(resp) => {
                    debug!("Attempt {}/{} for {}: status {}", attempt, max_retries, url, resp.status);
                }
                Err(e) => {
                    debug!("Attempt {}/{} for {}: {}", attempt, max_retries, url, e);
                }
            }
        }

        warn!("Giving up on {} after {} attempt(s)", url, max_retries);
        Err(ScrapeError::FetchExhausted {
            url: url.to_string(),
            attempts: max_retries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Replays a fixed script of outcomes and counts calls.
    struct Script {
        outcomes: RefCell<VecDeque<Result<u16, &'static str>>>,
        calls: RefCell<u32>,
    }

    impl Script {
        fn new(outcomes: Vec<Result<u16, &'static str>>) -> Self {
            Script {
                outcomes: RefCell::new(outcomes.into()),
                calls: RefCell::new(0),
            }
        }

        fn calls(&self) -> u32 {
            *self.calls.borrow()
        }
    }

    impl Transport for Script {
        fn get(&self, _url: &str) -> Result<PageResponse, TransportError> {
            *self.calls.borrow_mut() += 1;
            match self.outcomes.borrow_mut().pop_front() {
                Some(Ok(status)) => Ok(PageResponse {
                    status,
                    body: format!("body-{}-{}", status, self.calls()),
                }),
                Some(Err(msg)) => Err(TransportError::Unreachable(msg.to_string())),
                None => Err(TransportError::Unreachable("script exhausted".to_string())),
            }
        }
    }

    #[test]
    fn first_ok_short_circuits() {
        let script = Script::new(vec![Ok(200), Ok(200)]);
        let body = Fetcher::new(&script).fetch("https://a.example", 3).unwrap();
        assert_eq!(body, "body-200-1");
        assert_eq!(script.calls(), 1);
    }

    #[test]
    fn ok_within_budget_is_used() {
        let script = Script::new(vec![Err("connection refused"), Ok(503), Ok(200), Ok(404)]);
        let body = Fetcher::new(&script).fetch("https://a.example", 3).unwrap();
        assert_eq!(body, "body-200-3");
        assert_eq!(script.calls(), 3);
    }

    #[test]
    fn exhausts_when_every_attempt_fails() {
        let script = Script::new(vec![Ok(500), Err("dns"), Ok(301), Ok(200)]);
        let err = Fetcher::new(&script).fetch("https://b.example", 3).unwrap_err();
        assert!(matches!(
            err,
            ScrapeError::FetchExhausted { ref url, attempts: 3 } if url == "https://b.example"
        ));
        assert_eq!(script.calls(), 3);
    }

    #[test]
    fn zero_budget_never_calls_transport() {
        let script = Script::new(vec![Ok(200)]);
        assert!(Fetcher::new(&script).fetch("https://a.example", 0).is_err());
        assert_eq!(script.calls(), 0);
    }
}
