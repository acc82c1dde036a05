pub const DEFAULT_INPUT_CSV: &str = "input.csv";
pub const DEFAULT_OUTPUT_CSV: &str = "output.csv";
pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const DEFAULT_VERBOSE: bool = true;

/// Per-run settings handed to the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrapeConfig {
    /// Attempt budget, used separately for fetching and for extraction.
    pub max_retries: u32,
    /// Print one line per URL to stdout.
    pub verbose: bool,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        ScrapeConfig {
            max_retries: DEFAULT_MAX_RETRIES,
            verbose: DEFAULT_VERBOSE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ScrapeConfig::default();
        assert_eq!(config.max_retries, 3);
        assert!(config.verbose);
    }
}
