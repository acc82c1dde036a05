use serde::{Deserialize, Serialize};

/// Column order of the output file. Matches the field order of [`CompanyRecord`].
pub const RECORD_FIELDS: [&str; 10] = [
    "name",
    "tagline",
    "abstract",
    "year",
    "founded",
    "jobs",
    "status",
    "location",
    "team_size",
    "url",
];

/// One company profile. Every field is always present; a missing value is `""`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompanyRecord {
    pub name: String,
    pub tagline: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub year: String,
    pub founded: String,
    pub jobs: String,
    pub status: String,
    pub location: String,
    pub team_size: String,
    pub url: String,
}

impl CompanyRecord {
    /// Stamps the source URL onto an extracted record.
    pub fn with_url(mut self, url: &str) -> Self {
        self.url = url.to_string();
        self
    }

    /// Field names in output order.
    pub fn field_names(&self) -> &'static [&'static str] {
        &RECORD_FIELDS
    }

    /// Field values in the same order as [`RECORD_FIELDS`].
    pub fn values(&self) -> [&str; 10] {
        [
            &self.name,
            &self.tagline,
            &self.abstract_text,
            &self.year,
            &self.founded,
            &self.jobs,
            &self.status,
            &self.location,
            &self.team_size,
            &self.url,
        ]
    }
}

/// Records in input URL order, one per successfully scraped URL.
pub type Dataset = Vec<CompanyRecord>;
