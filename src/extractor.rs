use log::debug;
use scraper::{ElementRef, Html, Selector};

use crate::error::ExtractionFailure;
use crate::record::CompanyRecord;

/// Record fields that are filled from the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Tagline,
    Abstract,
    Year,
    Founded,
    Jobs,
    Status,
    Location,
    TeamSize,
}

impl Field {
    fn slot(self, record: &mut CompanyRecord) -> &mut String {
        match self {
            Field::Name => &mut record.name,
            Field::Tagline => &mut record.tagline,
            Field::Abstract => &mut record.abstract_text,
            Field::Year => &mut record.year,
            Field::Founded => &mut record.founded,
            Field::Jobs => &mut record.jobs,
            Field::Status => &mut record.status,
            Field::Location => &mut record.location,
            Field::TeamSize => &mut record.team_size,
        }
    }
}

/// One row of the page schema: which element feeds which field, and what to use when it is missing.
#[derive(Debug, Clone, Copy)]
pub struct FieldSelector {
    pub field: Field,
    pub selector: &'static str,
    pub fallback: &'static str,
}

/// Top-level fields of the company profile template, applied in order.
pub const FIELD_SELECTORS: [FieldSelector; 6] = [
    FieldSelector {
        field: Field::Name,
        selector: "div.space-y-3 > div > h1",
        fallback: "",
    },
    FieldSelector {
        field: Field::Tagline,
        selector: r"div.space-y-3 > div.prose.hidden.max-w-full.font-extralight.md\:block > div",
        fallback: "",
    },
    FieldSelector {
        field: Field::Abstract,
        selector: "section:nth-child(3) > div > p",
        fallback: "",
    },
    FieldSelector {
        field: Field::Year,
        selector: "a:nth-child(1) > div > div > span",
        fallback: "",
    },
    FieldSelector {
        field: Field::Jobs,
        selector: "nav > div:nth-child(2) > span",
        fallback: "",
    },
    FieldSelector {
        field: Field::Status,
        selector: "a:nth-child(2) > div > div > div.align-center.flex.flex-row.flex-wrap.gap-x-2.gap-y-2 > div > div",
        fallback: "",
    },
];

/// Key-value sidebar of the profile page.
pub const TABLE_SELECTOR: &str = r"div:nth-child(2) > div > div.space-y-0\.5";
pub const TABLE_ROW_SELECTOR: &str = "div.flex.flex-row.justify-between";
pub const TABLE_CELL_SELECTOR: &str = "span";

/// Sidebar labels we keep. Anything else in the table is ignored.
pub const TABLE_LABELS: [(&str, Field); 3] = [
    ("Founded", Field::Founded),
    ("Location", Field::Location),
    ("Team Size", Field::TeamSize),
];

/// Turns a parsed page into a record, or reports that it could not.
pub trait RecordExtractor {
    fn extract(&self, page: &Html) -> Result<CompanyRecord, ExtractionFailure>;
}

pub struct ProfileExtractor {
    fields: Vec<(FieldSelector, Selector)>,
    table: Selector,
    table_row: Selector,
    table_cell: Selector,
}

impl ProfileExtractor {
    pub fn new() -> Self {
        let fields = FIELD_SELECTORS
            .iter()
            .map(|entry| (*entry, compile(entry.selector)))
            .collect();

        ProfileExtractor {
            fields,
            table: compile(TABLE_SELECTOR),
            table_row: compile(TABLE_ROW_SELECTOR),
            table_cell: compile(TABLE_CELL_SELECTOR),
        }
    }

    /// Never fails: a selector that matches nothing leaves its fallback in place.
    pub fn extract_record(&self, page: &Html) -> CompanyRecord {
        let mut record = CompanyRecord::default();

        for (entry, selector) in &self.fields {
            let value = text_or(page.select(selector).next(), entry.fallback);
            *entry.field.slot(&mut record) = value;
        }

        self.extract_table(page, &mut record);
        record
    }

    fn extract_table(&self, page: &Html, record: &mut CompanyRecord) {
        let Some(table) = page.select(&self.table).next() else {
            debug!("No key-value table on page");
            return;
        };

        for row in table.select(&self.table_row) {
            let mut cells = row.select(&self.table_cell);
            let (Some(label), Some(value)) = (cells.next(), cells.next()) else {
                continue;
            };

            let label = element_text(label);
            let label = label.trim_end_matches(':');

            if let Some((_, field)) = TABLE_LABELS.iter().find(|(known, _)| *known == label) {
                *field.slot(record) = element_text(value);
            }
        }
    }
}

impl Default for ProfileExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordExtractor for ProfileExtractor {
    fn extract(&self, page: &Html) -> Result<CompanyRecord, ExtractionFailure> {
        Ok(self.extract_record(page))
    }
}

impl<E: RecordExtractor + ?Sized> RecordExtractor for &E {
    fn extract(&self, page: &Html) -> Result<CompanyRecord, ExtractionFailure> {
        (**self).extract(page)
    }
}

fn compile(selector: &str) -> Selector {
    Selector::parse(selector).expect("built-in selector must be valid CSS")
}

/// All descendant text of the element, trimmed.
fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn text_or(element: Option<ElementRef<'_>>, fallback: &str) -> String {
    element
        .map(element_text)
        .unwrap_or_else(|| fallback.to_string())
}
