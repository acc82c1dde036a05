use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use log::info;

use crate::error::ScrapeError;
use crate::record::CompanyRecord;

/// Reads candidate URLs from the first column of a headerless CSV file.
/// Rows whose first cell is empty are skipped; extra columns are ignored.
pub fn load_urls<P: AsRef<Path>>(path: P) -> Result<Vec<String>, ScrapeError> {
    let path = path.as_ref();
    let file = File::open(path)?;

    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut urls = Vec::new();
    for result in rdr.records() {
        let row = result?;
        match row.get(0) {
            Some(url) if !url.is_empty() => urls.push(url.to_string()),
            _ => continue,
        }
    }

    info!("Loaded {} URLs from {:?}", urls.len(), path);
    Ok(urls)
}

/// Writes records with a header row taken from the first record.
/// An empty dataset is an error and leaves no file behind.
pub fn save_dataset<P: AsRef<Path>>(path: P, records: &[CompanyRecord]) -> Result<(), ScrapeError> {
    let first = records.first().ok_or(ScrapeError::EmptyDataset)?;
    let path = path.as_ref();

    let mut wtr = WriterBuilder::new().has_headers(false).from_path(path)?;
    wtr.write_record(first.field_names())?;
    for record in records {
        wtr.write_record(record.values())?;
    }
    wtr.flush()?;

    info!("Wrote {} records to {:?}", records.len(), path);
    Ok(())
}

/// Reads a file produced by [`save_dataset`], matching columns by header name.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Vec<CompanyRecord>, ScrapeError> {
    let mut rdr = ReaderBuilder::new().from_path(path)?;
    let mut records = Vec::new();
    for result in rdr.deserialize() {
        records.push(result?);
    }
    Ok(records)
}
