use std::path::Path;

use csv::ReaderBuilder;

use crate::errors::CoreError;
use crate::models::dataset::TabularDataset;

/// High-level storage operations: load/save the dataset from/to CSV
/// bytes or files. Byte variants exist so a frontend can own file I/O.
pub struct StorageManager;

impl StorageManager {
    /// Parse CSV bytes into a fully materialized dataset.
    ///
    /// First record is the header, the rest are data rows. Fails with
    /// `EmptyData` if there are no data rows, `Parse` on malformed input
    /// (inconsistent field counts, invalid UTF-8, bad quoting). Column
    /// presence for charts is NOT checked here — that happens when a
    /// chart needing the column is requested.
    pub fn load_from_bytes(data: &[u8]) -> Result<TabularDataset, CoreError> {
        let mut reader = ReaderBuilder::new().from_reader(data);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(str::to_string)
            .collect();

        let mut rows: Vec<Vec<String>> = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        if rows.is_empty() {
            return Err(CoreError::EmptyData);
        }

        TabularDataset::from_rows(headers, rows)
    }

    /// Load a dataset from a CSV file on disk.
    pub fn load_from_path(path: &str) -> Result<TabularDataset, CoreError> {
        if !Path::new(path).is_file() {
            return Err(CoreError::FileNotFound(path.to_string()));
        }
        let data = std::fs::read(path)?;
        Self::load_from_bytes(&data)
    }

    /// Serialize the dataset back to CSV bytes: header row followed by
    /// data rows, original column order, no index column.
    pub fn save_to_bytes(dataset: &TabularDataset) -> Result<Vec<u8>, CoreError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(dataset.column_names())?;
        for row in dataset.rows() {
            writer.write_record(row)?;
        }
        writer
            .into_inner()
            .map_err(|e| CoreError::FileIO(e.to_string()))
    }

    /// Write the dataset to a CSV file on disk.
    pub fn save_to_path(dataset: &TabularDataset, path: &str) -> Result<(), CoreError> {
        let bytes = Self::save_to_bytes(dataset)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}
