use thiserror::Error;

/// Unified error type for the entire energy-analyzer-core library.
/// Every public fallible function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Load (CSV file → dataset) ───────────────────────────────────
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("No data: the CSV file contains no data rows")]
    EmptyData,

    #[error("Parse error: {0}")]
    Parse(String),

    // ── Save ────────────────────────────────────────────────────────
    #[error("No data to save — load a CSV file first")]
    NoData,

    // ── Chart building ──────────────────────────────────────────────
    #[error("Missing column(s): {0}")]
    MissingColumn(String),

    #[error("Type mismatch in column '{column}' at row {row}: '{value}' is not a valid {expected}")]
    TypeMismatch {
        column: String,
        row: usize,
        value: String,
        expected: String,
    },

    // ── File I/O ────────────────────────────────────────────────────
    #[error("File I/O error: {0}")]
    FileIO(String),

    // ── Export ──────────────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<csv::Error> for CoreError {
    fn from(e: csv::Error) -> Self {
        // The csv crate wraps underlying I/O failures; everything else
        // (unequal field counts, bad quoting, invalid UTF-8) is malformed input.
        if e.is_io_error() {
            CoreError::FileIO(e.to_string())
        } else {
            CoreError::Parse(e.to_string())
        }
    }
}
