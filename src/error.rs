use thiserror::Error;

/// Errors that abort a whole call.
///
/// Anything below document level (a missing element, an unparseable number)
/// degrades to a null cell instead and never surfaces here.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("XML parse error: {0}")]
    XmlError(#[from] roxmltree::Error),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(#[from] geojson::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}
