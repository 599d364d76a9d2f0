pub mod fetch;
pub mod records;

pub use fetch::{DEFAULT_BASE_URL, RecordsClient};
pub use records::StudentRecord;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("endpoint answered with status {0}")]
    Status(reqwest::StatusCode),
    #[error("invalid JSON body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("expected a JSON array of records, got {0}")]
    NotArray(&'static str),
}
