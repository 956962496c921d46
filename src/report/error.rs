use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("error encoding version information: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("error writing version information: {0}")]
    Write(#[source] std::io::Error),
}
