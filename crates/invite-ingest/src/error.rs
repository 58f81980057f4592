use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("roster error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, IngestError>;
