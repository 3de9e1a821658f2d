use thiserror::Error;

/// Errors of the command-line front end; the engine itself cannot fail
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No points found in CSV file")]
    NoPoints,
}

pub type Result<T> = std::result::Result<T, Error>;
