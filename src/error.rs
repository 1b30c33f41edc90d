use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CheckError>;

/// Everything that can stop a check before a result is produced.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("{} does not exist. Exiting.", .0.display())]
    MissingFile(PathBuf),
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid checks file {}: {source}", path.display())]
    MalformedChecks {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid selector {selector:?}: {reason}")]
    InvalidSelector { selector: String, reason: String },
    #[error("URL check error: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("Failed to render check result: {0}")]
    Render(#[source] serde_json::Error),
    #[error("Failed to save downloaded page: {0}")]
    TempFile(#[source] std::io::Error),
}
