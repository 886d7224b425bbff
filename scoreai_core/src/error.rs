use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("document has no cover table")]
    MissingCoverTable,

    #[error("cover table has no first cell")]
    MissingCoverCell,

    #[error("cover cell has no participant ID line ({lines} line(s) found)")]
    MissingIdLine { lines: usize },

    #[error("marker {marker:?} not found after paragraph {from}")]
    MarkerNotFound { marker: String, from: usize },

    #[error("no paragraph longer than {min_length} characters from paragraph {from} to end of document")]
    NoSubstantialResponse { from: usize, min_length: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to read document: {0}")]
    Read(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    /// Errors caused by the shape of one document, which skip only that document.
    #[must_use]
    pub const fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::MissingCoverTable
                | Self::MissingCoverCell
                | Self::MissingIdLine { .. }
                | Self::MarkerNotFound { .. }
                | Self::NoSubstantialResponse { .. }
        )
    }
}
