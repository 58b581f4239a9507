use chtl_placeholder::PlaceholderError;
use thiserror::Error;

/// Errors that stop a scan.
///
/// Malformed documents are not errors; only a broken placeholder table is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    #[error("Placeholder table error: {0}")]
    Placeholder(#[from] PlaceholderError),
}
