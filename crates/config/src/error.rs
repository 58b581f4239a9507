use chtl_placeholder::PlaceholderError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid keyword configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Keyword set '{set}' contains an empty entry")]
    EmptyKeyword { set: &'static str },

    #[error("Block keyword '{0}' must be an identifier")]
    InvalidBlockKeyword(String),

    #[error("Script keyword '{0}' must be an identifier")]
    InvalidScriptKeyword(String),

    #[error("Style and script blocks cannot share the keyword '{0}'")]
    DuplicateBlockKeyword(String),

    #[error("Selector delimiter '{0}' must be exactly two non-identifier characters")]
    InvalidDelimiter(String),

    #[error("Chain operator '{0}' must not contain identifier characters")]
    InvalidChainOperator(String),

    #[error("Invalid placeholder format: {0}")]
    Placeholder(#[from] PlaceholderError),
}
