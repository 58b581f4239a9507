// src/error.rs
use chtl_config::ConfigError;
use chtl_dispatch::DispatchError;
use chtl_scanner::ScanError;
use chtl_types::{FragmentKind, LineIndex, Position};
use thiserror::Error;

/// The error type for a whole compilation run.
#[derive(Error, Debug)]
pub enum ChtlError {
    #[error("Invalid keyword configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Scanning failed: {0}")]
    Scan(#[from] ScanError),

    /// A sub-compiler failure, located in the original document.
    #[error("The {kind} compiler failed at {position}: {message}")]
    SubCompiler {
        kind: FragmentKind,
        offset: usize,
        position: Position,
        message: String,
    },

    #[error("Merging failed: {0}")]
    Dispatch(#[from] DispatchError),
}

impl ChtlError {
    /// Converts a dispatch error, resolving sub-compiler offsets against `index`.
    pub(crate) fn from_dispatch(error: DispatchError, index: &LineIndex) -> Self {
        match error {
            DispatchError::SubCompilerFailure {
                kind,
                offset,
                message,
            } => ChtlError::SubCompiler {
                kind,
                offset,
                position: index.position(offset),
                message,
            },
            other => ChtlError::Dispatch(other),
        }
    }
}
