use chtl_placeholder::PlaceholderError;
use chtl_types::FragmentKind;
use thiserror::Error;

/// Errors that abort a dispatch. No partial output is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// A sub-compiler rejected its input. `offset` is a document offset.
    #[error("The {kind} compiler failed at offset {offset}: {message}")]
    SubCompilerFailure {
        kind: FragmentKind,
        offset: usize,
        message: String,
    },

    /// Compiled output names a placeholder the table does not hold.
    /// `offset` is an offset into that compiled output.
    #[error("Compiled {kind} output references unknown placeholder '{token}' at offset {offset}")]
    DanglingPlaceholder {
        kind: FragmentKind,
        token: String,
        offset: usize,
    },

    #[error("Compiled {kind} output repeats placeholder '{token}' at offset {offset}")]
    DuplicatePlaceholder {
        kind: FragmentKind,
        token: String,
        offset: usize,
    },

    #[error("Placeholder error: {0}")]
    Placeholder(#[from] PlaceholderError),
}

impl DispatchError {
    /// Attaches the output kind to placeholder errors raised while restoring it.
    pub(crate) fn in_output(self, kind: FragmentKind) -> Self {
        match self {
            DispatchError::Placeholder(PlaceholderError::Dangling { token, offset }) => {
                DispatchError::DanglingPlaceholder { kind, token, offset }
            }
            DispatchError::Placeholder(PlaceholderError::Duplicated { token, offset }) => {
                DispatchError::DuplicatePlaceholder { kind, token, offset }
            }
            other => other,
        }
    }
}
