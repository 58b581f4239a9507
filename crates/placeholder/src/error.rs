use chtl_types::PlaceholderId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaceholderError {
    #[error("Placeholder {0} is already registered")]
    Collision(PlaceholderId),

    #[error("Placeholder table is full after {0} entries")]
    Exhausted(usize),

    #[error("Placeholder '{token}' at offset {offset} has no table entry")]
    Dangling { token: String, offset: usize },

    #[error("Placeholder '{token}' appears more than once (again at offset {offset})")]
    Duplicated { token: String, offset: usize },

    #[error("Placeholder {part} '{value}' may only contain ASCII letters, digits and '_'")]
    InvalidFormat { part: &'static str, value: String },
}
