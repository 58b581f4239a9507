//! Unified scanner for CHTL documents.
//!
//! The scanner walks a document once, left to right, and cuts it into
//! kind-tagged fragments:
//!
//! - everything outside `style { }` and `script { }` blocks is `Host` text,
//!   copied verbatim;
//! - a style block body becomes `StyleSheet` fragments, with host constructs
//!   (`@Style Base;`, `inherit ...;`) replaced by placeholder tokens, or
//!   split out as `Host` fragments when they carry their own body;
//! - a script block body becomes exactly one `EnhancedScript` fragment in
//!   which every run of plain script is replaced by a placeholder token.
//!
//! Excised text lives in the run's [`PlaceholderTable`], returned alongside
//! the fragments in [`ScanOutput`].
//!
//! Scanning never fails on malformed input. A block without a closing brace
//! turns the rest of the document into host text and is reported as a
//! [`ScanDiagnostic`].

pub mod boundary;
pub mod error;
pub mod output;
pub mod script;
pub mod state;
pub mod style;

pub use boundary::{Scanner, scan};
pub use chtl_placeholder::PlaceholderTable;
pub use error::ScanError;
pub use output::{ScanDiagnostic, ScanOutput, ScanStats};
pub use state::{LiteralMode, ScanState};
