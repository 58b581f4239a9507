//! Placeholder table for the CHTL fragment engine.
//!
//! When a classifier moves a span of text out of a fragment (plain script
//! between enhanced constructs, host constructs inside a style rule) it
//! registers the span here and writes an opaque token in its place. After the
//! fragment has been compiled on its own, the same table turns the tokens
//! back into the original text.
//!
//! ## Key Abstractions
//!
//! - **`PlaceholderFormat`**: how tokens are spelled (`__chtl_ph_<n>__` by default)
//! - **`PlaceholderTable`**: the per-run, append-only store of excised spans
//! - **`PlaceholderEntry`**: one excised span and where it came from

pub mod error;
pub mod format;
pub mod table;

pub use error::PlaceholderError;
pub use format::PlaceholderFormat;
pub use table::{PlaceholderEntry, PlaceholderTable, Restored};
