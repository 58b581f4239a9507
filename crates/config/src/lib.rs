//! Keyword configuration for the CHTL fragment engine.
//!
//! Block keywords, style markers, enhanced-script keywords and selector
//! delimiters are data, not literals baked into the scanner. Defaults match
//! the stock language; overrides replace a whole named set at a time so a
//! partial edit can never leave a set half-populated.

pub mod error;
pub mod keywords;

pub use chtl_placeholder::PlaceholderFormat;
pub use error::ConfigError;
pub use keywords::{BlockKeywords, BlockKind, KeywordConfig, KeywordOverrides, SelectorDelimiters};
