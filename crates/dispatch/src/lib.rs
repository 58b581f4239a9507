//! Fragment dispatcher and merger.
//!
//! Takes the ordered fragments and placeholder table from a scan, runs each
//! group of fragments through its sub-compiler, puts excised text back into
//! the compiled output and assembles the final document.
//!
//! ## Key Abstractions
//!
//! - **`Compilers`**: the set of sub-compilers and the template resolver
//! - **`MergeOptions`**: single-file inlining and fragment separator
//! - **`CompiledDocument`**: the `html`/`css`/`js` result

pub mod compilers;
pub mod dispatch;
pub mod document;
pub mod error;
pub mod source_map;

pub use compilers::Compilers;
pub use dispatch::dispatch_and_merge;
pub use document::{CompiledDocument, MergeOptions};
pub use error::DispatchError;
pub use source_map::{Concatenation, SourceMap};
