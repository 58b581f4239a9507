//! CHTL unified scanner and fragment dispatcher.
//!
//! A CHTL document embeds style-sheet text and enhanced script inside its
//! own markup. This crate cuts a document into kind-tagged fragments, runs
//! each kind through its own compiler and stitches the results back into
//! one `html`/`css`/`js` document.
//!
//! ```ignore
//! use chtl::Engine;
//!
//! let engine = Engine::builder().inline_output(true).build()?;
//! let document = engine.compile("html { head { } body { style { color: red; } } }")?;
//! println!("{}", document.html);
//! ```
//!
//! The pieces are usable on their own: [`Scanner`] for boundary detection and
//! classification, [`PlaceholderTable`] for the round-trip substitution, and
//! [`dispatch_and_merge`] for routing and reassembly.

pub mod engine;
pub mod error;

pub use engine::{Engine, EngineBuilder};
pub use error::ChtlError;

pub use chtl_config::{BlockKind, ConfigError, KeywordConfig, KeywordOverrides};
pub use chtl_dispatch::{CompiledDocument, Compilers, DispatchError, MergeOptions, dispatch_and_merge};
pub use chtl_executor::{Executor, SyncExecutor};
#[cfg(feature = "rayon-executor")]
pub use chtl_executor::RayonExecutor;
pub use chtl_placeholder::{PlaceholderEntry, PlaceholderError, PlaceholderFormat, PlaceholderTable};
pub use chtl_scanner::{ScanDiagnostic, ScanError, ScanOutput, ScanStats, Scanner, scan};
pub use chtl_traits::{
    CompileError, EnhancedScriptCompiler, HostCompiler, HostOutput, HostSource, PassthroughHost,
    PassthroughScript, PassthroughStyle, StyleCompiler, TemplateResolver, VerbatimResolver,
};
pub use chtl_types::{
    BlockAnchor, Fragment, FragmentKind, LineIndex, PlaceholderId, Position, SourceSpan,
};
