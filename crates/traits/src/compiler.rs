//! Sub-compiler traits.
//!
//! The dispatcher hands each group of fragments to one of these compilers and
//! treats it as a black box: text in, compiled text out. The host compiler
//! produces HTML plus any CSS/JS it generates itself; the style and
//! enhanced-script compilers produce CSS and JS respectively.

use chtl_types::BlockAnchor;
use std::fmt::Debug;
use thiserror::Error;

/// A sub-compiler diagnostic.
///
/// `offset` is a byte offset into the text the compiler was given. The
/// dispatcher maps it back to the original document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message} (at offset {offset})")]
pub struct CompileError {
    pub offset: usize,
    pub message: String,
}

impl CompileError {
    pub fn new(offset: usize, message: impl Into<String>) -> Self {
        Self {
            offset,
            message: message.into(),
        }
    }
}

/// The three outputs of the host compiler.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostOutput {
    pub html: String,
    pub css: String,
    pub js: String,
}

/// Input to the host compiler: all host text in document order.
#[derive(Debug, Clone, Copy)]
pub struct HostSource<'a> {
    pub text: &'a str,
    /// Where each style/script fragment was cut out of `text`, in order.
    pub anchors: &'a [BlockAnchor],
}

impl<'a> HostSource<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, anchors: &[] }
    }
}

/// Compiles host markup to HTML.
///
/// # Implementations
///
/// - `PassthroughHost`: Returns the host text unchanged as HTML
pub trait HostCompiler: Send + Sync + Debug {
    fn compile_host(&self, source: HostSource<'_>) -> Result<HostOutput, CompileError>;

    /// Returns a human-readable name for this compiler (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// Compiles style-sheet text to CSS.
///
/// Placeholder tokens in the input are opaque declarations and must appear
/// unchanged in the output.
pub trait StyleCompiler: Send + Sync + Debug {
    fn compile_style(&self, text: &str) -> Result<String, CompileError>;

    fn name(&self) -> &'static str;
}

/// Compiles enhanced script to JavaScript.
///
/// Placeholder tokens in the input stand for plain script. They are
/// irreducible atoms: the compiler must neither inspect nor transform them,
/// and must emit each exactly once.
pub trait EnhancedScriptCompiler: Send + Sync + Debug {
    fn compile_enhanced_script(&self, text: &str) -> Result<String, CompileError>;

    fn name(&self) -> &'static str;
}
