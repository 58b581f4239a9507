pub mod compiler;
pub mod passthrough;
pub mod resolver;

pub use compiler::{
    CompileError, EnhancedScriptCompiler, HostCompiler, HostOutput, HostSource, StyleCompiler,
};
pub use passthrough::{PassthroughHost, PassthroughScript, PassthroughStyle};
pub use resolver::{TemplateResolver, VerbatimResolver};
