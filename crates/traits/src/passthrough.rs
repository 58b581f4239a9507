//! Identity sub-compilers.
//!
//! These return their input unchanged. They are the defaults for an engine
//! built without real compilers and double as test fixtures: with all three
//! in place, compiling a document reproduces its embedded text verbatim.

use crate::compiler::{
    CompileError, EnhancedScriptCompiler, HostCompiler, HostOutput, HostSource, StyleCompiler,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughHost;

impl HostCompiler for PassthroughHost {
    fn compile_host(&self, source: HostSource<'_>) -> Result<HostOutput, CompileError> {
        Ok(HostOutput {
            html: source.text.to_string(),
            ..HostOutput::default()
        })
    }

    fn name(&self) -> &'static str {
        "PassthroughHost"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughStyle;

impl StyleCompiler for PassthroughStyle {
    fn compile_style(&self, text: &str) -> Result<String, CompileError> {
        Ok(text.to_string())
    }

    fn name(&self) -> &'static str {
        "PassthroughStyle"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughScript;

impl EnhancedScriptCompiler for PassthroughScript {
    fn compile_enhanced_script(&self, text: &str) -> Result<String, CompileError> {
        Ok(text.to_string())
    }

    fn name(&self) -> &'static str {
        "PassthroughScript"
    }
}
