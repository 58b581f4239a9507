use chtl_traits::{
    EnhancedScriptCompiler, HostCompiler, PassthroughHost, PassthroughScript, PassthroughStyle,
    StyleCompiler, TemplateResolver, VerbatimResolver,
};
use std::sync::Arc;

/// The sub-compilers a dispatch routes fragments to.
///
/// Defaults to the pass-through compilers and the verbatim resolver, which
/// reproduce the embedded text unchanged.
#[derive(Debug, Clone)]
pub struct Compilers {
    pub host: Arc<dyn HostCompiler>,
    pub style: Arc<dyn StyleCompiler>,
    pub script: Arc<dyn EnhancedScriptCompiler>,
    pub resolver: Arc<dyn TemplateResolver>,
}

impl Default for Compilers {
    fn default() -> Self {
        Self {
            host: Arc::new(PassthroughHost),
            style: Arc::new(PassthroughStyle),
            script: Arc::new(PassthroughScript),
            resolver: Arc::new(VerbatimResolver),
        }
    }
}

impl Compilers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_host(mut self, host: Arc<dyn HostCompiler>) -> Self {
        self.host = host;
        self
    }

    pub fn with_style(mut self, style: Arc<dyn StyleCompiler>) -> Self {
        self.style = style;
        self
    }

    pub fn with_script(mut self, script: Arc<dyn EnhancedScriptCompiler>) -> Self {
        self.script = script;
        self
    }

    pub fn with_resolver(mut self, resolver: Arc<dyn TemplateResolver>) -> Self {
        self.resolver = resolver;
        self
    }
}
