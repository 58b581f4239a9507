// src/engine.rs
use crate::error::ChtlError;
use chtl_config::{KeywordConfig, KeywordOverrides};
use chtl_dispatch::{CompiledDocument, Compilers, MergeOptions, dispatch_and_merge};
use chtl_executor::Executor;
use chtl_scanner::{ScanOutput, Scanner};
use chtl_traits::{EnhancedScriptCompiler, HostCompiler, StyleCompiler, TemplateResolver};
use chtl_types::LineIndex;
use std::sync::Arc;

#[derive(Debug)]
struct EngineInner {
    config: KeywordConfig,
    compilers: Compilers,
    options: MergeOptions,
}

/// Compiles CHTL documents: scan, dispatch to sub-compilers, merge.
///
/// An engine is immutable and cheap to clone. Each call to [`Engine::compile`]
/// is an independent run with its own placeholder table, so one engine can
/// compile many documents at once.
#[derive(Debug, Clone)]
pub struct Engine {
    inner: Arc<EngineInner>,
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            inner: Arc::new(EngineInner {
                config: KeywordConfig::default(),
                compilers: Compilers::default(),
                options: MergeOptions::default(),
            }),
        }
    }
}

impl Engine {
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    pub fn config(&self) -> &KeywordConfig {
        &self.inner.config
    }

    pub fn merge_options(&self) -> &MergeOptions {
        &self.inner.options
    }

    /// Runs only the scanner.
    pub fn scan(&self, source: &str) -> Result<ScanOutput, ChtlError> {
        Ok(Scanner::new(&self.inner.config).scan(source)?)
    }

    /// Compiles one document.
    pub fn compile(&self, source: &str) -> Result<CompiledDocument, ChtlError> {
        let output = self.scan(source)?;
        dispatch_and_merge(
            &output.fragments,
            &output.table,
            &self.inner.compilers,
            &self.inner.options,
        )
        .map_err(|e| ChtlError::from_dispatch(e, &LineIndex::new(source)))
    }

    /// Compiles independent documents on `executor`. Results are in input order.
    pub fn compile_many<E: Executor>(
        &self,
        sources: Vec<String>,
        executor: &E,
    ) -> Vec<Result<CompiledDocument, ChtlError>> {
        log::debug!(
            "Compiling {} document(s) with {} (parallelism {})",
            sources.len(),
            executor.name(),
            executor.parallelism()
        );
        let engine = self.clone();
        executor.execute_all(sources, move |source| engine.compile(&source))
    }
}

/// Builds an [`Engine`].
#[derive(Debug, Default)]
pub struct EngineBuilder {
    config: KeywordConfig,
    compilers: Compilers,
    options: MergeOptions,
}

impl EngineBuilder {
    /// Creates a builder with the default keywords, pass-through compilers
    /// and default merge options.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: KeywordConfig) -> Self {
        self.config = config;
        self
    }

    /// Applies keyword overrides given as JSON over the defaults.
    pub fn with_config_json(mut self, json: &str) -> Result<Self, ChtlError> {
        self.config = KeywordConfig::from_json(json)?;
        Ok(self)
    }

    pub fn with_overrides(mut self, overrides: KeywordOverrides) -> Self {
        self.config = self.config.with_overrides(overrides);
        self
    }

    pub fn with_host_compiler(mut self, compiler: impl HostCompiler + 'static) -> Self {
        self.compilers.host = Arc::new(compiler);
        self
    }

    pub fn with_style_compiler(mut self, compiler: impl StyleCompiler + 'static) -> Self {
        self.compilers.style = Arc::new(compiler);
        self
    }

    pub fn with_script_compiler(mut self, compiler: impl EnhancedScriptCompiler + 'static) -> Self {
        self.compilers.script = Arc::new(compiler);
        self
    }

    pub fn with_template_resolver(mut self, resolver: impl TemplateResolver + 'static) -> Self {
        self.compilers.resolver = Arc::new(resolver);
        self
    }

    pub fn with_compilers(mut self, compilers: Compilers) -> Self {
        self.compilers = compilers;
        self
    }

    pub fn with_merge_options(mut self, options: MergeOptions) -> Self {
        self.options = options;
        self
    }

    /// Inline CSS and JS into the HTML output.
    pub fn inline_output(mut self, inline: bool) -> Self {
        self.options.inline = inline;
        self
    }

    /// Validates the configuration and creates the engine.
    pub fn build(self) -> Result<Engine, ChtlError> {
        self.config.validate()?;
        log::debug!(
            "Engine ready: host={}, style={}, script={}, resolver={}",
            self.compilers.host.name(),
            self.compilers.style.name(),
            self.compilers.script.name(),
            self.compilers.resolver.name()
        );
        Ok(Engine {
            inner: Arc::new(EngineInner {
                config: self.config,
                compilers: self.compilers,
                options: self.options,
            }),
        })
    }
}
