//! Re-insertion of host constructs lifted out of style rules.

use crate::compiler::CompileError;
use chtl_placeholder::PlaceholderEntry;
use std::fmt::Debug;

/// Produces the text that replaces a host-construct placeholder in compiled CSS.
///
/// A real resolver expands template references such as `@Style Base;` into
/// declarations. Script placeholders never reach the resolver; they are
/// always restored verbatim.
pub trait TemplateResolver: Send + Sync + Debug {
    fn resolve(&self, entry: &PlaceholderEntry) -> Result<String, CompileError>;

    fn name(&self) -> &'static str;
}

/// Puts the original host text back unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct VerbatimResolver;

impl TemplateResolver for VerbatimResolver {
    fn resolve(&self, entry: &PlaceholderEntry) -> Result<String, CompileError> {
        Ok(entry.original_text.clone())
    }

    fn name(&self) -> &'static str {
        "VerbatimResolver"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chtl_placeholder::PlaceholderTable;
    use chtl_types::{FragmentKind, SourceSpan};

    #[test]
    fn verbatim_resolver_returns_original_text() {
        let mut table = PlaceholderTable::default();
        let id = table
            .register("@Style Base;", FragmentKind::Host, SourceSpan::new(3, 15))
            .unwrap();
        let entry = table.get(id).unwrap();
        assert_eq!(VerbatimResolver.resolve(entry).unwrap(), "@Style Base;");
    }
}
