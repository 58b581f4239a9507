//! Routing fragments to sub-compilers and merging the results.

use crate::compilers::Compilers;
use crate::document::{CompiledDocument, MergeOptions, join_sections};
use crate::error::DispatchError;
use crate::source_map::Concatenation;
use chtl_placeholder::{PlaceholderEntry, PlaceholderTable};
use chtl_traits::{CompileError, HostOutput, HostSource};
use chtl_types::{Fragment, FragmentKind, PlaceholderId};

/// Fragments partitioned by the compiler that handles them, each group in
/// document order.
struct Groups {
    host: Concatenation,
    style: Concatenation,
    script: Concatenation,
}

impl Groups {
    fn partition(fragments: &[Fragment], separator: &str) -> Self {
        let mut groups = Groups {
            host: Concatenation::new(""),
            style: Concatenation::new(separator),
            script: Concatenation::new(separator),
        };
        for fragment in fragments {
            match fragment.kind {
                FragmentKind::Host => groups.host.push(fragment),
                FragmentKind::StyleSheet => {
                    groups.host.anchor(fragment.kind, fragment.source_offset);
                    groups.style.push(fragment);
                }
                FragmentKind::Script | FragmentKind::EnhancedScript => {
                    groups.host.anchor(fragment.kind, fragment.source_offset);
                    groups.script.push(fragment);
                }
            }
        }
        groups
    }
}

/// Compiles the scanned fragments of one document and merges the output.
///
/// Host fragments are joined as they are; style-sheet and enhanced-script
/// fragments are joined with `options.fragment_separator`. Each non-empty
/// group goes to its compiler once. Placeholders in the compiled CSS are
/// handed to the template resolver; placeholders in the compiled JS get
/// their original text back. A compiler failure aborts the dispatch with the
/// document offset of the fragment it points at.
pub fn dispatch_and_merge(
    fragments: &[Fragment],
    table: &PlaceholderTable,
    compilers: &Compilers,
    options: &MergeOptions,
) -> Result<CompiledDocument, DispatchError> {
    let groups = Groups::partition(fragments, &options.fragment_separator);
    log::debug!(
        "Dispatching {} host, {} style-sheet and {} script fragment(s)",
        groups.host.len(),
        groups.style.len(),
        groups.script.len()
    );

    let host = if groups.host.is_empty() {
        HostOutput::default()
    } else {
        let source = HostSource {
            text: &groups.host.text,
            anchors: &groups.host.anchors,
        };
        compilers
            .host
            .compile_host(source)
            .map_err(|e| failure(FragmentKind::Host, &groups.host, e))?
    };

    let css = if groups.style.is_empty() {
        String::new()
    } else {
        compilers
            .style
            .compile_style(&groups.style.text)
            .map_err(|e| failure(FragmentKind::StyleSheet, &groups.style, e))?
    };

    let js = if groups.script.is_empty() {
        String::new()
    } else {
        compilers
            .script
            .compile_enhanced_script(&groups.script.text)
            .map_err(|e| failure(FragmentKind::EnhancedScript, &groups.script, e))?
    };

    let css = table
        .restore_with(&css, |entry| resolve(compilers, entry))
        .map_err(|e| e.in_output(FragmentKind::StyleSheet))?;
    let js = table
        .restore_with(&js, |entry| Ok::<_, DispatchError>(entry.original_text.clone()))
        .map_err(|e| e.in_output(FragmentKind::EnhancedScript))?;
    warn_unconsumed(table, &[&css.consumed, &js.consumed]);

    let mut document = CompiledDocument {
        html: host.html,
        css: join_sections(&[&host.css, &css.text]),
        js: join_sections(&[&host.js, &js.text]),
    };
    if options.inline {
        document.html = document.inline();
    }
    log::debug!(
        "Merged document: {} bytes html, {} bytes css, {} bytes js",
        document.html.len(),
        document.css.len(),
        document.js.len()
    );
    Ok(document)
}

/// Host constructs go through the resolver; anything else is put back as written.
fn resolve(compilers: &Compilers, entry: &PlaceholderEntry) -> Result<String, DispatchError> {
    match entry.originating_kind {
        FragmentKind::Host => compilers.resolver.resolve(entry).map_err(|e| {
            DispatchError::SubCompilerFailure {
                kind: FragmentKind::Host,
                offset: entry.source_span.start + e.offset.min(entry.source_span.len()),
                message: format!("{} ({})", e.message, compilers.resolver.name()),
            }
        }),
        FragmentKind::StyleSheet | FragmentKind::Script | FragmentKind::EnhancedScript => {
            Ok(entry.original_text.clone())
        }
    }
}

fn failure(kind: FragmentKind, group: &Concatenation, error: CompileError) -> DispatchError {
    let offset = group.map.locate(error.offset).unwrap_or(error.offset);
    log::debug!("{} compiler failed at group offset {}", kind, error.offset);
    DispatchError::SubCompilerFailure {
        kind,
        offset,
        message: error.message,
    }
}

fn warn_unconsumed(table: &PlaceholderTable, consumed: &[&Vec<PlaceholderId>]) {
    let mut seen = vec![false; table.len()];
    for id in consumed.iter().flat_map(|ids| ids.iter()) {
        if let Some(slot) = seen.get_mut(id.index()) {
            *slot = true;
        }
    }
    for entry in table.entries().iter().filter(|entry| !seen[entry.id.index()]) {
        log::warn!(
            "Placeholder {} for {} text at {} was dropped by its compiler",
            entry.token,
            entry.originating_kind,
            entry.source_span
        );
    }
}
