pub mod fixtures;

use chtl::{
    CompileError, EnhancedScriptCompiler, HostCompiler, HostOutput, HostSource, ScanOutput,
    StyleCompiler,
};
use std::sync::{Arc, Mutex};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Inputs seen by a recording compiler, shared with the test.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    inputs: Arc<Mutex<Vec<String>>>,
}

impl Recorder {
    fn record(&self, text: &str) {
        if let Ok(mut inputs) = self.inputs.lock() {
            inputs.push(text.to_string());
        }
    }

    pub fn inputs(&self) -> Vec<String> {
        self.inputs.lock().map(|i| i.clone()).unwrap_or_default()
    }
}

/// Wraps host text in an HTML skeleton.
#[derive(Debug, Default)]
pub struct SkeletonHost {
    pub recorder: Recorder,
}

impl HostCompiler for SkeletonHost {
    fn compile_host(&self, source: HostSource<'_>) -> Result<HostOutput, CompileError> {
        self.recorder.record(source.text);
        Ok(HostOutput {
            html: format!("<html><head></head><body>{}</body></html>", source.text.trim()),
            css: "/* host */".to_string(),
            js: String::new(),
        })
    }

    fn name(&self) -> &'static str {
        "SkeletonHost"
    }
}

/// Returns its input trimmed; fails on a `!`.
#[derive(Debug, Default)]
pub struct RecordingStyle {
    pub recorder: Recorder,
}

impl StyleCompiler for RecordingStyle {
    fn compile_style(&self, text: &str) -> Result<String, CompileError> {
        self.recorder.record(text);
        match text.find('!') {
            Some(at) => Err(CompileError::new(at, "unexpected '!'")),
            None => Ok(text.trim().to_string()),
        }
    }

    fn name(&self) -> &'static str {
        "RecordingStyle"
    }
}

/// Rewrites `{{selector}}` into a query and keeps everything else.
#[derive(Debug, Default)]
pub struct SelectorScript {
    pub recorder: Recorder,
}

impl EnhancedScriptCompiler for SelectorScript {
    fn compile_enhanced_script(&self, text: &str) -> Result<String, CompileError> {
        self.recorder.record(text);
        let mut out = String::new();
        let mut rest = text;
        let mut consumed = 0;
        while let Some(open) = rest.find("{{") {
            let close = rest[open..]
                .find("}}")
                .map(|i| open + i)
                .ok_or_else(|| CompileError::new(consumed + open, "unterminated selector"))?;
            out.push_str(&rest[..open]);
            out.push_str(&format!("document.querySelector('{}')", &rest[open + 2..close]));
            rest = &rest[close + 2..];
            consumed += close + 2;
        }
        out.push_str(rest);
        Ok(out.trim().to_string())
    }

    fn name(&self) -> &'static str {
        "SelectorScript"
    }
}

/// Checks that the fragments, with placeholders restored and the block
/// keywords and braces put back, reproduce `source` exactly.
pub fn assert_covers(source: &str, output: &ScanOutput) {
    let mut rebuilt = String::new();
    let mut cursor = 0;
    for fragment in &output.fragments {
        let span = fragment.source_offset;
        assert!(span.start >= cursor, "fragment at {} overlaps its predecessor", span);
        let gap = &source[cursor..span.start];
        assert!(is_block_syntax(gap), "unexpected text between fragments: {:?}", gap);
        let restored = output.restored_text(fragment).unwrap();
        assert_eq!(restored, span.slice(source), "fragment {} does not restore", span);
        rebuilt.push_str(gap);
        rebuilt.push_str(&restored);
        cursor = span.end;
    }
    let tail = &source[cursor..];
    assert!(is_block_syntax(tail), "unexpected trailing text: {:?}", tail);
    rebuilt.push_str(tail);
    assert_eq!(rebuilt, source);
}

/// True if `gap` is nothing but block keywords, braces, whitespace and comments.
fn is_block_syntax(gap: &str) -> bool {
    let mut rest = gap.trim_start();
    while !rest.is_empty() {
        rest = if let Some(r) = rest.strip_prefix('{').or_else(|| rest.strip_prefix('}')) {
            r
        } else if let Some(r) = rest.strip_prefix("style").or_else(|| rest.strip_prefix("script")) {
            r
        } else if let Some(r) = rest.strip_prefix("/*") {
            match r.find("*/") {
                Some(end) => &r[end + 2..],
                None => return false,
            }
        } else {
            return false;
        };
        rest = rest.trim_start();
    }
    true
}
