//! Compiles a small CHTL page into a single HTML file.
//!
//! Run with: RUST_LOG=debug cargo run --example inline_document [path]

use chtl::{ChtlError, CompileError, Engine, HostCompiler, HostOutput, HostSource};
use std::time::Instant;

const PAGE: &str = r#"html {
    head { title { "Counter" } }
    body {
        button {
            id: counter;
            style {
                padding: 4px 8px;
                @Style Rounded;
            }
            script {
                let clicks = 0;
                {{#counter}}->listen {
                    click: () => { clicks++; }
                }
            }
        }
    }
}
"#;

/// Wraps the host text in an HTML page so the inlined sections have a
/// `</head>` and `</body>` to land before.
#[derive(Debug)]
struct PageShell;

impl HostCompiler for PageShell {
    fn compile_host(&self, source: HostSource<'_>) -> Result<HostOutput, CompileError> {
        let blocks: Vec<String> = source
            .anchors
            .iter()
            .map(|a| format!("<!-- {} block from {} -->", a.kind, a.source_span))
            .collect();
        Ok(HostOutput {
            html: format!(
                "<html>\n<head></head>\n<body>\n<pre>{}</pre>\n{}\n</body>\n</html>\n",
                source.text.trim(),
                blocks.join("\n")
            ),
            ..HostOutput::default()
        })
    }

    fn name(&self) -> &'static str {
        "PageShell"
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let source = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => PAGE.to_string(),
    };

    let engine = Engine::builder()
        .with_host_compiler(PageShell)
        .inline_output(true)
        .build()?;

    let scanned = engine.scan(&source)?;
    let stats = scanned.stats();
    println!(
        "Scanned {} host, {} style-sheet and {} enhanced-script fragment(s), {} placeholder(s)",
        stats.host, stats.style_sheet, stats.enhanced_script, stats.placeholders
    );
    for diagnostic in &scanned.diagnostics {
        println!("warning: {}", diagnostic);
    }

    let start = Instant::now();
    match engine.compile(&source) {
        Ok(document) => {
            println!("Compiled in {:.2?}\n", start.elapsed());
            println!("{}", document.html);
            Ok(())
        }
        Err(ChtlError::SubCompiler { kind, position, message, .. }) => {
            eprintln!("error: {} compiler failed at {}: {}", kind, position, message);
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}
