mod common;

use chtl::{BlockKind, FragmentKind, KeywordConfig, ScanDiagnostic, scan};
use common::fixtures;

fn kinds(source: &str) -> Vec<FragmentKind> {
    let config = KeywordConfig::default();
    scan(source, &config)
        .unwrap()
        .fragments
        .iter()
        .map(|f| f.kind)
        .collect()
}

#[test]
fn fragments_cover_the_whole_document() {
    common::init_logger();
    let config = KeywordConfig::default();
    for source in [
        fixtures::page(),
        fixtures::tricky(),
        fixtures::adjacent_blocks(),
        "",
        "plain host text",
        "script { foo(",
        "样式 { style { content: \"é\"; @Var Ü; } }",
        fixtures::protocol_relative_url(),
        fixtures::unquoted_apostrophe(),
    ] {
        let output = scan(source, &config).unwrap();
        common::assert_covers(source, &output);
    }
}

#[test]
fn restoring_twice_changes_nothing() {
    let config = KeywordConfig::default();
    let output = scan(fixtures::page(), &config).unwrap();
    for fragment in &output.fragments {
        let once = output.table.restore(&fragment.text).unwrap();
        let twice = output.table.restore(&once).unwrap();
        assert_eq!(once, twice);
    }
}

#[test]
fn keyword_used_as_a_variable_is_not_a_construct() {
    let config = KeywordConfig::default();
    let output = scan("script { var Listen = 1; console.log(Listen); }", &config).unwrap();

    assert_eq!(output.fragments.len(), 1);
    let fragment = &output.fragments[0];
    assert_eq!(fragment.kind, FragmentKind::EnhancedScript);
    assert_eq!(output.table.len(), 1);
    let entry = &output.table.entries()[0];
    assert_eq!(fragment.text.trim(), entry.token);
    assert_eq!(entry.original_text, "var Listen = 1; console.log(Listen);");
    assert_eq!(entry.originating_kind, FragmentKind::Script);
}

#[test]
fn construct_ends_at_the_brace_matching_its_own() {
    let config = KeywordConfig::default();
    let source = "script { Listen { click: () => { foo(); } } }";
    let output = scan(source, &config).unwrap();

    assert_eq!(output.fragments.len(), 1);
    let fragment = &output.fragments[0];
    assert_eq!(fragment.kind, FragmentKind::EnhancedScript);
    assert_eq!(fragment.text.trim(), "Listen { click: () => { foo(); } }");
    assert!(output.table.is_empty());
}

#[test]
fn style_host_construct_round_trips_through_the_table() {
    let config = KeywordConfig::default();
    let output = scan("style { width: 100px; @Style Base; color: red; }", &config).unwrap();

    assert_eq!(output.fragments.len(), 1);
    let fragment = &output.fragments[0];
    assert_eq!(fragment.kind, FragmentKind::StyleSheet);
    assert_eq!(output.table.len(), 1);
    let entry = &output.table.entries()[0];
    assert_eq!(entry.original_text, "@Style Base;");
    assert_eq!(entry.originating_kind, FragmentKind::Host);
    assert_eq!(
        fragment.text,
        format!(" width: 100px; {} color: red; ", entry.token)
    );
}

#[test]
fn unterminated_block_degrades_to_host_text() {
    common::init_logger();
    let config = KeywordConfig::default();
    let output = scan("script { foo(", &config).unwrap();

    assert_eq!(output.fragments.len(), 1);
    assert_eq!(output.fragments[0].kind, FragmentKind::Host);
    assert_eq!(output.fragments[0].text, "script { foo(");
    assert!(output.table.is_empty());
    assert!(matches!(
        output.diagnostics.as_slice(),
        [ScanDiagnostic::UnterminatedBlock {
            kind: BlockKind::Script,
            offset: 0,
            ..
        }]
    ));
}

#[test]
fn fragments_follow_document_order() {
    let source = "a { style { x: y; } } b { } c { script { z(); } } d { style { } }";
    assert_eq!(
        kinds(source),
        [
            FragmentKind::Host,
            FragmentKind::StyleSheet,
            FragmentKind::Host,
            FragmentKind::EnhancedScript,
            FragmentKind::Host,
            FragmentKind::StyleSheet,
            FragmentKind::Host,
        ]
    );

    let config = KeywordConfig::default();
    let output = scan(source, &config).unwrap();
    let starts: Vec<usize> = output.fragments.iter().map(|f| f.source_offset.start).collect();
    assert!(starts.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn tricky_document_is_classified_as_expected() {
    let config = KeywordConfig::default();
    let output = scan(fixtures::tricky(), &config).unwrap();

    let stats = output.stats();
    assert_eq!(stats.style_sheet, 2);
    assert_eq!(stats.enhanced_script, 1);
    // Two host fragments around the blocks plus one host statement inside the style block.
    assert_eq!(stats.host, 4);

    let host_statement = output
        .fragments
        .iter()
        .find(|f| f.kind == FragmentKind::Host && f.text.starts_with("[Template]"))
        .unwrap();
    assert_eq!(host_statement.text, "[Template] @Style Theme { color: blue; }");

    let originals: Vec<&str> = output
        .table
        .entries()
        .iter()
        .map(|e| e.original_text.as_str())
        .collect();
    assert_eq!(
        originals,
        [
            "@Style Card",
            "var Listen = 1;",
            ";\n            const s = '{{not a selector}}';",
        ]
    );

    let script = output
        .fragments
        .iter()
        .find(|f| f.kind == FragmentKind::EnhancedScript)
        .unwrap();
    assert!(script.text.contains("Listen { click: () => { foo(`}`); } }"));
    assert!(script.text.contains("animate { target: {{span}} }->then(done)"));
}

#[test]
fn adjacent_blocks_keep_their_kinds() {
    assert_eq!(
        kinds(fixtures::adjacent_blocks()),
        [
            FragmentKind::StyleSheet,
            FragmentKind::EnhancedScript,
            FragmentKind::StyleSheet,
            FragmentKind::EnhancedScript,
        ]
    );
}

#[test]
fn overridden_keywords_change_what_is_recognised() {
    let json = serde_json::json!({
        "scriptKeywords": ["on"],
        "selectorDelimiters": { "open": "<<", "close": ">>" }
    })
    .to_string();
    let config = KeywordConfig::from_json(&json).unwrap();
    let output = scan("script { listen { a: b } on { c: d } <<.x>>; }", &config).unwrap();

    let originals: Vec<&str> = output
        .table
        .entries()
        .iter()
        .map(|e| e.original_text.as_str())
        .collect();
    assert_eq!(originals, ["listen { a: b }", ";"]);
    assert!(output.fragments[0].text.contains("on { c: d } <<.x>>"));
}

#[test]
fn protocol_relative_url_keeps_the_style_block() {
    let source = fixtures::protocol_relative_url();
    assert_eq!(
        kinds(source),
        [FragmentKind::Host, FragmentKind::StyleSheet, FragmentKind::Host]
    );

    let config = KeywordConfig::default();
    let output = scan(source, &config).unwrap();
    assert!(output.diagnostics.is_empty());
    assert_eq!(
        output.fragments[1].text,
        " .a { background: url(//cdn.example.com/a.png); } "
    );
    assert_eq!(output.fragments[2].text, "\n  text { \"hi\" }\n}\n");
}

#[test]
fn apostrophe_in_unquoted_text_does_not_hide_blocks() {
    let config = KeywordConfig::default();
    let output = scan(fixtures::unquoted_apostrophe(), &config).unwrap();

    assert!(output.diagnostics.is_empty());
    let texts: Vec<(FragmentKind, &str)> = output
        .fragments
        .iter()
        .map(|f| (f.kind, f.text.as_str()))
        .collect();
    assert_eq!(
        texts,
        [
            (FragmentKind::Host, "div { text { Don't panic } "),
            (FragmentKind::StyleSheet, " color: red; "),
            (FragmentKind::Host, " }"),
        ]
    );
}

#[test]
fn empty_selector_delimiters_still_terminate() {
    let mut config = KeywordConfig::default();
    config.selector_delimiters.open = String::new();
    config.selector_delimiters.close = String::new();
    assert!(config.validate().is_err());

    let output = scan("script { a(); }", &config).unwrap();
    assert_eq!(output.fragments.len(), 1);
    assert_eq!(output.fragments[0].kind, FragmentKind::EnhancedScript);
    assert_eq!(output.table.entries()[0].original_text, "a();");
}
