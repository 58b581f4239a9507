/// A small page with one style block and one script block.
pub fn page() -> &'static str {
    r#"html {
    head { }
    body {
        div {
            class: box;
            style {
                width: 100px;
                @Style Base;
                color: red;
            }
            script {
                let count = 0;
                {{.box}}->listen {
                    click: () => { count++; }
                }
                console.log("ready");
            }
        }
    }
}
"#
}

/// Blocks mixed with strings, comments and keywords used as plain words.
pub fn tricky() -> &'static str {
    r#"div {
    text { "style { not a block }" }
    // script { also not a block }
    style: "inline";
    style /* comment */ {
        .a { @Style Card } .b { background: url(http://x/y.png); }
        [Template] @Style Theme { color: blue; }
        p { color: inherit; }
    }
    span {
        script {
            var Listen = 1;
            Listen { click: () => { foo(`}`); } }
            animate { target: {{span}} }->then(done);
            const s = '{{not a selector}}';
        }
    }
}
"#
}

/// Blocks back to back, including an empty style block and an empty script block.
pub fn adjacent_blocks() -> &'static str {
    "style{a{b:c}}script{go();}style{ }script{}"
}

/// A style block using a protocol-relative URL.
pub fn protocol_relative_url() -> &'static str {
    "div {\n  style { .a { background: url(//cdn.example.com/a.png); } }\n  text { \"hi\" }\n}\n"
}

/// Unquoted host text with an apostrophe before a style block on the same line.
pub fn unquoted_apostrophe() -> &'static str {
    "div { text { Don't panic } style { color: red; } }"
}
