use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// How the dispatcher assembles its output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MergeOptions {
    /// Inline the CSS and JS into the HTML (see [`CompiledDocument::inline`]).
    pub inline: bool,
    /// Placed between consecutive style or script fragments when they are
    /// joined for their compiler.
    pub fragment_separator: String,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            inline: false,
            fragment_separator: "\n".to_string(),
        }
    }
}

/// The compiled document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompiledDocument {
    pub html: String,
    pub css: String,
    pub js: String,
}

impl CompiledDocument {
    /// Returns the HTML with the CSS inlined before the first `</head>` and
    /// the JS before the last `</body>`.
    ///
    /// Tags are matched case-insensitively. Without an insertion point the
    /// section is appended at the end. Empty sections are left out.
    pub fn inline(&self) -> String {
        let mut html = self.html.clone();
        if !self.css.is_empty() {
            let block = format!("<style>\n{}\n</style>\n", self.css);
            match html.to_ascii_lowercase().find("</head>") {
                Some(at) => html.insert_str(at, &block),
                None => html.push_str(&block),
            }
        }
        if !self.js.is_empty() {
            let block = format!("<script>\n{}\n</script>\n", self.js);
            match html.to_ascii_lowercase().rfind("</body>") {
                Some(at) => html.insert_str(at, &block),
                None => html.push_str(&block),
            }
        }
        html
    }

    pub fn into_single_file(self) -> String {
        self.inline()
    }
}

/// Joins compiled sections, skipping empty ones.
pub(crate) fn join_sections(sections: &[&str]) -> String {
    sections.iter().filter(|s| !s.trim().is_empty()).join("\n")
}
