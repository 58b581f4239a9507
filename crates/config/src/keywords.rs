use crate::error::ConfigError;
use chtl_placeholder::PlaceholderFormat;
use chtl_types::{is_ident_byte, is_ident_start};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two kinds of block the boundary scanner looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BlockKind {
    Style,
    Script,
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockKind::Style => f.write_str("style"),
            BlockKind::Script => f.write_str("script"),
        }
    }
}

/// Keywords that introduce a style or script block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BlockKeywords {
    pub style: String,
    pub script: String,
}

impl Default for BlockKeywords {
    fn default() -> Self {
        Self {
            style: "style".to_string(),
            script: "script".to_string(),
        }
    }
}

impl BlockKeywords {
    pub fn keyword(&self, kind: BlockKind) -> &str {
        match kind {
            BlockKind::Style => &self.style,
            BlockKind::Script => &self.script,
        }
    }

    /// Both keywords, in the order the scanner tries them.
    pub fn iter(&self) -> impl Iterator<Item = (BlockKind, &str)> {
        [
            (BlockKind::Style, self.style.as_str()),
            (BlockKind::Script, self.script.as_str()),
        ]
        .into_iter()
    }
}

/// The delimiter pair around an enhanced selector, `{{` and `}}` by default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SelectorDelimiters {
    pub open: String,
    pub close: String,
}

impl Default for SelectorDelimiters {
    fn default() -> Self {
        Self {
            open: "{{".to_string(),
            close: "}}".to_string(),
        }
    }
}

/// The full keyword configuration consumed by the scanner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct KeywordConfig {
    pub block_keywords: BlockKeywords,
    /// Host constructs recognised inside style blocks.
    pub style_markers: Vec<String>,
    /// Enhanced-script keywords; each starts a construct when followed by `{`.
    pub script_keywords: Vec<String>,
    pub selector_delimiters: SelectorDelimiters,
    /// Operators that chain a further call onto an enhanced construct.
    pub chain_operators: Vec<String>,
    pub placeholder: PlaceholderFormat,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            block_keywords: BlockKeywords::default(),
            style_markers: strings(&["@Style", "@Var", "[Template]", "[Custom]", "inherit", "delete"]),
            // `Listen` is the capitalised spelling older documents use.
            script_keywords: strings(&[
                "listen",
                "Listen",
                "delegate",
                "animate",
                "router",
                "fileloader",
                "iNeverAway",
                "printMylove",
                "util",
                "vir",
            ]),
            selector_delimiters: SelectorDelimiters::default(),
            chain_operators: strings(&["&->", "->"]),
            placeholder: PlaceholderFormat::default(),
        }
    }
}

/// Per-set overrides. Each present field replaces the whole default set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct KeywordOverrides {
    pub block_keywords: Option<BlockKeywords>,
    pub style_markers: Option<Vec<String>>,
    pub script_keywords: Option<Vec<String>>,
    pub selector_delimiters: Option<SelectorDelimiters>,
    pub chain_operators: Option<Vec<String>>,
    pub placeholder: Option<PlaceholderFormat>,
}

impl KeywordConfig {
    /// Parses overrides from JSON, applies them over the defaults and validates the result.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let overrides: KeywordOverrides = serde_json::from_str(json)?;
        let config = Self::default().with_overrides(overrides);
        config.validate()?;
        Ok(config)
    }

    pub fn with_overrides(mut self, overrides: KeywordOverrides) -> Self {
        let KeywordOverrides {
            block_keywords,
            style_markers,
            script_keywords,
            selector_delimiters,
            chain_operators,
            placeholder,
        } = overrides;

        if let Some(v) = block_keywords {
            self.block_keywords = v;
        }
        if let Some(v) = style_markers {
            self.style_markers = v;
        }
        if let Some(v) = script_keywords {
            self.script_keywords = v;
        }
        if let Some(v) = selector_delimiters {
            self.selector_delimiters = v;
        }
        if let Some(v) = chain_operators {
            self.chain_operators = v;
        }
        if let Some(v) = placeholder {
            self.placeholder = v;
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (_, keyword) in self.block_keywords.iter() {
            let bytes = keyword.as_bytes();
            if bytes.is_empty() || !is_ident_start(bytes[0]) || !bytes.iter().all(|&b| is_ident_byte(b)) {
                return Err(ConfigError::InvalidBlockKeyword(keyword.to_string()));
            }
        }
        if self.block_keywords.style == self.block_keywords.script {
            return Err(ConfigError::DuplicateBlockKeyword(self.block_keywords.style.clone()));
        }

        if self.style_markers.iter().any(|m| m.trim().is_empty()) {
            return Err(ConfigError::EmptyKeyword { set: "styleMarkers" });
        }
        if self.script_keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(ConfigError::EmptyKeyword { set: "scriptKeywords" });
        }
        if let Some(keyword) = self
            .script_keywords
            .iter()
            .find(|k| !k.bytes().all(is_ident_byte))
        {
            return Err(ConfigError::InvalidScriptKeyword(keyword.clone()));
        }

        for delimiter in [&self.selector_delimiters.open, &self.selector_delimiters.close] {
            if delimiter.chars().count() != 2 || delimiter.bytes().any(is_ident_byte) {
                return Err(ConfigError::InvalidDelimiter(delimiter.clone()));
            }
        }

        for operator in &self.chain_operators {
            if operator.is_empty() {
                return Err(ConfigError::EmptyKeyword { set: "chainOperators" });
            }
            if operator.bytes().any(is_ident_byte) {
                return Err(ConfigError::InvalidChainOperator(operator.clone()));
            }
        }

        self.placeholder.validate()?;
        Ok(())
    }

    pub fn is_script_keyword(&self, word: &str) -> bool {
        self.script_keywords.iter().any(|k| k == word)
    }
}
