//! The per-run placeholder table.

use crate::error::PlaceholderError;
use crate::format::{Piece, PlaceholderFormat};
use chtl_types::{Fragment, FragmentKind, PlaceholderId, SourceSpan};
use serde::Serialize;

/// One excised span of source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderEntry {
    pub id: PlaceholderId,
    /// The token written into the fragment in place of the span.
    pub token: String,
    pub original_text: String,
    /// The language the excised text belongs to.
    pub originating_kind: FragmentKind,
    pub source_span: SourceSpan,
}

impl PlaceholderEntry {
    /// The excised span as a fragment of its own, tagged with its id.
    pub fn to_fragment(&self) -> Fragment {
        Fragment::new(
            self.originating_kind,
            self.original_text.clone(),
            self.source_span,
        )
        .with_placeholder(self.id)
    }
}

/// The output of a restoration pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restored {
    pub text: String,
    /// Ids substituted by this pass, in the order they were found.
    pub consumed: Vec<PlaceholderId>,
}

/// An append-only store of excised spans, one per compilation run.
///
/// Ids index directly into the entry list. The table is written while
/// scanning and only read while merging.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderTable {
    format: PlaceholderFormat,
    entries: Vec<PlaceholderEntry>,
}

impl PlaceholderTable {
    pub fn new(format: PlaceholderFormat) -> Self {
        Self {
            format,
            entries: Vec::new(),
        }
    }

    /// Creates a table whose tokens cannot occur in `source` by accident.
    pub fn for_source(source: &str, format: &PlaceholderFormat) -> Self {
        Self::new(format.salted_for(source))
    }

    pub fn format(&self) -> &PlaceholderFormat {
        &self.format
    }

    /// Stores `original_text` and returns the id of its new entry.
    pub fn register(
        &mut self,
        original_text: impl Into<String>,
        originating_kind: FragmentKind,
        source_span: SourceSpan,
    ) -> Result<PlaceholderId, PlaceholderError> {
        let seq = u32::try_from(self.entries.len())
            .map_err(|_| PlaceholderError::Exhausted(self.entries.len()))?;
        let id = PlaceholderId::new(seq);
        if self.get(id).is_some() {
            return Err(PlaceholderError::Collision(id));
        }

        let entry = PlaceholderEntry {
            id,
            token: self.format.render(id),
            original_text: original_text.into(),
            originating_kind,
            source_span,
        };
        log::trace!(
            "Registered placeholder {} for {} text at {}",
            entry.token,
            originating_kind,
            source_span
        );
        self.entries.push(entry);
        Ok(id)
    }

    pub fn get(&self, id: PlaceholderId) -> Option<&PlaceholderEntry> {
        self.entries.get(id.index())
    }

    /// Returns the token spelled for `id`, if it is registered.
    pub fn token(&self, id: PlaceholderId) -> Option<&str> {
        self.get(id).map(|entry| entry.token.as_str())
    }

    /// Looks up the entry for a token such as `__chtl_ph_0__`.
    pub fn entry_for_token(&self, token: &str) -> Option<&PlaceholderEntry> {
        match self.format.token(token) {
            Ok(("", id)) => self.get(id),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[PlaceholderEntry] {
        &self.entries
    }

    /// Replaces every token in `text` with its original text.
    pub fn restore(&self, text: &str) -> Result<String, PlaceholderError> {
        self.restore_with(text, |entry| {
            Ok::<_, PlaceholderError>(entry.original_text.clone())
        })
        .map(|restored| restored.text)
    }

    /// Replaces every token in `text` with whatever `substitute` returns for
    /// its entry.
    ///
    /// Substituted text is never scanned again, so restoration does not
    /// expand recursively, and a second pass over the result finds nothing
    /// left to replace. A token with no entry is `Dangling`; a token seen
    /// twice in the same text is `Duplicated`.
    pub fn restore_with<E, F>(&self, text: &str, mut substitute: F) -> Result<Restored, E>
    where
        F: FnMut(&PlaceholderEntry) -> Result<String, E>,
        E: From<PlaceholderError>,
    {
        let mut out = String::with_capacity(text.len());
        let mut consumed: Vec<PlaceholderId> = Vec::new();
        let mut seen = vec![false; self.entries.len()];

        for piece in self.format.pieces(text) {
            match piece {
                Piece::Text(literal) => out.push_str(literal),
                Piece::Token { id, raw, offset } => {
                    let entry = self.get(id).ok_or_else(|| PlaceholderError::Dangling {
                        token: raw.to_string(),
                        offset,
                    })?;
                    if std::mem::replace(&mut seen[id.index()], true) {
                        return Err(PlaceholderError::Duplicated {
                            token: raw.to_string(),
                            offset,
                        }
                        .into());
                    }
                    out.push_str(&substitute(entry)?);
                    consumed.push(id);
                }
            }
        }

        Ok(Restored {
            text: out,
            consumed,
        })
    }
}
