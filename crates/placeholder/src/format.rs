//! Spelling of placeholder tokens.
//!
//! A token is `prefix + decimal id + suffix`. Both halves are restricted to
//! ASCII letters, digits and `_`, so a token is a single identifier in every
//! embedded language: it contains no braces, quotes or operator characters
//! that a sub-compiler's lexer could split or reinterpret.

use crate::error::PlaceholderError;
use chtl_types::PlaceholderId;
use nom::{
    IResult, Parser,
    bytes::complete::{tag, take_until},
    character::complete::digit1,
    combinator::map_opt,
    sequence::delimited,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PlaceholderFormat {
    pub prefix: String,
    pub suffix: String,
}

impl Default for PlaceholderFormat {
    fn default() -> Self {
        Self {
            prefix: "__chtl_ph_".to_string(),
            suffix: "__".to_string(),
        }
    }
}

impl PlaceholderFormat {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// Checks that tokens in this format are plain identifiers and that the
    /// numeric part cannot run into the suffix.
    pub fn validate(&self) -> Result<(), PlaceholderError> {
        let word = |s: &str| s.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_');
        let invalid = |part: &'static str, value: &str| PlaceholderError::InvalidFormat {
            part,
            value: value.to_string(),
        };

        if self.prefix.is_empty()
            || !word(&self.prefix)
            || self.prefix.as_bytes()[0].is_ascii_digit()
        {
            return Err(invalid("prefix", &self.prefix));
        }
        if self.suffix.is_empty()
            || !word(&self.suffix)
            || self.suffix.as_bytes()[0].is_ascii_digit()
        {
            return Err(invalid("suffix", &self.suffix));
        }
        Ok(())
    }

    /// Returns a format whose prefix does not occur anywhere in `source`.
    ///
    /// Tokens generated from the returned format therefore cannot be confused
    /// with text the author wrote.
    pub fn salted_for(&self, source: &str) -> Self {
        let mut prefix = self.prefix.clone();
        while source.contains(prefix.as_str()) {
            prefix.push('x');
        }
        if prefix != self.prefix {
            log::debug!(
                "Source already contains '{}'; using placeholder prefix '{}'",
                self.prefix,
                prefix
            );
        }
        Self {
            prefix,
            suffix: self.suffix.clone(),
        }
    }

    /// Spells the token for `id`.
    pub fn render(&self, id: PlaceholderId) -> String {
        format!("{}{}{}", self.prefix, id.seq(), self.suffix)
    }

    /// Recognises one token at the start of `input`.
    ///
    /// Only canonical spellings match: `__chtl_ph_07__` is ordinary text.
    pub fn token<'a>(&self, input: &'a str) -> IResult<&'a str, PlaceholderId> {
        map_opt(
            delimited(
                tag(self.prefix.as_str()),
                digit1,
                tag(self.suffix.as_str()),
            ),
            |digits: &str| {
                if digits.len() > 1 && digits.starts_with('0') {
                    return None;
                }
                digits.parse::<u32>().ok().map(PlaceholderId::new)
            },
        )
        .parse(input)
    }

    /// Splits `text` into literal runs and tokens, in order.
    pub(crate) fn pieces<'f, 'a>(&'f self, text: &'a str) -> Pieces<'f, 'a> {
        Pieces {
            format: self,
            text,
            rest: text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Piece<'a> {
    Text(&'a str),
    Token {
        id: PlaceholderId,
        raw: &'a str,
        offset: usize,
    },
}

pub(crate) struct Pieces<'f, 'a> {
    format: &'f PlaceholderFormat,
    text: &'a str,
    rest: &'a str,
}

impl<'a> Iterator for Pieces<'_, 'a> {
    type Item = Piece<'a>;

    fn next(&mut self) -> Option<Piece<'a>> {
        if self.rest.is_empty() {
            return None;
        }
        let offset = self.text.len() - self.rest.len();

        if let Ok((after, id)) = self.format.token(self.rest) {
            let raw = &self.rest[..self.rest.len() - after.len()];
            self.rest = after;
            return Some(Piece::Token { id, raw, offset });
        }

        // A prefix that did not form a token is ordinary text.
        let prefix = self.format.prefix.as_str();
        let skip = if self.rest.starts_with(prefix) {
            prefix.len()
        } else {
            0
        };
        let literal_len = match take_until::<_, _, nom::error::Error<&str>>(prefix)
            .parse(&self.rest[skip..])
        {
            Ok((_, before)) => skip + before.len(),
            Err(_) => self.rest.len(),
        };
        let (literal, rest) = self.rest.split_at(literal_len);
        self.rest = rest;
        Some(Piece::Text(literal))
    }
}
