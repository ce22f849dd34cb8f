//! Settings that shape the assembled message.

use std::borrow::Cow;
use std::fmt;
use std::ops::Deref;

use tracing::debug;

use crate::{Error, ErrorKind};

/// The label put in front of breaking change notes, e.g. `BREAKING CHANGE`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct NoteKeyword(Cow<'static, str>);

impl NoteKeyword {
    /// The conventional commit footer token.
    pub const BREAKING_CHANGE: NoteKeyword = NoteKeyword(Cow::Borrowed("BREAKING CHANGE"));
    /// Plural spelling, for call sites that prefer it.
    pub const BREAKING_CHANGES: NoteKeyword = NoteKeyword(Cow::Borrowed("BREAKING CHANGES"));

    /// Parse a `str` into a `NoteKeyword`.
    ///
    /// Surrounding whitespace is dropped.
    ///
    /// # Errors
    ///
    /// Fails when the keyword is blank or spans several lines.
    pub fn parse(keyword: &str) -> Result<Self, Error> {
        let trimmed = keyword.trim();
        if trimmed.is_empty() {
            return Err(Error::with_value(ErrorKind::MissingNoteKeyword, keyword));
        }
        if trimmed.contains(['\n', '\r']) {
            return Err(Error::with_value(ErrorKind::InvalidNoteKeyword, keyword));
        }
        Ok(Self(Cow::Owned(trimmed.to_owned())))
    }

    /// Access `str` representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for NoteKeyword {
    fn default() -> Self {
        Self::BREAKING_CHANGE
    }
}

impl Deref for NoteKeyword {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl PartialEq<&'_ str> for NoteKeyword {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for NoteKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

/// A note keyword setting, either a single value or a list of them.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum NoteKeywords {
    /// `noteKeywords = "BREAKING CHANGE"`
    One(String),
    /// `noteKeywords = ["BREAKING CHANGE", "BREAKING-CHANGE"]`, of which only
    /// the first is used when writing messages
    Many(Vec<String>),
}

impl NoteKeywords {
    /// The keyword used when writing messages.
    pub fn first(&self) -> Option<&str> {
        match self {
            Self::One(keyword) => Some(keyword.as_str()),
            Self::Many(keywords) => keywords.first().map(String::as_str),
        }
    }
}

/// Commit parser options.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ParserOpts {
    /// Labels for breaking change notes.
    pub note_keywords: Option<NoteKeywords>,
}

/// Message extraction configuration.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Config {
    /// Commit parser options.
    pub parser_opts: Option<ParserOpts>,
}

impl Config {
    /// Create a configuration with the given note keyword setting.
    pub fn with_note_keywords(note_keywords: NoteKeywords) -> Self {
        Self {
            parser_opts: Some(ParserOpts {
                note_keywords: Some(note_keywords),
            }),
        }
    }

    /// Resolve the note keyword to prefix breaking changes with.
    ///
    /// Falls back to [`NoteKeyword::BREAKING_CHANGE`] when nothing is
    /// configured, and uses the first entry of a list.
    ///
    /// # Errors
    ///
    /// Fails when the configured list is empty, or its keyword is invalid.
    pub fn note_keyword(&self) -> Result<NoteKeyword, Error> {
        let Some(keywords) = self
            .parser_opts
            .as_ref()
            .and_then(|opts| opts.note_keywords.as_ref())
        else {
            return Ok(NoteKeyword::default());
        };

        let keyword = keywords
            .first()
            .ok_or_else(|| Error::new(ErrorKind::MissingNoteKeyword))?;
        let keyword = NoteKeyword::parse(keyword)?;
        debug!(note_keyword = %keyword, "resolved note keyword from config");
        Ok(keyword)
    }
}
