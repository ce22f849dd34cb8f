//! Commit message assembly from a pull request title and description.

use std::fmt;

use tracing::debug;

use crate::config::{Config, NoteKeyword};
use crate::section::{locate, Keyword};
use crate::title::normalize_title;
use crate::Error;

const SPACER: &str = "\n\n";

/// An assembled commit message.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct CommitMessage {
    title: String,
    body: String,
    full: String,
}

impl CommitMessage {
    fn new(title: String, body: String) -> Self {
        let full = format!("{title}{SPACER}{body}").trim().to_owned();
        Self { title, body, full }
    }

    /// The commit title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The commit body, made of the details, breaking changes and references.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Title and body, separated by a blank line.
    pub fn full(&self) -> &str {
        &self.full
    }

    /// Consume the message, returning the full text.
    pub fn into_full(self) -> String {
        self.full
    }
}

impl fmt::Display for CommitMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full)
    }
}

/// Builds commit messages out of pull request titles and descriptions.
///
/// The description is searched for `Details`, `Breaking Changes` and
/// `References` sections; anything else in it is dropped.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Extractor {
    note_keyword: NoteKeyword,
}

impl Extractor {
    /// An extractor labelling breaking changes with `BREAKING CHANGE`.
    pub fn new() -> Self {
        Self::default()
    }

    /// An extractor using the note keyword from `config`.
    ///
    /// # Errors
    ///
    /// Fails when the configured note keyword is invalid.
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        Ok(Self {
            note_keyword: config.note_keyword()?,
        })
    }

    /// Replace the label put in front of breaking changes.
    pub fn with_note_keyword(mut self, note_keyword: NoteKeyword) -> Self {
        self.note_keyword = note_keyword;
        self
    }

    /// The label put in front of breaking changes.
    pub fn note_keyword(&self) -> &NoteKeyword {
        &self.note_keyword
    }

    /// Extract a commit message, normalizing the title as a conventional
    /// commit title.
    pub fn extract(&self, title: &str, description: &str) -> CommitMessage {
        self.assemble(normalize_title(title), description)
    }

    /// Build a commit message, keeping the title as written apart from
    /// surrounding whitespace.
    pub fn build(&self, title: &str, description: &str) -> CommitMessage {
        self.assemble(title.trim().to_owned(), description)
    }

    fn assemble(&self, title: String, description: &str) -> CommitMessage {
        let details = locate(description, &Keyword::DETAILS).content();
        let breaking = locate(description, &Keyword::BREAKING_CHANGES)
            .non_empty()
            .map(|breaking| format!("{}: {breaking}", self.note_keyword))
            .unwrap_or_default();
        let references = locate(description, &Keyword::REFERENCES).content();

        // Empty sections keep their spacers; only the outer ones get trimmed.
        let body = format!("{details}{SPACER}{breaking}{SPACER}{references}")
            .trim()
            .to_owned();

        let message = CommitMessage::new(title, body);
        debug!(
            title = message.title(),
            body_len = message.body().len(),
            "extracted commit message"
        );
        message
    }
}

/// Extract a commit message with the default [`Extractor`].
///
/// ```rust
/// let message = pr_commit_message::extract_message("fix: Test", "## Ref\n#42");
/// assert_eq!(message.full(), "fix: Test\n\n#42");
/// ```
pub fn extract_message(title: &str, description: &str) -> CommitMessage {
    Extractor::new().extract(title, description)
}

/// Extract the contents of the `Changelog` section, or `""` when there is none.
pub fn extract_conventional(body: &str) -> &str {
    locate(body, &Keyword::CHANGELOG).content()
}
