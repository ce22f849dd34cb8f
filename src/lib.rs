//! Assemble commit messages from pull request titles and Markdown
//! descriptions.
//!
//! A description is searched for a few labeled sections, introduced by
//! Markdown headings such as `## Details`, `## Breaking Changes` and
//! `## References`. Their contents become the commit body, and the title is
//! normalized in the [Conventional Commit] style.
//!
//! [conventional commit]: https://www.conventionalcommits.org
//!
//! # Example
//!
//! ```rust
//! use indoc::indoc;
//! use pr_commit_message::{Extractor, NoteKeyword};
//!
//! let description = indoc!("
//!     Thanks for reviewing! Anything outside the sections below is dropped.
//!
//!     ### Details
//!     Parse headings line by line, so `message #1` stays intact.
//!
//!     ### Breaking Change
//!     `locate` now returns a `Section`.
//!
//!     ### Ref
//!     Closes #12
//! ");
//!
//! let message = Extractor::new().extract("Feature : section locator", description);
//!
//! // The type is lower-cased, and `feature` is shortened to `feat`.
//! assert_eq!(message.title(), "feat: section locator");
//!
//! // Sections are joined by blank lines, with the breaking change labelled.
//! assert_eq!(
//!     message.body(),
//!     "Parse headings line by line, so `message #1` stays intact.\n\n\
//!      BREAKING CHANGE: `locate` now returns a `Section`.\n\n\
//!      Closes #12"
//! );
//! assert!(message.full().starts_with("feat: section locator\n\n"));
//!
//! // The label can be chosen per call site.
//! let message = Extractor::new()
//!     .with_note_keyword(NoteKeyword::BREAKING_CHANGES)
//!     .extract("fix: x", "## Breaking\nremoved `y`");
//! assert_eq!(message.body(), "BREAKING CHANGES: removed `y`");
//!
//! // A single `Changelog` section can be pulled out on its own.
//! let changelog = pr_commit_message::extract_conventional("## Changelog\n- faster");
//! assert_eq!(changelog, "- faster");
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod message;
mod parser;
mod section;
mod title;

pub use config::{Config, NoteKeyword, NoteKeywords, ParserOpts};
pub use error::{Error, ErrorKind};
pub use message::{extract_conventional, extract_message, CommitMessage, Extractor};
pub use section::{locate, Keyword, Section};
pub use title::{normalize_title, FEAT, FEATURE};
