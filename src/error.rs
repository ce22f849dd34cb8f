//! Errors raised while resolving extraction settings.

use std::fmt;

/// The error returned when a note keyword cannot be resolved.
///
/// Extraction itself never fails; only configuration does.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Error {
    kind: ErrorKind,

    value: Option<String>,
}

impl Error {
    /// Create a new error from a `ErrorKind`.
    pub(crate) fn new(kind: ErrorKind) -> Self {
        Self { kind, value: None }
    }

    pub(crate) fn with_value(kind: ErrorKind, value: &str) -> Self {
        Self {
            kind,
            value: Some(value.to_owned()),
        }
    }

    /// The kind of error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The offending configuration value, if there was one.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)?;
        if let Some(value) = &self.value {
            write!(f, ": {value:?}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

/// All possible error kinds returned when resolving a note keyword.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The note keyword is blank, or the configured list is empty.
    MissingNoteKeyword,

    /// The note keyword spans more than one line.
    InvalidNoteKeyword,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingNoteKeyword => f.write_str("missing note keyword"),
            Self::InvalidNoteKeyword => f.write_str("note keyword must be a single line"),
        }
    }
}
