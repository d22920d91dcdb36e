use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the dragon-env library.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error("error reading {} ({source})", .path.display())]
    SourceAccess {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read dotenv input: {0}")]
    Read(#[from] std::io::Error),
}

/// Where a syntax error was detected.
///
/// Scanning knows the line; binding only knows the variable it was working on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Line(usize),
    Variable(String),
}

/// Machine-stable reason carried by every [`SyntaxError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Reason {
    NakedVariable,
    InvalidVariableName,
    MissingClosingQuote,
    UnsupportedQuote,
    NumberNotParsable,
    InvalidDuration,
    InvalidBoolean,
}

impl Reason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Reason::NakedVariable => "naked variable",
            Reason::InvalidVariableName => "invalid variable name",
            Reason::MissingClosingQuote => "missing closing quote",
            Reason::UnsupportedQuote => "unsupported quote",
            Reason::NumberNotParsable => "number not parsable",
            Reason::InvalidDuration => "not parsable as duration string",
            Reason::InvalidBoolean => "not a valid boolean value",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Malformed input, found either while scanning dotenv text or while
/// converting a raw value into a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub location: Location,
    pub reason: Reason,
}

impl SyntaxError {
    pub fn at_line(line: usize, reason: Reason) -> Self {
        Self {
            location: Location::Line(line),
            reason,
        }
    }

    pub fn for_variable(name: impl Into<String>, reason: Reason) -> Self {
        Self {
            location: Location::Variable(name.into()),
            reason,
        }
    }

    /// Returns the line number, if the error carries one.
    pub fn line(&self) -> Option<usize> {
        match self.location {
            Location::Line(line) => Some(line),
            Location::Variable(_) => None,
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Location::Line(line) => write!(f, "line {}: syntax error ({})", line, self.reason),
            Location::Variable(name) => write!(f, "{}: syntax error ({})", name, self.reason),
        }
    }
}

impl std::error::Error for SyntaxError {}
