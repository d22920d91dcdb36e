//! Dotenv sources backed by a file or an in-memory string.

use std::path::{Path, PathBuf};

use super::source::RawSource;
use crate::dotenv::{self, Dialect};
use crate::error::Error;
use crate::raw::RawMapping;

/// A dotenv file read with the rules of one [`Dialect`].
///
/// Files can be marked as required or optional. Required files that don't
/// exist cause an error; optional files that don't exist are skipped.
#[derive(Debug, Clone)]
pub struct DotenvFileSource {
    path: PathBuf,
    dialect: Dialect,
    required: bool,
}

impl DotenvFileSource {
    pub fn new(path: impl AsRef<Path>, dialect: Dialect, required: bool) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            dialect,
            required,
        }
    }
}

impl RawSource for DotenvFileSource {
    fn load(&self) -> Result<RawMapping, Error> {
        Ok(load_dotenv_file(&self.path, self.dialect, self.required)?.unwrap_or_default())
    }
}

/// Reads and scans a dotenv file.
///
/// Returns `Ok(None)` if the file doesn't exist and `required` is false.
pub(crate) fn load_dotenv_file(
    path: &Path,
    dialect: Dialect,
    required: bool,
) -> Result<Option<RawMapping>, Error> {
    match std::fs::read_to_string(path) {
        Ok(contents) => Ok(Some(dotenv::parse_str(&contents, &dialect.profile())?)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound && !required => Ok(None),
        Err(e) => Err(Error::SourceAccess {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Dotenv text held in memory.
#[derive(Debug, Clone)]
pub struct DotenvStrSource {
    text: String,
    dialect: Dialect,
}

impl DotenvStrSource {
    pub fn new(text: impl Into<String>, dialect: Dialect) -> Self {
        Self {
            text: text.into(),
            dialect,
        }
    }
}

impl RawSource for DotenvStrSource {
    fn load(&self) -> Result<RawMapping, Error> {
        Ok(dotenv::parse_str(&self.text, &self.dialect.profile())?)
    }
}
