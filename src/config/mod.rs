//! Loading records from the process environment and dotenv sources.

mod builder;
mod env;
mod file;
mod source;

use std::io::Read;
use std::path::Path;

pub use builder::Loader;
pub use env::OsEnvSource;
pub use file::{DotenvFileSource, DotenvStrSource};
pub use source::RawSource;

use crate::bind::{bind, EnvRecord};
use crate::dotenv::{self, Dialect};
use crate::error::Error;

/// Binds the variables of the running process into `dest`.
pub fn from_os_env<R: EnvRecord>(dest: &mut R) -> Result<(), Error> {
    let raw = OsEnvSource::new().load()?;
    bind(&raw, dest)?;
    Ok(())
}

/// Scans dotenv text from `reader` and binds it into `dest`.
///
/// Only variables defined in the text are seen; the process environment is
/// not consulted.
pub fn from_dotenv_reader<R: EnvRecord, T: Read>(
    dest: &mut R,
    reader: T,
    dialect: Dialect,
) -> Result<(), Error> {
    let raw = dotenv::parse_reader(reader, &dialect.profile())?;
    bind(&raw, dest)?;
    Ok(())
}

/// Like [`from_dotenv_reader`], for text already in memory.
pub fn from_dotenv_str<R: EnvRecord>(dest: &mut R, text: &str, dialect: Dialect) -> Result<(), Error> {
    let raw = dotenv::parse_str(text, &dialect.profile())?;
    bind(&raw, dest)?;
    Ok(())
}

/// Reads the dotenv file at `path` and binds it into `dest`.
///
/// Failing to open or read the file gives [`Error::SourceAccess`].
pub fn from_dotenv_file<R: EnvRecord>(
    dest: &mut R,
    path: impl AsRef<Path>,
    dialect: Dialect,
) -> Result<(), Error> {
    let path = path.as_ref();
    let raw = file::load_dotenv_file(path, dialect, true)?.unwrap_or_default();
    bind(&raw, dest)?;
    Ok(())
}
