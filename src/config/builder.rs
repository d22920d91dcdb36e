use std::path::Path;

use tracing::debug;

use super::env::OsEnvSource;
use super::file::{DotenvFileSource, DotenvStrSource};
use super::source::RawSource;
use crate::bind::{bind, EnvRecord};
use crate::dotenv::Dialect;
use crate::error::Error;
use crate::raw::RawMapping;

/// Builder for loading variables from several sources into one record.
///
/// Sources are merged in registration order, with later sources overriding
/// earlier ones. A naked variable in a later source overrides a value from an
/// earlier one.
///
/// ## Example
///
/// ```no_run
/// use dragon_env::{bindings, Dialect, Loader};
///
/// #[derive(Default)]
/// struct AppEnv {
///     database_url: String,
///     debug: bool,
/// }
///
/// bindings! {
///     AppEnv {
///         database_url => "DATABASE_URL",
///         debug => "DEBUG" = "false",
///     }
/// }
///
/// // defaults file -> local overrides -> process environment
/// let env: AppEnv = Loader::builder()
///     .with_dotenv_file(".env", Dialect::NodeJs, true)
///     .with_dotenv_file(".env.local", Dialect::NodeJs, false)
///     .with_os_env()
///     .build()?;
/// # Ok::<(), dragon_env::Error>(())
/// ```
#[derive(Debug, Default)]
#[must_use = "builders do nothing until .build() or .load_into() is called"]
pub struct Loader {
    sources: Vec<Box<dyn RawSource>>,
}

impl Loader {
    /// Creates a new loader with no sources.
    pub fn builder() -> Self {
        Self::default()
    }

    /// Adds the process environment.
    pub fn with_os_env(self) -> Self {
        self.with_source(OsEnvSource::new())
    }

    /// Adds the process variables starting with `prefix`, prefix removed.
    pub fn with_prefixed_env(self, prefix: impl Into<String>) -> Self {
        self.with_source(OsEnvSource::with_prefix(prefix))
    }

    /// Adds a dotenv file.
    ///
    /// If `required` is `true`, loading fails if the file doesn't exist.
    /// Optional files that are missing are silently skipped.
    pub fn with_dotenv_file(self, path: impl AsRef<Path>, dialect: Dialect, required: bool) -> Self {
        self.with_source(DotenvFileSource::new(path, dialect, required))
    }

    /// Adds dotenv text held in memory.
    pub fn with_dotenv_str(self, text: impl Into<String>, dialect: Dialect) -> Self {
        self.with_source(DotenvStrSource::new(text, dialect))
    }

    /// Adds any other source.
    pub fn with_source(mut self, source: impl RawSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Loads and merges every source without binding.
    pub fn raw(&self) -> Result<RawMapping, Error> {
        let mut merged = RawMapping::new();

        for source in &self.sources {
            let mapping = source.load()?;
            debug!(source = ?source, variables = mapping.len(), "merging source");
            merged.merge(mapping);
        }

        Ok(merged)
    }

    /// Loads all sources and binds them into `dest`.
    ///
    /// On error `dest` may be partially populated.
    pub fn load_into<R: EnvRecord>(&self, dest: &mut R) -> Result<(), Error> {
        let merged = self.raw()?;
        bind(&merged, dest)?;
        Ok(())
    }

    /// Loads all sources into a fresh `R::default()`.
    pub fn build<R: EnvRecord + Default>(&self) -> Result<R, Error> {
        let mut dest = R::default();
        self.load_into(&mut dest)?;
        Ok(dest)
    }
}
