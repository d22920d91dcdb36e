use super::source::RawSource;
use crate::error::Error;
use crate::raw::RawMapping;

/// The variables of the running process.
///
/// Every variable is present; the process environment has no naked
/// variables. Entries that are not valid UTF-8 are skipped.
#[derive(Debug, Clone, Default)]
pub struct OsEnvSource {
    prefix: Option<String>,
}

impl OsEnvSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only keeps variables starting with `prefix`, with the prefix removed.
    ///
    /// With prefix `APP_`, `APP_PORT=80` is seen as `PORT=80`.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        assert!(!prefix.is_empty(), "prefix must not be empty");
        Self {
            prefix: Some(prefix),
        }
    }

    pub(crate) fn collect<I>(&self, vars: I) -> RawMapping
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut mapping = RawMapping::new();
        for (name, value) in vars {
            let name = match &self.prefix {
                Some(prefix) => match name.strip_prefix(prefix.as_str()) {
                    Some(stripped) if !stripped.is_empty() => stripped.to_string(),
                    _ => continue,
                },
                None => name,
            };
            mapping.insert(name, value);
        }
        mapping
    }
}

impl RawSource for OsEnvSource {
    fn load(&self) -> Result<RawMapping, Error> {
        let vars = std::env::vars_os()
            .filter_map(|(name, value)| Some((name.into_string().ok()?, value.into_string().ok()?)));
        Ok(self.collect(vars))
    }
}
