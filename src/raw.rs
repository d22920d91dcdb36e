//! The intermediate name → raw value mapping shared by all sources.

use std::collections::HashMap;

/// A variable as stored in a [`RawMapping`].
#[derive(Debug, Clone, PartialEq, Eq)]
enum Stored {
    Naked,
    Value(String),
    /// Quoted in the source and already unquoted by the scanner.
    Unquoted(String),
}

/// Lookup result for a variable name.
///
/// `Naked` is only produced by dialects that allow variables without an `=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawValue<'a> {
    Absent,
    Naked,
    Present(&'a str),
}

/// Variables read from a source, before any trimming or unquoting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawMapping {
    vars: HashMap<String, Stored>,
    lines: HashMap<String, usize>,
}

impl RawMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a mapping from `NAME=value` strings, splitting on the first `=`.
    ///
    /// Strings without `=` are ignored.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut mapping = Self::new();
        for pair in pairs {
            if let Some((name, value)) = pair.as_ref().split_once('=') {
                if !name.is_empty() {
                    mapping.insert(name, value);
                }
            }
        }
        mapping
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        self.lines.remove(&name);
        self.vars.insert(name, Stored::Value(value.into()));
    }

    pub fn insert_naked(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.lines.remove(&name);
        self.vars.insert(name, Stored::Naked);
    }

    /// Stores a value whose quotes the scanner already removed.
    ///
    /// Binding uses it verbatim: no trimming, no second unquoting.
    pub(crate) fn insert_unquoted(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        self.lines.remove(&name);
        self.vars.insert(name, Stored::Unquoted(value.into()));
    }

    /// Records the 1-based line on which `name` was defined.
    pub(crate) fn set_line(&mut self, name: &str, line: usize) {
        self.lines.insert(name.to_string(), line);
    }

    pub fn get(&self, name: &str) -> RawValue<'_> {
        match self.vars.get(name) {
            None => RawValue::Absent,
            Some(Stored::Naked) => RawValue::Naked,
            Some(Stored::Value(value)) | Some(Stored::Unquoted(value)) => {
                RawValue::Present(value.as_str())
            }
        }
    }

    pub(crate) fn is_unquoted(&self, name: &str) -> bool {
        matches!(self.vars.get(name), Some(Stored::Unquoted(_)))
    }

    /// Line on which `name` was defined, when the mapping came from dotenv text.
    pub fn line_of(&self, name: &str) -> Option<usize> {
        self.lines.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.vars.keys().map(String::as_str)
    }

    /// Overlays `other` onto `self`; entries in `other` win.
    pub fn merge(&mut self, other: RawMapping) {
        let RawMapping { vars, lines } = other;
        for (name, stored) in vars {
            match lines.get(&name) {
                Some(line) => {
                    self.lines.insert(name.clone(), *line);
                }
                None => {
                    self.lines.remove(&name);
                }
            }
            self.vars.insert(name, stored);
        }
    }
}
