use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Scanner rules for one flavour of `.env` files.
///
/// `expand_newline_quotes` must be a subset of `quotes`; characters that are
/// not also quotes never open a quoted value and so never expand anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialectProfile {
    allow_naked: bool,
    quotes: Vec<char>,
    unsupported_quotes: Vec<char>,
    expand_newline_quotes: Vec<char>,
}

impl DialectProfile {
    /// Creates a profile with no quote support and naked variables disallowed.
    pub fn new() -> Self {
        Self {
            allow_naked: false,
            quotes: Vec::new(),
            unsupported_quotes: Vec::new(),
            expand_newline_quotes: Vec::new(),
        }
    }

    pub fn allow_naked(mut self, allow: bool) -> Self {
        self.allow_naked = allow;
        self
    }

    pub fn with_quote(mut self, quote: char) -> Self {
        push_unique(&mut self.quotes, quote);
        self.unsupported_quotes.retain(|&c| c != quote);
        self
    }

    /// Marks `quote` as a hard error when it opens a value.
    pub fn with_unsupported_quote(mut self, quote: char) -> Self {
        push_unique(&mut self.unsupported_quotes, quote);
        self.quotes.retain(|&c| c != quote);
        self.expand_newline_quotes.retain(|&c| c != quote);
        self
    }

    /// Turns `\n` and `\r\n` escapes into real newlines inside values quoted with `quote`.
    ///
    /// Also registers `quote` as a supported quote.
    pub fn with_newline_expansion(mut self, quote: char) -> Self {
        self = self.with_quote(quote);
        push_unique(&mut self.expand_newline_quotes, quote);
        self
    }

    pub fn allows_naked(&self) -> bool {
        self.allow_naked
    }

    pub fn is_quote(&self, c: char) -> bool {
        self.quotes.contains(&c)
    }

    pub fn is_unsupported_quote(&self, c: char) -> bool {
        self.unsupported_quotes.contains(&c)
    }

    pub fn expands_newlines(&self, quote: char) -> bool {
        self.expand_newline_quotes.contains(&quote)
    }
}

impl Default for DialectProfile {
    fn default() -> Self {
        Self::new()
    }
}

fn push_unique(set: &mut Vec<char>, c: char) {
    if !set.contains(&c) {
        set.push(c);
    }
}

/// The named `.env` flavours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Rules of the npm `dotenv` package: `"`, `'` and `` ` `` quotes, no naked variables.
    #[serde(alias = "node", alias = "js")]
    NodeJs,
    /// Rules of `django-dotenv`: `"` and `'` quotes, backticks rejected, naked variables allowed.
    #[serde(alias = "django", alias = "py")]
    Python,
}

impl Dialect {
    pub fn profile(&self) -> DialectProfile {
        match self {
            Dialect::NodeJs => DialectProfile::new()
                .with_newline_expansion('"')
                .with_quote('\'')
                .with_quote('`'),
            Dialect::Python => DialectProfile::new()
                .allow_naked(true)
                .with_newline_expansion('"')
                .with_quote('\'')
                .with_unsupported_quote('`'),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Dialect::NodeJs => "nodejs",
            Dialect::Python => "python",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a dialect name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown dotenv dialect: {0}")]
pub struct UnknownDialect(pub String);

impl FromStr for Dialect {
    type Err = UnknownDialect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nodejs" | "node" | "js" => Ok(Dialect::NodeJs),
            "python" | "django" | "py" => Ok(Dialect::Python),
            _ => Err(UnknownDialect(s.to_string())),
        }
    }
}
