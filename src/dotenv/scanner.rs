//! Single-pass scanner turning dotenv text into a [`RawMapping`].
//!
//! The scanner only splits names from values. Values are stored untrimmed;
//! trimming and type conversion happen when binding.

use std::str::Chars;

use tracing::debug;

use super::DialectProfile;
use crate::error::{Reason, SyntaxError};
use crate::raw::RawMapping;

/// How a variable name ended.
enum NameEnd {
    Assigned(String),
    Naked(String),
}

/// A value as read after `=`.
enum Value {
    Bare(String),
    /// Inner text of a quoted value, delimiters removed.
    Quoted(String),
}

pub(crate) struct Scanner<'a> {
    chars: Chars<'a>,
    line: usize,
    profile: &'a DialectProfile,
    vars: RawMapping,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(input: &'a str, profile: &'a DialectProfile) -> Self {
        Self {
            chars: input.chars(),
            line: 1,
            profile,
            vars: RawMapping::new(),
        }
    }

    fn next(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    pub(crate) fn scan(mut self) -> Result<RawMapping, SyntaxError> {
        while let Some(c) = self.next() {
            match c {
                ' ' | '\t' | '\r' | '\n' => continue,
                '#' => self.skip_line(),
                _ => self.variable(c)?,
            }
        }

        debug!(
            variables = self.vars.len(),
            lines = self.line,
            "scanned dotenv input"
        );
        Ok(self.vars)
    }

    /// Consumes everything up to and including the next newline.
    fn skip_line(&mut self) {
        while let Some(c) = self.next() {
            if c == '\n' {
                break;
            }
        }
    }

    fn variable(&mut self, first: char) -> Result<(), SyntaxError> {
        let start = self.line;
        if first == '=' {
            return Err(SyntaxError::at_line(start, Reason::InvalidVariableName));
        }

        match self.name(first, start)? {
            NameEnd::Naked(name) => {
                self.vars.insert_naked(name.as_str());
                self.vars.set_line(&name, start);
            }
            NameEnd::Assigned(name) => {
                match self.value()? {
                    Value::Bare(value) => self.vars.insert(name.as_str(), value),
                    Value::Quoted(value) => self.vars.insert_unquoted(name.as_str(), value),
                }
                self.vars.set_line(&name, start);
            }
        }
        Ok(())
    }

    fn name(&mut self, first: char, start: usize) -> Result<NameEnd, SyntaxError> {
        let mut name = String::from(first);
        loop {
            match self.next() {
                None | Some('\r') | Some('\n') => return self.naked(name, start),
                Some('=') => return Ok(NameEnd::Assigned(name)),
                Some(' ') | Some('\t') => return self.after_name(name, start),
                Some(c) => name.push(c),
            }
        }
    }

    /// Blanks after a name may only be followed by more blanks and `=`.
    fn after_name(&mut self, name: String, start: usize) -> Result<NameEnd, SyntaxError> {
        loop {
            match self.next() {
                Some(' ') | Some('\t') => continue,
                Some('=') => return Ok(NameEnd::Assigned(name)),
                None | Some('\r') | Some('\n') => return self.naked(name, start),
                Some(_) => {
                    return Err(SyntaxError::at_line(self.line, Reason::InvalidVariableName))
                }
            }
        }
    }

    fn naked(&self, name: String, start: usize) -> Result<NameEnd, SyntaxError> {
        if self.profile.allows_naked() {
            Ok(NameEnd::Naked(name))
        } else {
            Err(SyntaxError::at_line(start, Reason::NakedVariable))
        }
    }

    /// Unsupported quotes are rejected anywhere in a bare value.
    fn value(&mut self) -> Result<Value, SyntaxError> {
        let mut value = String::new();
        let mut started = false;

        while let Some(c) = self.next() {
            match c {
                '\n' => break,
                '#' => {
                    self.skip_line();
                    break;
                }
                c if !started && self.profile.is_quote(c) => {
                    return self.quoted(c).map(Value::Quoted);
                }
                c if self.profile.is_unsupported_quote(c) => {
                    return Err(SyntaxError::at_line(self.line, Reason::UnsupportedQuote));
                }
                c => {
                    if !matches!(c, ' ' | '\t' | '\r') {
                        started = true;
                    }
                    value.push(c);
                }
            }
        }

        Ok(Value::Bare(value))
    }

    /// Reads up to the closing `quote`, which may be several lines further.
    fn quoted(&mut self, quote: char) -> Result<String, SyntaxError> {
        let start = self.line;
        let mut inner = String::new();

        loop {
            match self.next() {
                None => return Err(SyntaxError::at_line(start, Reason::MissingClosingQuote)),
                Some(c) if c == quote => break,
                Some(c) => inner.push(c),
            }
        }

        if self.profile.expands_newlines(quote) {
            inner = expand_newlines(&inner);
        }
        Ok(inner)
    }
}

/// Replaces the escape sequences `\r\n` and `\n` with a real newline.
fn expand_newlines(s: &str) -> String {
    s.replace("\\r\\n", "\n").replace("\\n", "\n")
}
