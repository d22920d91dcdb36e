//! Parsing of `.env` files in the npm `dotenv` and `django-dotenv` dialects.

mod dialect;
mod scanner;

use std::io::Read;

pub use dialect::{Dialect, DialectProfile, UnknownDialect};

use crate::error::{Error, SyntaxError};
use crate::raw::RawMapping;
use scanner::Scanner;

/// Scans dotenv text into a [`RawMapping`].
pub fn parse_str(input: &str, profile: &DialectProfile) -> Result<RawMapping, SyntaxError> {
    Scanner::new(input, profile).scan()
}

/// Reads all of `reader` and scans it. Input must be valid UTF-8.
pub fn parse_reader<R: Read>(mut reader: R, profile: &DialectProfile) -> Result<RawMapping, Error> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    Ok(parse_str(&input, profile)?)
}
