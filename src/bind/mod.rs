//! Binding of raw variables into typed record fields.

mod coerce;
mod field;

pub use field::{Bindable, EnvRecord, FieldBinding, Slot};

use tracing::trace;

use crate::error::{Reason, SyntaxError};
use crate::raw::{RawMapping, RawValue};
use coerce::{normalize, parse_bool, parse_duration, parse_int};

/// Fills every bound field of `dest` from `raw`, in declaration order.
///
/// Stops at the first error. Fields bound before the failing one keep their
/// new values, so `dest` must be treated as partially populated on error.
pub fn bind<R: EnvRecord>(raw: &RawMapping, dest: &mut R) -> Result<(), SyntaxError> {
    for binding in R::fields() {
        bind_field(raw, &binding, dest)?;
    }
    Ok(())
}

fn bind_field<R>(raw: &RawMapping, binding: &FieldBinding<R>, dest: &mut R) -> Result<(), SyntaxError> {
    let variable = binding.variable();

    // None means unset: absent without a default, or naked.
    let (text, from_source) = match raw.get(variable) {
        RawValue::Present(value) => (Some(value), true),
        RawValue::Absent => (binding.default(), false),
        RawValue::Naked => (None, false),
    };

    trace!(
        field = binding.field(),
        variable,
        set = text.is_some(),
        from_source,
        "binding field"
    );

    let fail = |reason: Reason| match raw.line_of(variable) {
        Some(line) if from_source => SyntaxError::at_line(line, reason),
        _ => SyntaxError::for_variable(variable, reason),
    };

    // Quoted dotenv values were already unquoted by the scanner.
    let text = match text {
        Some(value) if from_source && raw.is_unquoted(variable) => Some(value),
        other => other.map(normalize).transpose().map_err(fail)?,
    };

    match binding.slot(dest) {
        Slot::Str(slot) => *slot = text.unwrap_or_default().to_string(),
        Slot::OptStr(slot) => *slot = text.map(str::to_string),
        Slot::Bool(slot) => *slot = parse_value(text, parse_bool).map_err(fail)?,
        Slot::OptBool(slot) => *slot = parse_optional(text, parse_bool).map_err(fail)?,
        Slot::I8(slot) => *slot = parse_value(text, parse_int).map_err(fail)? as i8,
        Slot::OptI8(slot) => {
            *slot = parse_optional(text, parse_int).map_err(fail)?.map(|n| n as i8)
        }
        Slot::I16(slot) => *slot = parse_value(text, parse_int).map_err(fail)? as i16,
        Slot::OptI16(slot) => {
            *slot = parse_optional(text, parse_int).map_err(fail)?.map(|n| n as i16)
        }
        Slot::I32(slot) => *slot = parse_value(text, parse_int).map_err(fail)? as i32,
        Slot::OptI32(slot) => {
            *slot = parse_optional(text, parse_int).map_err(fail)?.map(|n| n as i32)
        }
        Slot::I64(slot) => *slot = parse_value(text, parse_int).map_err(fail)?,
        Slot::OptI64(slot) => *slot = parse_optional(text, parse_int).map_err(fail)?,
        Slot::Duration(slot) => *slot = parse_value(text, parse_duration).map_err(fail)?,
        Slot::OptDuration(slot) => *slot = parse_optional(text, parse_duration).map_err(fail)?,
    }

    Ok(())
}

/// Unset text yields the zero value.
fn parse_value<T: Default>(
    text: Option<&str>,
    parse: fn(&str) -> Result<T, Reason>,
) -> Result<T, Reason> {
    text.map(parse).transpose().map(Option::unwrap_or_default)
}

/// Unset text yields `None`; any text, even empty, yields `Some`.
fn parse_optional<T>(
    text: Option<&str>,
    parse: fn(&str) -> Result<T, Reason>,
) -> Result<Option<T>, Reason> {
    text.map(parse).transpose()
}
