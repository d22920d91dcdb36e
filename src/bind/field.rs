use std::fmt;

use crate::duration::Duration;

/// A mutable view of one destination field.
///
/// Only these field types can be bound; anything else fails to compile
/// because it has no [`Bindable`] implementation.
#[derive(Debug)]
pub enum Slot<'r> {
    Str(&'r mut String),
    Bool(&'r mut bool),
    I8(&'r mut i8),
    I16(&'r mut i16),
    I32(&'r mut i32),
    I64(&'r mut i64),
    Duration(&'r mut Duration),
    OptStr(&'r mut Option<String>),
    OptBool(&'r mut Option<bool>),
    OptI8(&'r mut Option<i8>),
    OptI16(&'r mut Option<i16>),
    OptI32(&'r mut Option<i32>),
    OptI64(&'r mut Option<i64>),
    OptDuration(&'r mut Option<Duration>),
}

/// Field types the binder knows how to fill.
pub trait Bindable {
    fn slot(&mut self) -> Slot<'_>;
}

macro_rules! bindable {
    ($($ty:ty => $value:ident, $optional:ident;)*) => {
        $(
            impl Bindable for $ty {
                fn slot(&mut self) -> Slot<'_> {
                    Slot::$value(self)
                }
            }

            impl Bindable for Option<$ty> {
                fn slot(&mut self) -> Slot<'_> {
                    Slot::$optional(self)
                }
            }
        )*
    };
}

bindable! {
    String => Str, OptStr;
    bool => Bool, OptBool;
    i8 => I8, OptI8;
    i16 => I16, OptI16;
    i32 => I32, OptI32;
    i64 => I64, OptI64;
    Duration => Duration, OptDuration;
}

/// Associates one field of `R` with an environment variable.
pub struct FieldBinding<R> {
    field: &'static str,
    variable: &'static str,
    default: Option<&'static str>,
    slot: fn(&mut R) -> Slot<'_>,
}

impl<R> FieldBinding<R> {
    /// Binds `field` to `variable`.
    ///
    /// # Panics
    ///
    /// Panics when `variable` is empty: such a binding can never match and
    /// points at a mistake in the record declaration.
    pub fn new(field: &'static str, variable: &'static str, slot: fn(&mut R) -> Slot<'_>) -> Self {
        assert!(
            !variable.is_empty(),
            "field '{}' is bound to an empty variable name",
            field
        );
        Self {
            field,
            variable,
            default: None,
            slot,
        }
    }

    /// Raw value used when the variable is absent from the source.
    ///
    /// The default goes through the same trimming, unquoting and parsing as
    /// values read from a source. An empty default is the same as none.
    pub fn with_default(mut self, default: &'static str) -> Self {
        self.default = (!default.is_empty()).then_some(default);
        self
    }

    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn variable(&self) -> &'static str {
        self.variable
    }

    pub fn default(&self) -> Option<&'static str> {
        self.default
    }

    pub(crate) fn slot<'r>(&self, record: &'r mut R) -> Slot<'r> {
        (self.slot)(record)
    }
}

impl<R> fmt::Debug for FieldBinding<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldBinding")
            .field("field", &self.field)
            .field("variable", &self.variable)
            .field("default", &self.default)
            .finish()
    }
}

/// A record whose fields can be filled from environment variables.
///
/// Fields are bound in the order returned by [`fields`](Self::fields).
/// Fields that are not listed are left untouched. Usually implemented with
/// [`bindings!`](crate::bindings).
pub trait EnvRecord: Sized {
    fn fields() -> Vec<FieldBinding<Self>>;
}

/// Implements [`EnvRecord`] for a struct by listing its bound fields.
///
/// Each entry is `field => "VARIABLE"`, optionally followed by
/// `= "default"`.
///
/// ```
/// use dragon_env::{bindings, Duration};
///
/// #[derive(Debug, Default)]
/// struct Server {
///     host: String,
///     port: i32,
///     timeout: Option<Duration>,
///     internal: Vec<u8>,
/// }
///
/// bindings! {
///     Server {
///         host => "HOST" = "localhost",
///         port => "PORT" = "8080",
///         timeout => "TIMEOUT",
///     }
/// }
///
/// let mut server = Server::default();
/// dragon_env::from_dotenv_str(&mut server, "PORT=9000", dragon_env::Dialect::NodeJs)?;
/// assert_eq!(server.host, "localhost");
/// assert_eq!(server.port, 9000);
/// assert_eq!(server.timeout, None);
/// # Ok::<(), dragon_env::Error>(())
/// ```
#[macro_export]
macro_rules! bindings {
    ($record:ty { $($field:ident => $variable:literal $(= $default:literal)?),* $(,)? }) => {
        impl $crate::EnvRecord for $record {
            fn fields() -> ::std::vec::Vec<$crate::FieldBinding<Self>> {
                ::std::vec![
                    $(
                        $crate::FieldBinding::new(
                            ::core::stringify!($field),
                            $variable,
                            |record: &mut Self| $crate::Bindable::slot(&mut record.$field),
                        )
                        $(.with_default($default))?
                    ),*
                ]
            }
        }
    };
}
