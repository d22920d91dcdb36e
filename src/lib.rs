pub mod bind;
pub mod config;
pub mod dotenv;
pub mod duration;
mod error;
pub mod raw;

pub use bind::{bind, Bindable, EnvRecord, FieldBinding, Slot};
pub use config::{
    from_dotenv_file, from_dotenv_reader, from_dotenv_str, from_os_env, Loader, RawSource,
};
pub use dotenv::{Dialect, DialectProfile};
pub use duration::Duration;
pub use error::{Error, Location, Reason, SyntaxError};
pub use raw::{RawMapping, RawValue};
