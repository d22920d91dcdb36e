use crate::error::Error;
use crate::raw::RawMapping;

/// Something that produces raw variables: the process environment, a dotenv
/// file, or an in-memory dotenv text.
pub trait RawSource: Send + Sync + std::fmt::Debug {
    fn load(&self) -> Result<RawMapping, Error>;
}

impl RawSource for RawMapping {
    fn load(&self) -> Result<RawMapping, Error> {
        Ok(self.clone())
    }
}
