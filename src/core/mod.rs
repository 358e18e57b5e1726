pub mod cache;
pub mod fetch;
pub mod resolver;
#[cfg(test)]
pub(crate) mod testing;

pub use crate::domain::model::{CountryExtremes, LookupOutcome, NameRecord, NameRecordSet};
pub use crate::domain::ports::{ConfigProvider, NationalityProvider};
pub use crate::utils::error::Result;
