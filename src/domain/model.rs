use crate::utils::error::NationalityError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One (country, probability) pair returned for a queried name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameRecord {
    pub name: String,
    pub country_code: String,
    pub probability: f64,
}

impl NameRecord {
    pub fn new(name: impl Into<String>, country_code: impl Into<String>, probability: f64) -> Self {
        Self {
            name: name.into(),
            country_code: country_code.into(),
            probability,
        }
    }
}

/// All records from one fetch of a single name, in service order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NameRecordSet {
    pub name: String,
    pub records: Vec<NameRecord>,
    pub fetched_at: DateTime<Utc>,
}

impl NameRecordSet {
    pub fn new(name: impl Into<String>, records: Vec<NameRecord>) -> Self {
        Self {
            name: name.into(),
            records,
            fetched_at: Utc::now(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

/// Least- and most-likely country found by scanning a record set.
///
/// A country code is empty when no record moved that extreme away from its
/// starting value (1.0 for the minimum, 0.0 for the maximum).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryExtremes {
    pub min_country: String,
    pub min_probability: f64,
    pub max_country: String,
    pub max_probability: f64,
}

/// Result of asking for the extremes of a name.
#[derive(Debug)]
pub enum LookupOutcome {
    Resolved(CountryExtremes),
    /// The service knows no country for this name; the empty set is cached.
    NoData,
    /// Nothing was cached because the fetch failed.
    FetchFailed(NationalityError),
}

impl LookupOutcome {
    /// `(min, max)` country codes, both empty when there is nothing to report.
    pub fn country_codes(&self) -> (String, String) {
        match self {
            Self::Resolved(extremes) => (
                extremes.min_country.clone(),
                extremes.max_country.clone(),
            ),
            Self::NoData | Self::FetchFailed(_) => (String::new(), String::new()),
        }
    }
}
