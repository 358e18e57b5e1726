use crate::domain::model::NameRecord;
use crate::domain::ports::NationalityProvider;
use crate::utils::error::{NationalityError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Serves canned (country, probability) lists; unknown names fail with a 500.
pub(crate) struct MockProvider {
    responses: HashMap<String, Vec<(&'static str, f64)>>,
    calls: AtomicUsize,
}

impl MockProvider {
    pub(crate) fn new() -> Self {
        Self {
            responses: HashMap::new(),
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn with(mut self, name: &str, countries: Vec<(&'static str, f64)>) -> Self {
        self.responses.insert(name.to_string(), countries);
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NationalityProvider for MockProvider {
    async fn fetch(&self, name: &str) -> Result<Vec<NameRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.responses.get(name) {
            Some(countries) => Ok(countries
                .iter()
                .map(|(code, p)| NameRecord::new(name, *code, *p))
                .collect()),
            None => Err(NationalityError::Status {
                name: name.to_string(),
                status: 500,
            }),
        }
    }
}
