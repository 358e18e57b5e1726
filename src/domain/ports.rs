use crate::domain::model::NameRecord;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Source of name nationality data (the remote inference service).
#[async_trait]
pub trait NationalityProvider: Send + Sync {
    /// Fetch every (country, probability) record the source knows for `name`.
    async fn fetch(&self, name: &str) -> Result<Vec<NameRecord>>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn request_timeout(&self) -> Option<Duration>;
    fn batch_names(&self) -> &[String];
}
