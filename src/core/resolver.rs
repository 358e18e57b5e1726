use crate::core::cache::NameCache;
use crate::core::fetch::FetchAdapter;
use crate::domain::model::{CountryExtremes, LookupOutcome, NameRecord, NameRecordSet};
use crate::domain::ports::NationalityProvider;
use std::sync::Arc;

/// Scan records for the least- and most-likely country.
///
/// The minimum starts at 1.0 and the maximum at 0.0, and only strictly
/// smaller/larger probabilities replace them. Ties keep the first record seen.
/// A record at exactly 1.0 therefore never becomes the minimum, and one at
/// exactly 0.0 never becomes the maximum.
pub fn scan_extremes(records: &[NameRecord]) -> CountryExtremes {
    let mut extremes = CountryExtremes {
        min_country: String::new(),
        min_probability: 1.0,
        max_country: String::new(),
        max_probability: 0.0,
    };

    for record in records {
        if record.probability < extremes.min_probability {
            extremes.min_probability = record.probability;
            extremes.min_country = record.country_code.clone();
        }
        if record.probability > extremes.max_probability {
            extremes.max_probability = record.probability;
            extremes.max_country = record.country_code.clone();
        }
    }

    extremes
}

fn outcome_for(set: &NameRecordSet) -> LookupOutcome {
    if set.is_empty() {
        LookupOutcome::NoData
    } else {
        LookupOutcome::Resolved(scan_extremes(&set.records))
    }
}

/// Cache-aside lookup of the most- and least-likely country for a name.
pub struct ProbabilityResolver<P: NationalityProvider> {
    cache: Arc<NameCache>,
    fetcher: FetchAdapter<P>,
}

impl<P: NationalityProvider> ProbabilityResolver<P> {
    pub fn new(provider: P) -> Self {
        Self::with_cache(provider, Arc::new(NameCache::new()))
    }

    pub fn with_cache(provider: P, cache: Arc<NameCache>) -> Self {
        Self {
            fetcher: FetchAdapter::new(provider, Arc::clone(&cache)),
            cache,
        }
    }

    pub fn cache(&self) -> &Arc<NameCache> {
        &self.cache
    }

    pub fn fetcher(&self) -> &FetchAdapter<P> {
        &self.fetcher
    }

    pub async fn resolve(&self, name: &str) -> LookupOutcome {
        if let Some(set) = self.cache.get(name) {
            tracing::debug!("Cache hit for '{}' (fetched at {})", name, set.fetched_at.to_rfc3339());
            return outcome_for(&set);
        }

        tracing::debug!("Cache miss for '{}', fetching", name);
        match self.fetcher.populate(name).await {
            Ok(fetched) => {
                let set = self.cache.get(name).unwrap_or(fetched);
                outcome_for(&set)
            }
            Err(e) => LookupOutcome::FetchFailed(e),
        }
    }

    /// `(min, max)` country codes for `name`, both empty when nothing is known.
    pub async fn min_max(&self, name: &str) -> (String, String) {
        self.resolve(name).await.country_codes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::MockProvider;

    fn records(countries: &[(&str, f64)]) -> Vec<NameRecord> {
        countries
            .iter()
            .map(|(code, p)| NameRecord::new("test", *code, *p))
            .collect()
    }

    #[test]
    fn test_scan_picks_extremes() {
        let extremes = scan_extremes(&records(&[("DE", 0.3), ("NL", 0.85), ("BE", 0.12)]));

        assert_eq!(extremes.max_country, "NL");
        assert_eq!(extremes.max_probability, 0.85);
        assert_eq!(extremes.min_country, "BE");
        assert_eq!(extremes.min_probability, 0.12);
    }

    #[test]
    fn test_scan_single_record_is_both_extremes() {
        let extremes = scan_extremes(&records(&[("FI", 0.4)]));

        assert_eq!(extremes.min_country, "FI");
        assert_eq!(extremes.max_country, "FI");
    }

    #[test]
    fn test_scan_ties_keep_first_seen() {
        let extremes = scan_extremes(&records(&[("SE", 0.2), ("NO", 0.2), ("DK", 0.5), ("IS", 0.5)]));

        assert_eq!(extremes.min_country, "SE");
        assert_eq!(extremes.max_country, "DK");
    }

    #[test]
    fn test_scan_boundary_probabilities() {
        let only_one = scan_extremes(&records(&[("US", 1.0)]));
        assert_eq!(only_one.min_country, "");
        assert_eq!(only_one.max_country, "US");

        let only_zero = scan_extremes(&records(&[("US", 0.0)]));
        assert_eq!(only_zero.min_country, "US");
        assert_eq!(only_zero.max_country, "");
    }

    #[test]
    fn test_scan_empty_records() {
        let extremes = scan_extremes(&[]);
        assert_eq!(extremes.min_country, "");
        assert_eq!(extremes.max_country, "");
    }

    #[test]
    fn test_scan_bounds_every_record() {
        let input = records(&[("A", 0.05), ("B", 0.41), ("C", 0.33), ("D", 0.07), ("E", 0.14)]);
        let extremes = scan_extremes(&input);

        for record in &input {
            assert!(extremes.max_probability >= record.probability);
            assert!(extremes.min_probability <= record.probability);
        }
        assert_eq!(extremes.max_country, "B");
        assert_eq!(extremes.min_country, "A");
    }

    #[tokio::test]
    async fn test_resolve_miss_fetches_and_caches() {
        let provider = MockProvider::new().with("Aljosja", vec![("NL", 0.85), ("BE", 0.12)]);
        let resolver = ProbabilityResolver::new(provider);

        let (min, max) = resolver.min_max("Aljosja").await;

        assert_eq!(min, "BE");
        assert_eq!(max, "NL");
        assert!(resolver.cache().contains("Aljosja"));
    }

    #[tokio::test]
    async fn test_resolve_hit_does_not_refetch() {
        let provider = MockProvider::new().with("Jan", vec![("NL", 0.6), ("ZA", 0.1)]);
        let resolver = ProbabilityResolver::new(provider);

        let first = resolver.min_max("Jan").await;
        let second = resolver.min_max("Jan").await;

        assert_eq!(first, second);
        assert_eq!(resolver.fetcher().provider().calls(), 1);
    }

    #[tokio::test]
    async fn test_resolve_empty_set_is_no_data_and_cached() {
        let provider = MockProvider::new().with("Xz123", vec![]);
        let resolver = ProbabilityResolver::new(provider);

        assert!(matches!(resolver.resolve("Xz123").await, LookupOutcome::NoData));
        assert_eq!(resolver.min_max("Xz123").await, (String::new(), String::new()));
        assert!(resolver.cache().contains("Xz123"));
        assert_eq!(resolver.fetcher().provider().calls(), 1);
    }

    #[tokio::test]
    async fn test_resolve_failed_fetch_returns_sentinel_and_retries() {
        let resolver = ProbabilityResolver::new(MockProvider::new());

        match resolver.resolve("Nobody").await {
            LookupOutcome::FetchFailed(e) => assert!(e.is_fetch_error()),
            other => panic!("expected fetch failure, got {:?}", other),
        }
        assert_eq!(resolver.min_max("Nobody").await, (String::new(), String::new()));

        // 失敗不會寫入快取，所以每次查詢都會重新抓取
        assert!(resolver.cache().is_empty());
        assert_eq!(resolver.fetcher().provider().calls(), 2);
    }

    #[tokio::test]
    async fn test_resolvers_with_separate_caches_are_isolated() {
        let first = ProbabilityResolver::new(MockProvider::new().with("Jan", vec![("NL", 0.6)]));
        let second = ProbabilityResolver::new(MockProvider::new().with("Jan", vec![("BE", 0.6)]));

        assert_eq!(first.min_max("Jan").await.1, "NL");
        assert_eq!(second.min_max("Jan").await.1, "BE");
    }

    #[tokio::test]
    async fn test_resolve_uses_preloaded_cache() {
        let cache = Arc::new(NameCache::new());
        cache.insert(NameRecordSet::new(
            "Sofia",
            vec![NameRecord::new("Sofia", "BG", 0.3), NameRecord::new("Sofia", "GR", 0.1)],
        ));
        let resolver = ProbabilityResolver::with_cache(MockProvider::new(), cache);

        assert_eq!(
            resolver.min_max("Sofia").await,
            ("GR".to_string(), "BG".to_string())
        );
        assert_eq!(resolver.fetcher().provider().calls(), 0);
    }
}
