use crate::app::report::write_report;
use crate::core::resolver::ProbabilityResolver;
use crate::domain::model::LookupOutcome;
use crate::domain::ports::NationalityProvider;
use crate::utils::error::Result;
use std::io::Write;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub resolved: usize,
    pub no_data: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.resolved + self.no_data + self.failed
    }
}

/// Prefetch every name, then report min/max for each one in input order.
///
/// Names whose prefetch failed are looked up again during reporting, since
/// nothing was cached for them.
pub async fn run_batch<P, W>(
    resolver: &ProbabilityResolver<P>,
    names: &[String],
    out: &mut W,
) -> Result<BatchSummary>
where
    P: NationalityProvider,
    W: Write,
{
    tracing::info!("🚀 Prefetching {} names", names.len());
    let prefetch = resolver.fetcher().prefetch(names).await;
    if !prefetch.failed.is_empty() {
        tracing::warn!("{} names could not be prefetched", prefetch.failed.len());
    }

    let mut summary = BatchSummary::default();
    for name in names {
        let outcome = resolver.resolve(name).await;
        match &outcome {
            LookupOutcome::Resolved(_) => summary.resolved += 1,
            LookupOutcome::NoData => summary.no_data += 1,
            LookupOutcome::FetchFailed(_) => summary.failed += 1,
        }
        write_report(out, name, &outcome)?;
    }

    tracing::info!(
        "✅ Batch done: {} resolved, {} without data, {} failed",
        summary.resolved,
        summary.no_data,
        summary.failed
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::MockProvider;

    #[tokio::test]
    async fn test_batch_reports_every_name() {
        let provider = MockProvider::new()
            .with("Aljosja", vec![("NL", 0.85), ("BE", 0.12)])
            .with("Xz123", vec![]);
        let resolver = ProbabilityResolver::new(provider);
        let names = vec!["Aljosja".to_string(), "Xz123".to_string(), "Broken".to_string()];

        let mut out = Vec::new();
        let summary = run_batch(&resolver, &names, &mut out).await.unwrap();

        assert_eq!(
            summary,
            BatchSummary {
                resolved: 1,
                no_data: 1,
                failed: 1
            }
        );
        assert_eq!(summary.total(), 3);

        let text = String::from_utf8(out).unwrap();
        let aljosja = text.find("Results for Aljosja:").unwrap();
        let xz = text.find("Results for Xz123:").unwrap();
        let broken = text.find("Results for Broken:").unwrap();
        assert!(aljosja < xz && xz < broken);
        assert!(text.contains("Most likely country: NL\nLeast likely country: BE\n"));
        assert!(text.contains("Lookup failed:"));
    }

    #[tokio::test]
    async fn test_batch_fetches_each_name_once() {
        let provider = MockProvider::new()
            .with("Jan", vec![("NL", 0.6)])
            .with("Sofia", vec![("BG", 0.3)]);
        let resolver = ProbabilityResolver::new(provider);
        let names = vec!["Jan".to_string(), "Sofia".to_string(), "Jan".to_string()];

        let mut out = Vec::new();
        let summary = run_batch(&resolver, &names, &mut out).await.unwrap();

        assert_eq!(summary.resolved, 3);
        assert_eq!(resolver.fetcher().provider().calls(), 2);
    }

    #[tokio::test]
    async fn test_batch_retries_failed_prefetch_once_while_reporting() {
        let resolver = ProbabilityResolver::new(MockProvider::new());
        let names = vec!["Broken".to_string()];

        let mut out = Vec::new();
        let summary = run_batch(&resolver, &names, &mut out).await.unwrap();

        assert_eq!(summary.failed, 1);
        assert_eq!(resolver.fetcher().provider().calls(), 2);
    }
}
