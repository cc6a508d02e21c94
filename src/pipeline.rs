// src/pipeline.rs
//! One scan run: feed retrieval -> keyword filtering -> per-article page
//! fetch -> extraction. Every failure degrades (feed error means zero
//! entries, page error means empty text) so a run always completes.

use crate::extract::{extract_funding_details, FundingDetails};
use crate::filter::{filter_entries, KeywordSet};
use crate::ingest::types::{FeedEntry, FeedSource};
use crate::page::ArticleFetcher;

/// A filtered entry plus its source name and extracted funding facts.
/// Enrichment fields are populated at most once; an entry whose page fetch
/// failed is still reported, with empty details.
#[derive(Debug, Clone, serde::Serialize)]
pub struct EnrichedEntry {
    pub source: String,
    #[serde(flatten)]
    pub entry: FeedEntry,
    #[serde(flatten)]
    pub details: FundingDetails,
}

fn truncate(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

/// Run one scan over the given sources. Sequential by design: feeds in
/// order, then each matched article in order.
pub async fn run_once(
    sources: &[Box<dyn FeedSource>],
    seed: &KeywordSet,
    ai: &KeywordSet,
    fetcher: &ArticleFetcher,
) -> Vec<EnrichedEntry> {
    let mut results = Vec::new();

    for source in sources {
        tracing::info!(feed = source.name(), "fetching feed");
        let entries = match source.fetch_entries().await {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(error = ?e, feed = source.name(), "feed error");
                continue;
            }
        };
        if entries.is_empty() {
            tracing::info!(feed = source.name(), "no entries found");
            continue;
        }
        tracing::info!(feed = source.name(), total = entries.len(), "feed fetched");

        let matched = filter_entries(entries, seed, ai);
        tracing::info!(
            feed = source.name(),
            matched = matched.len(),
            "articles about AI + seed funding"
        );

        for entry in matched {
            let details = enrich(source.name(), &entry, fetcher).await;
            results.push(EnrichedEntry {
                source: source.name().to_string(),
                entry,
                details,
            });
        }
    }

    results
}

async fn enrich(feed: &str, entry: &FeedEntry, fetcher: &ArticleFetcher) -> FundingDetails {
    if entry.link.is_empty() {
        return FundingDetails::default();
    }
    tracing::info!(feed, title = %truncate(&entry.title, 60), "fetching details");
    match fetcher.fetch_text(&entry.link).await {
        Ok(text) if !text.is_empty() => extract_funding_details(&text),
        Ok(_) => FundingDetails::default(),
        Err(e) => {
            tracing::warn!(error = ?e, url = %entry.link, "could not fetch article");
            FundingDetails::default()
        }
    }
}
