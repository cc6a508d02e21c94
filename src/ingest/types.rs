// src/ingest/types.rs
use anyhow::Result;

/// One article item emitted by a feed.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct FeedEntry {
    pub title: String,
    pub link: String,
    pub published: String, // raw feed timestamp, kept verbatim for display/CSV
    pub published_at: u64, // unix seconds, 0 when unparsable
    pub summary: String,   // normalized text
}

#[async_trait::async_trait]
pub trait FeedSource: Send + Sync {
    async fn fetch_entries(&self) -> Result<Vec<FeedEntry>>;
    fn name(&self) -> &str;
}
