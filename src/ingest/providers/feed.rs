// src/ingest/providers/feed.rs
//! Config-driven feed provider. Understands RSS 2.0 (`<rss><channel><item>`)
//! and Atom (`<feed><entry>`) via quick-xml serde deserialization.

use anyhow::{Context, Result};
use async_trait::async_trait;
use quick_xml::de::from_str;
use serde::Deserialize;
use time::format_description::well_known::{Rfc2822, Rfc3339};
use time::{OffsetDateTime, UtcOffset};

use crate::ingest::normalize_text;
use crate::ingest::types::{FeedEntry, FeedSource};

#[derive(Debug, Deserialize)]
struct Rss {
    channel: Channel,
}

#[derive(Debug, Deserialize)]
struct Channel {
    #[serde(rename = "item", default)]
    item: Vec<Item>,
}

#[derive(Debug, Deserialize)]
struct Item {
    title: Option<String>,
    link: Option<String>,
    #[serde(rename = "pubDate")]
    pub_date: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AtomFeed {
    #[serde(rename = "entry", default)]
    entry: Vec<AtomEntry>,
}

#[derive(Debug, Deserialize)]
struct AtomEntry {
    title: Option<String>,
    #[serde(rename = "link", default)]
    link: Vec<AtomLink>,
    published: Option<String>,
    updated: Option<String>,
    summary: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AtomLink {
    #[serde(rename = "@href")]
    href: Option<String>,
    #[serde(rename = "@rel")]
    rel: Option<String>,
}

/// RSS uses RFC 2822 (`Tue, 05 Aug 2025 14:30:00 GMT`), Atom RFC 3339.
/// The zone is often spelled GMT/UTC/UT in the wild, which strict RFC 2822
/// parsers reject; map it to a numeric offset first.
fn parse_timestamp_to_unix(ts: &str) -> u64 {
    let ts = ts.trim();
    let normalized = ts
        .strip_suffix(" GMT")
        .or_else(|| ts.strip_suffix(" UTC"))
        .or_else(|| ts.strip_suffix(" UT"))
        .map(|stripped| format!("{stripped} +0000"))
        .unwrap_or_else(|| ts.to_string());
    OffsetDateTime::parse(&normalized, &Rfc2822)
        .or_else(|_| OffsetDateTime::parse(ts, &Rfc3339))
        .ok()
        .map(|dt| dt.to_offset(UtcOffset::UTC).unix_timestamp())
        .and_then(|x| u64::try_from(x).ok())
        .unwrap_or(0)
}

pub struct FeedProvider {
    name: String,
    mode: Mode,
}

enum Mode {
    Http {
        url: String,
        client: reqwest::Client,
    },
    Fixture(String),
}

impl FeedProvider {
    pub fn from_url(name: &str, url: &str, client: reqwest::Client) -> Self {
        Self {
            name: name.to_string(),
            mode: Mode::Http {
                url: url.to_string(),
                client,
            },
        }
    }

    pub fn from_fixture(name: &str, content: &str) -> Self {
        Self {
            name: name.to_string(),
            mode: Mode::Fixture(content.to_string()),
        }
    }

    fn parse_entries(s: &str) -> Result<Vec<FeedEntry>> {
        let xml_clean = scrub_html_entities_for_xml(s);

        match root_element_name(&xml_clean).as_deref() {
            Some("rss") => from_str::<Rss>(&xml_clean)
                .context("parsing rss feed xml")
                .map(entries_from_rss),
            Some("feed") => from_str::<AtomFeed>(&xml_clean)
                .context("parsing atom feed xml")
                .map(entries_from_atom),
            Some(other) => anyhow::bail!("unrecognized feed root element <{other}>"),
            None => anyhow::bail!("feed body is not well-formed xml"),
        }
    }
}

/// Feed dialect is decided by the document's root element, so that an HTML
/// error page never passes for an empty feed.
fn root_element_name(s: &str) -> Option<String> {
    let mut reader = quick_xml::Reader::from_str(s);
    loop {
        match reader.read_event() {
            Ok(quick_xml::events::Event::Start(e)) => {
                return Some(String::from_utf8_lossy(e.local_name().as_ref()).into_owned())
            }
            Ok(quick_xml::events::Event::Eof) | Err(_) => return None,
            Ok(_) => {}
        }
    }
}

fn entry_from_parts(
    title: Option<String>,
    link: Option<String>,
    published: Option<String>,
    summary: Option<String>,
) -> Option<FeedEntry> {
    let title = normalize_text(title.as_deref().unwrap_or_default());
    let summary = normalize_text(summary.as_deref().unwrap_or_default());
    if title.is_empty() && summary.is_empty() {
        return None;
    }
    let published = published.unwrap_or_default().trim().to_string();
    Some(FeedEntry {
        title,
        link: link.unwrap_or_default().trim().to_string(),
        published_at: parse_timestamp_to_unix(&published),
        published,
        summary,
    })
}

fn entries_from_rss(rss: Rss) -> Vec<FeedEntry> {
    rss.channel
        .item
        .into_iter()
        .filter_map(|it| entry_from_parts(it.title, it.link, it.pub_date, it.description))
        .collect()
}

fn entries_from_atom(feed: AtomFeed) -> Vec<FeedEntry> {
    feed.entry
        .into_iter()
        .filter_map(|en| {
            // Prefer the alternate link; entries may also carry rel="self" etc.
            let link = en
                .link
                .iter()
                .find(|l| matches!(l.rel.as_deref(), None | Some("alternate")))
                .or_else(|| en.link.first())
                .and_then(|l| l.href.clone());
            let published = en.published.or(en.updated);
            entry_from_parts(en.title, link, published, en.summary)
        })
        .collect()
}

#[async_trait]
impl FeedSource for FeedProvider {
    async fn fetch_entries(&self) -> Result<Vec<FeedEntry>> {
        match &self.mode {
            Mode::Fixture(s) => Self::parse_entries(s),
            Mode::Http { url, client } => {
                let body = client
                    .get(url)
                    .send()
                    .await
                    .with_context(|| format!("feed http get {url}"))?
                    .error_for_status()
                    .with_context(|| format!("feed http status {url}"))?
                    .text()
                    .await
                    .context("feed http .text()")?;
                Self::parse_entries(&body)
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

fn scrub_html_entities_for_xml(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&ndash;", "-")
        .replace("&mdash;", "-")
        .replace("&ldquo;", "\"")
        .replace("&rdquo;", "\"")
        .replace("&lsquo;", "'")
        .replace("&rsquo;", "'")
}
