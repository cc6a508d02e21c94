// src/page.rs
//! Article page fetching and main-content text extraction.

use std::time::Duration;

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

/// Browser-like UA; several news sites refuse the default reqwest one.
pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/120.0.0.0 Safari/537.36";

/// Page fetch is abandoned after this; the article is then treated as
/// "no text" and not retried.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

pub struct ArticleFetcher {
    client: reqwest::Client,
}

impl ArticleFetcher {
    pub fn new() -> Self {
        Self::with_timeout(FETCH_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self { client }
    }

    /// Fetch an article page and return its flattened main-content text.
    /// Timeouts, non-2xx statuses and connection errors all surface as `Err`;
    /// the caller downgrades them to empty text.
    pub async fn fetch_text(&self, url: &str) -> Result<String> {
        let resp = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .with_context(|| format!("article http get {url}"))?
            .error_for_status()
            .with_context(|| format!("article http status {url}"))?;
        let body = resp.text().await.context("article http .text()")?;
        Ok(extract_article_text(&body))
    }
}

impl Default for ArticleFetcher {
    fn default() -> Self {
        Self::new()
    }
}

const SKIPPED_TAGS: [&str; 5] = ["script", "style", "nav", "header", "footer"];

static SEL_ARTICLE: Lazy<Selector> =
    Lazy::new(|| Selector::parse("article").expect("article selector"));
static SEL_DIV: Lazy<Selector> = Lazy::new(|| Selector::parse("div").expect("div selector"));
static SEL_MAIN: Lazy<Selector> = Lazy::new(|| Selector::parse("main").expect("main selector"));
static SEL_BODY: Lazy<Selector> = Lazy::new(|| Selector::parse("body").expect("body selector"));

static RE_CONTENT_CLASS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)article|post|entry|content").expect("content class regex"));

/// Pick the most likely main-content container and return its visible text,
/// whitespace-normalized. Container preference order is significant:
/// `article`, then a `div` with a content-ish class, then `main`, then `body`.
pub fn extract_article_text(html: &str) -> String {
    let doc = Html::parse_document(html);

    let container = doc
        .select(&SEL_ARTICLE)
        .next()
        .or_else(|| find_content_div(&doc))
        .or_else(|| doc.select(&SEL_MAIN).next())
        .or_else(|| doc.select(&SEL_BODY).next());

    let Some(root) = container else {
        return String::new();
    };

    let mut parts: Vec<String> = Vec::new();
    collect_visible_text(root, &mut parts);
    parts.join(" ")
}

fn find_content_div<'a>(doc: &'a Html) -> Option<ElementRef<'a>> {
    doc.select(&SEL_DIV).find(|div| {
        div.value()
            .attr("class")
            .is_some_and(|c| RE_CONTENT_CLASS.is_match(c))
    })
}

/// Depth-first text walk, skipping script/style/nav/header/footer subtrees.
fn collect_visible_text(el: ElementRef<'_>, out: &mut Vec<String>) {
    for node in el.children() {
        if let Some(text) = node.value().as_text() {
            let t = text.trim();
            if !t.is_empty() {
                out.push(t.split_whitespace().collect::<Vec<_>>().join(" "));
            }
        } else if let Some(child) = ElementRef::wrap(node) {
            if SKIPPED_TAGS.contains(&child.value().name()) {
                continue;
            }
            collect_visible_text(child, out);
        }
    }
}
