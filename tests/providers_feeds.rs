// tests/providers_feeds.rs
use seedwatch::ingest::providers::FeedProvider;
use seedwatch::ingest::types::FeedSource;

const RSS_XML: &str = include_str!("fixtures/techcrunch_rss.xml");
const ATOM_XML: &str = include_str!("fixtures/funding_atom.xml");

#[tokio::test]
async fn rss_fixture_parses_and_yields_entries() {
    let provider = FeedProvider::from_fixture("TechCrunch", RSS_XML);

    let entries = provider.fetch_entries().await.expect("rss parse ok");
    assert_eq!(entries.len(), 10, "fixture carries ten items");
    assert!(
        entries.iter().all(|e| !e.title.is_empty()),
        "every entry should have a title"
    );
    assert!(
        entries.iter().all(|e| e.published_at > 0),
        "every pubDate in the fixture is RFC 2822"
    );

    let first = &entries[0];
    assert_eq!(
        first.title,
        "Lumen AI raises $6 million seed round to automate insurance claims"
    );
    assert_eq!(first.link, "https://example.test/article/lumen-ai");
    assert_eq!(first.published, "Tue, 05 Aug 2025 14:30:00 GMT");
    // CDATA description is normalized to plain text
    assert!(first.summary.starts_with("Lumen AI, a startup"));
    assert!(!first.summary.contains('<'));
}

#[tokio::test]
async fn atom_fixture_parses_and_yields_entries() {
    let provider = FeedProvider::from_fixture("Funding Wire", ATOM_XML);

    let entries = provider.fetch_entries().await.expect("atom parse ok");
    assert_eq!(entries.len(), 3);
    assert_eq!(
        entries[0].title,
        "Nimbus picks up seed funding for AI weather models"
    );
    assert_eq!(entries[0].link, "https://example.test/article/nimbus");
    assert!(entries[0].published_at > 0, "published is RFC 3339");
}

#[tokio::test]
async fn provider_reports_its_configured_name() {
    let provider = FeedProvider::from_fixture("VentureBeat", RSS_XML);
    assert_eq!(provider.name(), "VentureBeat");
}

#[tokio::test]
async fn broken_xml_is_an_error_not_a_panic() {
    let provider = FeedProvider::from_fixture("Broken", "<html>not a feed</html>");
    assert!(provider.fetch_entries().await.is_err());
}
