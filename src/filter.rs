// src/filter.rs
//! Keyword gate: case-insensitive substring matching of fixed phrase lists
//! against entry title+summary text.

use crate::ingest::types::FeedEntry;

/// A fixed list of literal phrases, compared case-insensitively as substrings,
/// not tokens. Matches can occur mid-word; padded variants like `" ai "`
/// compensate for boundary needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet {
    phrases: Vec<String>,
}

impl KeywordSet {
    /// Phrases are lowercased once here so matching is case-insensitive
    /// regardless of config casing.
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            phrases: phrases
                .into_iter()
                .map(|p| p.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// True if any phrase appears in `text`. Short-circuits on first hit.
    pub fn matches(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        self.phrases.iter().any(|p| lower.contains(p.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }
}

/// Combined match subject for one entry. The pad spaces let `" ai "`-style
/// phrases match at the very start or end of the title/summary.
pub fn combined_text(entry: &FeedEntry) -> String {
    format!(" {} {} ", entry.title, entry.summary)
}

/// Keep entries whose combined text matches BOTH keyword sets.
/// Order-preserving; each entry is checked once.
pub fn filter_entries(
    entries: Vec<FeedEntry>,
    seed: &KeywordSet,
    ai: &KeywordSet,
) -> Vec<FeedEntry> {
    entries
        .into_iter()
        .filter(|entry| {
            let combined = combined_text(entry);
            seed.matches(&combined) && ai.matches(&combined)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, summary: &str) -> FeedEntry {
        FeedEntry {
            title: title.to_string(),
            link: String::new(),
            published: String::new(),
            published_at: 0,
            summary: summary.to_string(),
        }
    }

    #[test]
    fn padded_ai_keyword_needs_boundaries() {
        let kw = KeywordSet::new([" ai "]);
        assert!(kw.matches(" The AI startup "));
        assert!(!kw.matches(" he said so "));
    }

    #[test]
    fn matching_is_case_insensitive_both_ways() {
        let kw = KeywordSet::new(["Seed Round"]);
        assert!(kw.matches("a SEED ROUND of $2M"));
        assert!(kw.matches("a seed round of $2M"));
    }

    #[test]
    fn substring_matches_mid_word() {
        // no word-boundary enforcement, by contract
        let kw = KeywordSet::new(["pre-seed"]);
        assert!(kw.matches("the pre-seeded venture"));
    }

    #[test]
    fn filter_requires_both_categories() {
        let seed = KeywordSet::new(["seed round"]);
        let ai = KeywordSet::new([" ai "]);
        let entries = vec![
            entry("AI lab raises seed round", ""),
            entry("AI lab ships a model", "no funding language here"),
            entry("Bakery raises seed round", "fresh bread daily"),
        ];
        let kept = filter_entries(entries, &seed, &ai);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].title, "AI lab raises seed round");
    }

    #[test]
    fn filter_preserves_order() {
        let seed = KeywordSet::new(["seed"]);
        let ai = KeywordSet::new([" ai "]);
        let entries = vec![
            entry("B: AI seed deal", ""),
            entry("skip me", ""),
            entry("A: AI seed deal", ""),
        ];
        let kept = filter_entries(entries, &seed, &ai);
        let titles: Vec<_> = kept.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["B: AI seed deal", "A: AI seed deal"]);
    }

    #[test]
    fn pad_spaces_cover_title_edges() {
        // " ai " must match even when "AI" opens the title
        let ai = KeywordSet::new([" ai "]);
        let e = entry("AI startup lands seed funding", "");
        assert!(ai.matches(&combined_text(&e)));
    }
}
