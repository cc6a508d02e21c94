// src/extract.rs
//! Funding-fact extraction: a fixed sequence of regex rules over raw article
//! text. Best effort and non-failing; absence of a match is expected, not
//! exceptional. Rule order and first-seen-wins deduplication are the only
//! order-dependent behaviors and must stay as they are.

use once_cell::sync::Lazy;
use regex::Regex;

/// Facts pulled out of one article. Each field is populated at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct FundingDetails {
    pub amount: Option<String>,
    pub investors: Option<String>,
    pub description: Option<String>,
}

impl FundingDetails {
    pub fn is_empty(&self) -> bool {
        self.amount.is_none() && self.investors.is_none() && self.description.is_none()
    }
}

// Matches $5 million, $5M, $5,000,000 thousand, $5.5 billion, ...
static RE_AMOUNT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\$\s?\d[\d,]*\.?\d*\s*(?:million|mln|mil|billion|bln|bil|thousand|[MBK])\b")
        .expect("amount regex")
});

// Ordered templates; each captures a capitalized phrase up to a terminator.
// Case-sensitive on purpose: investor names start uppercase.
static INVESTOR_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"led by ([A-Z][\w\s&',]+?)(?:\.|,| and | with )",
        r"backed by ([A-Z][\w\s&',]+?)(?:\.|,| and | with )",
        r"investors? include ([A-Z][\w\s&',]+?)(?:\.|,)",
        r"participation (?:from|by) ([A-Z][\w\s&',]+?)(?:\.|,)",
        r"funding (?:from|by) ([A-Z][\w\s&',]+?)(?:\.|,)",
        r"investment from ([A-Z][\w\s&',]+?)(?:\.|,)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("investor pattern"))
    .collect()
});

static RE_SENTENCE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]\s+").expect("sentence regex"));

/// Split into sentences on whitespace following `.`, `!` or `?`, keeping the
/// punctuation with its sentence.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    for m in RE_SENTENCE_BREAK.find_iter(text) {
        // the punctuation class is single-byte ASCII
        let end = m.start() + 1;
        out.push(&text[start..end]);
        start = m.end();
    }
    if start < text.len() {
        out.push(&text[start..]);
    }
    out
}

/// Extract funding amount, investors and a lede-style description from
/// article text. Pure function of the input; never fails.
pub fn extract_funding_details(text: &str) -> FundingDetails {
    // --- Funding amount: first match only, no numeric normalization ---
    let amount = RE_AMOUNT
        .find(text)
        .map(|m| m.as_str().trim().to_string());

    // --- Investors: all templates in sequence, dedup keeps first-seen order ---
    let mut investors: Vec<String> = Vec::new();
    for re in INVESTOR_PATTERNS.iter() {
        for caps in re.captures_iter(text) {
            if let Some(m) = caps.get(1) {
                let name = m.as_str().trim().trim_end_matches(',').to_string();
                if !name.is_empty() && !investors.iter().any(|seen| seen == &name) {
                    investors.push(name);
                }
            }
        }
    }
    let investors = (!investors.is_empty()).then(|| investors.join("; "));

    // --- Description: first 2 long-enough sentences among the first 5 ---
    let lede: Vec<&str> = split_sentences(text)
        .into_iter()
        .take(5)
        .filter(|s| s.chars().count() > 30)
        .take(2)
        .collect();
    let description = (!lede.is_empty()).then(|| lede.join(" "));

    FundingDetails {
        amount,
        investors,
        description,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_word_unit() {
        let d = extract_funding_details("The startup raised $5 million in seed funding.");
        assert_eq!(d.amount.as_deref(), Some("$5 million"));
    }

    #[test]
    fn amount_letter_unit() {
        let d = extract_funding_details("announced a $2.5M seed round");
        assert_eq!(d.amount.as_deref(), Some("$2.5M"));
    }

    #[test]
    fn amount_first_match_wins() {
        let d = extract_funding_details("raised $3 million after an earlier $1 million round");
        assert_eq!(d.amount.as_deref(), Some("$3 million"));
    }

    #[test]
    fn amount_absent_without_currency() {
        let d = extract_funding_details("raised an undisclosed sum");
        assert_eq!(d.amount, None);
    }

    #[test]
    fn investors_ordered_and_deduped() {
        let text = "The round was led by Sequoia Capital, with participation from Y Combinator. \
                    It was also led by Sequoia Capital, they say.";
        let d = extract_funding_details(text);
        assert_eq!(
            d.investors.as_deref(),
            Some("Sequoia Capital; Y Combinator")
        );
    }

    #[test]
    fn investors_need_capitalized_name() {
        let d = extract_funding_details("led by nobody in particular.");
        assert_eq!(d.investors, None);
    }

    #[test]
    fn sentence_split_keeps_punctuation() {
        let s = split_sentences("One two. Three four! Five?");
        assert_eq!(s, vec!["One two.", "Three four!", "Five?"]);
    }

    #[test]
    fn sentence_split_without_trailing_break() {
        let s = split_sentences("no breaks here");
        assert_eq!(s, vec!["no breaks here"]);
    }

    #[test]
    fn description_skips_short_sentences() {
        let text = "This opening sentence is clearly longer than thirty characters. \
                    Short one. \
                    The third sentence also runs past the thirty character mark. \
                    Fourth sentence is also long enough to qualify for the lede. \
                    Fifth. Sixth.";
        let d = extract_funding_details(text);
        assert_eq!(
            d.description.as_deref(),
            Some(
                "This opening sentence is clearly longer than thirty characters. \
                 The third sentence also runs past the thirty character mark."
            )
        );
    }

    #[test]
    fn description_only_looks_at_first_five_sentences() {
        let text = "A. B. C. D. E. \
                    This long sentence appears sixth and must not be considered.";
        let d = extract_funding_details(text);
        assert_eq!(d.description, None);
    }

    #[test]
    fn empty_text_yields_empty_details() {
        let d = extract_funding_details("");
        assert!(d.is_empty());
    }

    #[test]
    fn extraction_is_pure() {
        let text = "Acme raised $4 million, led by First Capital, to build AI tools. \
                    The company plans to double its engineering team this year.";
        assert_eq!(extract_funding_details(text), extract_funding_details(text));
    }
}
