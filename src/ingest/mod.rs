// src/ingest/mod.rs
pub mod providers;
pub mod types;

use once_cell::sync::Lazy;
use regex::Regex;

/// Normalize feed text: decode entities, strip tags, collapse whitespace.
/// Trailing punctuation is kept intact; padded keyword variants like `" ai."`
/// rely on it.
pub fn normalize_text(s: &str) -> String {
    // 1) HTML entity decode
    let mut out = html_escape::decode_html_entities(s).to_string();

    // 2) Strip HTML tags
    static RE_TAGS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)</?[^>]+>").expect("tag regex"));
    out = RE_TAGS.replace_all(&out, " ").to_string();

    // 3) Normalize “ ” ‘ ’ « » to ASCII quotes
    out = out
        .replace(['\u{201C}', '\u{201D}', '\u{00AB}', '\u{00BB}'], "\"")
        .replace(['\u{2018}', '\u{2019}'], "'");

    // 4) Collapse whitespace
    static RE_WS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("ws regex"));
    out = RE_WS.replace_all(&out, " ").to_string();

    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_ok() {
        assert_eq!(normalize_text(""), "");
    }

    #[test]
    fn strips_html_and_unescapes() {
        let s = "<p>Hello&nbsp;<b>world</b> &ldquo;ok&rdquo;</p>";
        assert_eq!(normalize_text(s), r#"Hello world "ok""#);
    }

    #[test]
    fn folds_whitespace_and_nbsp() {
        let s = "A\u{00A0}\n\tB   C";
        assert_eq!(normalize_text(s), "A B C");
    }

    #[test]
    fn keeps_trailing_punctuation() {
        // " ai." style keywords need the sentence punctuation to survive
        assert_eq!(normalize_text("built on AI."), "built on AI.");
    }
}
