// src/config.rs
//! Scan configuration: feed list and keyword sets, injected rather than
//! hard-coded. TOML is the primary format; `.json` files are accepted too.
//! Compiled-in defaults apply when no config file is present.

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const ENV_CONFIG_PATH: &str = "SCAN_CONFIG_PATH";
pub const DEFAULT_CONFIG_PATH: &str = "config/scan.toml";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct FeedConfig {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct KeywordConfig {
    /// Phrases that indicate seed funding.
    #[serde(default = "default_seed_keywords")]
    pub seed: Vec<String>,
    /// Phrases that indicate AI. Padded variants like `" ai "` stand in for
    /// word boundaries.
    #[serde(default = "default_ai_keywords")]
    pub ai: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ScanConfig {
    #[serde(default = "default_feeds")]
    pub feeds: Vec<FeedConfig>,
    #[serde(default)]
    pub keywords: KeywordConfig,
}

fn default_feeds() -> Vec<FeedConfig> {
    vec![
        FeedConfig {
            name: "TechCrunch".to_string(),
            url: "https://techcrunch.com/feed/".to_string(),
        },
        FeedConfig {
            name: "VentureBeat".to_string(),
            url: "https://venturebeat.com/feed/".to_string(),
        },
    ]
}

fn default_seed_keywords() -> Vec<String> {
    ["seed funding", "seed round", "seed stage", "pre-seed"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_ai_keywords() -> Vec<String> {
    ["artificial intelligence", " ai ", " ai-", " ai,", " ai."]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            seed: default_seed_keywords(),
            ai: default_ai_keywords(),
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            feeds: default_feeds(),
            keywords: KeywordConfig::default(),
        }
    }
}

/// Load from an explicit path. Format follows the extension: `.json` parses
/// as JSON, everything else as TOML.
pub fn load_from(path: &Path) -> Result<ScanConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading scan config from {}", path.display()))?;
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    parse_config(&content, &ext)
}

/// Load using env var + fallbacks:
/// 1) $SCAN_CONFIG_PATH (must exist when set)
/// 2) config/scan.toml
/// 3) compiled-in defaults
pub fn load_default() -> Result<ScanConfig> {
    if let Ok(p) = std::env::var(ENV_CONFIG_PATH) {
        let pb = PathBuf::from(p);
        if pb.exists() {
            return load_from(&pb);
        }
        return Err(anyhow!("SCAN_CONFIG_PATH points to non-existent path"));
    }
    let toml_p = PathBuf::from(DEFAULT_CONFIG_PATH);
    if toml_p.exists() {
        return load_from(&toml_p);
    }
    Ok(ScanConfig::default())
}

fn parse_config(s: &str, hint_ext: &str) -> Result<ScanConfig> {
    if hint_ext == "json" {
        return serde_json::from_str(s).context("parsing json scan config");
    }
    toml::from_str(s).context("parsing toml scan config")
}
