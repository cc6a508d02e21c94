// src/report.rs
//! Run output: human-readable console blocks plus a fixed-column CSV.

use std::path::Path;

use anyhow::{Context, Result};

use crate::pipeline::EnrichedEntry;

pub const CSV_HEADER: [&str; 7] = [
    "Source",
    "Title",
    "Link",
    "Published",
    "Funding Amount",
    "Investors",
    "Description",
];

/// One console block per article, in processing order.
pub fn format_entry(e: &EnrichedEntry) -> String {
    let mut out = String::new();
    out.push_str(&format!("Source:      {}\n", value_or_na(&e.source)));
    out.push_str(&format!("Title:       {}\n", value_or_na(&e.entry.title)));
    out.push_str(&format!("Link:        {}\n", value_or_na(&e.entry.link)));
    out.push_str(&format!(
        "Published:   {}\n",
        value_or_na(&e.entry.published)
    ));
    if let Some(amount) = &e.details.amount {
        out.push_str(&format!("Amount:      {amount}\n"));
    }
    if let Some(investors) = &e.details.investors {
        out.push_str(&format!("Investors:   {investors}\n"));
    }
    if let Some(description) = &e.details.description {
        out.push_str(&format!("Description: {description}\n"));
    }
    out
}

fn value_or_na(s: &str) -> &str {
    if s.is_empty() {
        "N/A"
    } else {
        s
    }
}

pub fn print_report(entries: &[EnrichedEntry]) {
    println!("{}", "-".repeat(60));
    for e in entries {
        println!("{}", format_entry(e));
    }
}

/// Write one row per enriched entry. Overwrites any existing file.
pub fn write_csv(path: &Path, entries: &[EnrichedEntry]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("opening csv {}", path.display()))?;
    wtr.write_record(CSV_HEADER).context("writing csv header")?;
    for e in entries {
        wtr.write_record([
            e.source.as_str(),
            e.entry.title.as_str(),
            e.entry.link.as_str(),
            e.entry.published.as_str(),
            e.details.amount.as_deref().unwrap_or(""),
            e.details.investors.as_deref().unwrap_or(""),
            e.details.description.as_deref().unwrap_or(""),
        ])
        .context("writing csv row")?;
    }
    wtr.flush().context("flushing csv")?;
    Ok(())
}
