//! Composition charts: grammatical categories and word origin.
//!
//! Shares are stored as fractions in [0,1]; the chart exposes per-level
//! medians scaled to percentages. The loaded rows are never touched.

use super::chart::ChartRow;
use super::utility::median;
use crate::records::{Level, VideoRecord};

fn grammar_shares(r: &VideoRecord) -> [(&'static str, f64); 8] {
    [
        ("subordinating conjunction", r.sconj),
        ("adverb", r.adv),
        ("determiner", r.det),
        ("noun", r.noun),
        ("auxiliary", r.aux),
        ("numeral", r.num),
        ("pronoun", r.pron),
        ("verb", r.verb),
    ]
}

fn origin_shares(r: &VideoRecord) -> [(&'static str, f64); 3] {
    [
        ("Sino-Japanese (kango)", r.kango),
        ("native Japanese (wago)", r.wago),
        ("loanword (gairaigo)", r.gairaigo),
    ]
}

/// Median grammatical-category share per level, in percent.
pub fn grammar_rows(records: &[VideoRecord]) -> Vec<ChartRow> {
    composition_rows(records, grammar_shares)
}

/// Median word-origin share per level, in percent.
pub fn word_origin_rows(records: &[VideoRecord]) -> Vec<ChartRow> {
    composition_rows(records, origin_shares)
}

fn composition_rows<const N: usize>(
    records: &[VideoRecord],
    shares: fn(&VideoRecord) -> [(&'static str, f64); N],
) -> Vec<ChartRow> {
    let Some(first) = records.first() else {
        return Vec::new();
    };
    let names = shares(first).map(|(name, _)| name);

    let mut rows = Vec::new();
    for (ci, name) in names.iter().enumerate() {
        for level in Level::ALL {
            let values: Vec<f64> = records
                .iter()
                .filter(|r| r.level == level)
                .map(|r| shares(r)[ci].1)
                .collect();
            // empty level partition: no row, not an error
            let Some(share) = median(&values) else {
                continue;
            };
            rows.push(ChartRow {
                x: ci as f64,
                y: share * 100.0,
                level,
                label: name.to_string(),
            });
        }
    }
    rows
}
