//! The metric catalog: per-metric accessors, chart titles, bin counts,
//! and documented level-ordering direction.

use crate::records::VideoRecord;

/// A chartable metric group of the report.
///
/// The six scalar metrics are binned into per-level histograms; the two
/// composition groups chart median category shares per level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Wpm,
    SyllablesPerSecond,
    SentenceLength,
    Repetition,
    Rareness,
    VocabSize98,
    Grammar,
    WordOrigin,
}

/// Direction in which a metric's reference markers are documented to
/// order the four levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelTrend {
    Increasing,
    Decreasing,
}

impl Metric {
    pub const ALL: [Metric; 8] = [
        Metric::Wpm,
        Metric::SyllablesPerSecond,
        Metric::SentenceLength,
        Metric::Repetition,
        Metric::Rareness,
        Metric::VocabSize98,
        Metric::Grammar,
        Metric::WordOrigin,
    ];

    /// Stable key used for CLI arguments and output file names.
    pub fn key(self) -> &'static str {
        match self {
            Metric::Wpm => "wpm",
            Metric::SyllablesPerSecond => "sps",
            Metric::SentenceLength => "msl",
            Metric::Repetition => "repetition",
            Metric::Rareness => "rareness",
            Metric::VocabSize98 => "vocab98",
            Metric::Grammar => "grammar",
            Metric::WordOrigin => "word_origin",
        }
    }

    pub fn from_key(key: &str) -> Option<Metric> {
        Metric::ALL.into_iter().find(|m| m.key() == key)
    }

    pub fn title(self) -> &'static str {
        match self {
            Metric::Wpm => "Rate of speech (words per minute)",
            Metric::SyllablesPerSecond => "Rate of speech (syllables per second)",
            Metric::SentenceLength => "Mean sentence length",
            Metric::Repetition => "Word repetition",
            Metric::Rareness => "Vocabulary rareness",
            Metric::VocabSize98 => "Vocabulary size for 98% coverage",
            Metric::Grammar => "Grammatical composition",
            Metric::WordOrigin => "Word origin",
        }
    }

    pub fn x_title(self) -> &'static str {
        match self {
            Metric::Wpm => "WPM",
            Metric::SyllablesPerSecond => "Syllables per second",
            Metric::SentenceLength => "Words per sentence",
            Metric::Repetition => "Relative repetition rate",
            Metric::Rareness => "25th-percentile log frequency rank",
            Metric::VocabSize98 => "Words known",
            Metric::Grammar => "Grammatical category",
            Metric::WordOrigin => "Origin class",
        }
    }

    pub fn y_title(self) -> &'static str {
        match self {
            Metric::Grammar | Metric::WordOrigin => "Median share (%)",
            _ => "Videos",
        }
    }

    /// Per-record value for the scalar metrics. Composition groups have
    /// no single value per record.
    pub fn value(self, record: &VideoRecord) -> Option<f64> {
        match self {
            Metric::Wpm => Some(record.wpm),
            Metric::SyllablesPerSecond => Some(record.sps),
            Metric::SentenceLength => Some(record.msl),
            Metric::Repetition => Some(record.repetition),
            Metric::Rareness => Some(record.rareness),
            Metric::VocabSize98 => Some(record.vocab98),
            Metric::Grammar | Metric::WordOrigin => None,
        }
    }

    /// Fixed histogram bin count, chosen per metric for readable charts.
    pub fn bin_count(self) -> Option<usize> {
        match self {
            Metric::Wpm => Some(10),
            Metric::SyllablesPerSecond => Some(15),
            Metric::SentenceLength => Some(20),
            Metric::Repetition => Some(25),
            Metric::Rareness => Some(30),
            Metric::VocabSize98 => Some(12),
            Metric::Grammar | Metric::WordOrigin => None,
        }
    }

    pub fn trend(self) -> Option<LevelTrend> {
        match self {
            Metric::Wpm
            | Metric::SyllablesPerSecond
            | Metric::SentenceLength
            | Metric::Rareness
            | Metric::VocabSize98 => Some(LevelTrend::Increasing),
            Metric::Repetition => Some(LevelTrend::Decreasing),
            Metric::Grammar | Metric::WordOrigin => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_round_trip() {
        for metric in Metric::ALL {
            assert_eq!(Metric::from_key(metric.key()), Some(metric));
        }
        assert_eq!(Metric::from_key("nope"), None);
    }

    #[test]
    fn test_bin_counts_within_documented_range() {
        for metric in Metric::ALL {
            if let Some(bins) = metric.bin_count() {
                assert!((10..=30).contains(&bins), "{:?} has {} bins", metric, bins);
            }
        }
    }

    #[test]
    fn test_composition_metrics_have_no_scalar_value() {
        assert!(Metric::Grammar.bin_count().is_none());
        assert!(Metric::WordOrigin.bin_count().is_none());
        assert!(Metric::Grammar.trend().is_none());
    }
}
