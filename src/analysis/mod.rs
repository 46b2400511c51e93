//! Derived views over a loaded dataset
//!
//! Every view is a pure function of the record slice it is given. The
//! [`AnalysisReport`] bundles one render pass worth of views so the HTML and
//! terminal renderers consume the same numbers.

pub mod emotions;
pub mod keywords;
pub mod polarity;
pub mod sample;

use rand::Rng;
use serde::Serialize;

use crate::core::types::MessageRecord;

pub use emotions::{EmotionCount, emotion_distribution};
pub use keywords::{KeywordCount, keyword_blob, negative_keyword_frequencies, word_frequencies};
pub use polarity::{Conclusion, PolarityTotals, conclude, polarity_totals};
pub use sample::{SampleRow, SampleSize, YesNo, label_to_color, sample_records};

/// All views of one render pass
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub records: usize,
    pub records_with_keyword: usize,
    pub emotions: Vec<EmotionCount>,
    #[serde(skip)]
    pub keyword_text: String,
    pub polarity: PolarityTotals,
    pub negative_keywords: Vec<KeywordCount>,
    pub sample: Vec<SampleRow>,
    pub conclusion: Conclusion,
}

impl AnalysisReport {
    pub fn build<R: Rng + ?Sized>(
        records: &[MessageRecord],
        sample_size: SampleSize,
        top_keywords: usize,
        rng: &mut R,
    ) -> Self {
        let polarity = polarity_totals(records);
        Self {
            records: records.len(),
            records_with_keyword: records.iter().filter(|r| r.keyword().is_some()).count(),
            emotions: emotion_distribution(records),
            keyword_text: keyword_blob(records),
            polarity,
            negative_keywords: negative_keyword_frequencies(records, top_keywords),
            sample: sample_records(records, sample_size, rng),
            conclusion: conclude(&polarity),
        }
    }
}
