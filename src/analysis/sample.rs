//! Sample inspector: a random slice of keyword-bearing records with Yes/No labels

use log::warn;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;
use std::fmt;

use crate::core::constants::{sampling, text};
use crate::core::error::{Result, SentinelError};
use crate::core::types::{Emotion, MessageRecord};

/// Number of rows requested from the sample inspector, always within the slider bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SampleSize(usize);

impl SampleSize {
    /// Reject values outside the slider range
    pub fn new(size: usize) -> Result<Self> {
        if (sampling::MIN_SAMPLE_SIZE..=sampling::MAX_SAMPLE_SIZE).contains(&size) {
            Ok(Self(size))
        } else {
            Err(SentinelError::InvalidArgument(format!(
                "Sample size {size} is out of range. Expected a value between {}-{}.",
                sampling::MIN_SAMPLE_SIZE,
                sampling::MAX_SAMPLE_SIZE
            )))
        }
    }

    /// Pull any value into the slider range
    pub fn clamped(size: usize) -> Self {
        Self(size.clamp(sampling::MIN_SAMPLE_SIZE, sampling::MAX_SAMPLE_SIZE))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for SampleSize {
    fn default() -> Self {
        Self(sampling::DEFAULT_SAMPLE_SIZE)
    }
}

/// Display label replacing an emotion indicator in the sample table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum YesNo {
    Yes,
    No,
}

impl From<bool> for YesNo {
    fn from(value: bool) -> Self {
        if value { YesNo::Yes } else { YesNo::No }
    }
}

impl YesNo {
    pub fn as_str(self) -> &'static str {
        match self {
            YesNo::Yes => text::YES,
            YesNo::No => text::NO,
        }
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Background color for a sample table cell
pub fn label_to_color(label: YesNo) -> &'static str {
    match label {
        YesNo::Yes => "lightgreen",
        YesNo::No => "lightcoral",
    }
}

/// One row of the sample table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SampleRow {
    pub predicted_keyword: String,
    pub emotions: Vec<(Emotion, YesNo)>,
}

impl SampleRow {
    fn from_record(keyword: &str, record: &MessageRecord) -> Self {
        Self {
            predicted_keyword: keyword.to_string(),
            emotions: Emotion::ALL
                .iter()
                .map(|&emotion| (emotion, YesNo::from(record.has(emotion))))
                .collect(),
        }
    }
}

/// Draw a uniform sample, without replacement, of records that have a keyword.
///
/// When fewer eligible records exist than requested, every eligible record is
/// returned.
pub fn sample_records<R: Rng + ?Sized>(
    records: &[MessageRecord],
    size: SampleSize,
    rng: &mut R,
) -> Vec<SampleRow> {
    let eligible: Vec<(&str, &MessageRecord)> = records
        .iter()
        .filter_map(|record| record.keyword().map(|keyword| (keyword, record)))
        .collect();

    if eligible.len() < size.get() {
        warn!(
            "Requested {} samples but only {} records have a keyword; showing all of them",
            size.get(),
            eligible.len()
        );
    }

    eligible
        .choose_multiple(rng, size.get())
        .map(|(keyword, record)| SampleRow::from_record(keyword, record))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn pool(with_keyword: usize, without_keyword: usize) -> Vec<MessageRecord> {
        let mut records: Vec<_> = (0..with_keyword)
            .map(|i| {
                let keyword = format!("kw{i}");
                let detected: &[Emotion] = if i % 2 == 0 {
                    &[Emotion::Joy, Emotion::Trust]
                } else {
                    &[Emotion::Anger]
                };
                MessageRecord::with_emotions(Some(keyword.as_str()), detected)
            })
            .collect();
        records.extend((0..without_keyword).map(|_| MessageRecord::with_emotions(None, &[])));
        records
    }

    #[test]
    fn test_sample_size_bounds() {
        assert!(SampleSize::new(4).is_err());
        assert!(SampleSize::new(51).is_err());
        assert_eq!(SampleSize::new(5).unwrap().get(), 5);
        assert_eq!(SampleSize::new(50).unwrap().get(), 50);
        assert_eq!(SampleSize::default().get(), 10);
    }

    #[test]
    fn test_sample_size_clamped() {
        assert_eq!(SampleSize::clamped(0).get(), 5);
        assert_eq!(SampleSize::clamped(17).get(), 17);
        assert_eq!(SampleSize::clamped(1000).get(), 50);
    }

    #[test]
    fn test_sample_of_five() {
        let records = pool(20, 10);
        let mut rng = StdRng::seed_from_u64(7);

        let rows = sample_records(&records, SampleSize::new(5).unwrap(), &mut rng);

        assert_eq!(rows.len(), 5);
        for row in &rows {
            assert!(row.predicted_keyword.starts_with("kw"));
            assert_eq!(row.emotions.len(), Emotion::COUNT);
            assert!(
                row.emotions
                    .iter()
                    .all(|(_, label)| matches!(label.as_str(), "Yes" | "No"))
            );
        }
    }

    #[test]
    fn test_sample_has_no_duplicates() {
        let records = pool(12, 0);
        let mut rng = StdRng::seed_from_u64(42);

        let rows = sample_records(&records, SampleSize::new(10).unwrap(), &mut rng);
        let mut keywords: Vec<_> = rows.iter().map(|r| r.predicted_keyword.clone()).collect();
        keywords.sort();
        keywords.dedup();
        assert_eq!(keywords.len(), 10);
    }

    #[test]
    fn test_sample_clamps_to_eligible_rows() {
        let records = pool(3, 40);
        let mut rng = StdRng::seed_from_u64(1);

        let rows = sample_records(&records, SampleSize::new(10).unwrap(), &mut rng);
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn test_labels_follow_record() {
        let records = vec![MessageRecord::with_emotions(
            Some("delay"),
            &[Emotion::Fear, Emotion::Sadness],
        )];
        let mut rng = StdRng::seed_from_u64(3);

        let rows = sample_records(&records, SampleSize::default(), &mut rng);
        let row = &rows[0];
        for (emotion, label) in &row.emotions {
            let expected = matches!(emotion, Emotion::Fear | Emotion::Sadness);
            assert_eq!(*label, YesNo::from(expected));
        }
    }

    #[test]
    fn test_label_to_color_is_total() {
        assert_eq!(label_to_color(YesNo::Yes), "lightgreen");
        assert_eq!(label_to_color(YesNo::No), "lightcoral");
        assert_eq!(YesNo::Yes.to_string(), "Yes");
        assert_eq!(YesNo::No.to_string(), "No");
    }
}
