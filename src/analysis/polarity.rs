//! Positive/negative totals and the rule-based conclusion drawn from them

use serde::Serialize;

use crate::core::constants::text;
use crate::core::types::MessageRecord;

/// Per-record polarity scores summed across the dataset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PolarityTotals {
    pub positive: u64,
    pub negative: u64,
}

impl PolarityTotals {
    pub fn total(&self) -> u64 {
        self.positive + self.negative
    }

    /// Share of the positive bucket in percent, 0 when both buckets are empty
    pub fn positive_share(&self) -> f64 {
        if self.total() == 0 {
            0.0
        } else {
            self.positive as f64 / self.total() as f64 * 100.0
        }
    }

    pub fn negative_share(&self) -> f64 {
        if self.total() == 0 {
            0.0
        } else {
            self.negative as f64 / self.total() as f64 * 100.0
        }
    }
}

pub fn polarity_totals(records: &[MessageRecord]) -> PolarityTotals {
    records
        .iter()
        .fold(PolarityTotals::default(), |totals, record| PolarityTotals {
            positive: totals.positive + u64::from(record.positive_score()),
            negative: totals.negative + u64::from(record.negative_score()),
        })
}

/// Outcome of comparing the two polarity totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Conclusion {
    Positive,
    Negative,
}

impl Conclusion {
    pub fn message(self) -> &'static str {
        match self {
            Conclusion::Positive => text::POSITIVE_CONCLUSION,
            Conclusion::Negative => text::NEGATIVE_CONCLUSION,
        }
    }

    pub fn is_positive(self) -> bool {
        self == Conclusion::Positive
    }
}

/// Positive only when it strictly outweighs negative; ties are cautionary
pub fn conclude(totals: &PolarityTotals) -> Conclusion {
    if totals.positive > totals.negative {
        Conclusion::Positive
    } else {
        Conclusion::Negative
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Emotion;

    fn totals(positive: u64, negative: u64) -> PolarityTotals {
        PolarityTotals { positive, negative }
    }

    #[test]
    fn test_conclusion_rule() {
        assert_eq!(conclude(&totals(60, 40)), Conclusion::Positive);
        assert_eq!(conclude(&totals(40, 60)), Conclusion::Negative);
        assert_eq!(conclude(&totals(50, 50)), Conclusion::Negative);
        assert_eq!(conclude(&totals(0, 0)), Conclusion::Negative);
    }

    #[test]
    fn test_conclusion_messages() {
        assert!(Conclusion::Positive.message().contains("positivos"));
        assert!(Conclusion::Negative.message().contains("negativos"));
        assert!(Conclusion::Positive.is_positive());
        assert!(!Conclusion::Negative.is_positive());
    }

    #[test]
    fn test_polarity_totals_sum_scores() {
        let records = vec![
            MessageRecord::with_emotions(Some("a"), &[Emotion::Joy, Emotion::Love]),
            MessageRecord::with_emotions(Some("b"), &[Emotion::Anger, Emotion::Optimism]),
            MessageRecord::with_emotions(None, &[Emotion::Surprise]),
        ];

        assert_eq!(polarity_totals(&records), totals(3, 1));
    }

    #[test]
    fn test_surprise_never_contributes() {
        let records = vec![MessageRecord::with_emotions(Some("wow"), &[Emotion::Surprise]); 4];
        assert_eq!(polarity_totals(&records).total(), 0);
    }

    #[test]
    fn test_shares() {
        let t = totals(3, 1);
        assert!((t.positive_share() - 75.0).abs() < f64::EPSILON);
        assert!((t.negative_share() - 25.0).abs() < f64::EPSILON);
        assert_eq!(totals(0, 0).positive_share(), 0.0);
    }
}
