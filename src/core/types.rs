//! Message records and the emotion vocabulary they are tagged with

use serde::Serialize;
use std::fmt;

/// One of the eleven emotions the upstream classifier can detect.
///
/// The declaration order is the canonical column order of the dataset and is
/// used as the tie-break when sorting emotions by count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Anger,
    Anticipation,
    Disgust,
    Fear,
    Joy,
    Love,
    Optimism,
    Pessimism,
    Sadness,
    Surprise,
    Trust,
}

/// Which side of the sentiment scale an emotion counts towards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Positive,
    Negative,
}

impl Emotion {
    pub const COUNT: usize = 11;

    /// All emotions in canonical column order
    pub const ALL: [Emotion; Emotion::COUNT] = [
        Emotion::Anger,
        Emotion::Anticipation,
        Emotion::Disgust,
        Emotion::Fear,
        Emotion::Joy,
        Emotion::Love,
        Emotion::Optimism,
        Emotion::Pessimism,
        Emotion::Sadness,
        Emotion::Surprise,
        Emotion::Trust,
    ];

    /// Column name in the dataset
    pub fn column(self) -> &'static str {
        match self {
            Emotion::Anger => "anger",
            Emotion::Anticipation => "anticipation",
            Emotion::Disgust => "disgust",
            Emotion::Fear => "fear",
            Emotion::Joy => "joy",
            Emotion::Love => "love",
            Emotion::Optimism => "optimism",
            Emotion::Pessimism => "pessimism",
            Emotion::Sadness => "sadness",
            Emotion::Surprise => "surprise",
            Emotion::Trust => "trust",
        }
    }

    /// Position of this emotion in [`Emotion::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// `None` for surprise, which belongs to neither bucket
    pub fn polarity(self) -> Option<Polarity> {
        match self {
            Emotion::Joy
            | Emotion::Love
            | Emotion::Trust
            | Emotion::Optimism
            | Emotion::Anticipation => Some(Polarity::Positive),
            Emotion::Anger
            | Emotion::Fear
            | Emotion::Disgust
            | Emotion::Sadness
            | Emotion::Pessimism => Some(Polarity::Negative),
            Emotion::Surprise => None,
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// A single analyzed message: its predicted keyword and detected emotions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRecord {
    pub predicted_keyword: Option<String>,
    emotions: [bool; Emotion::COUNT],
}

impl MessageRecord {
    pub fn new(predicted_keyword: Option<String>, emotions: [bool; Emotion::COUNT]) -> Self {
        Self {
            predicted_keyword,
            emotions,
        }
    }

    /// Build a record from the list of emotions that were detected
    pub fn with_emotions(predicted_keyword: Option<&str>, detected: &[Emotion]) -> Self {
        let mut emotions = [false; Emotion::COUNT];
        for emotion in detected {
            emotions[emotion.index()] = true;
        }
        Self::new(predicted_keyword.map(str::to_string), emotions)
    }

    pub fn has(&self, emotion: Emotion) -> bool {
        self.emotions[emotion.index()]
    }

    pub fn emotions(&self) -> &[bool; Emotion::COUNT] {
        &self.emotions
    }

    pub fn keyword(&self) -> Option<&str> {
        self.predicted_keyword.as_deref()
    }

    /// Number of detected emotions in the given bucket
    pub fn polarity_score(&self, polarity: Polarity) -> u32 {
        Emotion::ALL
            .iter()
            .filter(|emotion| emotion.polarity() == Some(polarity) && self.has(**emotion))
            .count() as u32
    }

    pub fn positive_score(&self) -> u32 {
        self.polarity_score(Polarity::Positive)
    }

    pub fn negative_score(&self) -> u32 {
        self.polarity_score(Polarity::Negative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emotion_index_matches_canonical_order() {
        for (position, emotion) in Emotion::ALL.iter().enumerate() {
            assert_eq!(emotion.index(), position);
        }
    }

    #[test]
    fn test_polarity_buckets() {
        let positive: Vec<_> = Emotion::ALL
            .iter()
            .filter(|e| e.polarity() == Some(Polarity::Positive))
            .map(|e| e.column())
            .collect();
        let negative: Vec<_> = Emotion::ALL
            .iter()
            .filter(|e| e.polarity() == Some(Polarity::Negative))
            .map(|e| e.column())
            .collect();

        assert_eq!(
            positive,
            vec!["anticipation", "joy", "love", "optimism", "trust"]
        );
        assert_eq!(
            negative,
            vec!["anger", "disgust", "fear", "pessimism", "sadness"]
        );
        assert_eq!(Emotion::Surprise.polarity(), None);
    }

    #[test]
    fn test_scores() {
        let record = MessageRecord::with_emotions(
            Some("price"),
            &[Emotion::Joy, Emotion::Trust, Emotion::Anger, Emotion::Surprise],
        );
        assert_eq!(record.positive_score(), 2);
        assert_eq!(record.negative_score(), 1);
    }

    #[test]
    fn test_all_emotions_score_ten() {
        let record = MessageRecord::new(None, [true; Emotion::COUNT]);
        assert_eq!(record.positive_score(), 5);
        assert_eq!(record.negative_score(), 5);
    }

    #[test]
    fn test_surprise_only_scores_zero() {
        let record = MessageRecord::with_emotions(None, &[Emotion::Surprise]);
        assert_eq!(record.positive_score() + record.negative_score(), 0);
        assert!(record.has(Emotion::Surprise));
    }

    #[test]
    fn test_display_uses_column_name() {
        assert_eq!(Emotion::Pessimism.to_string(), "pessimism");
    }
}
