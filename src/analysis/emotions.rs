//! Emotion distribution view

use serde::Serialize;

use crate::core::types::{Emotion, MessageRecord};

/// Number of records in which an emotion was detected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmotionCount {
    pub emotion: Emotion,
    pub count: usize,
}

/// Count each emotion across all records, most frequent first.
///
/// The sort is stable, so emotions with equal counts keep their canonical
/// column order.
pub fn emotion_distribution(records: &[MessageRecord]) -> Vec<EmotionCount> {
    let mut totals = [0usize; Emotion::COUNT];
    for record in records {
        for (total, detected) in totals.iter_mut().zip(record.emotions()) {
            if *detected {
                *total += 1;
            }
        }
    }

    let mut counts: Vec<EmotionCount> = Emotion::ALL
        .iter()
        .map(|&emotion| EmotionCount {
            emotion,
            count: totals[emotion.index()],
        })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}
