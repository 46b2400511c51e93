//! Keyword text aggregation: the word-cloud blob and token frequencies

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::core::types::MessageRecord;

/// A whitespace token and the number of times it occurs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordCount {
    pub keyword: String,
    pub count: usize,
}

/// Join the keywords of the given records with single spaces, skipping absent ones
pub fn keyword_blob<'a, I>(records: I) -> String
where
    I: IntoIterator<Item = &'a MessageRecord>,
{
    records
        .into_iter()
        .filter_map(MessageRecord::keyword)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Count whitespace tokens, most frequent first, ties alphabetical
pub fn word_frequencies(text: &str) -> Vec<KeywordCount> {
    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    for token in text.split_whitespace() {
        *counts.entry(token).or_insert(0) += 1;
    }

    let mut frequencies: Vec<KeywordCount> = counts
        .into_iter()
        .map(|(keyword, count)| KeywordCount {
            keyword: keyword.to_string(),
            count,
        })
        .collect();
    frequencies.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.keyword.cmp(&b.keyword)));
    frequencies
}

/// Most frequent keyword tokens among records with at least one negative emotion
pub fn negative_keyword_frequencies(records: &[MessageRecord], top_n: usize) -> Vec<KeywordCount> {
    let blob = keyword_blob(records.iter().filter(|record| record.negative_score() > 0));
    let mut frequencies = word_frequencies(&blob);
    frequencies.truncate(top_n);
    frequencies
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Emotion;

    fn kc(keyword: &str, count: usize) -> KeywordCount {
        KeywordCount {
            keyword: keyword.to_string(),
            count,
        }
    }

    #[test]
    fn test_word_frequencies_example() {
        let frequencies = word_frequencies("x y x z y x");
        assert_eq!(frequencies, vec![kc("x", 3), kc("y", 2), kc("z", 1)]);
    }

    #[test]
    fn test_ties_break_alphabetically() {
        let frequencies = word_frequencies("pear apple pear apple fig");
        assert_eq!(
            frequencies,
            vec![kc("apple", 2), kc("pear", 2), kc("fig", 1)]
        );
    }

    #[test]
    fn test_multi_word_keywords_split_into_tokens() {
        let frequencies = word_frequencies("late delivery  late\tpayment");
        assert_eq!(
            frequencies,
            vec![kc("late", 2), kc("delivery", 1), kc("payment", 1)]
        );
    }

    #[test]
    fn test_keyword_blob_skips_absent() {
        let records = vec![
            MessageRecord::with_emotions(Some("price"), &[]),
            MessageRecord::with_emotions(None, &[]),
            MessageRecord::with_emotions(Some("service"), &[]),
        ];
        assert_eq!(keyword_blob(&records), "price service");
    }

    #[test]
    fn test_negative_keywords_only_from_negative_records() {
        let records = vec![
            MessageRecord::with_emotions(Some("x"), &[Emotion::Anger]),
            MessageRecord::with_emotions(Some("y"), &[Emotion::Fear]),
            MessageRecord::with_emotions(Some("x"), &[Emotion::Sadness]),
            MessageRecord::with_emotions(Some("z"), &[Emotion::Pessimism]),
            MessageRecord::with_emotions(Some("y"), &[Emotion::Disgust]),
            MessageRecord::with_emotions(Some("x"), &[Emotion::Anger, Emotion::Joy]),
            MessageRecord::with_emotions(Some("happy"), &[Emotion::Joy]),
            MessageRecord::with_emotions(Some("wow"), &[Emotion::Surprise]),
            MessageRecord::with_emotions(None, &[Emotion::Anger]),
        ];

        let top = negative_keyword_frequencies(&records, 3);
        assert_eq!(top, vec![kc("x", 3), kc("y", 2), kc("z", 1)]);
    }

    #[test]
    fn test_negative_keywords_truncates_to_top_n() {
        let records: Vec<_> = (0..15)
            .map(|i| MessageRecord::with_emotions(Some(format!("k{i:02}").as_str()), &[Emotion::Fear]))
            .collect();
        let top = negative_keyword_frequencies(&records, 10);
        assert_eq!(top.len(), 10);
        assert_eq!(top[0].keyword, "k00");
    }

    #[test]
    fn test_empty_negative_subset() {
        let records = vec![MessageRecord::with_emotions(Some("great"), &[Emotion::Joy])];
        assert!(negative_keyword_frequencies(&records, 10).is_empty());
    }
}
