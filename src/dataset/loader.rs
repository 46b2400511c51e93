//! CSV loading for the analyzed-message dataset

use csv::StringRecord;
use log::debug;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::core::constants::dataset;
use crate::core::error::{Result, SentinelError};
use crate::core::types::{Emotion, MessageRecord};

/// The full, read-only record set for one render pass
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<MessageRecord>,
}

impl Dataset {
    pub fn from_records(records: Vec<MessageRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[MessageRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records that carry a predicted keyword
    pub fn keyword_count(&self) -> usize {
        self.records
            .iter()
            .filter(|record| record.keyword().is_some())
            .count()
    }
}

/// Positions of the required columns inside a header row
#[derive(Debug)]
struct ColumnLayout {
    keyword: usize,
    emotions: [usize; Emotion::COUNT],
}

impl ColumnLayout {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let position = |name: &str| {
            headers
                .iter()
                .position(|header| header.trim() == name)
                .ok_or_else(|| SentinelError::MissingColumn(name.to_string()))
        };

        let keyword = position(dataset::KEYWORD_COLUMN)?;
        let mut emotions = [0; Emotion::COUNT];
        for emotion in Emotion::ALL {
            emotions[emotion.index()] = position(emotion.column())?;
        }

        Ok(Self { keyword, emotions })
    }

    fn parse_row(&self, row: &StringRecord, row_number: usize) -> Result<MessageRecord> {
        let keyword = row
            .get(self.keyword)
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string);

        let mut emotions = [false; Emotion::COUNT];
        for emotion in Emotion::ALL {
            let raw = row.get(self.emotions[emotion.index()]).unwrap_or("");
            emotions[emotion.index()] =
                parse_indicator(raw).ok_or_else(|| SentinelError::MalformedValue {
                    row: row_number,
                    column: emotion.column().to_string(),
                    value: raw.to_string(),
                })?;
        }

        Ok(MessageRecord::new(keyword, emotions))
    }
}

/// Coerce an emotion cell to a boolean
pub fn parse_indicator(raw: &str) -> Option<bool> {
    let value = raw.trim();
    if dataset::TRUE_VALUES.contains(&value) {
        Some(true)
    } else if dataset::FALSE_VALUES.contains(&value) {
        Some(false)
    } else {
        None
    }
}

/// Load the dataset from a CSV file on disk
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(SentinelError::DatasetNotFound(path.display().to_string()));
    }

    let file = File::open(path)?;
    let dataset = load_from_reader(file)?;
    debug!(
        "Loaded {} rows ({} with keyword) from {}",
        dataset.len(),
        dataset.keyword_count(),
        path.display()
    );
    Ok(dataset)
}

/// Load the dataset from any CSV source with a header row
pub fn load_from_reader<R: Read>(source: R) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(source);

    let layout = ColumnLayout::from_headers(reader.headers()?)?;

    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = row?;
        records.push(layout.parse_row(&row, index + 1)?);
    }

    Ok(Dataset::from_records(records))
}
