//! vsentinel
//!
//! Dashboard over a pre-computed social-media emotion dataset: emotion
//! distribution, keyword cloud, positive/negative polarity, negative-keyword
//! frequencies, a sample inspector and a rule-based conclusion. Rendered as a
//! terminal report, a static HTML file, or an interactive HTTP dashboard.

pub mod analysis;
pub mod config;
pub mod core;
pub mod dataset;
pub mod reporting;
pub mod server;
pub mod ui;

// Re-export commonly used items for convenience
pub use analysis::{AnalysisReport, SampleSize};
pub use config::{CliConfig, Config};
pub use crate::core::{Emotion, MessageRecord, Polarity, Result, SentinelError};
pub use dataset::{Dataset, load_dataset, load_from_reader};
pub use reporting::Section;
