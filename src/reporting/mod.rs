//! Rendering and reporting
//!
//! This module handles HTML dashboard generation, the word-cloud image,
//! chart color scales, and structured logging for the application.

pub mod dashboard;
pub mod logging;
pub mod palette;
pub mod render;
pub mod wordcloud;

use askama_escape::Html;

// Re-export commonly used items
pub use dashboard::{DashboardData, DashboardError, HtmlDashboard, Section};
pub use palette::ColorScale;
pub use render::{build_page_data, compute_report, render_page};
pub use wordcloud::{WordCloud, WordCloudBuilder};

/// Escape text for use in HTML element content and attribute values
pub fn escape_html(input: &str) -> String {
    askama_escape::escape(input, Html).to_string()
}
