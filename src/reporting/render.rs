//! A render pass: load, aggregate, render, top to bottom

use rand::thread_rng;
use std::time::Instant;

use crate::analysis::{AnalysisReport, SampleSize};
use crate::config::Config;
use crate::core::error::Result;
use crate::dataset::load_dataset;
use crate::reporting::dashboard::{DashboardData, HtmlDashboard, Section};
use crate::reporting::logging;

/// Load the configured dataset and compute every view over it
pub fn compute_report(config: &Config, sample_size: SampleSize) -> Result<AnalysisReport> {
    let path = config.dataset_path();
    let start = Instant::now();
    let dataset = load_dataset(&path)?;
    logging::log_dataset_loaded(&path, dataset.len(), start.elapsed().as_millis());

    let report = AnalysisReport::build(
        dataset.records(),
        sample_size,
        config.top_keywords(),
        &mut thread_rng(),
    );
    logging::log_views_computed(&report);
    Ok(report)
}

/// Assemble the data for one dashboard page from a freshly loaded dataset.
///
/// The dataset is loaded for every section so a broken input surfaces on
/// any page, but the views are only computed for the Analysis page.
pub fn build_page_data(
    config: &Config,
    section: Section,
    sample_size: SampleSize,
    interactive: bool,
) -> Result<DashboardData> {
    let report = if section == Section::Analysis {
        Some(compute_report(config, sample_size)?)
    } else {
        load_dataset(config.dataset_path())?;
        None
    };

    Ok(DashboardData {
        section,
        report,
        sample_size,
        interactive,
        timestamp: chrono::Utc::now()
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string(),
    })
}

/// Render one dashboard page to HTML
pub fn render_page(
    config: &Config,
    section: Section,
    sample_size: SampleSize,
    interactive: bool,
) -> Result<String> {
    let data = build_page_data(config, section, sample_size, interactive)?;
    let html = HtmlDashboard::generate_html_content(&data)?;
    logging::log_render_complete(section.slug(), html.len());
    Ok(html)
}
