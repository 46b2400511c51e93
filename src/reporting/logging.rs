use crate::analysis::AnalysisReport;
use crate::config::Config;
use log::{debug, error, info, warn};
use std::path::Path;

/// Initialize the logger with appropriate level based on verbosity.
///
/// `RUST_LOG` directives take precedence over the verbosity level, except in
/// quiet mode where logging is always off.
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    if !quiet {
        builder.parse_default_env();
    }
    let _ = builder
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .try_init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log configuration information
pub fn log_config_info(config: &Config) {
    info!(
        "Configuration: dataset={}, sample_size={}, top_keywords={}, format={}",
        config.dataset_path().display(),
        config.sample_size().get(),
        config.top_keywords(),
        config.output_format()
    );
}

/// Log a completed dataset load
pub fn log_dataset_loaded<P: AsRef<Path>>(path: P, rows: usize, duration_ms: u128) {
    info!(
        "Loaded {rows} record(s) from {} ({duration_ms}ms)",
        path.as_ref().display()
    );
}

/// Log the headline numbers of a render pass
pub fn log_views_computed(report: &AnalysisReport) {
    info!(
        "Views computed: {} records, positive={}, negative={}, conclusion={:?}",
        report.records, report.polarity.positive, report.polarity.negative, report.conclusion
    );
    debug!(
        "Negative keywords: {}, sample rows: {}",
        report.negative_keywords.len(),
        report.sample.len()
    );
}

/// Log that a page or file was rendered
pub fn log_render_complete(target: &str, bytes: usize) {
    info!("Rendered {target} ({bytes} bytes)");
}

/// Log an incoming dashboard request
pub fn log_request(section: &str, samples: usize) {
    debug!("Request: section={section}, samples={samples}");
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}

/// Log warning information
pub fn log_warning(message: &str) {
    warn!("{message}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::SampleSize;
    use crate::core::types::{Emotion, MessageRecord};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io;

    #[test]
    fn test_logger_initialization_modes() {
        // Only the first call installs a logger; later calls must not panic
        init_logger(true, false);
        init_logger(false, true);
        init_logger(false, false);
        init_logger(true, true);
    }

    #[test]
    fn test_log_config_info() {
        log_config_info(&Config::default());
    }

    #[test]
    fn test_log_dataset_loaded() {
        log_dataset_loaded("fine_tuning.csv", 0, 0);
        log_dataset_loaded(Path::new("/tmp/data.csv"), 10_000, 1234);
    }

    #[test]
    fn test_log_views_computed() {
        let records = vec![MessageRecord::with_emotions(Some("a"), &[Emotion::Joy])];
        let mut rng = StdRng::seed_from_u64(0);
        let report = AnalysisReport::build(&records, SampleSize::default(), 10, &mut rng);
        log_views_computed(&report);
    }

    #[test]
    fn test_log_render_and_request() {
        log_render_complete("dashboard.html", 2048);
        log_request("analisis", 10);
    }

    #[test]
    fn test_log_error_with_and_without_source() {
        let err = io::Error::new(io::ErrorKind::NotFound, "missing");
        log_error("Could not load dataset", Some(&err));
        log_error("Could not load dataset", None);
        log_warning("Sample clamped");
    }
}
