// Command-line interface definitions and parsing for vsentinel

use crate::config::CliConfig;
use crate::core::constants::{keywords, output_formats, sampling};
use crate::reporting::Section;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "vsentinel", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    // Output & Verbosity
    /// Suppress progress output and logging
    #[arg(short = 'q', long, global = true, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, global = true, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", global = true, help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, global = true, help_heading = "Configuration")]
    pub no_config: bool,
}

/// Options shared by every command that renders the analysis views
#[derive(clap::Args, Debug, Clone, Default)]
pub struct AnalysisArgs {
    /// Analyzed-message CSV (default: fine_tuning.csv)
    pub dataset: Option<String>,

    /// Rows shown by the sample inspector (5-50, default: 10)
    #[arg(
        long,
        value_name = "COUNT",
        value_parser = clap::value_parser!(u64).range(sampling::MIN_SAMPLE_SIZE as u64..=sampling::MAX_SAMPLE_SIZE as u64),
        help_heading = "Analysis"
    )]
    pub samples: Option<u64>,

    /// Bars shown in the negative keyword chart (default: 10)
    #[arg(
        long,
        value_name = "COUNT",
        value_parser = clap::value_parser!(u64).range(1..=keywords::MAX_TOP_KEYWORDS as u64),
        help_heading = "Analysis"
    )]
    pub top: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the analysis to the terminal
    Report {
        #[command(flatten)]
        analysis: AnalysisArgs,

        /// Output format
        #[arg(long, value_name = "FORMAT", value_parser = output_formats::ALL, help_heading = "Output & Verbosity")]
        format: Option<String>,
    },
    /// Write the dashboard page to a static HTML file
    Dashboard {
        #[command(flatten)]
        analysis: AnalysisArgs,

        /// Section to render
        #[arg(long, value_name = "SECTION", value_parser = Section::SLUGS, default_value = Section::SLUGS[1])]
        section: String,

        /// Output path (default: dashboard.html)
        #[arg(short = 'o', long, value_name = "PATH")]
        output: Option<String>,
    },
    /// Serve the interactive dashboard over HTTP
    Serve {
        #[command(flatten)]
        analysis: AnalysisArgs,

        /// Listen address (default: 127.0.0.1:8501)
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
    },
    /// Generate shell completions
    #[command(name = "completion-generate", arg_required_else_help = true)]
    CompletionGenerate {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl Commands {
    fn analysis_args(&self) -> Option<&AnalysisArgs> {
        match self {
            Commands::Report { analysis, .. }
            | Commands::Dashboard { analysis, .. }
            | Commands::Serve { analysis, .. } => Some(analysis),
            Commands::CompletionGenerate { .. } => None,
        }
    }
}

/// Convert derive-based CLI arguments directly to CliConfig structure
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    let mut cli_config = CliConfig {
        config_file: cli.config.clone(),
        no_config: cli.no_config,
        quiet: cli.quiet,
        verbose: cli.verbose,
        ..Default::default()
    };

    if let Some(analysis) = cli.command.analysis_args() {
        cli_config.dataset_path = analysis.dataset.clone();
        cli_config.sample_size = analysis.samples.map(|n| n as usize);
        cli_config.top_keywords = analysis.top.map(|n| n as usize);
    }

    match &cli.command {
        Commands::Report { format, .. } => {
            cli_config.output_format = format.clone();
        }
        Commands::Dashboard { output, .. } => {
            cli_config.dashboard_path = output.clone();
        }
        Commands::Serve { bind, .. } => {
            cli_config.bind_address = bind.clone();
        }
        Commands::CompletionGenerate { .. } => {}
    }

    cli_config
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("vsentinel").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_report_defaults() {
        let cli = parse(&["report"]);
        let config = cli_to_config(&cli);

        assert_eq!(config.dataset_path, None);
        assert_eq!(config.sample_size, None);
        assert_eq!(config.top_keywords, None);
        assert_eq!(config.output_format, None);
        assert!(!config.quiet);
        assert!(!config.verbose);
        assert!(!config.no_config);
    }

    #[test]
    fn test_report_all_options() {
        let cli = parse(&[
            "report",
            "data.csv",
            "--format",
            "json",
            "--samples",
            "20",
            "--top",
            "5",
            "-v",
            "--no-config",
        ]);
        let config = cli_to_config(&cli);

        assert_eq!(config.dataset_path.as_deref(), Some("data.csv"));
        assert_eq!(config.output_format.as_deref(), Some("json"));
        assert_eq!(config.sample_size, Some(20));
        assert_eq!(config.top_keywords, Some(5));
        assert!(config.verbose);
        assert!(config.no_config);
    }

    #[test]
    fn test_global_options_before_subcommand() {
        let cli = parse(&["-q", "--config", "custom.toml", "serve", "--bind", "0.0.0.0:9000"]);
        let config = cli_to_config(&cli);

        assert!(config.quiet);
        assert_eq!(config.config_file.as_deref(), Some("custom.toml"));
        assert_eq!(config.bind_address.as_deref(), Some("0.0.0.0:9000"));
    }

    #[test]
    fn test_dashboard_options() {
        let cli = parse(&["dashboard", "--section", "license", "-o", "out.html"]);
        let config = cli_to_config(&cli);
        assert_eq!(config.dashboard_path.as_deref(), Some("out.html"));

        match cli.command {
            Commands::Dashboard { section, .. } => assert_eq!(section, "license"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_dashboard_section_defaults_to_analysis() {
        match parse(&["dashboard"]).command {
            Commands::Dashboard { section, .. } => assert_eq!(section, "analisis"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_samples_range_is_enforced() {
        assert!(Cli::try_parse_from(["vsentinel", "report", "--samples", "4"]).is_err());
        assert!(Cli::try_parse_from(["vsentinel", "report", "--samples", "51"]).is_err());
        assert!(Cli::try_parse_from(["vsentinel", "report", "--samples", "5"]).is_ok());
        assert!(Cli::try_parse_from(["vsentinel", "report", "--samples", "50"]).is_ok());
    }

    #[test]
    fn test_top_range_is_enforced() {
        assert!(Cli::try_parse_from(["vsentinel", "report", "--top", "0"]).is_err());
        assert!(Cli::try_parse_from(["vsentinel", "report", "--top", "101"]).is_err());
    }

    #[test]
    fn test_unknown_format_and_section_rejected() {
        assert!(Cli::try_parse_from(["vsentinel", "report", "--format", "yaml"]).is_err());
        assert!(Cli::try_parse_from(["vsentinel", "dashboard", "--section", "home"]).is_err());
    }

    #[test]
    fn test_completion_generate_has_no_analysis_args() {
        let cli = parse(&["completion-generate", "bash"]);
        let config = cli_to_config(&cli);
        assert_eq!(config.dataset_path, None);
        assert!(cli.command.analysis_args().is_none());
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
