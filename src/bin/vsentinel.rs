use clap::{CommandFactory, Parser};
use vsentinel::config::{CliConfig, Config};
use vsentinel::core::constants::output_formats;
use vsentinel::reporting::logging;
use vsentinel::reporting::{HtmlDashboard, Section, build_page_data, compute_report};
use vsentinel::server;
use vsentinel::ui::{Cli, Commands, ProgressReporter, cli_to_config, display_report, print_completions};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Handle completion commands first
    if let Some(exit_code) = handle_completion_commands(&cli) {
        std::process::exit(exit_code);
    }

    match run_vsentinel_logic(&cli).await {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Handle completion commands and return exit code if a completion command was processed
pub fn handle_completion_commands(cli: &Cli) -> Option<i32> {
    match cli.command {
        Commands::CompletionGenerate { shell } => {
            let mut app = Cli::command();
            print_completions(shell, &mut app);
            Some(0)
        }
        _ => None,
    }
}

/// Main command dispatch extracted from main() for testing
pub async fn run_vsentinel_logic(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let cli_config = cli_to_config(cli);
    let config = load_and_merge_config(&cli_config)?;

    let output_settings = setup_output_settings(&cli_config, &config);
    logging::init_logger(output_settings.verbose, output_settings.quiet);
    logging::log_config_info(&config);

    match &cli.command {
        Commands::Report { .. } => run_report(&config, &output_settings)?,
        Commands::Dashboard { section, .. } => run_dashboard(&config, section, &output_settings)?,
        Commands::Serve { .. } => run_serve(config, &output_settings).await?,
        Commands::CompletionGenerate { .. } => {}
    }

    Ok(0)
}

/// Load configuration from file or standard locations and merge with CLI config
pub fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file).inspect_err(|e| {
            logging::log_error(
                &format!("Could not load config file '{config_file}'"),
                Some(e),
            );
        })?
    } else {
        Config::load_from_standard_locations().inspect_err(|e| {
            logging::log_error("Could not load discovered config file", Some(e));
        })?
    };

    // Merge CLI arguments with configuration (CLI takes precedence)
    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}

/// Settings for output formatting and display
pub struct OutputSettings {
    pub quiet: bool,
    pub verbose: bool,
    pub output_format: String,
    pub show_progress: bool,
}

/// Setup output settings based on CLI and config
pub fn setup_output_settings(cli_config: &CliConfig, config: &Config) -> OutputSettings {
    let quiet = cli_config.quiet;
    let verbose = config.verbose.unwrap_or(false);
    let output_format = config.output_format().to_string();
    let show_progress = !quiet && output_format == output_formats::TEXT;

    OutputSettings {
        quiet,
        verbose,
        output_format,
        show_progress,
    }
}

/// Print the analysis report to the terminal
pub fn run_report(
    config: &Config,
    output_settings: &OutputSettings,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut progress = ProgressReporter::new(output_settings.show_progress);
    progress.start(&format!("Loading {}", config.dataset_path().display()));

    let report = compute_report(config, config.sample_size());
    progress.finish_and_clear();

    display_report(&report?, &output_settings.output_format)?;
    Ok(())
}

/// Write one dashboard section to a static HTML file
pub fn run_dashboard(
    config: &Config,
    section: &str,
    output_settings: &OutputSettings,
) -> Result<(), Box<dyn std::error::Error>> {
    let section = Section::from_slug(section).ok_or_else(|| {
        format!(
            "Unknown section '{section}'. Expected one of: {}.",
            Section::SLUGS.join(", ")
        )
    })?;

    let data = build_page_data(config, section, config.sample_size(), false)?;
    let path = config.dashboard_path();
    let bytes = HtmlDashboard::generate_dashboard(&data, &path)?;
    logging::log_render_complete(&path.display().to_string(), bytes);

    if !output_settings.quiet {
        println!("📊 HTML dashboard generated: {}", path.display());
    }
    Ok(())
}

/// Serve the interactive dashboard until interrupted
pub async fn run_serve(
    config: Config,
    output_settings: &OutputSettings,
) -> Result<(), Box<dyn std::error::Error>> {
    if !output_settings.quiet {
        println!(
            "🌐 Serving dashboard on http://{} (Ctrl-C to stop)",
            config.bind_address()?
        );
    }
    server::serve(config).await?;
    Ok(())
}
