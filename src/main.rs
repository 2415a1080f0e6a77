use clap::Parser;
use colored::Colorize;
use miette::Result;
use std::path::PathBuf;
use tracing::info;

mod config;
mod diagnostics;
mod discovery;
mod engine;
mod parser;
mod report;
mod rules;

use config::Config;
use discovery::{FileFinder, FileStats};
use engine::Engine;
use report::Reporter;

/// gostrict - Strict code-quality rules for Go packages
#[derive(Parser, Debug)]
#[command(name = "gostrict")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the project directory to analyze
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Target directories to analyze (can be specified multiple times)
    #[arg(short, long)]
    target: Vec<PathBuf>,

    /// Patterns to exclude (can be specified multiple times)
    #[arg(short, long)]
    exclude: Vec<String>,

    /// Only run the named rules (comma-separated, e.g. "dead-code,naming")
    #[arg(long, value_delimiter = ',')]
    rules: Vec<String>,

    /// Disable the named rules (comma-separated)
    #[arg(long, value_delimiter = ',')]
    disable: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal")]
    format: OutputFormat,

    /// Output file (for the json format)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable parallel parsing for faster analysis
    #[arg(long)]
    parallel: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode - only output results
    #[arg(short, long)]
    quiet: bool,
}

#[derive(clap::ValueEnum, Clone, Debug, Default)]
enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

impl From<OutputFormat> for report::ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Terminal => report::ReportFormat::Terminal,
            OutputFormat::Json => report::ReportFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    info!("gostrict v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(&cli)?;

    let issue_count = run_analysis(&config, &cli)?;

    // A lint failure fails the build
    if issue_count > 0 {
        std::process::exit(1);
    }

    Ok(())
}

fn init_logging(verbose: bool, quiet: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = if let Some(config_path) = &cli.config {
        Config::from_file(config_path)?
    } else {
        Config::from_default_locations(&cli.path)?
    };

    // Override with CLI arguments
    if !cli.target.is_empty() {
        config.targets = cli.target.clone();
    }
    if !cli.exclude.is_empty() {
        config.exclude.extend(cli.exclude.clone());
    }

    Ok(config)
}

fn run_analysis(config: &Config, cli: &Cli) -> Result<usize> {
    use indicatif::{ProgressBar, ProgressStyle};
    use std::time::Instant;

    let start_time = Instant::now();

    // Step 1: Discover files
    info!("Discovering files...");
    let finder = FileFinder::new(config);
    let files = finder.find_files(&cli.path)?;

    let stats = FileStats::from_files(&files);
    info!(
        "Found {} Go files ({} production, {} test)",
        stats.total(),
        stats.production_files,
        stats.test_files
    );

    if files.is_empty() {
        if !cli.quiet {
            println!("{}", "No Go files found.".yellow());
        }
        return Ok(0);
    }

    // Step 2: Parse files
    let engine = Engine::new(config);
    let parsed = if cli.parallel {
        if !cli.quiet {
            println!(
                "{}",
                format!("Parallel mode: parsing {} files...", files.len()).cyan()
            );
        }
        engine.parse_files_parallel(&files)?
    } else {
        let pb = if cli.quiet {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new(files.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template(
                        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
                    )
                    .unwrap()
                    .progress_chars("#>-"),
            );
            pb
        };

        info!("Parsing files...");
        let mut parsed = Vec::with_capacity(files.len());
        let mut go_parser = parser::GoParser::new();
        for file in &files {
            let contents = file.read_contents()?;
            parsed.push(go_parser.parse(&file.path, &contents)?);
            pb.inc(1);
        }
        pb.finish_and_clear();
        parsed
    };

    // Step 3: Group into packages
    let packages = engine.group_packages(parsed);
    info!("Analyzing {} packages...", packages.len());

    // Step 4: Run rules
    let selected = rules::select_rules(&cli.rules, &cli.disable);
    let diagnostics = engine.run(&packages, &selected);

    info!("Found {} issues", diagnostics.len());

    // Step 5: Report results
    let reporter = Reporter::new(cli.format.clone().into(), cli.output.clone());
    reporter.report(diagnostics.items())?;

    let elapsed = start_time.elapsed();
    info!("Analysis completed in {:.2}s", elapsed.as_secs_f64());

    Ok(diagnostics.len())
}
