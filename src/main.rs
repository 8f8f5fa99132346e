use clap::Parser;
use colored::Colorize;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

use lombok_strip::config::Config;
use lombok_strip::discovery::FileFinder;
use lombok_strip::report::{ReportFormat, Reporter};
use lombok_strip::rewrite::Rewriter;
use lombok_strip::strip::{Profile, RuleSet};

const ROOTS_ENV: &str = "LOMBOK_STRIP_ROOTS";

/// lombok-strip - Remove Lombok annotations and imports from Java sources
#[derive(Parser, Debug)]
#[command(name = "lombok-strip")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Root directories to scan [env: LOMBOK_STRIP_ROOTS, comma-separated]
    /// (defaults to the configured roots, "src")
    roots: Vec<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// File extension to process
    #[arg(long, value_name = "EXT")]
    extension: Option<String>,

    /// Patterns to exclude (can be specified multiple times)
    #[arg(short, long)]
    exclude: Vec<String>,

    /// Removal rule profile
    #[arg(long, value_enum)]
    profile: Option<ProfileArg>,

    /// Show what would change without writing any file
    #[arg(long)]
    dry_run: bool,

    /// Overwrite files in place instead of writing a temp file and renaming
    #[arg(long)]
    no_atomic: bool,

    /// Respect .gitignore and skip hidden files while walking
    #[arg(long)]
    gitignore: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal")]
    format: OutputFormat,

    /// Output file (for json format)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Exit with status 1 if any file failed to read or write
    #[arg(long)]
    strict: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode - only print the summary
    #[arg(short, long)]
    quiet: bool,
}

#[derive(clap::ValueEnum, Clone, Debug, Default)]
enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Terminal => ReportFormat::Terminal,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum ProfileArg {
    Full,
    Minimal,
}

impl From<ProfileArg> for Profile {
    fn from(profile: ProfileArg) -> Self {
        match profile {
            ProfileArg::Full => Profile::Full,
            ProfileArg::Minimal => Profile::Minimal,
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    info!("lombok-strip v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(&cli)?;
    run(&config, &cli)
}

fn init_logging(verbose: bool, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = if let Some(config_path) = &cli.config {
        Config::from_file(config_path)?
    } else {
        let cwd = std::env::current_dir().into_diagnostic()?;
        Config::from_default_locations(&cwd)?
    };

    // Override with CLI arguments, then the environment
    if !cli.roots.is_empty() {
        config.roots = cli.roots.clone();
    } else if let Some(roots) = roots_from_env() {
        config.roots = roots;
    }
    if let Some(extension) = &cli.extension {
        config.extension = extension.clone();
    }
    if !cli.exclude.is_empty() {
        config.exclude.extend(cli.exclude.clone());
    }
    if let Some(profile) = cli.profile {
        config.profile = profile.into();
    }
    if cli.dry_run {
        config.rewrite.dry_run = true;
    }
    if cli.no_atomic {
        config.rewrite.atomic_write = false;
    }
    if cli.gitignore {
        config.respect_gitignore = true;
    }

    Ok(config)
}

/// Roots from `LOMBOK_STRIP_ROOTS`, split on commas. Positional roots are
/// taken verbatim, so only this value is split.
fn roots_from_env() -> Option<Vec<PathBuf>> {
    let value = std::env::var_os(ROOTS_ENV)?;
    let roots: Vec<PathBuf> = value
        .to_string_lossy()
        .split(',')
        .map(str::trim)
        .filter(|root| !root.is_empty())
        .map(PathBuf::from)
        .collect();
    (!roots.is_empty()).then_some(roots)
}

fn run(config: &Config, cli: &Cli) -> Result<ExitCode> {
    let rules = RuleSet::new(config.profile)?;
    info!(
        "Using {} profile ({} rules)",
        rules.profile().as_str(),
        rules.rules().len()
    );

    info!("Discovering files...");
    let files = FileFinder::new(config).find_files()?;
    info!("Found {} files", files.len());

    if files.is_empty() && matches!(cli.format, OutputFormat::Terminal) && !cli.quiet {
        println!("{}", "No matching source files found.".yellow());
    }

    if config.rewrite.dry_run {
        info!("Dry run: no files will be written");
    }

    let mut reporter = Reporter::new(cli.format.clone().into(), cli.output.clone(), cli.quiet);
    let rewriter = Rewriter::new(&rules, config.rewrite.clone());
    let summary = rewriter.run(&files, |report| reporter.file(report));

    reporter.finish(&summary)?;

    if cli.strict && summary.has_failures() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
