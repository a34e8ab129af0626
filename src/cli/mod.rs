mod args;
mod config;
mod global;
mod handlers;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use args::{AnalyzeArgs, BuildArgs, ConfigAction, NormalizeArgs, PrepareArgs};
use global::GlobalArgs;

#[derive(Parser)]
#[command(name = "bua-prep")]
#[command(version)]
#[command(about = "Prepare Buryat lexical data for the morphological analyzer", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge input files and write the strict and no-diacritics data trees
    Prepare(PrepareArgs),

    /// Add diacriticless variants to the stem and flex lines of one text
    Normalize(NormalizeArgs),

    /// Smoke-test the external analyzer and split the word list
    Analyze(AnalyzeArgs),

    /// Run prepare, then analyze
    Build(BuildArgs),

    /// Inspect the effective configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(&cli.global);

    match cli.command {
        Commands::Prepare(args) => handlers::prepare::handle(args, &cli.global),
        Commands::Normalize(args) => handlers::normalize::handle(args, &cli.global),
        Commands::Analyze(args) => handlers::analyze::handle(args, &cli.global),
        Commands::Build(args) => handlers::build::handle(args, &cli.global),
        Commands::Config { action } => handlers::config::handle(action, &cli.global),
    }
}

/// `RUST_LOG` wins; otherwise the level follows -q/-v. Logs go to stderr.
fn init_tracing(global: &GlobalArgs) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    let env_filter = match rust_log.is_empty() {
        true => EnvFilter::builder().parse_lossy(global.log_level()),
        false => EnvFilter::builder().parse_lossy(rust_log),
    };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
