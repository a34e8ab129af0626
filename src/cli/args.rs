use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Arguments for writing the data trees
#[derive(Args, Debug)]
pub struct PrepareArgs {
    /// Output root (overrides `[outputs] root`)
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for simplifying a single text
#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the analyzer smoke test
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Data tree handed to the analyzer (overrides `[analyzer] mode`)
    #[arg(short = 'm', long, value_enum)]
    pub mode: Option<VariantCli>,

    /// Frequency word list to split
    #[arg(long, value_name = "FILE")]
    pub wordlist: Option<PathBuf>,

    /// Where to write analyzed words
    #[arg(long, value_name = "FILE")]
    pub parsed: Option<PathBuf>,

    /// Where to write unanalyzed words
    #[arg(long, value_name = "FILE")]
    pub unparsed: Option<PathBuf>,

    /// Skip the sample words and sentences
    #[arg(long)]
    pub skip_samples: bool,

    /// Print the word list report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for prepare followed by analyze
#[derive(Args, Debug)]
pub struct BuildArgs {
    #[command(flatten)]
    pub prepare: PrepareArgs,

    /// Data tree handed to the analyzer (overrides `[analyzer] mode`)
    #[arg(short = 'm', long, value_enum)]
    pub mode: Option<VariantCli>,

    /// Skip the sample words and sentences
    #[arg(long)]
    pub skip_samples: bool,
}

/// Data tree selection (CLI enum)
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum VariantCli {
    Strict,
    NoDiacritics,
}

impl From<VariantCli> for bua_prep::DataVariant {
    fn from(cli: VariantCli) -> Self {
        match cli {
            VariantCli::Strict => bua_prep::DataVariant::Strict,
            VariantCli::NoDiacritics => bua_prep::DataVariant::NoDiacritics,
        }
    }
}

/// Config subcommand actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,

    /// List the configuration files that are consulted
    Path,
}
