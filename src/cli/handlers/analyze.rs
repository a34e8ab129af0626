use crate::cli::{
    args::AnalyzeArgs,
    config::{create_analyzer, load_config, output_root},
    global::GlobalArgs,
};
use bua_prep::{
    DataVariant, PrepConfig, WordlistReport, analyze_wordlist, resolve_path, smoke_test,
};
use std::path::{Path, PathBuf};

pub fn handle(args: AnalyzeArgs, global: &GlobalArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(global)?;
    let root = output_root(global, &config, None);
    let variant = args.mode.map(Into::into).unwrap_or(config.analyzer.mode);

    let paths = WordlistPaths {
        input: pick(global, args.wordlist, &config.wordlist.input),
        parsed: pick(global, args.parsed, &config.wordlist.parsed),
        unparsed: pick(global, args.unparsed, &config.wordlist.unparsed),
    };

    let report = run(&config, &root, variant, &paths, args.skip_samples)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

/// Word list input and the two output files
pub struct WordlistPaths {
    pub input: PathBuf,
    pub parsed: PathBuf,
    pub unparsed: PathBuf,
}

impl WordlistPaths {
    pub fn from_config(global: &GlobalArgs, config: &PrepConfig) -> Self {
        Self {
            input: pick(global, None, &config.wordlist.input),
            parsed: pick(global, None, &config.wordlist.parsed),
            unparsed: pick(global, None, &config.wordlist.unparsed),
        }
    }
}

/// Run the sample analyses and split the word list
pub fn run(
    config: &PrepConfig,
    root: &Path,
    variant: DataVariant,
    paths: &WordlistPaths,
    skip_samples: bool,
) -> Result<WordlistReport, Box<dyn std::error::Error>> {
    let mut analyzer = create_analyzer(config, root, variant)?;
    tracing::info!(
        mode = variant.as_str(),
        data_dir = %analyzer.data_dir().display(),
        "running analyzer"
    );

    if !skip_samples {
        let (analyzed, total) = smoke_test(
            &mut analyzer,
            &config.analyzer.sample_sentences,
            &config.analyzer.sample_words,
        )?;
        tracing::info!("Sample words analyzed: {}/{}", analyzed, total);
    }

    Ok(analyze_wordlist(
        &mut analyzer,
        &paths.input,
        &paths.parsed,
        &paths.unparsed,
    )?)
}

fn pick(global: &GlobalArgs, cli: Option<PathBuf>, configured: &str) -> PathBuf {
    cli.unwrap_or_else(|| resolve_path(&global.dir, configured))
}

pub fn print_report(report: &WordlistReport) {
    println!(
        "Analyzed: {} of {} words ({:.1}%)",
        report.analyzed,
        report.total,
        report.coverage()
    );
    println!("  analyzed   -> {}", report.parsed_file.display());
    println!("  unanalyzed -> {}", report.unparsed_file.display());
}
