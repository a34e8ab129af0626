use crate::cli::{
    args::BuildArgs,
    config::{load_config, output_root},
    global::GlobalArgs,
    handlers::{analyze, prepare},
};

pub fn handle(args: BuildArgs, global: &GlobalArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(global)?;

    let summary = prepare::run(&args.prepare, global, &config)?;
    tracing::info!(
        lexemes = summary.lexeme_blocks,
        "data trees written"
    );

    if config.analyzer.command.is_empty() {
        tracing::warn!("No analyzer configured; skipping the analyzer smoke test");
        if args.prepare.json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        return Ok(());
    }

    let root = output_root(global, &config, args.prepare.output.as_ref());
    let variant = args.mode.map(Into::into).unwrap_or(config.analyzer.mode);
    let paths = analyze::WordlistPaths::from_config(global, &config);
    let report = analyze::run(&config, &root, variant, &paths, args.skip_samples)?;

    if args.prepare.json {
        let output = serde_json::json!({
            "prepare": summary,
            "wordlist": report,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        analyze::print_report(&report);
    }
    Ok(())
}
