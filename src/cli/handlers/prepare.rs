use crate::cli::{
    args::PrepareArgs,
    config::{load_config, output_root},
    global::GlobalArgs,
};
use bua_prep::{PrepConfig, PrepareSummary, prepare_files};

pub fn handle(args: PrepareArgs, global: &GlobalArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(global)?;
    let summary = run(&args, global, &config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }
    Ok(())
}

/// Write both trees and return what was written
pub fn run(
    args: &PrepareArgs,
    global: &GlobalArgs,
    config: &PrepConfig,
) -> Result<PrepareSummary, Box<dyn std::error::Error>> {
    let root = output_root(global, config, args.output.as_ref());
    Ok(prepare_files(&global.dir, &root, config)?)
}

fn print_summary(summary: &PrepareSummary) {
    println!("Lexemes: {} unique blocks", summary.lexeme_blocks);
    for tree in &summary.trees {
        println!("{} -> {}", tree.variant.as_str(), tree.dir.display());
        for path in tree.written.iter().chain(&tree.copied) {
            if let Some(name) = path.file_name() {
                println!("  {}", name.to_string_lossy());
            }
        }
    }
}
