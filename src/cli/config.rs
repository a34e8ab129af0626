use bua_prep::{DataVariant, ExternalAnalyzer, PrepConfig, resolve_path};
use std::path::{Path, PathBuf};

use crate::cli::global::GlobalArgs;

/// Load configuration layers for the input directory chosen on the command line
pub fn load_config(global: &GlobalArgs) -> Result<PrepConfig, Box<dyn std::error::Error>> {
    if !global.dir.is_dir() {
        return Err(format!("Input directory '{}' does not exist", global.dir.display()).into());
    }
    Ok(PrepConfig::load_with_overrides(
        &global.dir,
        global.config.as_deref(),
    )?)
}

/// Output root from the CLI flag or the configuration
pub fn output_root(global: &GlobalArgs, config: &PrepConfig, cli_output: Option<&PathBuf>) -> PathBuf {
    match cli_output {
        Some(path) => path.clone(),
        None => resolve_path(&global.dir, &config.outputs.root),
    }
}

/// Build the external analyzer for a data tree
pub fn create_analyzer(
    config: &PrepConfig,
    output_root: &Path,
    variant: DataVariant,
) -> Result<ExternalAnalyzer, Box<dyn std::error::Error>> {
    let data_dir = bua_prep::layout::tree_dir(output_root, config, variant);
    if !data_dir.is_dir() {
        tracing::warn!(
            "Data tree {} does not exist yet; run `bua-prep prepare` first",
            data_dir.display()
        );
    }
    Ok(ExternalAnalyzer::from_config(&config.analyzer, &data_dir)?)
}
