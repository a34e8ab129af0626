//! Writes the strict and no-diacritics data trees.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::aggregate::{Collection, collect_lemmata, collect_paradigms};
use crate::core::config::{DataVariant, PrepConfig, resolve_path};
use crate::errors::{PrepError, Result};
use crate::normalizer::simplify;

pub const LEXEMES_FILE: &str = "lexemes.txt";
pub const LEX_RULES_FILE: &str = "lex_rules.txt";
pub const PARADIGMS_FILE: &str = "paradigms.txt";
pub const DERIVATIONS_FILE: &str = "derivations.txt";

/// Grammar texts destined for one data tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantData {
    pub lexemes: String,
    pub lex_rules: String,
    pub paradigms: String,
    pub derivations: String,
}

impl VariantData {
    /// Derives the texts of a variant from the aggregated input.
    ///
    /// Only lexemes and paradigms differ between variants.
    pub fn build(collection: &Collection, paradigms: &str, variant: DataVariant) -> Self {
        let (lexemes, paradigms) = match variant {
            DataVariant::Strict => (collection.lexemes.clone(), paradigms.to_string()),
            DataVariant::NoDiacritics => (simplify(&collection.lexemes), simplify(paradigms)),
        };
        Self {
            lexemes,
            lex_rules: collection.lex_rules.clone(),
            paradigms,
            derivations: collection.derivations.clone(),
        }
    }
}

/// Files written into one tree.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TreeSummary {
    pub variant: DataVariant,
    pub dir: PathBuf,
    pub written: Vec<PathBuf>,
    pub copied: Vec<PathBuf>,
}

/// Result of a full `prepare` run.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PrepareSummary {
    pub lexeme_blocks: usize,
    pub trees: Vec<TreeSummary>,
}

/// Reads every input from `input_dir` and writes both trees under `output_root`.
pub fn prepare_files(
    input_dir: &Path,
    output_root: &Path,
    config: &PrepConfig,
) -> Result<PrepareSummary> {
    let collection = collect_lemmata(input_dir, &config.inputs)?;
    let paradigms = collect_paradigms(input_dir, &config.inputs)?;

    let mut trees = Vec::with_capacity(DataVariant::ALL.len());
    for variant in DataVariant::ALL {
        let dir = tree_dir(output_root, config, variant);
        let data = VariantData::build(&collection, &paradigms, variant);
        let written = write_tree(&dir, &data)?;
        let copied = copy_auxiliary(input_dir, &dir, &config.outputs.auxiliary)?;
        info!(
            variant = variant.as_str(),
            dir = %dir.display(),
            files = written.len() + copied.len(),
            "wrote data tree"
        );
        trees.push(TreeSummary {
            variant,
            dir,
            written,
            copied,
        });
    }

    Ok(PrepareSummary {
        lexeme_blocks: crate::aggregate::lexeme_blocks(&collection.lexemes).len(),
        trees,
    })
}

/// Directory of a tree below an explicit output root.
pub fn tree_dir(output_root: &Path, config: &PrepConfig, variant: DataVariant) -> PathBuf {
    match variant {
        DataVariant::Strict => output_root.join(&config.outputs.strict),
        DataVariant::NoDiacritics => output_root.join(&config.outputs.no_diacritics),
    }
}

/// Writes the grammar files of one tree, creating the directory.
///
/// `lex_rules.txt` is only written when there are lexical rules.
pub fn write_tree(dir: &Path, data: &VariantData) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).map_err(|source| PrepError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files: Vec<(&str, &str)> = vec![(LEXEMES_FILE, data.lexemes.as_str())];
    if !data.lex_rules.is_empty() {
        files.push((LEX_RULES_FILE, data.lex_rules.as_str()));
    }
    files.push((PARADIGMS_FILE, data.paradigms.as_str()));
    files.push((DERIVATIONS_FILE, data.derivations.as_str()));

    let mut written = Vec::with_capacity(files.len());
    for (name, content) in files {
        let path = dir.join(name);
        write_text(&path, content)?;
        written.push(path);
    }
    Ok(written)
}

/// Writes UTF-8 text without a byte-order mark.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content.as_bytes()).map_err(|source| PrepError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

/// Copies auxiliary files that exist in `input_dir` into `dir`.
///
/// Missing files are skipped silently.
pub fn copy_auxiliary(input_dir: &Path, dir: &Path, names: &[String]) -> Result<Vec<PathBuf>> {
    let mut copied = Vec::new();
    for name in names {
        let from = resolve_path(input_dir, name);
        if !from.is_file() {
            debug!(path = %from.display(), "auxiliary file absent, skipping");
            continue;
        }
        let Some(file_name) = from.file_name() else {
            continue;
        };
        let to = dir.join(file_name);
        fs::copy(&from, &to).map_err(|source| PrepError::Copy {
            from: from.clone(),
            to: to.clone(),
            source,
        })?;
        copied.push(to);
    }
    Ok(copied)
}
