//! Collects raw lexical data from the input directory.
//!
//! Lexeme files are merged and their `-lexeme` blocks deduplicated; lexical
//! rule and derivation files are concatenated as they are.

use regex::Regex;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::{debug, info};

use crate::core::config::{InputsConfig, resolve_path};
use crate::errors::{PrepError, Result};

static LEXEME_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"-lexeme\n(?: [^\r\n]*\n)+").expect("lexeme block pattern is valid")
});

/// Input file categories discovered by prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Lexemes,
    LexRules,
    Derivations,
}

impl Category {
    fn prefix(self, inputs: &InputsConfig) -> &str {
        match self {
            Category::Lexemes => &inputs.lexemes_prefix,
            Category::LexRules => &inputs.lex_rules_prefix,
            Category::Derivations => &inputs.derivations_prefix,
        }
    }
}

/// Aggregated text of every category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    /// Deduplicated, sorted lexeme blocks
    pub lexemes: String,
    /// Concatenated lexical rules, empty when there are none
    pub lex_rules: String,
    /// Concatenated derivations, empty when there are none
    pub derivations: String,
}

/// Reads a UTF-8 text file, dropping a byte-order mark and normalizing
/// `\r\n` and bare `\r` line breaks to `\n`.
pub fn read_text(path: &Path) -> Result<String> {
    let raw = fs::read_to_string(path).map_err(|source| PrepError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = raw.len(), "read input");
    Ok(clean_text(&raw))
}

fn clean_text(raw: &str) -> String {
    let text = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    if text.contains('\r') {
        text.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        text.to_string()
    }
}

/// Classifies a file name, or `None` when it belongs to no category.
pub fn classify(file_name: &str, inputs: &InputsConfig) -> Option<Category> {
    let suffix = format!(".{}", inputs.extension);
    if !file_name.ends_with(&suffix) {
        return None;
    }
    [Category::Lexemes, Category::LexRules, Category::Derivations]
        .into_iter()
        .find(|category| file_name.starts_with(category.prefix(inputs)))
}

/// Input files of one category, sorted by file name.
pub fn category_files(dir: &Path, inputs: &InputsConfig, category: Category) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|source| PrepError::ListDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| PrepError::ListDir {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if classify(name, inputs) == Some(category) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Concatenates files, each followed by a newline.
pub fn concat_files(files: &[PathBuf]) -> Result<String> {
    let mut out = String::new();
    for path in files {
        out.push_str(&read_text(path)?);
        out.push('\n');
    }
    Ok(out)
}

/// All `-lexeme` blocks of a text, in order of appearance.
pub fn lexeme_blocks(text: &str) -> Vec<&str> {
    LEXEME_BLOCK.find_iter(text).map(|m| m.as_str()).collect()
}

/// Keeps one copy of every distinct lexeme block.
///
/// Blocks are compared by exact text and emitted in sorted order, joined by
/// a blank line.
pub fn dedup_lexemes(text: &str) -> String {
    let unique: BTreeSet<&str> = lexeme_blocks(text).into_iter().collect();
    unique.into_iter().collect::<Vec<_>>().join("\n")
}

/// Reads and merges the lexeme, lexical rule and derivation files.
pub fn collect_lemmata(dir: &Path, inputs: &InputsConfig) -> Result<Collection> {
    let lexeme_files = category_files(dir, inputs, Category::Lexemes)?;
    let rule_files = category_files(dir, inputs, Category::LexRules)?;
    let derivation_files = category_files(dir, inputs, Category::Derivations)?;

    let raw_lexemes = concat_files(&lexeme_files)?;
    let total = lexeme_blocks(&raw_lexemes).len();
    let lexemes = dedup_lexemes(&raw_lexemes);
    let unique = lexeme_blocks(&lexemes).len();

    info!(
        files = lexeme_files.len(),
        blocks = total,
        unique,
        "collected lexemes"
    );
    debug!(
        lex_rules = rule_files.len(),
        derivations = derivation_files.len(),
        "collected rule files"
    );

    Ok(Collection {
        lexemes,
        lex_rules: concat_files(&rule_files)?,
        derivations: concat_files(&derivation_files)?,
    })
}

/// Reads the paradigms file. Unlike the prefixed categories it is required.
pub fn collect_paradigms(dir: &Path, inputs: &InputsConfig) -> Result<String> {
    read_text(&resolve_path(dir, &inputs.paradigms))
}
