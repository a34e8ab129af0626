use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::errors::{PrepError, Result};

/// Name of the configuration file looked up in every layer.
pub const CONFIG_FILE_NAME: &str = "prep.toml";

/// Directory under the user config dir (`~/.config/bua-prep`).
pub const CONFIG_DIR_NAME: &str = "bua-prep";

const DEFAULT_CONFIG: &str = include_str!("../../prep.toml");

/// Which of the two parallel data trees to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DataVariant {
    /// Original spelling only.
    #[default]
    Strict,
    /// Every diacritic-bearing stem and flex carries a folded alternate.
    #[serde(alias = "nodiacritics")]
    NoDiacritics,
}

impl DataVariant {
    pub const ALL: [DataVariant; 2] = [DataVariant::Strict, DataVariant::NoDiacritics];

    pub fn as_str(&self) -> &'static str {
        match self {
            DataVariant::Strict => "strict",
            DataVariant::NoDiacritics => "no-diacritics",
        }
    }
}

/// Where the raw lexical data lives, relative to the input directory.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct InputsConfig {
    /// File-name prefix of lexeme files (`bua_lexemes*.txt`)
    pub lexemes_prefix: String,
    /// File-name prefix of lexical rule files
    pub lex_rules_prefix: String,
    /// File-name prefix of derivation files
    pub derivations_prefix: String,
    /// Extension shared by the prefixed files, without the dot
    pub extension: String,
    /// The single paradigms file
    pub paradigms: String,
}

/// Layout of the two output data trees.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct OutputsConfig {
    /// Root directory holding both trees
    pub root: String,
    /// Directory name of the strict tree
    pub strict: String,
    /// Directory name of the no-diacritics tree
    pub no_diacritics: String,
    /// Files copied verbatim into both trees when present
    #[serde(default)]
    pub auxiliary: Vec<String>,
}

/// External analyzer used for the smoke test.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Program and arguments; `{data_dir}` is substituted
    #[serde(default)]
    pub command: Vec<String>,
    /// Data tree handed to the analyzer
    #[serde(default)]
    pub mode: DataVariant,
    #[serde(default)]
    pub sample_words: Vec<String>,
    #[serde(default)]
    pub sample_sentences: Vec<Vec<String>>,
}

/// Frequency word list and the two files it is split into.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct WordlistConfig {
    pub input: String,
    pub parsed: String,
    pub unparsed: String,
}

/// Effective configuration after all layers are merged.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct PrepConfig {
    pub inputs: InputsConfig,
    pub outputs: OutputsConfig,
    pub analyzer: AnalyzerConfig,
    pub wordlist: WordlistConfig,
}

impl PrepConfig {
    /// Parses a complete configuration from TOML content.
    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the built-in configuration bundled with the crate.
    pub fn load_default() -> Result<Self> {
        Self::from_toml(DEFAULT_CONFIG).map_err(|source| PrepError::Config {
            origin: "built-in defaults".to_string(),
            source,
        })
    }

    /// Config files consulted on top of the built-in defaults, in order.
    ///
    /// 1. `~/.config/bua-prep/prep.toml` (user overrides)
    /// 2. `<input_dir>/prep.toml` (project-local overrides)
    pub fn search_paths(input_dir: &Path) -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME));
        }
        paths.push(input_dir.join(CONFIG_FILE_NAME));
        paths
    }

    /// Loads configuration with user and project overrides.
    ///
    /// Later layers override earlier ones key by key. A broken user or
    /// project file is skipped with a warning; a broken `explicit` file is
    /// an error.
    pub fn load_with_overrides(input_dir: &Path, explicit: Option<&Path>) -> Result<Self> {
        let mut merged = parse_table(DEFAULT_CONFIG, "built-in defaults")?;

        for path in Self::search_paths(input_dir) {
            if !path.exists() {
                continue;
            }
            match read_table(&path) {
                Ok(layer) => {
                    debug!(path = %path.display(), "applying config layer");
                    merge_tables(&mut merged, layer);
                }
                Err(e) => {
                    warn!("Failed to load config from {}: {}", path.display(), e);
                }
            }
        }

        if let Some(path) = explicit {
            let layer = read_table(path)?;
            debug!(path = %path.display(), "applying explicit config");
            merge_tables(&mut merged, layer);
        }

        toml::Value::Table(merged)
            .try_into()
            .map_err(|source| PrepError::Config {
                origin: "merged configuration".to_string(),
                source,
            })
    }

    /// Renders the configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Expands `~` and joins relative paths onto `base`.
pub fn resolve_path(base: &Path, path: &str) -> PathBuf {
    let expanded = PathBuf::from(shellexpand::tilde(path).as_ref());
    if expanded.is_absolute() {
        expanded
    } else {
        base.join(expanded)
    }
}

fn parse_table(content: &str, origin: &str) -> Result<toml::Table> {
    toml::from_str(content).map_err(|source| PrepError::Config {
        origin: origin.to_string(),
        source,
    })
}

fn read_table(path: &Path) -> Result<toml::Table> {
    let content = std::fs::read_to_string(path).map_err(|source| PrepError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_table(&content, &path.display().to_string())
}

/// Deep-merges `overlay` into `base`.
///
/// Nested tables merge recursively; any other value, arrays included,
/// replaces the base value.
pub fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match value {
            toml::Value::Table(incoming) => {
                if let Some(toml::Value::Table(existing)) = base.get_mut(&key) {
                    merge_tables(existing, incoming);
                    continue;
                }
                base.insert(key, toml::Value::Table(incoming));
            }
            value => {
                base.insert(key, value);
            }
        }
    }
}
