//! Data preparation for a Buryat morphological analyzer.
//!
//! Raw lexeme, lexical rule, derivation and paradigm files are merged into
//! two parallel data trees: a strict one with the original spelling and a
//! no-diacritics one where every stem and inflection containing `ө`, `ү`,
//! `һ` or `ё` also accepts the folded spelling. An external analyzer can
//! then be smoke-tested against both.

mod core;

pub mod aggregate;
pub mod analyzer;
pub mod errors;
pub mod layout;
pub mod normalizer;
pub mod prelude;

pub use crate::core::config::{
    AnalyzerConfig, CONFIG_DIR_NAME, CONFIG_FILE_NAME, DataVariant, InputsConfig, OutputsConfig,
    PrepConfig, WordlistConfig, merge_tables, resolve_path,
};
pub use crate::core::diacritics::{
    DIACRITICS, VARIANT_SEPARATOR, add_diacriticless, fold, fold_char, has_diacritics,
};
pub use aggregate::{Collection, collect_lemmata, collect_paradigms};
pub use analyzer::{
    Analysis, Analyzer, ExternalAnalyzer, WordlistReport, analyze_wordlist, smoke_test,
};
pub use errors::{PrepError, Result};
pub use layout::{PrepareSummary, prepare_files};
pub use normalizer::{FieldKind, simplify};
