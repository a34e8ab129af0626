//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use bua_prep::prelude::*;
//!
//! assert_eq!(simplify("-flex: .нүүд\n"), "-flex: .нүүд//.нууд\n");
//! assert_eq!(fold("өөрөө"), "оороо");
//! ```

pub use crate::{
    Analysis, Analyzer, DataVariant, ExternalAnalyzer, FieldKind, PrepConfig, PrepError,
    add_diacriticless, analyze_wordlist, collect_lemmata, collect_paradigms, fold,
    prepare_files, simplify, smoke_test,
};
