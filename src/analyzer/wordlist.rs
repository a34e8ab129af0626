use serde::Serialize;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tracing::info;

use super::{Analyzer, check_count, format_analyses};
use crate::aggregate::read_text;
use crate::errors::{PrepError, Result};
use crate::layout::write_text;

/// Outcome of splitting a word list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordlistReport {
    pub total: usize,
    pub analyzed: usize,
    pub unanalyzed: usize,
    pub parsed_file: PathBuf,
    pub unparsed_file: PathBuf,
}

impl WordlistReport {
    /// Share of words with at least one analysis, in percent.
    pub fn coverage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.analyzed as f64 * 100.0 / self.total as f64
    }
}

/// Words of a frequency list.
///
/// The word is the first tab- or comma-separated field of each non-blank
/// line; counts and other columns are ignored.
pub fn read_wordlist(path: &Path) -> Result<Vec<String>> {
    let text = read_text(path)?;
    Ok(parse_wordlist(&text))
}

fn parse_wordlist(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| {
            let word = line.split(['\t', ',']).next().unwrap_or("").trim();
            (!word.is_empty()).then(|| word.to_string())
        })
        .collect()
}

/// Analyzes every word of `freq_list` and splits the list in two files.
///
/// `parsed` receives `word<TAB>analyses` for words with at least one
/// analysis, `unparsed` receives the remaining words, one per line. Input
/// order is kept in both.
pub fn analyze_wordlist<A: Analyzer + ?Sized>(
    analyzer: &mut A,
    freq_list: &Path,
    parsed: &Path,
    unparsed: &Path,
) -> Result<WordlistReport> {
    let words = read_wordlist(freq_list)?;
    let results = analyzer.analyze_words(&words)?;
    check_count(words.len(), results.len())?;

    let mut parsed_text = String::new();
    let mut unparsed_text = String::new();
    let mut analyzed = 0;

    for (word, analyses) in words.iter().zip(&results) {
        if analyses.is_empty() {
            unparsed_text.push_str(word);
            unparsed_text.push('\n');
        } else {
            analyzed += 1;
            // Writing into a String cannot fail.
            let _ = writeln!(parsed_text, "{}\t{}", word, format_analyses(analyses));
        }
    }

    for path in [parsed, unparsed] {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| PrepError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    write_text(parsed, &parsed_text)?;
    write_text(unparsed, &unparsed_text)?;

    let report = WordlistReport {
        total: words.len(),
        analyzed,
        unanalyzed: words.len() - analyzed,
        parsed_file: parsed.to_path_buf(),
        unparsed_file: unparsed.to_path_buf(),
    };
    info!(
        total = report.total,
        analyzed = report.analyzed,
        coverage = format!("{:.1}%", report.coverage()),
        "analyzed word list"
    );
    Ok(report)
}
