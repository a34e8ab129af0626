//! Bridge to the external morphological analyzer.
//!
//! The analyzer itself is not part of this crate. [`Analyzer`] is the seam:
//! [`ExternalAnalyzer`] drives a configured command, tests plug in fakes.

mod external;
mod wordlist;

pub use external::ExternalAnalyzer;
pub use wordlist::{WordlistReport, analyze_wordlist, read_wordlist};

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

use crate::errors::{PrepError, Result};

/// One analysis of a word form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Analysis {
    /// Word form as analyzed
    pub wf: String,
    #[serde(default)]
    pub lemma: String,
    /// Comma-separated grammatical tags
    #[serde(default)]
    pub gramm: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gloss: Option<String>,
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.lemma, self.gramm)?;
        if let Some(gloss) = &self.gloss {
            write!(f, ":{}", gloss)?;
        }
        Ok(())
    }
}

/// Something that returns analyses for word forms.
pub trait Analyzer {
    /// Analyzes each word; the result has one (possibly empty) list per word.
    fn analyze_words(&mut self, words: &[String]) -> Result<Vec<Vec<Analysis>>>;

    /// Analyzes tokenized sentences, keeping the sentence grouping.
    fn analyze_sentences(&mut self, sentences: &[Vec<String>]) -> Result<Vec<Vec<Vec<Analysis>>>> {
        let flat: Vec<String> = sentences.iter().flatten().cloned().collect();
        let results = self.analyze_words(&flat)?;
        check_count(flat.len(), results.len())?;
        let mut results = results.into_iter();
        Ok(sentences
            .iter()
            .map(|sentence| results.by_ref().take(sentence.len()).collect::<Vec<_>>())
            .collect())
    }
}

/// Fails unless an analyzer returned exactly one result per word.
pub(crate) fn check_count(expected: usize, got: usize) -> Result<()> {
    if expected != got {
        return Err(PrepError::AnalyzerCount { expected, got });
    }
    Ok(())
}

/// Joins analyses for display, `-` when there are none.
pub fn format_analyses(analyses: &[Analysis]) -> String {
    if analyses.is_empty() {
        return "-".to_string();
    }
    analyses
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Analyzes sample sentences and words and logs every result.
///
/// Returns how many sample words received at least one analysis, out of
/// how many were sent.
pub fn smoke_test<A: Analyzer + ?Sized>(
    analyzer: &mut A,
    sentences: &[Vec<String>],
    words: &[String],
) -> Result<(usize, usize)> {
    let mut analyzed = 0;
    let mut total = 0;

    if !sentences.is_empty() {
        let results = analyzer.analyze_sentences(sentences)?;
        for (sentence, analyses) in sentences.iter().zip(&results) {
            for (word, word_analyses) in sentence.iter().zip(analyses) {
                info!(word = %word, analyses = %format_analyses(word_analyses), "sample sentence word");
                total += 1;
                analyzed += usize::from(!word_analyses.is_empty());
            }
        }
    }

    if !words.is_empty() {
        let results = analyzer.analyze_words(words)?;
        for (word, word_analyses) in words.iter().zip(&results) {
            info!(word = %word, analyses = %format_analyses(word_analyses), "sample word");
            total += 1;
            analyzed += usize::from(!word_analyses.is_empty());
        }
    }

    Ok((analyzed, total))
}
