use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;
use tracing::debug;

use super::{Analysis, Analyzer, check_count};
use crate::core::config::AnalyzerConfig;
use crate::errors::{PrepError, Result};

/// Placeholder in analyzer arguments replaced by the data tree path.
pub const DATA_DIR_PLACEHOLDER: &str = "{data_dir}";

/// Runs an external analyzer command once per batch.
///
/// Words go to the child's stdin one per line. The child answers with one
/// JSON array of [`Analysis`] objects per input line, in the same order.
#[derive(Debug, Clone)]
pub struct ExternalAnalyzer {
    program: String,
    args: Vec<String>,
    data_dir: PathBuf,
}

impl ExternalAnalyzer {
    pub fn new(command: &[String], data_dir: &Path) -> Result<Self> {
        let (program, args) = command.split_first().ok_or(PrepError::NoAnalyzer)?;
        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
            data_dir: data_dir.to_path_buf(),
        })
    }

    pub fn from_config(config: &AnalyzerConfig, data_dir: &Path) -> Result<Self> {
        Self::new(&config.command, data_dir)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Arguments with the data directory substituted.
    pub fn resolved_args(&self) -> Vec<String> {
        let dir = self.data_dir.display().to_string();
        self.args
            .iter()
            .map(|arg| arg.replace(DATA_DIR_PLACEHOLDER, &dir))
            .collect()
    }

    fn run(&self, input: String) -> Result<String> {
        let args = self.resolved_args();
        debug!(program = %self.program, ?args, "starting analyzer");

        let mut child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| PrepError::AnalyzerSpawn {
                program: self.program.clone(),
                source,
            })?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| PrepError::AnalyzerIo(std::io::Error::other("stdin not captured")))?;
        // Feed stdin separately so a full stdout pipe cannot block us.
        let writer = thread::spawn(move || stdin.write_all(input.as_bytes()));

        let output = child.wait_with_output().map_err(PrepError::AnalyzerIo)?;
        match writer.join() {
            Ok(Ok(())) => {}
            // The child may legitimately exit before reading everything.
            Ok(Err(e)) if e.kind() == std::io::ErrorKind::BrokenPipe => {}
            Ok(Err(e)) => return Err(PrepError::AnalyzerIo(e)),
            Err(_) => {
                return Err(PrepError::AnalyzerIo(std::io::Error::other(
                    "stdin writer panicked",
                )));
            }
        }

        if !output.status.success() {
            return Err(PrepError::AnalyzerExit {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        String::from_utf8(output.stdout).map_err(|e| {
            PrepError::AnalyzerIo(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })
    }
}

impl Analyzer for ExternalAnalyzer {
    fn analyze_words(&mut self, words: &[String]) -> Result<Vec<Vec<Analysis>>> {
        if words.is_empty() {
            return Ok(Vec::new());
        }

        let mut input = String::with_capacity(words.iter().map(|w| w.len() + 1).sum());
        for word in words {
            input.push_str(word.trim());
            input.push('\n');
        }

        let output = self.run(input)?;
        let results = parse_output(&output)?;
        check_count(words.len(), results.len())?;
        Ok(results)
    }
}

/// Parses analyzer output: one JSON array per non-blank line.
pub fn parse_output(output: &str) -> Result<Vec<Vec<Analysis>>> {
    output
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            serde_json::from_str(line).map_err(|source| PrepError::AnalyzerOutput {
                line: i + 1,
                source,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_command_is_rejected() {
        let err = ExternalAnalyzer::new(&[], Path::new("data")).unwrap_err();
        assert!(matches!(err, PrepError::NoAnalyzer));
    }

    #[test]
    fn test_data_dir_substitution() {
        let analyzer = ExternalAnalyzer::new(
            &command(&["python3", "-m", "analyze", "--data={data_dir}", "{data_dir}"]),
            Path::new("/srv/data_strict"),
        )
        .unwrap();
        assert_eq!(
            analyzer.resolved_args(),
            vec!["-m", "analyze", "--data=/srv/data_strict", "/srv/data_strict"]
        );
    }

    #[test]
    fn test_parse_output() {
        let out = "[{\"wf\":\"ба\",\"lemma\":\"ба\",\"gramm\":\"PART\"}]\n[]\n";
        let parsed = parse_output(out).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0][0].gramm, "PART");
        assert!(parsed[1].is_empty());
    }

    #[test]
    fn test_parse_output_reports_line() {
        let err = parse_output("[]\nnot json\n").unwrap_err();
        assert!(matches!(err, PrepError::AnalyzerOutput { line: 2, .. }));
    }

    #[test]
    fn test_missing_program() {
        let mut analyzer = ExternalAnalyzer::new(
            &command(&["bua-prep-no-such-analyzer-binary"]),
            Path::new("."),
        )
        .unwrap();
        let err = analyzer.analyze_words(&["ба".to_string()]).unwrap_err();
        assert!(matches!(err, PrepError::AnalyzerSpawn { .. }));
    }

    #[test]
    fn test_empty_batch_skips_process() {
        let mut analyzer = ExternalAnalyzer::new(
            &command(&["bua-prep-no-such-analyzer-binary"]),
            Path::new("."),
        )
        .unwrap();
        assert!(analyzer.analyze_words(&[]).unwrap().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_process_roundtrip() {
        let mut analyzer =
            ExternalAnalyzer::new(&command(&["sed", "s/.*/[]/"]), Path::new(".")).unwrap();
        let results = analyzer
            .analyze_words(&["ба".to_string(), "зомди".to_string()])
            .unwrap();
        assert_eq!(results, vec![Vec::new(), Vec::new()]);
    }

    #[cfg(unix)]
    #[test]
    fn test_count_mismatch() {
        let mut analyzer =
            ExternalAnalyzer::new(&command(&["sh", "-c", "cat >/dev/null; echo '[]'"]), Path::new("."))
                .unwrap();
        let err = analyzer
            .analyze_words(&["а".to_string(), "б".to_string()])
            .unwrap_err();
        assert!(matches!(err, PrepError::AnalyzerCount { expected: 2, got: 1 }));
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_analyzer() {
        let mut analyzer = ExternalAnalyzer::new(
            &command(&["sh", "-c", "cat >/dev/null; echo boom >&2; exit 3"]),
            Path::new("."),
        )
        .unwrap();
        let err = analyzer.analyze_words(&["а".to_string()]).unwrap_err();
        match err {
            PrepError::AnalyzerExit { stderr, .. } => assert_eq!(stderr, "boom"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
