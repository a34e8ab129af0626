use std::io;
use std::path::PathBuf;

/// Errors produced while preparing data or talking to the analyzer.
#[derive(Debug, thiserror::Error)]
pub enum PrepError {
    /// An input file could not be read (missing, unreadable or not UTF-8).
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An output file could not be written.
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An auxiliary file could not be copied into a data tree.
    #[error("cannot copy {} to {}: {source}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An output directory could not be created.
    #[error("cannot create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input directory could not be listed.
    #[error("cannot list directory {}: {source}", path.display())]
    ListDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A configuration layer is not valid TOML or does not fit the schema.
    #[error("invalid configuration in {origin}: {source}")]
    Config {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    /// The effective configuration could not be rendered back to TOML.
    #[error("cannot render configuration: {0}")]
    ConfigRender(#[from] toml::ser::Error),

    /// `[analyzer] command` is empty.
    #[error("no analyzer configured; set `[analyzer] command` in prep.toml")]
    NoAnalyzer,

    /// The analyzer process could not be started.
    #[error("cannot start analyzer `{program}`: {source}")]
    AnalyzerSpawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The analyzer process exited unsuccessfully.
    #[error("analyzer `{program}` failed ({status}): {stderr}")]
    AnalyzerExit {
        program: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    /// The analyzer answered with a different number of lines than words sent.
    #[error("analyzer returned {got} results for {expected} words")]
    AnalyzerCount { expected: usize, got: usize },

    /// An analyzer output line is not a JSON array of analyses.
    #[error("malformed analyzer output on line {line}: {source}")]
    AnalyzerOutput {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// I/O failure while exchanging data with the analyzer process.
    #[error("analyzer i/o: {0}")]
    AnalyzerIo(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, PrepError>;
