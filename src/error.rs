use std::path::PathBuf;
use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum ResumeError {
    #[error("resume data not found: {}", path.display())]
    /// The `--data` path does not exist or could not be read
    InputNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("resume data is not valid JSON: {}", path.display())]
    /// The input file could not be parsed as JSON at all
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed resume data at `{key}`: {reason}")]
    /// The input parsed, but a recognised key holds the wrong shape
    MalformedInput { key: String, reason: String },

    #[error("strict mode requires resume data; pass --data <file.json>")]
    /// Strict mode has no sample to fall back on
    MissingData,

    #[error("could not write PDF to {}", path.display())]
    /// The destination path is not writable
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ResumeError {
    pub(crate) fn malformed<K: ToString, R: ToString>(key: K, reason: R) -> ResumeError {
        ResumeError::MalformedInput {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Reasons the preferred font family could not be used. These are never returned to
/// callers: resolution logs them and falls back to the built-in faces.
#[derive(Error, Debug)]
pub enum FontWarning {
    #[error("no font file named {file} in any search directory")]
    NotFound { file: String },

    #[error("font file {} could not be read", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("font file {} could not be parsed", path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: owned_ttf_parser::FaceParsingError,
    },

    #[error("font {} has no unicode cmap table", path.display())]
    NoUnicodeCmap { path: PathBuf },
}
