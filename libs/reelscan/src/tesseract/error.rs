use std::process::ExitStatus;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TesseractError {
    #[error("tesseract executable not found: {program} (install Tesseract-OCR, add it to PATH or set TESSERACT_CMD)")]
    NotFound { program: String },

    #[error("tesseract executable is not invocable: {program}: {source}")]
    NotInvocable {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("could not parse tesseract version from output: {0}")]
    VersionParse(String),

    #[error("malformed tsv output at line {line}: {reason}")]
    TsvParse { line: usize, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl TesseractError {
    /// Maps a failed spawn to the matching error kind for `program`.
    pub(crate) fn from_spawn(program: &str, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => TesseractError::NotFound {
                program: program.to_string(),
            },
            std::io::ErrorKind::PermissionDenied => TesseractError::NotInvocable {
                program: program.to_string(),
                source: err,
            },
            _ => TesseractError::Io(err),
        }
    }

    /// True when the executable itself could not be launched.
    pub fn is_missing_executable(&self) -> bool {
        matches!(
            self,
            TesseractError::NotFound { .. } | TesseractError::NotInvocable { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, TesseractError>;
