use std::path::Path;

/// Name looked up on the system search path when no explicit path is configured.
pub const DEFAULT_TESSERACT_PROGRAM: &str = "tesseract";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolutionSource {
    /// Explicit path from `TESSERACT_CMD` / `tesseract_cmd`.
    Configured,
    /// Bare program name, left to the operating system to find.
    SearchPath,
}

impl std::fmt::Display for ResolutionSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolutionSource::Configured => write!(f, "configured path"),
            ResolutionSource::SearchPath => write!(f, "system PATH"),
        }
    }
}

/// Resolved invocation handle for the external OCR executable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TesseractCommand {
    program: String,
    source: ResolutionSource,
}

impl TesseractCommand {
    /// Resolves the program to launch from an optional configured value.
    ///
    /// Any non-empty value, whitespace included, is used verbatim, existing or not, so a bad path
    /// fails at invocation instead of silently falling back to PATH.
    pub fn resolve(configured: Option<&str>) -> Self {
        match configured {
            Some(cmd) if !cmd.is_empty() => {
                log::debug!("Using configured tesseract executable: {}", cmd);
                Self {
                    program: cmd.to_string(),
                    source: ResolutionSource::Configured,
                }
            }
            _ => {
                log::debug!(
                    "No tesseract executable configured, relying on PATH lookup of '{}'",
                    DEFAULT_TESSERACT_PROGRAM
                );
                Self {
                    program: DEFAULT_TESSERACT_PROGRAM.to_string(),
                    source: ResolutionSource::SearchPath,
                }
            }
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn source(&self) -> ResolutionSource {
        self.source
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.program)
    }

    pub(crate) fn command(&self) -> tokio::process::Command {
        let mut command = tokio::process::Command::new(&self.program);
        command.kill_on_drop(true);
        command
    }
}

impl Default for TesseractCommand {
    fn default() -> Self {
        Self::resolve(None)
    }
}

impl std::fmt::Display for TesseractCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.program, self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_path_is_returned_unchanged() {
        let path = r"C:\Program Files\Tesseract-OCR\tesseract.exe";
        let resolved = TesseractCommand::resolve(Some(path));
        assert_eq!(resolved.program(), path);
        assert_eq!(resolved.source(), ResolutionSource::Configured);
    }

    #[test]
    fn test_configured_path_is_not_trimmed() {
        let resolved = TesseractCommand::resolve(Some(" /opt/tesseract "));
        assert_eq!(resolved.program(), " /opt/tesseract ");
    }

    #[test]
    fn test_unset_falls_back_to_bare_name() {
        let resolved = TesseractCommand::resolve(None);
        assert_eq!(resolved.program(), "tesseract");
        assert_eq!(resolved.source(), ResolutionSource::SearchPath);
        assert_eq!(resolved, TesseractCommand::default());
    }

    #[test]
    fn test_empty_falls_back_to_bare_name() {
        let resolved = TesseractCommand::resolve(Some(""));
        assert_eq!(resolved.program(), DEFAULT_TESSERACT_PROGRAM);
        assert_eq!(resolved.source(), ResolutionSource::SearchPath);
    }

    #[test]
    fn test_blank_value_is_configured_not_searched() {
        for value in ["   ", "\t"] {
            let resolved = TesseractCommand::resolve(Some(value));
            assert_eq!(resolved.program(), value);
            assert_eq!(resolved.source(), ResolutionSource::Configured);
        }
    }

    #[tokio::test]
    async fn test_blank_value_fails_at_spawn() {
        let err = TesseractCommand::resolve(Some("   ")).version().await.unwrap_err();
        assert!(err.is_missing_executable(), "unexpected error: {:?}", err);
    }

    #[test]
    fn test_nonexistent_path_still_resolves_to_itself() {
        let resolved = TesseractCommand::resolve(Some("/nonexistent/tesseract"));
        assert_eq!(resolved.as_path(), Path::new("/nonexistent/tesseract"));
        assert_eq!(resolved.source(), ResolutionSource::Configured);
    }
}
