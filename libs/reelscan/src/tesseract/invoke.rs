use std::ffi::OsStr;
use std::path::Path;
use std::process::Output;
use std::time::Instant;

use once_cell::sync::Lazy;
use regex::Regex;

use super::error::{Result, TesseractError};
use super::resolver::TesseractCommand;
use super::tsv::parse_tsv;
use super::types::{OcrConfig, TesseractVersion, WordBox};

static VERSION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)tesseract(?:\.exe)?\s+v?(\d+)\.(\d+)(?:\.(\d+))?").expect("valid version regex")
});

impl TesseractCommand {
    async fn run(&self, args: &[&OsStr]) -> Result<Output> {
        let output = self
            .command()
            .args(args)
            .output()
            .await
            .map_err(|e| TesseractError::from_spawn(self.program(), e))?;

        if !output.status.success() {
            return Err(TesseractError::Failed {
                program: self.program().to_string(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(output)
    }

    /// Runs `<program> --version` and parses the reported engine version.
    pub async fn version(&self) -> Result<TesseractVersion> {
        let output = self.run(&[OsStr::new("--version")]).await?;

        // 3.x builds print the banner on stderr
        let mut banner = String::from_utf8_lossy(&output.stdout).into_owned();
        banner.push('\n');
        banner.push_str(&String::from_utf8_lossy(&output.stderr));

        let version = extract_version(&banner)
            .ok_or_else(|| TesseractError::VersionParse(banner.trim().to_string()))?;
        log::info!("Found tesseract {} at {}", version, self);
        Ok(version)
    }

    /// Runs OCR on an image file and returns every row of the TSV report.
    pub async fn image_to_data(&self, image: &Path, config: &OcrConfig) -> Result<Vec<WordBox>> {
        let start = Instant::now();
        let flags = config.to_args();

        let mut args: Vec<&OsStr> = vec![image.as_os_str(), OsStr::new("stdout")];
        args.extend(flags.iter().map(|f| OsStr::new(f.as_str())));
        args.push(OsStr::new("tsv"));

        let output = self.run(&args).await?;
        let boxes = parse_tsv(&String::from_utf8_lossy(&output.stdout))?;
        log::debug!(
            "OCR of {} took {:?}, {} rows",
            image.display(),
            start.elapsed(),
            boxes.len()
        );
        Ok(boxes)
    }
}

fn extract_version(output: &str) -> Option<TesseractVersion> {
    let caps = VERSION_RE.captures(output)?;

    let major = caps.get(1)?.as_str().parse().ok()?;
    let minor = caps.get(2)?.as_str().parse().ok()?;
    let patch = caps.get(3).and_then(|m| m.as_str().parse().ok()).unwrap_or(0);

    Some(TesseractVersion { major, minor, patch })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_version_linux_banner() {
        let output = "tesseract 5.3.0\n leptonica-1.82.0\n  libgif 5.2.1 : libjpeg 8d";
        let version = extract_version(output).unwrap();
        assert_eq!(version, TesseractVersion { major: 5, minor: 3, patch: 0 });
    }

    #[test]
    fn test_extract_version_windows_banner() {
        let output = "tesseract v5.3.3.20231005\n leptonica-1.83.1";
        let version = extract_version(output).unwrap();
        assert_eq!(version.major, 5);
        assert_eq!(version.minor, 3);
        assert_eq!(version.patch, 3);
    }

    #[test]
    fn test_extract_version_no_patch() {
        let version = extract_version("tesseract 4.1").unwrap();
        assert_eq!(version.patch, 0);
    }

    #[test]
    fn test_extract_version_ignores_leptonica_only() {
        assert!(extract_version("leptonica-1.82.0").is_none());
        assert!(extract_version("").is_none());
    }

    #[tokio::test]
    async fn test_version_reports_missing_configured_executable() {
        let command = TesseractCommand::resolve(Some("/nonexistent/tesseract"));
        let err = command.version().await.unwrap_err();
        match err {
            TesseractError::NotFound { program } => assert_eq!(program, "/nonexistent/tesseract"),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }
}
