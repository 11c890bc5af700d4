use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    pub lang: String,
    pub dpi: Option<u32>, // dots per inch
    pub psm: Option<u32>, // Page segmentation mode
    pub oem: Option<u32>, // OCR Engine Mode
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            lang: OcrConfig::get_default_lang(),
            dpi: None,
            psm: None,
            oem: None,
        }
    }
}

impl OcrConfig {
    pub fn get_default_lang() -> String {
        "eng".to_string()
    }

    /// Command line flags placed between `stdout` and the `tsv` config name.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec!["-l".to_string(), self.lang.clone()];
        if let Some(dpi) = self.dpi {
            args.push("--dpi".to_string());
            args.push(dpi.to_string());
        }
        if let Some(psm) = self.psm {
            args.push("--psm".to_string());
            args.push(psm.to_string());
        }
        if let Some(oem) = self.oem {
            args.push("--oem".to_string());
            args.push(oem.to_string());
        }
        args
    }
}

/// One row of `tesseract ... tsv` output.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WordBox {
    pub level: i32,
    pub page_num: i32,
    pub block_num: i32,
    pub par_num: i32,
    pub line_num: i32,
    pub word_num: i32,
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
    pub conf: f32,
    pub text: String,
}

impl WordBox {
    pub fn area(&self) -> f64 {
        self.width as f64 * self.height as f64
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct TesseractVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl TesseractVersion {
    /// The `tsv` output config first shipped with 3.05.
    pub fn supports_tsv(&self) -> bool {
        (self.major, self.minor) >= (3, 5)
    }
}

impl std::fmt::Display for TesseractVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args_only_carry_language() {
        assert_eq!(OcrConfig::default().to_args(), vec!["-l", "eng"]);
    }

    #[test]
    fn test_args_include_optional_modes() {
        let config = OcrConfig {
            lang: "eng+deu".to_string(),
            dpi: Some(300),
            psm: Some(6),
            oem: Some(1),
        };
        assert_eq!(
            config.to_args(),
            vec!["-l", "eng+deu", "--dpi", "300", "--psm", "6", "--oem", "1"]
        );
    }

    #[test]
    fn test_tsv_support_threshold() {
        let old = TesseractVersion { major: 3, minor: 4, patch: 1 };
        let new = TesseractVersion { major: 3, minor: 5, patch: 0 };
        assert!(!old.supports_tsv());
        assert!(new.supports_tsv());
        assert_eq!(new.to_string(), "3.5.0");
    }
}
