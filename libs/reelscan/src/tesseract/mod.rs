mod error;
mod invoke;
mod resolver;
mod tsv;
mod types;

pub use error::{Result, TesseractError};
pub use resolver::{ResolutionSource, TesseractCommand, DEFAULT_TESSERACT_PROGRAM};
pub use tsv::{boxes_to_text, parse_tsv};
pub use types::{OcrConfig, TesseractVersion, WordBox};
