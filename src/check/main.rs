use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use reelscan::config::Settings;
use reelscan::tesseract::{boxes_to_text, ResolutionSource};
use reelscan_tools::common::init_logger;

#[derive(Parser)]
#[command(version, about = "Verify that the Tesseract OCR executable can be found and run", long_about = None)]
struct Cli {
    #[arg(long, help = "settings file in TOML format (default: ./reelscan.toml if present)")]
    config: Option<PathBuf>,
    #[arg(long, help = "optional image to run a test OCR on")]
    image: Option<PathBuf>,
    #[arg(long, help = "prefix recognised words with their normalised position")]
    boxes: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logger(env!("CARGO_BIN_NAME"));
    let cli = Cli::parse();

    let settings = Settings::load(cli.config.as_deref())?;
    let tesseract = settings.tesseract();

    match tesseract.source() {
        ResolutionSource::Configured => {
            println!("tesseract: {} (from TESSERACT_CMD / tesseract_cmd)", tesseract.program());
            if !tesseract.as_path().is_file() {
                log::warn!("Configured tesseract path is not an existing file: {}", tesseract.program());
            }
        }
        ResolutionSource::SearchPath => {
            println!("tesseract: {} (looked up on PATH)", tesseract.program())
        }
    }

    let version = match tesseract.version().await {
        Ok(version) => version,
        Err(e) => {
            log::error!("Tesseract check failed: {}", e);
            return Err(e.into());
        }
    };
    println!("version:   {}", version);
    if !version.supports_tsv() {
        log::warn!("tesseract {} predates TSV output, text features will not work", version);
    }

    if let Some(image) = cli.image {
        let boxes = tesseract.image_to_data(&image, &settings.ocr).await?;
        let text = boxes_to_text(&boxes, cli.boxes);
        log::info!("OCR of {} found {} rows", image.display(), boxes.len());
        println!("text:      {}", text);
    }

    println!("OK");
    Ok(())
}
