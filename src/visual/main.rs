use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use reelscan::config::Settings;
use reelscan::features::{extract_visual_features, write_features_json, Scene};
use reelscan_tools::common::init_logger;

#[derive(Parser)]
#[command(version, about = "A CLI tool to compute visual quality and pacing features from extracted video frames", long_about = None)]
struct Cli {
    #[arg(long, help = "folder containing jpg, jpeg, png or bmp frames")]
    frames: PathBuf,
    #[arg(long, help = "JSON file with detected scenes as [[start, end], ...] in seconds")]
    scenes: Option<PathBuf>,
    #[arg(long, help = "settings file in TOML format (default: ./reelscan.toml if present)")]
    config: Option<PathBuf>,
    #[arg(long, help = "also write <metadata_output_dir>/<NAME>.json")]
    save: Option<String>,
}

fn load_scenes(path: &PathBuf) -> Result<Vec<Scene>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read scenes from {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid scene list in {}", path.display()))
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logger(env!("CARGO_BIN_NAME"));
    let cli = Cli::parse();

    let settings = Settings::load(cli.config.as_deref())?;
    let scenes = match &cli.scenes {
        Some(path) => load_scenes(path)?,
        None => Vec::new(),
    };
    log::info!("Using {} scenes", scenes.len());

    let frames = cli.frames.clone();
    let features = tokio::task::spawn_blocking(move || extract_visual_features(&frames, &scenes)).await??;

    println!("{}", serde_json::to_string_pretty(&features)?);

    if let Some(name) = cli.save {
        write_features_json(&name, &features, &settings.metadata_output_dir)?;
    }
    Ok(())
}
