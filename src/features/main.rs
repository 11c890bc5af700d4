use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use reelscan::common::get_current_timestamp_str;
use reelscan::config::Settings;
use reelscan::features::{extract_text_features_with_settings, write_features_json};
use reelscan_tools::common::init_logger;

#[derive(Parser)]
#[command(version, about = "A CLI tool to compute on-screen text features from extracted video frames", long_about = None)]
struct Cli {
    #[arg(long, help = "folder containing the frames, named so that file name order is timeline order")]
    frames: PathBuf,
    #[arg(long, help = "settings file in TOML format (default: ./reelscan.toml if present)")]
    config: Option<PathBuf>,
    #[arg(long, help = "log the text recognised in each frame")]
    verbose: bool,
    #[arg(long, help = "also write <metadata_output_dir>/<NAME>.json")]
    save: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logger(env!("CARGO_BIN_NAME"));
    let cli = Cli::parse();

    let settings = Settings::load(cli.config.as_deref())?;
    log::info!("Text feature run started at {}", get_current_timestamp_str());

    let start = std::time::Instant::now();
    let features = extract_text_features_with_settings(&cli.frames, &settings, cli.verbose).await?;
    log::info!("Time taken: {:.2?}", start.elapsed());

    println!("{}", serde_json::to_string_pretty(&features)?);

    if let Some(name) = cli.save {
        write_features_json(&name, &features, &settings.metadata_output_dir)?;
    }
    Ok(())
}
