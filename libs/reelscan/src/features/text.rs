use std::path::Path;

use anyhow::Result;

use super::types::{TextFeatureCounts, TextFeatures};
use crate::common::list_frames;
use crate::config::{Settings, TextFeatureConfig};
use crate::tesseract::{OcrConfig, TesseractCommand};

const PROGRESS_EVERY: usize = 5;

/// Extracts text features from the frames stored in `frame_folder`.
///
/// Frames are taken in file name order and every `sample_rate`-th one is
/// OCR'd. Frames that cannot be read, or whose OCR run fails, count as
/// sampled frames without text. A missing or non-launchable tesseract
/// executable aborts the whole run with a
/// [`TesseractError`](crate::tesseract::TesseractError).
pub async fn extract_text_features(
    frame_folder: &Path,
    config: &TextFeatureConfig,
    tesseract: &TesseractCommand,
    ocr_config: &OcrConfig,
    verbose: bool,
) -> Result<TextFeatures> {
    let frames = list_frames(frame_folder, &config.frame_extension)?;
    if frames.is_empty() {
        log::warn!("No *.{} frames in {}", config.frame_extension, frame_folder.display());
        return Ok(TextFeatures::default());
    }

    let sample_rate = config.sample_rate.max(1);
    let sampled: Vec<_> = frames.iter().step_by(sample_rate).collect();
    let num_sampled = sampled.len();
    let mut counts = TextFeatureCounts::new(num_sampled);

    log::info!("Starting OCR on {} of {} frames with {}", num_sampled, frames.len(), tesseract);
    for (idx, frame_path) in sampled.into_iter().enumerate() {
        if idx % PROGRESS_EVERY == 0 {
            log::info!("Processing frame {}/{}...", idx, num_sampled);
        }

        let frame_area = match image::image_dimensions(frame_path) {
            Ok((width, height)) => width as f64 * height as f64,
            Err(e) => {
                log::warn!("Skipping unreadable frame {}: {}", frame_path.display(), e);
                continue;
            }
        };
        if frame_area == 0.0 {
            continue;
        }

        let boxes = match tesseract.image_to_data(frame_path, ocr_config).await {
            Ok(boxes) => boxes,
            Err(e) if e.is_missing_executable() => return Err(e.into()),
            Err(e) => {
                log::error!("OCR failed for {}, treating as no text: {}", frame_path.display(), e);
                continue;
            }
        };

        let text = counts.add_frame(idx, &boxes, frame_area, config);
        if verbose && !text.is_empty() {
            log::info!("[Frame {}] Text detected: '{}'", idx, text);
        }
    }

    Ok(counts.finish(config))
}

/// Same as [`extract_text_features`] with everything taken from `settings`.
pub async fn extract_text_features_with_settings(
    frame_folder: &Path,
    settings: &Settings,
    verbose: bool,
) -> Result<TextFeatures> {
    extract_text_features(
        frame_folder,
        &settings.text_features,
        &settings.tesseract(),
        &settings.ocr,
        verbose,
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tesseract::TesseractError;

    #[tokio::test]
    async fn test_missing_folder_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = extract_text_features(
            &dir.path().join("frames"),
            &TextFeatureConfig::default(),
            &TesseractCommand::default(),
            &OcrConfig::default(),
            false,
        )
        .await;
        assert!(result.unwrap_err().to_string().contains("Frame folder not found"));
    }

    #[tokio::test]
    async fn test_empty_folder_yields_zeros_without_running_ocr() {
        let dir = tempfile::tempdir().unwrap();
        let features = extract_text_features(
            dir.path(),
            &TextFeatureConfig::default(),
            &TesseractCommand::resolve(Some("/nonexistent/tesseract")),
            &OcrConfig::default(),
            false,
        )
        .await
        .unwrap();
        assert_eq!(features, TextFeatures::default());
    }

    #[tokio::test]
    async fn test_missing_executable_aborts_extraction() {
        let dir = tempfile::tempdir().unwrap();
        image::RgbImage::new(8, 8)
            .save(dir.path().join("frame_0000.png"))
            .unwrap();
        let config = TextFeatureConfig {
            frame_extension: "png".to_string(),
            ..Default::default()
        };

        let err = extract_text_features(
            dir.path(),
            &config,
            &TesseractCommand::resolve(Some("/nonexistent/tesseract")),
            &OcrConfig::default(),
            false,
        )
        .await
        .unwrap_err();

        let tess_err = err.downcast_ref::<TesseractError>().unwrap();
        assert!(matches!(tess_err, TesseractError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_unreadable_frames_count_as_empty_samples() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("frame_0000.jpg"), b"not a jpeg").unwrap();
        std::fs::write(dir.path().join("frame_0001.jpg"), b"not a jpeg").unwrap();

        let config = TextFeatureConfig {
            sample_rate: 1,
            ..Default::default()
        };
        let features = extract_text_features(
            dir.path(),
            &config,
            &TesseractCommand::resolve(Some("/nonexistent/tesseract")),
            &OcrConfig::default(),
            false,
        )
        .await
        .unwrap();
        assert_eq!(features, TextFeatures::default());
    }
}
