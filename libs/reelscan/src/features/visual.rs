use std::path::Path;

use anyhow::Result;
use image::{GenericImageView, GrayImage};
use serde::{Deserialize, Serialize};

use crate::common::{list_frames_with_extensions, FRAME_EXTENSIONS};

/// `(start, end)` of one detected scene, in seconds.
pub type Scene = (f64, f64);

/// Editing pace derived from a scene list.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneFeatures {
    /// Scenes per second of video.
    pub cut_frequency: f64,
    pub avg_scene_duration: f64,
    /// Population variance of the scene durations.
    pub pace_variance: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct QualityFeatures {
    /// Mean grayscale intensity, averaged over frames.
    pub brightness_mean: f64,
    /// Grayscale standard deviation, averaged over frames.
    pub contrast_mean: f64,
    /// Laplacian variance averaged over frames. Low values mean blurry frames.
    pub blur_score: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CompositionFeatures {
    /// Mean brightness of the middle half of each frame, averaged over frames.
    pub center_focus_score: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VisualFeatures {
    #[serde(flatten)]
    pub scene: SceneFeatures,
    #[serde(flatten)]
    pub quality: QualityFeatures,
    #[serde(flatten)]
    pub composition: CompositionFeatures,
}

#[derive(Debug, Clone, Copy)]
struct FrameStats {
    brightness: f64,
    contrast: f64,
    blur: f64,
    center_brightness: f64,
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count > 0 {
        sum / count as f64
    } else {
        0.0
    }
}

fn mean_and_variance(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let mean = mean(values.iter().copied());
    let variance = mean_of_squares(values.iter().map(|v| v - mean));
    (mean, variance)
}

fn mean_of_squares(deviations: impl Iterator<Item = f64>) -> f64 {
    mean(deviations.map(|d| d * d))
}

pub fn scene_features(scenes: &[Scene]) -> SceneFeatures {
    if scenes.is_empty() {
        return SceneFeatures::default();
    }

    let durations: Vec<f64> = scenes.iter().map(|(start, end)| end - start).collect();

    // the scene that starts last ends the video
    let mut by_start = scenes.to_vec();
    by_start.sort_by(|a, b| a.0.total_cmp(&b.0));
    let total_duration = match by_start.last() {
        Some((_, end)) if *end > 0.0 => *end,
        _ => 1.0,
    };

    let (avg_scene_duration, pace_variance) = mean_and_variance(&durations);
    SceneFeatures {
        cut_frequency: scenes.len() as f64 / total_duration,
        avg_scene_duration,
        pace_variance,
    }
}

fn frame_stats(gray: &GrayImage) -> FrameStats {
    let pixels: Vec<f64> = gray.pixels().map(|p| p[0] as f64).collect();
    let (brightness, variance) = mean_and_variance(&pixels);

    let laplacian: Vec<f64> = imageproc::filter::laplacian_filter(gray)
        .pixels()
        .map(|p| p[0] as f64)
        .collect();
    let (_, blur) = mean_and_variance(&laplacian);

    let (width, height) = gray.dimensions();
    let (start_x, end_x) = (width / 4, (3 * width) / 4);
    let (start_y, end_y) = (height / 4, (3 * height) / 4);
    let center_brightness = if start_x >= end_x || start_y >= end_y {
        brightness
    } else {
        let center = gray.view(start_x, start_y, end_x - start_x, end_y - start_y);
        mean(center.pixels().map(|(_, _, p)| p[0] as f64))
    };

    FrameStats {
        brightness,
        contrast: variance.sqrt(),
        blur,
        center_brightness,
    }
}

/// Decodes every frame in `frame_folder` and collects per-frame statistics.
/// Frames that fail to decode are skipped. A missing folder yields no frames.
fn collect_frame_stats(frame_folder: &Path) -> Result<Vec<FrameStats>> {
    if !frame_folder.exists() {
        log::warn!("Frame folder not found: {}", frame_folder.display());
        return Ok(Vec::new());
    }

    let frames = list_frames_with_extensions(frame_folder, &FRAME_EXTENSIONS)?;
    let mut stats = Vec::with_capacity(frames.len());
    for path in &frames {
        match image::open(path) {
            Ok(img) => stats.push(frame_stats(&img.to_luma8())),
            Err(e) => log::warn!("Skipping unreadable frame {}: {}", path.display(), e),
        }
    }
    log::debug!("Analysed {} of {} frames in {}", stats.len(), frames.len(), frame_folder.display());
    Ok(stats)
}

fn quality_from(stats: &[FrameStats]) -> QualityFeatures {
    QualityFeatures {
        brightness_mean: mean(stats.iter().map(|s| s.brightness)),
        contrast_mean: mean(stats.iter().map(|s| s.contrast)),
        blur_score: mean(stats.iter().map(|s| s.blur)),
    }
}

fn composition_from(stats: &[FrameStats]) -> CompositionFeatures {
    CompositionFeatures {
        center_focus_score: mean(stats.iter().map(|s| s.center_brightness)),
    }
}

pub fn quality_features(frame_folder: &Path) -> Result<QualityFeatures> {
    Ok(quality_from(&collect_frame_stats(frame_folder)?))
}

pub fn composition_features(frame_folder: &Path) -> Result<CompositionFeatures> {
    Ok(composition_from(&collect_frame_stats(frame_folder)?))
}

/// Scene, quality and composition features in one pass over the frames.
pub fn extract_visual_features(frame_folder: &Path, scenes: &[Scene]) -> Result<VisualFeatures> {
    let stats = collect_frame_stats(frame_folder)?;
    Ok(VisualFeatures {
        scene: scene_features(scenes),
        quality: quality_from(&stats),
        composition: composition_from(&stats),
    })
}
