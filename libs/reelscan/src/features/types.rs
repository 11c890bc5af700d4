use serde::{Deserialize, Serialize};

use crate::config::TextFeatureConfig;
use crate::tesseract::WordBox;

/// On-screen text features of one video, computed over sampled frames.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TextFeatures {
    /// Share of sampled frames with any recognised text.
    pub text_presence_ratio: f64,
    /// Average recognised characters per sampled frame.
    pub text_density: f64,
    /// Average word box area relative to the frame area.
    pub font_size_score: f64,
    /// Share of words at least `min_word_length` characters long.
    pub context_clarity: f64,
    /// Share of the leading hook frames with text.
    pub hook_text_ratio: f64,
}

#[derive(Debug, Default)]
pub(crate) struct TextFeatureCounts {
    pub num_sampled: usize,
    pub frames_with_text: usize,
    pub total_chars: usize,
    pub relative_box_area_sum: f64,
    pub box_count: usize,
    pub total_words: usize,
    pub valid_words: usize,
    pub hook_frames_with_text: usize,
}

fn ratio(numerator: f64, denominator: usize) -> f64 {
    if denominator > 0 {
        numerator / denominator as f64
    } else {
        0.0
    }
}

impl TextFeatureCounts {
    pub fn new(num_sampled: usize) -> Self {
        Self {
            num_sampled,
            ..Default::default()
        }
    }

    /// Accounts one OCR'd frame and returns its recognised text.
    pub fn add_frame(
        &mut self,
        sample_idx: usize,
        boxes: &[WordBox],
        frame_area: f64,
        config: &TextFeatureConfig,
    ) -> String {
        let mut words: Vec<&str> = Vec::new();

        for (b, text) in boxes.iter().map(|b| (b, b.text.trim())).filter(|(_, t)| !t.is_empty()) {
            words.push(text);

            if frame_area > 0.0 {
                self.relative_box_area_sum += b.area() / frame_area;
                self.box_count += 1;
            }

            self.total_words += 1;
            if text.chars().count() >= config.min_word_length {
                self.valid_words += 1;
            }
        }

        let frame_text = words.join(" ");
        self.total_chars += frame_text.chars().filter(|c| *c != ' ').count();

        if !words.is_empty() {
            self.frames_with_text += 1;
            if sample_idx < config.hook_frames_limit {
                self.hook_frames_with_text += 1;
            }
        }

        frame_text
    }

    pub fn finish(&self, config: &TextFeatureConfig) -> TextFeatures {
        TextFeatures {
            text_presence_ratio: ratio(self.frames_with_text as f64, self.num_sampled),
            text_density: ratio(self.total_chars as f64, self.num_sampled),
            font_size_score: ratio(self.relative_box_area_sum, self.box_count),
            context_clarity: ratio(self.valid_words as f64, self.total_words),
            hook_text_ratio: ratio(
                self.hook_frames_with_text as f64,
                self.num_sampled.min(config.hook_frames_limit),
            ),
        }
    }
}
