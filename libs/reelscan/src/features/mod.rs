mod text;
mod types;
mod utils;
mod visual;

pub use text::{extract_text_features, extract_text_features_with_settings};
pub use types::TextFeatures;
pub use utils::write_features_json;
pub use visual::{
    composition_features, extract_visual_features, quality_features, scene_features, CompositionFeatures,
    QualityFeatures, Scene, SceneFeatures, VisualFeatures,
};
