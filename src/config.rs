use crate::image_classifier::models::model_config::ModelConfig;
use chrono::Offset;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayBackend {
    #[allow(dead_code)]
    Console,
    Gui,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryBackend {
    FileDialog,
    #[allow(dead_code)]
    Fake,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraBackend {
    Unavailable,
    #[allow(dead_code)]
    Fake,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageClassifierBackend {
    TractOnnx,
    #[allow(dead_code)]
    Fake,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub logger_timezone: chrono::FixedOffset,
    pub display: DisplayBackend,
    pub gallery: GalleryBackend,
    pub camera: CameraBackend,
    pub image_classifier: ImageClassifierBackend,
    pub gallery_extensions: Vec<String>,
    pub model: ModelConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logger_timezone: chrono::Utc.fix(),
            display: DisplayBackend::Gui,
            gallery: GalleryBackend::FileDialog,
            camera: CameraBackend::Unavailable,
            image_classifier: ImageClassifierBackend::TractOnnx,
            gallery_extensions: ["png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff"]
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            model: ModelConfig::default(),
        }
    }
}
