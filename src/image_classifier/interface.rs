use crate::image_classifier::error::ClassifierError;
use image::DynamicImage;

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: String,
    pub confidence: f32,
}

pub trait ImageClassifier: Send + Sync {
    /// Runs one inference pass and returns candidates ranked by descending confidence.
    fn classify(&self, image: &DynamicImage) -> Result<Vec<Classification>, ClassifierError>;
}
