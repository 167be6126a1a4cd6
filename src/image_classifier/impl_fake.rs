use crate::image_classifier::error::ClassifierError;
use crate::image_classifier::interface::{Classification, ImageClassifier};
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use rand::distr::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

const OBJECTS: &[&str] = &[
    "golden retriever", "tabby", "sports car", "folding chair", "dining table", "goldfinch",
    "oak tree", "mountain bike", "book jacket", "laptop", "cellular telephone", "coffee mug",
    "water bottle", "computer keyboard", "mouse", "pot", "wall clock",
];

enum Mode {
    /// Pseudo-random labels seeded from the pixels, so the same image always gets
    /// the same answer and a single-color image gets none.
    Seeded,
    Fixed(Result<Vec<Classification>, String>),
}

pub struct ImageClassifierFake {
    logger: Arc<dyn Logger + Send + Sync>,
    mode: Mode,
}

impl ImageClassifierFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("image_classifier").with_namespace("fake"),
            mode: Mode::Seeded,
        }
    }

    #[allow(dead_code)]
    pub fn with_ranking(logger: Arc<dyn Logger + Send + Sync>, ranking: Vec<Classification>) -> Self {
        Self {
            mode: Mode::Fixed(Ok(ranking)),
            ..Self::new(logger)
        }
    }

    #[allow(dead_code)]
    pub fn failing(logger: Arc<dyn Logger + Send + Sync>, reason: &str) -> Self {
        Self {
            mode: Mode::Fixed(Err(reason.to_string())),
            ..Self::new(logger)
        }
    }

    fn seeded(&self, image: &DynamicImage) -> Result<Vec<Classification>, ClassifierError> {
        let pixels = image.as_bytes();

        let is_uniform = pixels
            .chunks(image.color().bytes_per_pixel() as usize)
            .all(|pixel| pixels.starts_with(pixel));
        if is_uniform {
            return Ok(vec![]);
        }

        let mut hasher = DefaultHasher::new();
        (image.width(), image.height()).hash(&mut hasher);
        pixels.hash(&mut hasher);
        let mut rng = StdRng::seed_from_u64(hasher.finish());

        let index_dist = Uniform::new(0, OBJECTS.len())
            .map_err(|e| ClassifierError::Inference(e.to_string()))?;
        let confidence_dist =
            Uniform::new(0.0f32, 1.0).map_err(|e| ClassifierError::Inference(e.to_string()))?;

        let mut classifications: Vec<Classification> = (0..3)
            .map(|_| Classification {
                label: OBJECTS[index_dist.sample(&mut rng)].to_string(),
                confidence: confidence_dist.sample(&mut rng),
            })
            .collect();
        classifications.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

        Ok(classifications)
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn classify(&self, image: &DynamicImage) -> Result<Vec<Classification>, ClassifierError> {
        let _ = self.logger.info(&format!(
            "Classifying {}x{} image...",
            image.width(),
            image.height()
        ));

        if image.width() == 0 || image.height() == 0 {
            return Err(ClassifierError::Conversion("image has no pixels".to_string()));
        }

        match &self.mode {
            Mode::Seeded => self.seeded(image),
            Mode::Fixed(Ok(ranking)) => Ok(ranking.clone()),
            Mode::Fixed(Err(reason)) => Err(ClassifierError::Inference(reason.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::logger::impl_fake::LoggerFake;
    use image::{ImageBuffer, Rgb};

    fn gradient() -> DynamicImage {
        DynamicImage::ImageRgb8(ImageBuffer::from_fn(16, 16, |x, y| {
            Rgb([(x * 16) as u8, (y * 16) as u8, 128])
        }))
    }

    #[test]
    fn test_same_image_same_answer() {
        let classifier = ImageClassifierFake::new(Arc::new(LoggerFake::new()));

        let first = classifier.classify(&gradient()).unwrap();
        let second = classifier.classify(&gradient()).unwrap();

        assert!(!first.is_empty());
        assert_eq!(first, second);
        assert!(first
            .windows(2)
            .all(|pair| pair[0].confidence >= pair[1].confidence));
    }

    #[test]
    fn test_blank_image_has_no_candidates() {
        let classifier = ImageClassifierFake::new(Arc::new(LoggerFake::new()));
        let white = DynamicImage::ImageRgb8(ImageBuffer::from_pixel(32, 32, Rgb([255, 255, 255])));

        assert!(classifier.classify(&white).unwrap().is_empty());
    }

    #[test]
    fn test_fixed_modes() {
        let ranking = vec![Classification {
            label: "golden retriever".to_string(),
            confidence: 0.93,
        }];
        let classifier = ImageClassifierFake::with_ranking(Arc::new(LoggerFake::new()), ranking.clone());
        assert_eq!(classifier.classify(&gradient()).unwrap(), ranking);

        let classifier = ImageClassifierFake::failing(Arc::new(LoggerFake::new()), "boom");
        assert!(matches!(
            classifier.classify(&gradient()),
            Err(ClassifierError::Inference(_))
        ));
    }
}
