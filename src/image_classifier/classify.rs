use crate::image_classifier::error::ClassifierError;
use crate::image_classifier::interface::{Classification, ImageClassifier};
use image::DynamicImage;

#[derive(Debug, Clone, PartialEq)]
pub enum ClassificationOutcome {
    /// Label is non-empty and confidence is within [0, 1].
    Identified(Classification),
    Unclassifiable,
}

/// Runs one inference pass and keeps only the highest-ranked candidate.
pub fn classify(
    image_classifier: &dyn ImageClassifier,
    image: &DynamicImage,
) -> Result<ClassificationOutcome, ClassifierError> {
    let ranked = image_classifier.classify(image)?;
    Ok(top_classification(ranked))
}

/// Candidates with a blank label or a NaN confidence are skipped rather than shown.
pub fn top_classification(ranked: Vec<Classification>) -> ClassificationOutcome {
    ranked
        .into_iter()
        .find(|c| !c.label.trim().is_empty() && !c.confidence.is_nan())
        .map(|c| {
            ClassificationOutcome::Identified(Classification {
                label: c.label.trim().to_string(),
                confidence: c.confidence.clamp(0.0, 1.0),
            })
        })
        .unwrap_or(ClassificationOutcome::Unclassifiable)
}
