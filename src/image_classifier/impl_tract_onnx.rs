use crate::image_classifier::error::ClassifierError;
use crate::image_classifier::interface::{Classification, ImageClassifier};
use crate::image_classifier::labels::load_labels;
use crate::image_classifier::models::model_config::ModelConfig;
use crate::image_classifier::tract::image::resize_image_to_tensor;
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use std::sync::Arc;
use std::time::Instant;
use tract_onnx::prelude::*;

pub struct ImageClassifierTractOnnx {
    model: SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>,
    labels: Vec<String>,
    config: ModelConfig,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImageClassifierTractOnnx {
    /// Loads the model and its labels. Failing here means the app can't classify
    /// anything, so callers treat it as a startup error.
    pub fn new(
        config: ModelConfig,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, ClassifierError> {
        let logger = logger
            .with_namespace("image_classifier")
            .with_namespace("tract_onnx");

        let labels = load_labels(&config.labels_path)?;

        let model_load_error = |reason: String| ClassifierError::ModelLoad {
            path: config.onnx_model_path.clone(),
            reason,
        };

        let (height, width) = config.input_shape;
        let model = tract_onnx::onnx()
            .model_for_path(&config.onnx_model_path)
            .map_err(|e| model_load_error(e.to_string()))?
            .with_input_fact(
                0,
                InferenceFact::dt_shape(
                    f32::datum_type(),
                    tvec!(1, 3, height as usize, width as usize),
                ),
            )
            .map_err(|e| model_load_error(e.to_string()))?
            .into_optimized()
            .map_err(|e| model_load_error(e.to_string()))?
            .into_runnable()
            .map_err(|e| model_load_error(e.to_string()))?;

        let _ = logger.info(&format!(
            "Loaded {} with {} labels",
            config.onnx_model_path,
            labels.len()
        ));

        Ok(Self {
            model,
            labels,
            config,
            logger,
        })
    }
}

impl ImageClassifier for ImageClassifierTractOnnx {
    fn classify(&self, image: &DynamicImage) -> Result<Vec<Classification>, ClassifierError> {
        let started = Instant::now();

        let input = resize_image_to_tensor(image, &self.config)?;

        let outputs = self
            .model
            .run(tvec!(input.into_tvalue()))
            .map_err(|e| ClassifierError::Inference(e.to_string()))?;

        let output = outputs
            .first()
            .ok_or_else(|| ClassifierError::Inference("model produced no outputs".to_string()))?;

        let scores: Vec<f32> = output
            .to_array_view::<f32>()
            .map_err(|e| ClassifierError::Inference(e.to_string()))?
            .iter()
            .copied()
            .collect();

        let classifications = scores_to_classifications(&self.labels, &self.config, scores)?;

        let _ = self.logger.info(&format!(
            "Classified {}x{} image in {:?}: {:?}",
            image.width(),
            image.height(),
            started.elapsed(),
            classifications.first()
        ));

        Ok(classifications)
    }
}

/// Maps raw model output to labelled candidates, best first. Any NaN or infinite
/// score is an inference error.
fn scores_to_classifications(
    labels: &[String],
    config: &ModelConfig,
    scores: Vec<f32>,
) -> Result<Vec<Classification>, ClassifierError> {
    let scores = align_scores_to_labels(scores, labels.len())?;

    if let Some(idx) = scores.iter().position(|score| !score.is_finite()) {
        return Err(ClassifierError::Inference(format!(
            "model produced a non-finite score {} for {:?}",
            scores[idx], labels[idx]
        )));
    }

    let probabilities = if config.outputs_logits {
        softmax(&scores)
    } else {
        scores
    };

    Ok(rank(&probabilities, config.top_k)
        .into_iter()
        .map(|(idx, confidence)| Classification {
            label: labels[idx].clone(),
            confidence,
        })
        .collect())
}

/// Some exports prepend a background class, giving one more score than labels.
fn align_scores_to_labels(mut scores: Vec<f32>, label_count: usize) -> Result<Vec<f32>, ClassifierError> {
    if scores.len() == label_count + 1 {
        scores.remove(0);
    }

    if scores.len() != label_count {
        return Err(ClassifierError::Inference(format!(
            "model produced {} scores for {} labels",
            scores.len(),
            label_count
        )));
    }

    Ok(scores)
}

fn softmax(logits: &[f32]) -> Vec<f32> {
    let max = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = logits.iter().map(|v| (v - max).exp()).collect();
    let sum: f32 = exps.iter().sum();

    if sum > 0.0 && sum.is_finite() {
        exps.iter().map(|v| v / sum).collect()
    } else {
        vec![0.0; logits.len()]
    }
}

/// Indices of the `top_k` highest scores, best first.
fn rank(scores: &[f32], top_k: usize) -> Vec<(usize, f32)> {
    let mut predictions: Vec<(usize, f32)> = scores
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, score)| score.is_finite())
        .collect();

    predictions.sort_by(|a, b| b.1.total_cmp(&a.1));
    predictions.truncate(top_k);
    predictions
}
