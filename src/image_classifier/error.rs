use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifierError {
    /// The bundled model could not be read or prepared for inference.
    #[error("couldn't load model {path}: {reason}")]
    ModelLoad { path: String, reason: String },

    /// The label file next to the model could not be read.
    #[error("couldn't load labels {path}: {reason}")]
    LabelsLoad { path: String, reason: String },

    /// The picked image could not be turned into model input.
    #[error("couldn't convert image: {0}")]
    Conversion(String),

    #[error("inference failed: {0}")]
    Inference(String),
}
