#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeMode {
    /// Scale the short side to fit, then crop the center.
    CenterCrop,
    /// Scale the long side to fit, then pad with black.
    Letterbox,
    Stretch,
}

#[derive(Debug, Clone)]
pub struct ModelConfig {
    pub onnx_model_path: String,
    pub labels_path: String,
    /// (height, width)
    pub input_shape: (u32, u32),
    pub mean: [f32; 3],
    pub std: [f32; 3],
    pub resize_mode: ResizeMode,
    /// Raw logits need a softmax before they read as confidences.
    pub outputs_logits: bool,
    pub top_k: usize,
}

impl ModelConfig {
    /// MobileNetV2 from the ONNX model zoo with ImageNet labels.
    pub fn mobilenet_v2() -> Self {
        Self {
            onnx_model_path: "./models/mobilenetv2-7.onnx".to_string(),
            labels_path: "./models/imagenet_labels.txt".to_string(),
            input_shape: (224, 224),
            mean: [0.485, 0.456, 0.406],
            std: [0.229, 0.224, 0.225],
            resize_mode: ResizeMode::CenterCrop,
            outputs_logits: true,
            top_k: 5,
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self::mobilenet_v2()
    }
}
