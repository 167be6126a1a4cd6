use crate::device_display::interface::{DeviceDisplay, ScreenView};
use crate::image_acquisition::ImageSource;
use crate::image_classifier::classify::ClassificationOutcome;
use crate::what_is_this::core::{Model, Notice, Phase, PickerSession};
use std::sync::Arc;

pub const DEFAULT_HEADLINE: &str = "What is this?";
pub const DEFAULT_DETAIL: &str = "Select an image to find out";
pub const UNIDENTIFIED_HEADLINE: &str = "Can't identify this image";

#[derive(Clone)]
pub struct Render {
    device_display: Arc<dyn DeviceDisplay + Send + Sync>,
}

impl Render {
    pub fn new(device_display: Arc<dyn DeviceDisplay + Send + Sync>) -> Self {
        Self { device_display }
    }

    pub fn render(&self, model: &Model) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.device_display.show(&view(model))
    }
}

pub fn view(model: &Model) -> ScreenView {
    let (headline, detail) = match &model.shown {
        None => (DEFAULT_HEADLINE.to_string(), DEFAULT_DETAIL.to_string()),
        Some(shown) => describe(&shown.outcome),
    };

    let status = match (model.picker_session(), &model.phase) {
        (
            PickerSession::Visible {
                source: ImageSource::Gallery,
            },
            _,
        ) => Some("Choosing an image...".to_string()),
        (
            PickerSession::Visible {
                source: ImageSource::Camera,
            },
            _,
        ) => Some("Taking a picture...".to_string()),
        (PickerSession::Hidden, Phase::Classifying { .. }) => Some("Classifying...".to_string()),
        (PickerSession::Hidden, _) => model.notice.as_ref().map(describe_notice),
    };

    ScreenView {
        headline,
        detail,
        image: model.shown.as_ref().map(|shown| shown.image.clone()),
        status,
        busy: model.is_busy(),
    }
}

pub fn describe(outcome: &ClassificationOutcome) -> (String, String) {
    match outcome {
        ClassificationOutcome::Identified(classification) => (
            format!("This is {}", capitalize_words(&classification.label)),
            format!(
                "with {:.2}% confidence",
                classification.confidence as f64 * 100.0
            ),
        ),
        ClassificationOutcome::Unclassifiable => (UNIDENTIFIED_HEADLINE.to_string(), String::new()),
    }
}

fn describe_notice(notice: &Notice) -> String {
    match notice {
        Notice::CameraUnavailable => "Camera not available on this device".to_string(),
        Notice::AcquisitionFailed(reason) => format!("Couldn't load image: {}", reason),
        Notice::ClassificationFailed(reason) => format!("Couldn't classify image: {}", reason),
    }
}

/// `golden retriever` -> `Golden Retriever`. Apostrophes don't start a new word.
pub fn capitalize_words(label: &str) -> String {
    let mut capitalized = String::with_capacity(label.len());
    let mut at_word_start = true;

    for c in label.chars() {
        if c.is_alphanumeric() || c == '\'' {
            if at_word_start {
                capitalized.extend(c.to_uppercase());
            } else {
                capitalized.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            capitalized.push(c);
            at_word_start = true;
        }
    }

    capitalized
}
