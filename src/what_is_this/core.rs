use crate::bitmap::Bitmap;
use crate::device_display::interface::DisplayEvent;
use crate::image_acquisition::{AcquireError, Acquisition, ImageSource};
use crate::image_classifier::classify::ClassificationOutcome;
use crate::image_classifier::error::ClassifierError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerSession {
    Hidden,
    Visible { source: ImageSource },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Idle,
    Picking { source: ImageSource },
    Classifying { cycle: u64, image: Bitmap },
}

/// An image and the outcome computed from it. Only ever replaced as a pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Shown {
    pub image: Bitmap,
    pub outcome: ClassificationOutcome,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    CameraUnavailable,
    AcquisitionFailed(String),
    ClassificationFailed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    pub phase: Phase,
    pub shown: Option<Shown>,
    pub notice: Option<Notice>,
    pub camera_available: bool,
    /// Number of the most recently started classification.
    pub cycle: u64,
}

impl Model {
    pub fn picker_session(&self) -> PickerSession {
        match self.phase {
            Phase::Picking { source } => PickerSession::Visible { source },
            _ => PickerSession::Hidden,
        }
    }

    pub fn is_busy(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }
}

#[derive(Debug)]
pub enum Event {
    DisplayEvent(DisplayEvent),
    AcquireDone(Result<Acquisition, AcquireError>),
    ClassifyDone {
        cycle: u64,
        result: Result<ClassificationOutcome, ClassifierError>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    SubscribeToDisplayEvents,
    AcquireImage { source: ImageSource },
    ClassifyImage { cycle: u64, image: Bitmap },
    Exit,
}

pub fn init(camera_available: bool) -> (Model, Vec<Effect>) {
    (
        Model {
            phase: Phase::Idle,
            shown: None,
            notice: None,
            camera_available,
            cycle: 0,
        },
        vec![Effect::SubscribeToDisplayEvents],
    )
}

pub fn transition(model: Model, event: Event) -> (Model, Vec<Effect>) {
    match (model.phase.clone(), event) {
        (_, Event::DisplayEvent(DisplayEvent::Quit)) => (model, vec![Effect::Exit]),

        // Triggers
        (Phase::Idle, Event::DisplayEvent(DisplayEvent::PickFromGallery)) => {
            start_picking(model, ImageSource::Gallery)
        }
        (Phase::Idle, Event::DisplayEvent(DisplayEvent::CaptureFromCamera)) => {
            if model.camera_available {
                start_picking(model, ImageSource::Camera)
            } else {
                (
                    Model {
                        notice: Some(Notice::CameraUnavailable),
                        ..model
                    },
                    vec![],
                )
            }
        }

        // Picker finished
        (Phase::Picking { .. }, Event::AcquireDone(Ok(Acquisition::Picked(image)))) => {
            let cycle = model.cycle + 1;
            (
                Model {
                    phase: Phase::Classifying {
                        cycle,
                        image: image.clone(),
                    },
                    cycle,
                    ..model
                },
                vec![Effect::ClassifyImage { cycle, image }],
            )
        }
        (Phase::Picking { .. }, Event::AcquireDone(Ok(Acquisition::Cancelled))) => (
            Model {
                phase: Phase::Idle,
                ..model
            },
            vec![],
        ),
        (Phase::Picking { .. }, Event::AcquireDone(Err(AcquireError::CameraUnavailable))) => (
            Model {
                phase: Phase::Idle,
                camera_available: false,
                notice: Some(Notice::CameraUnavailable),
                ..model
            },
            vec![],
        ),
        (Phase::Picking { .. }, Event::AcquireDone(Err(e))) => (
            Model {
                phase: Phase::Idle,
                notice: Some(Notice::AcquisitionFailed(e.to_string())),
                ..model
            },
            vec![],
        ),

        // Classification finished
        (Phase::Classifying { cycle, image }, Event::ClassifyDone { cycle: done, result })
            if cycle == done =>
        {
            match result {
                Ok(outcome) => (
                    Model {
                        phase: Phase::Idle,
                        shown: Some(Shown { image, outcome }),
                        notice: None,
                        ..model
                    },
                    vec![],
                ),
                Err(e) => (
                    Model {
                        phase: Phase::Idle,
                        notice: Some(Notice::ClassificationFailed(e.to_string())),
                        ..model
                    },
                    vec![],
                ),
            }
        }

        // Triggers while busy, stale results
        _ => (model, vec![]),
    }
}

fn start_picking(model: Model, source: ImageSource) -> (Model, Vec<Effect>) {
    (
        Model {
            phase: Phase::Picking { source },
            notice: None,
            ..model
        },
        vec![Effect::AcquireImage { source }],
    )
}
