use crate::device_display::interface::DisplayEvent;
use crate::image_acquisition::{AcquireError, Acquisition, ImageSource};
use crate::image_classifier::classify::ClassificationOutcome;
use crate::image_classifier::error::ClassifierError;
use crate::what_is_this::core::{
    init, transition, Effect, Event, Model, Notice, Phase, PickerSession, Shown,
};
use crate::what_is_this::tests::fixture::{bitmap, classification};

fn press(event: DisplayEvent) -> Event {
    Event::DisplayEvent(event)
}

fn golden_retriever() -> ClassificationOutcome {
    ClassificationOutcome::Identified(classification("golden retriever", 0.93))
}

/// Drives a full gallery cycle and returns the settled model.
fn pick_and_classify(model: Model, outcome: ClassificationOutcome) -> Model {
    let (model, _) = transition(model, press(DisplayEvent::PickFromGallery));
    let image = bitmap();
    let (model, _) = transition(model, Event::AcquireDone(Ok(Acquisition::Picked(image))));
    let cycle = model.cycle;
    let (model, _) = transition(
        model,
        Event::ClassifyDone {
            cycle,
            result: Ok(outcome),
        },
    );
    model
}

#[test]
fn test_init() {
    let (model, effects) = init(true);

    assert_eq!(model.phase, Phase::Idle);
    assert_eq!(model.picker_session(), PickerSession::Hidden);
    assert!(model.shown.is_none());
    assert_eq!(effects, vec![Effect::SubscribeToDisplayEvents]);
}

#[test]
fn test_gallery_flow() {
    let (model, _) = init(false);

    let (model, effects) = transition(model, press(DisplayEvent::PickFromGallery));
    assert_eq!(
        model.picker_session(),
        PickerSession::Visible {
            source: ImageSource::Gallery
        }
    );
    assert_eq!(
        effects,
        vec![Effect::AcquireImage {
            source: ImageSource::Gallery
        }]
    );

    let image = bitmap();
    let (model, effects) = transition(
        model,
        Event::AcquireDone(Ok(Acquisition::Picked(image.clone()))),
    );
    assert_eq!(model.picker_session(), PickerSession::Hidden);
    assert_eq!(
        model.phase,
        Phase::Classifying {
            cycle: 1,
            image: image.clone()
        }
    );
    assert_eq!(
        effects,
        vec![Effect::ClassifyImage {
            cycle: 1,
            image: image.clone()
        }]
    );

    let (model, effects) = transition(
        model,
        Event::ClassifyDone {
            cycle: 1,
            result: Ok(golden_retriever()),
        },
    );
    assert_eq!(model.phase, Phase::Idle);
    assert_eq!(
        model.shown,
        Some(Shown {
            image,
            outcome: golden_retriever()
        })
    );
    assert!(effects.is_empty());
}

#[test]
fn test_cancel_keeps_displayed_result() {
    let (model, _) = init(true);
    let model = pick_and_classify(model, golden_retriever());
    let before = model.shown.clone();

    let (model, _) = transition(model, press(DisplayEvent::CaptureFromCamera));
    assert_eq!(
        model.picker_session(),
        PickerSession::Visible {
            source: ImageSource::Camera
        }
    );

    let (model, effects) = transition(model, Event::AcquireDone(Ok(Acquisition::Cancelled)));
    assert_eq!(model.picker_session(), PickerSession::Hidden);
    assert_eq!(model.phase, Phase::Idle);
    assert_eq!(model.shown, before);
    assert!(effects.is_empty());
}

#[test]
fn test_new_image_replaces_previous_result() {
    let (model, _) = init(false);
    let model = pick_and_classify(model, golden_retriever());
    let first = model.shown.clone().unwrap();

    let model = pick_and_classify(model, ClassificationOutcome::Unclassifiable);
    let second = model.shown.clone().unwrap();

    assert_eq!(second.outcome, ClassificationOutcome::Unclassifiable);
    assert_ne!(second.image, first.image);
    assert_eq!(model.cycle, 2);
}

#[test]
fn test_camera_unavailable_opens_no_picker() {
    let (model, _) = init(false);

    let (model, effects) = transition(model, press(DisplayEvent::CaptureFromCamera));

    assert!(effects.is_empty());
    assert_eq!(model.picker_session(), PickerSession::Hidden);
    assert_eq!(model.notice, Some(Notice::CameraUnavailable));
}

#[test]
fn test_camera_lost_while_picking() {
    let (model, _) = init(true);
    let (model, _) = transition(model, press(DisplayEvent::CaptureFromCamera));

    let (model, _) = transition(model, Event::AcquireDone(Err(AcquireError::CameraUnavailable)));
    assert!(!model.camera_available);
    assert_eq!(model.notice, Some(Notice::CameraUnavailable));

    let (_, effects) = transition(model, press(DisplayEvent::CaptureFromCamera));
    assert!(effects.is_empty());
}

#[test]
fn test_triggers_ignored_while_busy() {
    let (model, _) = init(true);
    let (model, _) = transition(model, press(DisplayEvent::PickFromGallery));

    let (picking, effects) = transition(model.clone(), press(DisplayEvent::CaptureFromCamera));
    assert_eq!(picking, model);
    assert!(effects.is_empty());

    let (classifying, _) = transition(
        model,
        Event::AcquireDone(Ok(Acquisition::Picked(bitmap()))),
    );
    let (after, effects) = transition(classifying.clone(), press(DisplayEvent::PickFromGallery));
    assert_eq!(after, classifying);
    assert!(effects.is_empty());
}

#[test]
fn test_classification_failure_returns_to_idle() {
    let (model, _) = init(false);
    let model = pick_and_classify(model, golden_retriever());
    let before = model.shown.clone();

    let (model, _) = transition(model, press(DisplayEvent::PickFromGallery));
    let (model, _) = transition(model, Event::AcquireDone(Ok(Acquisition::Picked(bitmap()))));
    let (model, effects) = transition(
        model,
        Event::ClassifyDone {
            cycle: 2,
            result: Err(ClassifierError::Conversion("image is 0x0".to_string())),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(model.phase, Phase::Idle);
    assert_eq!(model.shown, before);
    assert!(matches!(model.notice, Some(Notice::ClassificationFailed(_))));

    // The next cycle is unaffected and clears the notice.
    let model = pick_and_classify(model, ClassificationOutcome::Unclassifiable);
    assert_eq!(model.notice, None);
    assert_eq!(
        model.shown.map(|shown| shown.outcome),
        Some(ClassificationOutcome::Unclassifiable)
    );
}

#[test]
fn test_acquisition_failure_returns_to_idle() {
    let (model, _) = init(false);
    let (model, _) = transition(model, press(DisplayEvent::PickFromGallery));

    let (model, effects) = transition(
        model,
        Event::AcquireDone(Err(AcquireError::Device {
            from: ImageSource::Gallery,
            reason: "not an image".to_string(),
        })),
    );

    assert!(effects.is_empty());
    assert_eq!(model.phase, Phase::Idle);
    assert!(matches!(model.notice, Some(Notice::AcquisitionFailed(_))));
}

#[test]
fn test_stale_classification_is_dropped() {
    let (model, _) = init(false);
    let (model, _) = transition(model, press(DisplayEvent::PickFromGallery));
    let (model, _) = transition(model, Event::AcquireDone(Ok(Acquisition::Picked(bitmap()))));

    let (after, effects) = transition(
        model.clone(),
        Event::ClassifyDone {
            cycle: 7,
            result: Ok(golden_retriever()),
        },
    );

    assert_eq!(after, model);
    assert!(effects.is_empty());
}

#[test]
fn test_quit_from_any_phase() {
    let (model, _) = init(false);
    let (_, effects) = transition(model.clone(), press(DisplayEvent::Quit));
    assert_eq!(effects, vec![Effect::Exit]);

    let (picking, _) = transition(model, press(DisplayEvent::PickFromGallery));
    let (_, effects) = transition(picking, press(DisplayEvent::Quit));
    assert_eq!(effects, vec![Effect::Exit]);
}
