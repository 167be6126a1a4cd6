use crate::device_display::interface::DisplayEvent;
use crate::device_gallery::impl_fake::FakePick;
use crate::image_classifier::classify::ClassificationOutcome;
use crate::image_classifier::impl_fake::ImageClassifierFake;
use crate::image_classifier::interface::ImageClassifier;
use crate::what_is_this::core::Notice;
use crate::what_is_this::tests::fixture::{blank_white, classification, photo, Fixture};
use std::sync::Arc;

fn golden_retriever_classifier(
    logger: crate::library::logger::impl_fake::LoggerFake,
) -> Arc<dyn ImageClassifier + Send + Sync> {
    Arc::new(ImageClassifierFake::with_ranking(
        Arc::new(logger),
        vec![
            classification("golden retriever", 0.93),
            classification("labrador retriever", 0.05),
        ],
    ))
}

#[test]
fn test_pick_classify_display() {
    let mut f = Fixture::new(
        vec![FakePick::Image(photo())],
        false,
        golden_retriever_classifier,
    );
    let handle = f.start();

    f.wait_for_view(|v| v.headline == "What is this?" && !v.busy);
    f.device_display.press(DisplayEvent::PickFromGallery);

    let view = f.wait_for_view(|v| v.headline == "This is Golden Retriever");
    assert_eq!(view.detail, "with 93.00% confidence");
    assert!(view.image.is_some());
    assert!(!view.busy);

    f.device_display.press(DisplayEvent::Quit);
    let model = handle.join().unwrap().unwrap();
    assert_eq!(model.cycle, 1);
    assert!(matches!(
        model.shown.map(|shown| shown.outcome),
        Some(ClassificationOutcome::Identified(_))
    ));
    assert!(f
        .logger
        .lines()
        .iter()
        .any(|line| line.contains("Running effect: ClassifyImage")));
}

#[test]
fn test_cancel_then_blank_image() {
    let mut f = Fixture::new(
        vec![FakePick::Cancel, FakePick::Image(blank_white())],
        false,
        |logger| Arc::new(ImageClassifierFake::new(Arc::new(logger))),
    );
    let handle = f.start();

    f.device_display.press(DisplayEvent::PickFromGallery);
    f.wait_for_view(|v| v.status.as_deref() == Some("Choosing an image..."));
    let view = f.wait_for_view(|v| !v.busy);
    assert_eq!(view.headline, "What is this?");
    assert_eq!(view.image, None);

    f.device_display.press(DisplayEvent::PickFromGallery);
    let view = f.wait_for_view(|v| v.headline == "Can't identify this image");
    assert_eq!(view.detail, "");

    f.device_display.press(DisplayEvent::Quit);
    let model = handle.join().unwrap().unwrap();
    assert_eq!(model.cycle, 1);
}

#[test]
fn test_camera_unavailable_and_failing_classifier() {
    let mut f = Fixture::new(vec![FakePick::Image(photo())], false, |logger| {
        Arc::new(ImageClassifierFake::failing(Arc::new(logger), "model crashed"))
    });
    let handle = f.start();

    f.device_display.press(DisplayEvent::CaptureFromCamera);
    f.wait_for_view(|v| v.status.as_deref() == Some("Camera not available on this device"));

    f.device_display.press(DisplayEvent::PickFromGallery);
    let view = f.wait_for_view(|v| {
        v.status
            .as_deref()
            .is_some_and(|s| s.starts_with("Couldn't classify image"))
    });
    assert_eq!(view.headline, "What is this?");
    assert!(!view.busy);

    f.device_display.press(DisplayEvent::Quit);
    let model = handle.join().unwrap().unwrap();
    assert!(matches!(model.notice, Some(Notice::ClassificationFailed(_))));
    assert!(model.shown.is_none());
}

#[test]
fn test_camera_capture_when_available() {
    let mut f = Fixture::new(vec![], true, |logger| {
        Arc::new(ImageClassifierFake::new(Arc::new(logger)))
    });
    let handle = f.start();

    f.device_display.press(DisplayEvent::CaptureFromCamera);
    let view = f.wait_for_view(|v| v.headline.starts_with("This is "));
    assert!(view.detail.ends_with("% confidence"));

    f.device_display.press(DisplayEvent::Quit);
    handle.join().unwrap().unwrap();
}
