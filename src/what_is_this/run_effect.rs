use crate::device_display::interface::DeviceDisplay;
use crate::image_acquisition::ImageAcquisition;
use crate::image_classifier::classify::classify;
use crate::image_classifier::interface::ImageClassifier;
use crate::library::logger::interface::Logger;
use crate::what_is_this::core::{Effect, Event};
use std::sync::mpsc::Sender;
use std::sync::Arc;

#[derive(Clone)]
pub struct RunEffect {
    logger: Arc<dyn Logger + Send + Sync>,
    image_acquisition: ImageAcquisition,
    device_display: Arc<dyn DeviceDisplay + Send + Sync>,
    image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    event_sender: Sender<Event>,
}

impl RunEffect {
    pub fn new(
        logger: Arc<dyn Logger + Send + Sync>,
        image_acquisition: ImageAcquisition,
        device_display: Arc<dyn DeviceDisplay + Send + Sync>,
        image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
        event_sender: Sender<Event>,
    ) -> Self {
        Self {
            logger: logger.with_namespace("run_effect"),
            image_acquisition,
            device_display,
            image_classifier,
            event_sender,
        }
    }

    /// Runs on its own thread and reports back through the event channel.
    /// `Exit` is handled by the event loop and never reaches here.
    pub fn run_effect(&self, effect: Effect) {
        let _ = self.logger.info(&format!("Running effect: {:?}", effect));

        match effect {
            Effect::SubscribeToDisplayEvents => {
                let events = self.device_display.events();
                while let Ok(event) = events.recv() {
                    if self.event_sender.send(Event::DisplayEvent(event)).is_err() {
                        break;
                    }
                }
            }
            Effect::AcquireImage { source } => {
                let acquired = self.image_acquisition.acquire(source);
                let _ = self.event_sender.send(Event::AcquireDone(acquired));
            }
            Effect::ClassifyImage { cycle, image } => {
                let result = classify(self.image_classifier.as_ref(), image.image());
                if let Err(e) = &result {
                    let _ = self.logger.error(&format!("Cycle {} failed: {}", cycle, e));
                }
                let _ = self.event_sender.send(Event::ClassifyDone { cycle, result });
            }
            Effect::Exit => {}
        }
    }
}
