use crate::device_camera::interface::DeviceCamera;
use crate::device_display::interface::DeviceDisplay;
use crate::device_gallery::interface::DeviceGallery;
use crate::image_acquisition::{ImageAcquisition, ImageSource};
use crate::image_classifier::interface::ImageClassifier;
use crate::library::logger::interface::Logger;
use crate::what_is_this::core::{init, transition, Effect, Event, Model};
use crate::what_is_this::render::Render;
use crate::what_is_this::run_effect::RunEffect;
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;

/// The pick -> classify -> display loop. One thread owns the model; every effect
/// runs on a worker thread and answers with a single event.
pub struct WhatIsThis {
    logger: Arc<dyn Logger + Send + Sync>,
    image_acquisition: ImageAcquisition,
    device_display: Arc<dyn DeviceDisplay + Send + Sync>,
    render: Render,
    run_effect: RunEffect,
    event_receiver: Receiver<Event>,
}

impl WhatIsThis {
    pub fn new(
        logger: Arc<dyn Logger + Send + Sync>,
        device_gallery: Arc<dyn DeviceGallery + Send + Sync>,
        device_camera: Arc<dyn DeviceCamera + Send + Sync>,
        device_display: Arc<dyn DeviceDisplay + Send + Sync>,
        image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    ) -> Self {
        let logger = logger.with_namespace("what_is_this");
        let (event_sender, event_receiver) = channel();
        let image_acquisition = ImageAcquisition::new(device_gallery, device_camera);

        let run_effect = RunEffect::new(
            logger.clone(),
            image_acquisition.clone(),
            device_display.clone(),
            image_classifier,
            event_sender,
        );

        Self {
            logger,
            render: Render::new(device_display.clone()),
            image_acquisition,
            device_display,
            run_effect,
            event_receiver,
        }
    }

    fn spawn_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            let run_effect = self.run_effect.clone();
            std::thread::spawn(move || run_effect.run_effect(effect));
        }
    }

    fn render(&self, model: &Model) {
        if let Err(e) = self.render.render(model) {
            let _ = self.logger.error(&format!("Render failed: {}", e));
        }
    }

    /// Returns the final model once the user quits.
    pub fn run(&self) -> Result<Model, Box<dyn std::error::Error + Send + Sync>> {
        let camera_available = self.image_acquisition.is_available(ImageSource::Camera);
        let (mut model, effects) = init(camera_available);

        let _ = self.logger.info(&format!(
            "Starting, camera available: {}",
            camera_available
        ));
        self.render(&model);
        self.spawn_effects(effects);

        loop {
            let event = self.event_receiver.recv()?;

            let _ = self.logger.info(&format!(
                "\nold model:\n\t{:?}\n\nevent:\n\t{:?}",
                model, event,
            ));
            let (new_model, effects) = transition(model, event);
            let _ = self.logger.info(&format!(
                "\nnew model:\n\t{:?}\n\neffects:\n\t{:?}",
                new_model, effects
            ));
            model = new_model;

            if effects.contains(&Effect::Exit) {
                self.device_display.close()?;
                return Ok(model);
            }

            self.render(&model);
            self.spawn_effects(effects);
        }
    }
}
