use config::{CameraBackend, Config, DisplayBackend, GalleryBackend, ImageClassifierBackend};
use device_camera::{
    impl_fake::DeviceCameraFake, impl_unavailable::DeviceCameraUnavailable, interface::DeviceCamera,
};
use device_display::{
    impl_console::DeviceDisplayConsole, impl_gui::DeviceDisplayGui, interface::DeviceDisplay,
};
use device_gallery::{
    impl_fake::DeviceGalleryFake, impl_file_dialog::DeviceGalleryFileDialog,
    interface::DeviceGallery,
};
use image_classifier::{
    impl_fake::ImageClassifierFake, impl_tract_onnx::ImageClassifierTractOnnx,
    interface::ImageClassifier,
};
use library::logger::{impl_console::LoggerConsole, interface::Logger};
use std::sync::Arc;
use what_is_this::main::WhatIsThis;

mod bitmap;
mod config;
mod device_camera;
mod device_display;
mod device_gallery;
mod image_acquisition;
mod image_classifier;
mod library;
mod what_is_this;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::default();

    let logger: Arc<dyn Logger + Send + Sync> = Arc::new(LoggerConsole::new(config.logger_timezone));

    // The model is loaded before any UI appears; without it there is nothing to show.
    let image_classifier: Arc<dyn ImageClassifier + Send + Sync> = match config.image_classifier {
        ImageClassifierBackend::TractOnnx => {
            match ImageClassifierTractOnnx::new(config.model.clone(), logger.clone()) {
                Ok(image_classifier) => Arc::new(image_classifier),
                Err(e) => {
                    logger.error(&format!("Startup failed: {}", e))?;
                    return Err(e.into());
                }
            }
        }
        ImageClassifierBackend::Fake => Arc::new(ImageClassifierFake::new(logger.clone())),
    };

    let device_gallery: Arc<dyn DeviceGallery + Send + Sync> = match config.gallery {
        GalleryBackend::FileDialog => Arc::new(DeviceGalleryFileDialog::new(
            logger.clone(),
            config.gallery_extensions.clone(),
        )),
        GalleryBackend::Fake => Arc::new(DeviceGalleryFake::new(logger.clone(), vec![])),
    };

    let device_camera: Arc<dyn DeviceCamera + Send + Sync> = match config.camera {
        CameraBackend::Unavailable => Arc::new(DeviceCameraUnavailable),
        CameraBackend::Fake => Arc::new(DeviceCameraFake::new(logger.clone())),
    };

    match config.display {
        DisplayBackend::Console => {
            let device_display = Arc::new(DeviceDisplayConsole::new());
            let what_is_this = WhatIsThis::new(
                logger,
                device_gallery,
                device_camera,
                device_display,
                image_classifier,
            );
            what_is_this.run()?;
        }
        DisplayBackend::Gui => {
            // Windowing wants the main thread, so the event loop moves to a worker.
            let device_display = Arc::new(DeviceDisplayGui::new());
            let what_is_this = WhatIsThis::new(
                logger.clone(),
                device_gallery,
                device_camera,
                device_display.clone(),
                image_classifier,
            );
            let app = std::thread::spawn(move || what_is_this.run().map(|_| ()));

            device_display.run_window()?;

            match app.join() {
                Ok(result) => result?,
                Err(_) => logger.error("Event loop panicked")?,
            }
        }
    }

    Ok(())
}
