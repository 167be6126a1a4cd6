use crate::device_camera::interface::DeviceCamera;
use crate::library::logger::interface::Logger;
use image::{DynamicImage, ImageBuffer, Rgb};
use rand::Rng;
use std::sync::Arc;

pub struct DeviceCameraFake {
    logger: Arc<dyn Logger + Send + Sync>,
    width: u32,
    height: u32,
}

impl DeviceCameraFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("camera").with_namespace("fake"),
            width: 640,
            height: 480,
        }
    }
}

impl DeviceCamera for DeviceCameraFake {
    fn is_available(&self) -> bool {
        true
    }

    fn capture_image(&self) -> Result<Option<DynamicImage>, Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Capturing frame...")?;

        let mut rng = rand::rng();
        let frame = ImageBuffer::from_fn(self.width, self.height, |_, _| {
            Rgb([rng.random(), rng.random(), rng.random()])
        });

        self.logger.info("Frame captured")?;
        Ok(Some(DynamicImage::ImageRgb8(frame)))
    }
}
