use crate::device_gallery::interface::DeviceGallery;
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

#[allow(dead_code)]
#[derive(Debug, Clone)]
pub enum FakePick {
    Image(DynamicImage),
    Cancel,
    Fail(String),
}

/// Answers picks from a script. Once the script runs out every pick is a cancel.
pub struct DeviceGalleryFake {
    logger: Arc<dyn Logger + Send + Sync>,
    picks: Mutex<VecDeque<FakePick>>,
}

impl DeviceGalleryFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, picks: Vec<FakePick>) -> Self {
        Self {
            logger: logger.with_namespace("gallery").with_namespace("fake"),
            picks: Mutex::new(picks.into()),
        }
    }
}

impl DeviceGallery for DeviceGalleryFake {
    fn pick_image(&self) -> Result<Option<DynamicImage>, Box<dyn std::error::Error + Send + Sync>> {
        let next = self.picks.lock().map_err(|e| e.to_string())?.pop_front();

        match next {
            Some(FakePick::Image(image)) => {
                self.logger
                    .info(&format!("Picked {}x{} image", image.width(), image.height()))?;
                Ok(Some(image))
            }
            Some(FakePick::Fail(reason)) => Err(reason.into()),
            Some(FakePick::Cancel) | None => {
                self.logger.info("Picker cancelled")?;
                Ok(None)
            }
        }
    }
}
