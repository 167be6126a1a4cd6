use crate::bitmap::Bitmap;
use crate::device_camera::interface::DeviceCamera;
use crate::device_gallery::interface::DeviceGallery;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    Gallery,
    Camera,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Acquisition {
    Picked(Bitmap),
    Cancelled,
}

#[derive(Debug, Error)]
pub enum AcquireError {
    #[error("camera not available on this device")]
    CameraUnavailable,
    #[error("couldn't get image from {from:?}: {reason}")]
    Device { from: ImageSource, reason: String },
}

#[derive(Clone)]
pub struct ImageAcquisition {
    gallery: Arc<dyn DeviceGallery + Send + Sync>,
    camera: Arc<dyn DeviceCamera + Send + Sync>,
}

impl ImageAcquisition {
    pub fn new(
        gallery: Arc<dyn DeviceGallery + Send + Sync>,
        camera: Arc<dyn DeviceCamera + Send + Sync>,
    ) -> Self {
        Self { gallery, camera }
    }

    pub fn is_available(&self, source: ImageSource) -> bool {
        match source {
            ImageSource::Gallery => true,
            ImageSource::Camera => self.camera.is_available(),
        }
    }

    /// Asks the user for exactly one image. The camera is checked before any
    /// capture UI is opened.
    pub fn acquire(&self, source: ImageSource) -> Result<Acquisition, AcquireError> {
        if !self.is_available(source) {
            return Err(AcquireError::CameraUnavailable);
        }

        let picked = match source {
            ImageSource::Gallery => self.gallery.pick_image(),
            ImageSource::Camera => self.camera.capture_image(),
        }
        .map_err(|e| AcquireError::Device {
            from: source,
            reason: e.to_string(),
        })?;

        Ok(match picked {
            Some(image) => Acquisition::Picked(Bitmap::new(image)),
            None => Acquisition::Cancelled,
        })
    }
}
