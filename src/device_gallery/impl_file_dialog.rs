use crate::device_gallery::interface::DeviceGallery;
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use rfd::FileDialog;
use std::sync::Arc;

/// Picks an image file through the platform's native open dialog.
pub struct DeviceGalleryFileDialog {
    logger: Arc<dyn Logger + Send + Sync>,
    extensions: Vec<String>,
}

impl DeviceGalleryFileDialog {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, extensions: Vec<String>) -> Self {
        Self {
            logger: logger.with_namespace("gallery").with_namespace("file_dialog"),
            extensions,
        }
    }
}

impl DeviceGallery for DeviceGalleryFileDialog {
    fn pick_image(&self) -> Result<Option<DynamicImage>, Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Opening file dialog...")?;

        let picked = FileDialog::new()
            .set_title("Select Image")
            .add_filter("Images", self.extensions.as_slice())
            .pick_file();

        let Some(path) = picked else {
            self.logger.info("File dialog cancelled")?;
            return Ok(None);
        };

        self.logger.info(&format!("Decoding {}", path.display()))?;
        let image = image::open(&path)
            .map_err(|e| format!("couldn't decode {}: {}", path.display(), e))?;

        Ok(Some(image))
    }
}
