use image::DynamicImage;

pub trait DeviceGallery: Send + Sync {
    /// Blocks while the picker is open. `Ok(None)` means the user cancelled.
    fn pick_image(&self) -> Result<Option<DynamicImage>, Box<dyn std::error::Error + Send + Sync>>;
}
