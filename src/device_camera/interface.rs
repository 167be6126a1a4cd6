use image::DynamicImage;

pub trait DeviceCamera: Send + Sync {
    fn is_available(&self) -> bool;
    /// Blocks while the capture UI is open. `Ok(None)` means the user cancelled.
    fn capture_image(&self) -> Result<Option<DynamicImage>, Box<dyn std::error::Error + Send + Sync>>;
}
