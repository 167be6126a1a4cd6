use crate::device_camera::interface::DeviceCamera;
use image::DynamicImage;

/// For devices without a camera.
pub struct DeviceCameraUnavailable;

impl DeviceCamera for DeviceCameraUnavailable {
    fn is_available(&self) -> bool {
        false
    }

    fn capture_image(&self) -> Result<Option<DynamicImage>, Box<dyn std::error::Error + Send + Sync>> {
        Err("no camera on this device".into())
    }
}
