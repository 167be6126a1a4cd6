use crate::bitmap::Bitmap;
use std::error::Error;
use std::sync::mpsc::Receiver;

/// Everything the screen shows. Built fresh from the app model on every change.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenView {
    pub headline: String,
    pub detail: String,
    pub image: Option<Bitmap>,
    pub status: Option<String>,
    /// A picker is open or a classification is running; triggers are ignored.
    pub busy: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayEvent {
    PickFromGallery,
    CaptureFromCamera,
    Quit,
}

pub trait DeviceDisplay: Send + Sync {
    fn show(&self, view: &ScreenView) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// User triggers. The stream ends when the display goes away.
    fn events(&self) -> Receiver<DisplayEvent>;

    fn close(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(())
    }
}
