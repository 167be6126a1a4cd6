use crate::device_display::interface::{DeviceDisplay, DisplayEvent, ScreenView};
use crate::library::logger::interface::Logger;
use std::error::Error;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};

/// Records every view it is shown. Tests push user triggers through `press`.
#[allow(dead_code)]
pub struct DeviceDisplayFake {
    logger: Arc<dyn Logger + Send + Sync>,
    views: Mutex<Vec<ScreenView>>,
    event_sender: Sender<DisplayEvent>,
    event_receiver: Mutex<Option<Receiver<DisplayEvent>>>,
}

#[allow(dead_code)]
impl DeviceDisplayFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        let (event_sender, event_receiver) = channel();
        Self {
            logger: logger.with_namespace("display").with_namespace("fake"),
            views: Mutex::new(vec![]),
            event_sender,
            event_receiver: Mutex::new(Some(event_receiver)),
        }
    }

    pub fn press(&self, event: DisplayEvent) {
        let _ = self.event_sender.send(event);
    }

    pub fn views(&self) -> Vec<ScreenView> {
        self.views.lock().map(|v| v.clone()).unwrap_or_default()
    }

    pub fn last_view(&self) -> Option<ScreenView> {
        self.views().pop()
    }
}

impl DeviceDisplay for DeviceDisplayFake {
    fn show(&self, view: &ScreenView) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.logger.info(&format!(
            "DeviceDisplayFake::show({:?}, {:?})",
            view.headline, view.detail
        ))?;
        self.views.lock().map_err(|e| e.to_string())?.push(view.clone());
        Ok(())
    }

    fn events(&self) -> Receiver<DisplayEvent> {
        match self.event_receiver.lock().ok().and_then(|mut r| r.take()) {
            Some(receiver) => receiver,
            None => channel().1,
        }
    }
}
