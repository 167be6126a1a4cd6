use crate::bitmap::Bitmap;
use crate::device_display::interface::{DeviceDisplay, DisplayEvent, ScreenView};
use eframe::egui;
use std::error::Error;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};

const MAX_TEXTURE_SIDE: u32 = 1024;

#[derive(Default)]
struct Shared {
    view: Mutex<Option<ScreenView>>,
    ctx: Mutex<Option<egui::Context>>,
}

struct DisplayWindow {
    shared: Arc<Shared>,
    event_sender: Sender<DisplayEvent>,
    texture: Option<(Bitmap, egui::TextureHandle)>,
}

impl DisplayWindow {
    fn texture_for(&mut self, ctx: &egui::Context, bitmap: &Bitmap) -> egui::TextureHandle {
        if let Some((cached, texture)) = &self.texture {
            if cached == bitmap {
                return texture.clone();
            }
        }

        let rgba = bitmap
            .image()
            .thumbnail(MAX_TEXTURE_SIDE, MAX_TEXTURE_SIDE)
            .to_rgba8();
        let size = [rgba.width() as usize, rgba.height() as usize];
        let color_image = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
        let texture = ctx.load_texture("selected_image", color_image, egui::TextureOptions::LINEAR);

        self.texture = Some((bitmap.clone(), texture.clone()));
        texture
    }
}

impl eframe::App for DisplayWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let view = self.shared.view.lock().ok().and_then(|v| v.clone());
        let Some(view) = view else {
            return;
        };

        let texture = view.image.as_ref().map(|bitmap| self.texture_for(ctx, bitmap));

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(20.0);
            ui.label(egui::RichText::new(&view.headline).size(32.0).strong());
            ui.label(egui::RichText::new(&view.detail).size(20.0).weak());
            ui.add_space(20.0);

            ui.vertical_centered(|ui| {
                if let Some(texture) = &texture {
                    ui.add(
                        egui::Image::from_texture(egui::load::SizedTexture::from_handle(texture))
                            .max_height(350.0)
                            .rounding(10.0),
                    );
                    ui.add_space(25.0);
                }

                if let Some(status) = &view.status {
                    ui.label(status);
                }

                ui.horizontal(|ui| {
                    let select = ui.add_enabled(!view.busy, egui::Button::new("Select Image"));
                    if select.clicked() {
                        let _ = self.event_sender.send(DisplayEvent::PickFromGallery);
                    }

                    let take = ui.add_enabled(!view.busy, egui::Button::new("Take an Image"));
                    if take.clicked() {
                        let _ = self.event_sender.send(DisplayEvent::CaptureFromCamera);
                    }
                });
            });
        });
    }
}

/// Desktop window with the two pick buttons. The window itself runs on whichever
/// thread calls `run_window`; `show` and `close` may be called from any thread.
pub struct DeviceDisplayGui {
    shared: Arc<Shared>,
    event_sender: Sender<DisplayEvent>,
    event_receiver: Mutex<Option<Receiver<DisplayEvent>>>,
}

impl DeviceDisplayGui {
    pub fn new() -> Self {
        let (event_sender, event_receiver) = channel();
        Self {
            shared: Arc::new(Shared::default()),
            event_sender,
            event_receiver: Mutex::new(Some(event_receiver)),
        }
    }

    /// Blocks until the window is closed, then emits `Quit`.
    pub fn run_window(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title("What is this?")
                .with_inner_size([420.0, 620.0]),
            ..Default::default()
        };

        let window = DisplayWindow {
            shared: self.shared.clone(),
            event_sender: self.event_sender.clone(),
            texture: None,
        };

        let shared = self.shared.clone();
        let result = eframe::run_native(
            "What is this?",
            options,
            Box::new(move |cc| {
                if let Ok(mut ctx) = shared.ctx.lock() {
                    *ctx = Some(cc.egui_ctx.clone());
                }
                Box::new(window)
            }),
        );

        let _ = self.event_sender.send(DisplayEvent::Quit);
        result.map_err(|e| e.to_string().into())
    }

    fn with_ctx(&self, f: impl FnOnce(&egui::Context)) {
        if let Some(ctx) = self.shared.ctx.lock().ok().and_then(|c| c.clone()) {
            f(&ctx);
        }
    }
}

impl DeviceDisplay for DeviceDisplayGui {
    fn show(&self, view: &ScreenView) -> Result<(), Box<dyn Error + Send + Sync>> {
        *self.shared.view.lock().map_err(|e| e.to_string())? = Some(view.clone());
        self.with_ctx(|ctx| ctx.request_repaint());
        Ok(())
    }

    fn events(&self) -> Receiver<DisplayEvent> {
        match self.event_receiver.lock().ok().and_then(|mut r| r.take()) {
            Some(receiver) => receiver,
            None => channel().1,
        }
    }

    fn close(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.with_ctx(|ctx| ctx.send_viewport_cmd(egui::ViewportCommand::Close));
        Ok(())
    }
}
