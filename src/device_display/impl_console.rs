use crate::device_display::interface::{DeviceDisplay, DisplayEvent, ScreenView};
use std::error::Error;
use std::io::BufRead;
use std::sync::mpsc::{channel, Receiver};

const WIDTH: usize = 44;

pub struct DeviceDisplayConsole;

impl DeviceDisplayConsole {
    pub fn new() -> Self {
        Self
    }

    fn frame(view: &ScreenView) -> Vec<String> {
        let mut lines = vec![view.headline.clone(), view.detail.clone()];

        if let Some(image) = &view.image {
            lines.push(format!("[image {}x{}]", image.width(), image.height()));
        }
        if let Some(status) = &view.status {
            lines.push(status.clone());
        }
        if !view.busy {
            lines.push("g) Select Image  c) Take an Image  q) Quit".to_string());
        }

        let border = "─".repeat(WIDTH);
        let mut framed = vec![format!("┌{}┐", border)];
        framed.extend(lines.iter().map(|line| {
            let text: String = line.chars().take(WIDTH).collect();
            format!("│{:<width$}│", text, width = WIDTH)
        }));
        framed.push(format!("└{}┘", border));
        framed
    }
}

fn parse_command(line: &str) -> Option<DisplayEvent> {
    match line.trim().to_lowercase().as_str() {
        "g" | "gallery" => Some(DisplayEvent::PickFromGallery),
        "c" | "camera" => Some(DisplayEvent::CaptureFromCamera),
        "q" | "quit" | "exit" => Some(DisplayEvent::Quit),
        _ => None,
    }
}

impl DeviceDisplay for DeviceDisplayConsole {
    fn show(&self, view: &ScreenView) -> Result<(), Box<dyn Error + Send + Sync>> {
        for line in Self::frame(view) {
            println!("{}", line);
        }
        Ok(())
    }

    fn events(&self) -> Receiver<DisplayEvent> {
        let (tx, rx) = channel();

        std::thread::spawn(move || {
            for line in std::io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                if let Some(event) = parse_command(&line) {
                    if tx.send(event).is_err() {
                        break;
                    }
                }
            }
            let _ = tx.send(DisplayEvent::Quit);
        });

        rx
    }
}
