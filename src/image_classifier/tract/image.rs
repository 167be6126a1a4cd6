use crate::image_classifier::error::ClassifierError;
use crate::image_classifier::models::model_config::{ModelConfig, ResizeMode};
use image::{imageops, DynamicImage, RgbImage};
use tract_onnx::prelude::*;

pub fn resize_image(image: &DynamicImage, width: u32, height: u32, mode: ResizeMode) -> RgbImage {
    match mode {
        ResizeMode::Stretch => image
            .resize_exact(width, height, imageops::FilterType::Triangle)
            .to_rgb8(),
        ResizeMode::CenterCrop => {
            let (x, y, crop_w, crop_h) = center_crop_rect(image.width(), image.height(), width, height);
            image
                .crop_imm(x, y, crop_w, crop_h)
                .resize_exact(width, height, imageops::FilterType::Triangle)
                .to_rgb8()
        }
        ResizeMode::Letterbox => {
            let (w, h) = (image.width() as f32, image.height() as f32);
            let scale = (width as f32 / w).min(height as f32 / h);
            let new_w = ((w * scale) as u32).clamp(1, width);
            let new_h = ((h * scale) as u32).clamp(1, height);

            let scaled = image
                .resize_exact(new_w, new_h, imageops::FilterType::Triangle)
                .to_rgb8();

            let mut padded = RgbImage::new(width, height);
            let x_offset = (width - new_w) / 2;
            let y_offset = (height - new_h) / 2;
            imageops::overlay(&mut padded, &scaled, x_offset as i64, y_offset as i64);

            padded
        }
    }
}

/// Largest centered rectangle of the source with the target's aspect ratio.
/// Cropping before scaling keeps thin images from blowing up in memory.
fn center_crop_rect(src_w: u32, src_h: u32, width: u32, height: u32) -> (u32, u32, u32, u32) {
    let (sw, sh, tw, th) = (src_w as u64, src_h as u64, width as u64, height as u64);

    let (crop_w, crop_h) = if sw * th > sh * tw {
        ((sh * tw / th).clamp(1, sw), sh)
    } else {
        (sw, (sw * th / tw).clamp(1, sh))
    };

    (
        ((sw - crop_w) / 2) as u32,
        ((sh - crop_h) / 2) as u32,
        crop_w as u32,
        crop_h as u32,
    )
}

/// NCHW f32 tensor, each channel normalized as `(v / 255 - mean) / std`.
fn image_to_tensor(rgb: &RgbImage, mean: [f32; 3], std: [f32; 3]) -> Result<Tensor, ClassifierError> {
    if let Some(c) = std.iter().position(|s| *s == 0.0 || !s.is_finite()) {
        return Err(ClassifierError::Conversion(format!(
            "channel {} has an unusable std of {}",
            c, std[c]
        )));
    }

    let (width, height) = (rgb.width() as usize, rgb.height() as usize);
    let tensor = tract_ndarray::Array4::from_shape_fn((1, 3, height, width), |(_, c, y, x)| {
        let pixel = rgb.get_pixel(x as u32, y as u32);
        (pixel[c] as f32 / 255.0 - mean[c]) / std[c]
    });

    Ok(tensor.into_tensor())
}

pub fn resize_image_to_tensor(image: &DynamicImage, config: &ModelConfig) -> Result<Tensor, ClassifierError> {
    if image.width() == 0 || image.height() == 0 {
        return Err(ClassifierError::Conversion(format!(
            "image is {}x{}",
            image.width(),
            image.height()
        )));
    }

    let (height, width) = config.input_shape;
    let resized = resize_image(image, width, height, config.resize_mode);

    image_to_tensor(&resized, config.mean, config.std)
}
