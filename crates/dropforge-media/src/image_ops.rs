// crates/dropforge-media/src/image_ops.rs
//
// The image pipeline: center-crop to square, resize to the chosen
// resolution, optional inner margin, fixed sharpening pass, save.
// All in-process via the `image` crate — no subprocess involved.

use std::path::Path;

use anyhow::{Context, Result};
use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgb, RgbImage};

use dropforge_core::state::ImageSettings;

use crate::paths::{ensure_output_dir, file_stem, output_dir_for, unique_output_path};

/// Width of the white frame when "Add 16-pixel margin" is on.
const MARGIN_PX: u32 = 16;

/// Fixed sharpening pass applied to every processed image.
const SHARPEN_SIGMA: f32 = 1.5;
const SHARPEN_THRESHOLD: i32 = 2;

/// Process one image into the sibling `output/` directory.
/// Returns the user-facing status message.
pub fn process_image_file(source: &Path, settings: &ImageSettings) -> Result<String> {
    let img = image::open(source)
        .with_context(|| format!("open {}", source.display()))?;

    let side = settings.resolution.side();
    let mut img = crop_to_square(&img).resize_exact(side, side, FilterType::Lanczos3);
    let mut suffix = format!("_resized_{}", settings.resolution.label());

    if settings.add_margin {
        img = add_inner_margin(&img, MARGIN_PX);
        suffix.push_str("_margin");
    }

    let img = img.unsharpen(SHARPEN_SIGMA, SHARPEN_THRESHOLD);
    suffix.push_str("_sharpened");

    let ext = source
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("png")
        .to_ascii_lowercase();

    let out_dir = output_dir_for(source);
    ensure_output_dir(&out_dir)?;
    let dest = unique_output_path(&out_dir, &file_stem(source), &suffix, &ext);

    // JPEG and BMP carry no alpha channel — flatten to RGB before saving or
    // the encoder rejects RGBA input.
    let img = match ext.as_str() {
        "jpg" | "jpeg" | "bmp" => DynamicImage::ImageRgb8(img.to_rgb8()),
        _ => img,
    };
    img.save(&dest)
        .with_context(|| format!("save {}", dest.display()))?;

    Ok(format!("Image saved to: {}", dest.display()))
}

/// Largest centered square crop.
pub fn crop_to_square(img: &DynamicImage) -> DynamicImage {
    let (w, h) = (img.width(), img.height());
    let side = w.min(h);
    let left = (w - side) / 2;
    let top = (h - side) / 2;
    img.crop_imm(left, top, side, side)
}

/// Paste the image's inner region onto a white canvas of the same size,
/// leaving a `margin`-pixel opaque white frame. Dimensions never change.
pub fn add_inner_margin(img: &DynamicImage, margin: u32) -> DynamicImage {
    let (w, h) = (img.width(), img.height());
    if w <= margin * 2 || h <= margin * 2 {
        // Nothing would survive the inner crop.
        return img.clone();
    }

    let inner = img
        .crop_imm(margin, margin, w - margin * 2, h - margin * 2)
        .to_rgb8();
    let mut canvas = RgbImage::from_pixel(w, h, Rgb([255, 255, 255]));
    imageops::replace(&mut canvas, &inner, margin as i64, margin as i64);
    DynamicImage::ImageRgb8(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(w: u32, h: u32, px: [u8; 3]) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(w, h, Rgb(px)))
    }

    #[test]
    fn crop_landscape_to_square() {
        let img = crop_to_square(&solid(100, 50, [10, 10, 10]));
        assert_eq!((img.width(), img.height()), (50, 50));
    }

    #[test]
    fn crop_portrait_to_square() {
        let img = crop_to_square(&solid(30, 90, [10, 10, 10]));
        assert_eq!((img.width(), img.height()), (30, 30));
    }

    #[test]
    fn square_input_is_untouched() {
        let img = crop_to_square(&solid(64, 64, [10, 10, 10]));
        assert_eq!((img.width(), img.height()), (64, 64));
    }

    #[test]
    fn margin_keeps_dimensions() {
        let img = add_inner_margin(&solid(100, 100, [200, 0, 0]), 16);
        assert_eq!((img.width(), img.height()), (100, 100));
    }

    #[test]
    fn margin_frame_is_white_center_survives() {
        let img = add_inner_margin(&solid(100, 100, [200, 0, 0]), 16);
        let rgb = img.to_rgb8();
        assert_eq!(rgb.get_pixel(0, 0), &Rgb([255, 255, 255]));
        assert_eq!(rgb.get_pixel(99, 99), &Rgb([255, 255, 255]));
        assert_eq!(rgb.get_pixel(50, 50), &Rgb([200, 0, 0]));
    }

    #[test]
    fn tiny_image_skips_margin() {
        let img = add_inner_margin(&solid(20, 20, [200, 0, 0]), 16);
        assert_eq!(img.to_rgb8().get_pixel(0, 0), &Rgb([200, 0, 0]));
    }
}
