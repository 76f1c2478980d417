//! I/O helpers for RGB images and JSON.
//!
//! - `load_rgb_image`: read a PNG/JPEG/etc. into an owned `RasterImage` (alpha dropped).
//! - `save_png`: write a `RasterImage` to a PNG.
//! - `save_coverage_png`: write an `ImageF32` coverage buffer as grayscale.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{ImageF32, RasterImage};
use image::{GrayImage, Luma, RgbImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert to 8-bit RGB.
pub fn load_rgb_image(path: &Path) -> Result<RasterImage, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb8();
    Ok(RasterImage::from(&img))
}

/// Save an RGB raster to a PNG.
pub fn save_png(image: &RasterImage, path: &Path) -> Result<(), String> {
    if image.is_empty() {
        return Err(format!("Refusing to save empty image to {}", path.display()));
    }
    ensure_parent_dir(path)?;
    let out = RgbImage::from(image);
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Save a coverage buffer to a grayscale PNG, clamping values in [0, 1].
pub fn save_coverage_png(mask: &ImageF32, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut out = GrayImage::new(mask.w as u32, mask.h as u32);
    for y in 0..mask.h {
        for (x, &v) in mask.row(y).iter().enumerate() {
            let v = (v * 255.0).clamp(0.0, 255.0);
            out.put_pixel(x as u32, y as u32, Luma([v as u8]));
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
