//! Crop-and-scale reconstruction: enlarge the clean artwork until it covers
//! the canvas instead of painting new margins around it.

use crate::image::RasterImage;
use crate::region::Region;
use image::imageops::{self, FilterType};
use image::RgbImage;

/// Cut `inner` out of `image`, scale it with Lanczos3 so it covers the full
/// `image.w × image.h` canvas while keeping its aspect ratio, then centre-crop
/// back to the input size.
///
/// Returns `None` when `inner` has no part inside the image.
pub fn crop_and_scale(image: &RasterImage, inner: &Region) -> Option<RasterImage> {
    let cropped = image.crop(inner)?;
    let (w, h) = (image.w as u32, image.h as u32);
    let (cw, ch) = (cropped.w as u32, cropped.h as u32);

    let scale = (w as f64 / cw as f64).max(h as f64 / ch as f64);
    // Rounding can land one pixel short of the canvas; never scale below it.
    let nw = ((cw as f64 * scale).round() as u32).max(w);
    let nh = ((ch as f64 * scale).round() as u32).max(h);

    let source = RgbImage::from(&cropped);
    let scaled = imageops::resize(&source, nw, nh, FilterType::Lanczos3);
    let out = imageops::crop_imm(&scaled, (nw - w) / 2, (nh - h) / 2, w, h).to_image();
    Some(RasterImage::from(&out))
}
