//! Region classifier: tells framed-export artwork apart from its canvas.
//!
//! The classifier works against a single reference colour, conventionally read
//! a few pixels in from the top-left corner where rounded-corner framing
//! reliably leaves the frame's base colour. From there:
//!
//! - `BackgroundMask` classifies the whole buffer at once (row-parallel with
//!   the `parallel` feature): a pixel is background-like iff its RGB distance
//!   to the reference is below the threshold.
//! - `find_bounds` returns the minimal rectangle holding every foreground
//!   pixel, or `None` when the image is all background. A stepped scan trades
//!   up to `step - 1` pixels of accuracy for speed.
//! - `inner_region` trims the bounds by a fraction of their size to step
//!   inside the rounded-corner radius. Rounded corners scale with the export
//!   size, so a fixed ratio lands on straight edges at any resolution.

mod bounds;
mod inner;
mod mask;

pub use bounds::{find_bounds, SamplingDensity};
pub use inner::{inner_region, InnerRegion};
pub use mask::BackgroundMask;

use crate::color::Color;
use crate::image::RasterImage;

/// Read the pixel trusted as "background", clamping `point` into the image.
///
/// Returns `None` only for an empty image.
pub fn sample_reference_color(image: &RasterImage, point: [usize; 2]) -> Option<Color> {
    if image.is_empty() {
        return None;
    }
    let x = point[0].min(image.w - 1);
    let y = point[1].min(image.h - 1);
    Some(image.get(x, y))
}
