use icon_canvas::{Color, RasterImage, Region};

pub const STUDIO_GRAY: Color = Color::new(200, 200, 200);
pub const NAVY: Color = Color::new(26, 39, 68);

/// Solid `background` canvas with an axis-aligned `content` square.
pub fn framed_square(
    size: usize,
    border: usize,
    background: Color,
    content: Color,
) -> RasterImage {
    assert!(2 * border < size, "border must leave room for content");
    let mut img = RasterImage::filled(size, size, background);
    let region = Region::new(border, border, size - border - 1, size - border - 1)
        .expect("non-empty content");
    img.fill_region(&region, content);
    img
}

/// Like `framed_square`, but the content has rounded corners of `radius`
/// with a one-pixel anti-aliased rim blending content into the frame.
pub fn rounded_export(
    size: usize,
    border: usize,
    radius: usize,
    background: Color,
    content: Color,
) -> RasterImage {
    let mut img = framed_square(size, border, background, content);
    let lo = border as f32;
    let hi = (size - border) as f32;
    let r = radius as f32;
    for y in border..size - border {
        for x in border..size - border {
            let (px, py) = (x as f32 + 0.5, y as f32 + 0.5);
            let cx = if px < lo + r {
                lo + r
            } else if px > hi - r {
                hi - r
            } else {
                continue;
            };
            let cy = if py < lo + r {
                lo + r
            } else if py > hi - r {
                hi - r
            } else {
                continue;
            };
            let d = ((px - cx).powi(2) + (py - cy).powi(2)).sqrt();
            if d > r + 0.5 {
                img.set(x, y, background);
            } else if d > r - 0.5 {
                img.set(x, y, content.lerp(background, d - (r - 0.5)));
            }
        }
    }
    img
}

/// Content square whose edges alternate between `content` and a thin
/// `accent` stroke every `period` pixels.
pub fn framed_with_accent(
    size: usize,
    border: usize,
    background: Color,
    content: Color,
    accent: Color,
    period: usize,
) -> RasterImage {
    let mut img = framed_square(size, border, background, content);
    for y in border..size - border {
        for x in border..size - border {
            if (x + y) % period == 0 {
                img.set(x, y, accent);
            }
        }
    }
    img
}
