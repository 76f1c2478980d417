use super::edge::EdgeColors;
use super::options::CornerFill;
use crate::color::Color;
use crate::image::RasterImage;
use crate::region::Region;

/// Paint everything outside `inner` from the sampled edge colours.
///
/// Bands directly above and below `inner` (spanning its columns) take the top
/// and bottom colours; bands to the left and right (spanning its rows) take
/// the left and right colours. The four corner rectangles follow `corner`.
/// Pixels inside `inner` are left untouched.
pub fn fill_margins(
    canvas: &mut RasterImage,
    inner: &Region,
    colors: &EdgeColors,
    corner: CornerFill,
) {
    let Some(r) = inner.clip(canvas.w, canvas.h) else {
        return;
    };
    let (x0, y0, x1, y1) = (r.x0(), r.y0(), r.x1(), r.y1());
    let w = canvas.w;

    for y in 0..canvas.h {
        let row = canvas.row_mut(y);
        if y < y0 || y > y1 {
            let (vertical, dy) = if y < y0 {
                (colors.top, y0 - y)
            } else {
                (colors.bottom, y - y1)
            };
            row[x0..=x1].fill(vertical);
            for (x, px) in row[..x0].iter_mut().enumerate() {
                *px = corner_color(corner, vertical, colors.left, x0 - x, dy);
            }
            for (x, px) in row[x1 + 1..w].iter_mut().enumerate() {
                *px = corner_color(corner, vertical, colors.right, x + 1, dy);
            }
        } else {
            row[..x0].fill(colors.left);
            row[x1 + 1..w].fill(colors.right);
        }
    }
}

/// Colour of a corner pixel `dx` columns beside the vertical (top/bottom) band
/// and `dy` rows beside the horizontal (left/right) band.
#[inline]
fn corner_color(
    mode: CornerFill,
    vertical: Color,
    horizontal: Color,
    dx: usize,
    dy: usize,
) -> Color {
    match mode {
        CornerFill::Vertical => vertical,
        CornerFill::Nearest => {
            if dx <= dy {
                vertical
            } else {
                horizontal
            }
        }
        CornerFill::Blend => {
            let t = dx as f32 / (dx + dy) as f32;
            vertical.lerp(horizontal, t)
        }
    }
}
