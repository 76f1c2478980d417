use super::options::ResidualSearch;
use crate::classify::BackgroundMask;
use crate::color::Color;
use crate::image::RasterImage;
use log::debug;
use serde::Serialize;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Counts from a residual-fill pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResidualOutcome {
    /// Background-like pixels found on the canvas.
    pub residual: usize,
    /// Pixels replaced by a nearby content colour.
    pub replaced: usize,
    /// Pixels that fell back to `ResidualSearch::fallback_color`.
    pub unresolved: usize,
}

/// Replace every pixel still classified as background against `reference`.
///
/// Typical residue is the anti-aliased arc of the original rounded corner,
/// which sits inside the nominal bounds but still carries frame colour. Each
/// such pixel takes the colour of the nearest non-background pixel found by
/// walking diagonally toward the image centre, then along the four axes, up to
/// `search.max_radius`. All lookups read the canvas as it was before the pass,
/// so the result does not depend on processing order.
pub fn replace_residual_background(
    canvas: &mut RasterImage,
    reference: Color,
    threshold: f32,
    search: &ResidualSearch,
) -> ResidualOutcome {
    let mask = BackgroundMask::compute(canvas, reference, threshold);
    let residual = mask.count();
    if residual == 0 {
        return ResidualOutcome::default();
    }

    let lookups = residual_lookups(canvas, &mask, search.max_radius);
    let mut outcome = ResidualOutcome {
        residual,
        ..Default::default()
    };
    for (idx, found) in lookups {
        match found {
            Some(c) => {
                canvas.data[idx] = c;
                outcome.replaced += 1;
            }
            None => {
                canvas.data[idx] = search.fallback_color;
                outcome.unresolved += 1;
            }
        }
    }
    debug!(
        "residual fill: {} background pixels, {} replaced, {} unresolved",
        outcome.residual, outcome.replaced, outcome.unresolved
    );
    outcome
}

fn residual_lookups(
    canvas: &RasterImage,
    mask: &BackgroundMask,
    max_radius: usize,
) -> Vec<(usize, Option<Color>)> {
    let row_lookups = |y: usize| -> Vec<(usize, Option<Color>)> {
        mask.row(y)
            .iter()
            .enumerate()
            .filter(|&(_, &bg)| bg)
            .map(|(x, _)| {
                (
                    canvas.idx(x, y),
                    nearest_content_color(canvas, mask, x, y, max_radius),
                )
            })
            .collect()
    };
    #[cfg(feature = "parallel")]
    {
        (0..canvas.h)
            .into_par_iter()
            .flat_map_iter(row_lookups)
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        (0..canvas.h).flat_map(row_lookups).collect()
    }
}

/// Nearest non-background colour: diagonal walk toward the centre first, then
/// `+x, -x, +y, -y` at increasing radius.
fn nearest_content_color(
    canvas: &RasterImage,
    mask: &BackgroundMask,
    x: usize,
    y: usize,
    max_radius: usize,
) -> Option<Color> {
    let content_at = |nx: isize, ny: isize| -> Option<Color> {
        if nx < 0 || ny < 0 || nx as usize >= canvas.w || ny as usize >= canvas.h {
            return None;
        }
        let (ux, uy) = (nx as usize, ny as usize);
        (!mask.is_background(ux, uy)).then(|| canvas.get(ux, uy))
    };

    let (x, y) = (x as isize, y as isize);
    let dx: isize = if x < (canvas.w / 2) as isize { 1 } else { -1 };
    let dy: isize = if y < (canvas.h / 2) as isize { 1 } else { -1 };
    let radius = max_radius as isize;

    for i in 1..=radius {
        let (nx, ny) = (x + dx * i, y + dy * i);
        if canvas.get_checked(nx, ny).is_none() {
            break;
        }
        if let Some(c) = content_at(nx, ny) {
            return Some(c);
        }
    }
    for i in 1..=radius {
        for (nx, ny) in [(x + i, y), (x - i, y), (x, y + i), (x, y - i)] {
            if let Some(c) = content_at(nx, ny) {
                return Some(c);
            }
        }
    }
    None
}
