//! Anti-aliased coverage masks and source-over compositing.
//!
//! Shapes are accumulated into an [`ImageF32`] the size of the canvas, one
//! value per pixel in `[0, 1]`. Overlapping shapes union by taking the maximum
//! so a glyph built from several parts never double-darkens where they meet.
//! Rectangles get exact area coverage; every other shape is point-sampled on a
//! `SUBSAMPLES × SUBSAMPLES` grid inside each pixel of its bounding box.

use super::blur::{blur_separable, GaussianKernel};
use crate::color::Color;
use crate::image::{ImageF32, RasterImage};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

const SUBSAMPLES: usize = 4;

#[derive(Clone, Debug)]
pub struct Coverage {
    mask: ImageF32,
}

impl Coverage {
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            mask: ImageF32::new(w, h),
        }
    }

    pub fn mask(&self) -> &ImageF32 {
        &self.mask
    }

    /// Axis-aligned rectangle `[x0, x1) × [y0, y1)` in pixel coordinates.
    pub fn fill_rect(&mut self, x0: f32, y0: f32, x1: f32, y1: f32) {
        let Some((px0, py0, px1, py1)) = self.pixel_span(x0, y0, x1, y1) else {
            return;
        };
        for py in py0..py1 {
            let cy = overlap(py as f32, y0, y1);
            if cy <= 0.0 {
                continue;
            }
            for px in px0..px1 {
                let cx = overlap(px as f32, x0, x1);
                if cx > 0.0 {
                    self.mask.raise(px, py, cx * cy);
                }
            }
        }
    }

    /// Filled polygon, even-odd rule.
    pub fn fill_polygon(&mut self, points: &[[f32; 2]]) {
        if points.len() < 3 {
            return;
        }
        let (mut x0, mut y0) = (f32::INFINITY, f32::INFINITY);
        let (mut x1, mut y1) = (f32::NEG_INFINITY, f32::NEG_INFINITY);
        for p in points {
            x0 = x0.min(p[0]);
            y0 = y0.min(p[1]);
            x1 = x1.max(p[0]);
            y1 = y1.max(p[1]);
        }
        self.fill_where(x0, y0, x1, y1, |x, y| point_in_polygon(points, x, y));
    }

    /// Ellipse centred at `center` with semi-axes `radii`, rotated by `angle`
    /// radians (clockwise on screen, y pointing down).
    pub fn fill_ellipse(&mut self, center: [f32; 2], radii: [f32; 2], angle: f32) {
        let [rx, ry] = radii;
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }
        let (sin, cos) = angle.sin_cos();
        let reach = rx.max(ry);
        let [cx, cy] = center;
        self.fill_where(cx - reach, cy - reach, cx + reach, cy + reach, |x, y| {
            let (dx, dy) = (x - cx, y - cy);
            let u = dx * cos + dy * sin;
            let v = -dx * sin + dy * cos;
            (u / rx).powi(2) + (v / ry).powi(2) <= 1.0
        });
    }

    pub fn fill_circle(&mut self, center: [f32; 2], radius: f32) {
        self.fill_ellipse(center, [radius, radius], 0.0);
    }

    /// Everything at or below `top(x)` across the full width.
    pub fn fill_below_curve(&mut self, top: impl Fn(f32) -> f32) {
        let w = self.mask.w as f32;
        let h = self.mask.h as f32;
        let min_top = (0..=self.mask.w)
            .map(|x| top(x as f32))
            .fold(f32::INFINITY, f32::min);
        self.fill_where(0.0, min_top - 1.0, w, h, |x, y| y >= top(x));
    }

    /// Region between `top(x)` and `bottom(x)` for `x ∈ [x0, x1]`.
    pub fn fill_band(
        &mut self,
        x0: f32,
        x1: f32,
        top: impl Fn(f32) -> f32,
        bottom: impl Fn(f32) -> f32,
    ) {
        let mut y0 = f32::INFINITY;
        let mut y1 = f32::NEG_INFINITY;
        let steps = (x1 - x0).ceil().max(1.0) as usize;
        for i in 0..=steps {
            let x = x0 + (x1 - x0) * i as f32 / steps as f32;
            y0 = y0.min(top(x));
            y1 = y1.max(bottom(x));
        }
        self.fill_where(x0, y0 - 1.0, x1, y1 + 1.0, |x, y| {
            x >= x0 && x <= x1 && y >= top(x) && y <= bottom(x)
        });
    }

    /// Copy translated by whole pixels; uncovered area is zero.
    pub fn shifted(&self, dx: isize, dy: isize) -> Coverage {
        let (w, h) = (self.mask.w, self.mask.h);
        let mut out = Coverage::new(w, h);
        for y in 0..h {
            let sy = y as isize - dy;
            if sy < 0 || sy >= h as isize {
                continue;
            }
            let src = self.mask.row(sy as usize);
            let dst = out.mask.row_mut(y);
            for (x, d) in dst.iter_mut().enumerate() {
                let sx = x as isize - dx;
                if sx >= 0 && sx < w as isize {
                    *d = src[sx as usize];
                }
            }
        }
        out
    }

    pub fn blurred(&self, sigma: f32) -> Coverage {
        Coverage {
            mask: blur_separable(&self.mask, &GaussianKernel::new(sigma)),
        }
    }

    /// Composite `color` onto `image` weighted by coverage × `opacity`.
    pub fn composite(&self, image: &mut RasterImage, color: Color, opacity: f32) {
        let w = image.w.min(self.mask.w);
        if w == 0 {
            return;
        }
        let opacity = opacity.clamp(0.0, 1.0);
        let blend_row = |(dst, cov): (&mut [Color], &[f32])| {
            for (px, &a) in dst[..w].iter_mut().zip(&cov[..w]) {
                *px = px.over(color, a * opacity);
            }
        };

        let stride = image.stride;
        let cov_stride = self.mask.stride;
        #[cfg(feature = "parallel")]
        image
            .data
            .par_chunks_mut(stride)
            .zip(self.mask.data.par_chunks(cov_stride))
            .for_each(blend_row);
        #[cfg(not(feature = "parallel"))]
        image
            .data
            .chunks_mut(stride)
            .zip(self.mask.data.chunks(cov_stride))
            .for_each(blend_row);
    }

    fn pixel_span(
        &self,
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
    ) -> Option<(usize, usize, usize, usize)> {
        if !(x1 > x0 && y1 > y0) {
            return None;
        }
        let clamp = |v: f32, hi: usize| v.max(0.0).min(hi as f32) as usize;
        let px0 = clamp(x0.floor(), self.mask.w);
        let py0 = clamp(y0.floor(), self.mask.h);
        let px1 = clamp(x1.ceil(), self.mask.w);
        let py1 = clamp(y1.ceil(), self.mask.h);
        (px0 < px1 && py0 < py1).then_some((px0, py0, px1, py1))
    }

    fn fill_where(
        &mut self,
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
        inside: impl Fn(f32, f32) -> bool,
    ) {
        let Some((px0, py0, px1, py1)) = self.pixel_span(x0, y0, x1, y1) else {
            return;
        };
        let step = 1.0 / SUBSAMPLES as f32;
        let full = (SUBSAMPLES * SUBSAMPLES) as f32;
        for py in py0..py1 {
            for px in px0..px1 {
                let mut hits = 0usize;
                for sy in 0..SUBSAMPLES {
                    let y = py as f32 + (sy as f32 + 0.5) * step;
                    for sx in 0..SUBSAMPLES {
                        let x = px as f32 + (sx as f32 + 0.5) * step;
                        if inside(x, y) {
                            hits += 1;
                        }
                    }
                }
                if hits > 0 {
                    self.mask.raise(px, py, hits as f32 / full);
                }
            }
        }
    }
}

#[inline]
fn overlap(p: f32, lo: f32, hi: f32) -> f32 {
    ((p + 1.0).min(hi) - p.max(lo)).clamp(0.0, 1.0)
}

fn point_in_polygon(points: &[[f32; 2]], x: f32, y: f32) -> bool {
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let [xi, yi] = points[i];
        let [xj, yj] = points[j];
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}
