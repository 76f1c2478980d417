use super::coverage::Coverage;
use crate::color::Color;
use crate::image::RasterImage;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// Opacity of the drop shadow at full coverage.
const SHADOW_ALPHA: f32 = 60.0 / 255.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmblemShape {
    /// Latin cross: tall vertical bar, shorter crossbar above centre.
    #[default]
    Cross,
    /// Four-point star.
    Star,
    /// Horizontal sinusoidal band.
    Wave,
    /// Three overlapping circles.
    Cloud,
    /// Two mirrored leaves.
    OliveLeaf,
}

/// Foreground glyph. `center` and `size` are fractions of the canvas side.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmblemSpec {
    pub shape: EmblemShape,
    pub center: [f32; 2],
    pub size: f32,
    pub color: Color,
    pub shadow: bool,
}

impl Default for EmblemSpec {
    fn default() -> Self {
        Self {
            shape: EmblemShape::Cross,
            center: [0.5, 0.5],
            size: 1.0,
            color: Color::WHITE,
            shadow: true,
        }
    }
}

impl EmblemSpec {
    pub fn cross(color: Color, shadow: bool) -> Self {
        Self {
            color,
            shadow,
            ..Default::default()
        }
    }
}

/// Draw the emblem onto `image`, preceded by its drop shadow when enabled.
pub fn render_emblem(image: &mut RasterImage, spec: &EmblemSpec) {
    let cov = emblem_coverage(image.w, image.h, spec);
    if spec.shadow {
        let side = image.w.min(image.h) as f32;
        let offset = (side * 0.006).round().max(1.0) as isize;
        let sigma = (side * 0.008).max(1.0);
        cov.shifted(offset, offset)
            .blurred(sigma)
            .composite(image, Color::BLACK, SHADOW_ALPHA);
    }
    cov.composite(image, spec.color, 1.0);
}

/// Coverage of the emblem on a `w × h` canvas.
pub fn emblem_coverage(w: usize, h: usize, spec: &EmblemSpec) -> Coverage {
    let mut cov = Coverage::new(w, h);
    let s = spec.size.max(0.0) * w.min(h) as f32;
    let c = [spec.center[0] * w as f32, spec.center[1] * h as f32];
    match spec.shape {
        EmblemShape::Cross => cross(&mut cov, c, s),
        EmblemShape::Star => four_point_star(&mut cov, c, 0.3 * s),
        EmblemShape::Wave => wave_band(&mut cov, c, s),
        EmblemShape::Cloud => cloud_puff(&mut cov, c, 0.3 * s),
        EmblemShape::OliveLeaf => {
            let leaf = [0.16 * s, 0.06 * s];
            cov.fill_ellipse([c[0] - 0.12 * s, c[1]], leaf, -PI / 6.0);
            cov.fill_ellipse([c[0] + 0.12 * s, c[1]], leaf, PI / 6.0);
        }
    }
    cov
}

fn cross(cov: &mut Coverage, [cx, cy]: [f32; 2], s: f32) {
    let thickness = 0.08 * s;
    let v_height = 0.55 * s;
    let h_width = 0.35 * s;
    let v_top = cy - v_height / 2.0;
    let h_y = v_top + 0.3 * v_height;
    let half_t = thickness / 2.0;
    cov.fill_rect(cx - half_t, v_top, cx + half_t, v_top + v_height);
    cov.fill_rect(cx - h_width / 2.0, h_y - half_t, cx + h_width / 2.0, h_y + half_t);
}

/// Two crossed rhombi with waist `0.3 × radius`.
pub(crate) fn four_point_star(cov: &mut Coverage, [x, y]: [f32; 2], r: f32) {
    let waist = 0.3 * r;
    cov.fill_polygon(&[[x, y - r], [x + waist, y], [x, y + r], [x - waist, y]]);
    cov.fill_polygon(&[[x - r, y], [x, y - waist], [x + r, y], [x, y + waist]]);
}

/// Three overlapping circles sized from the cluster radius `r`.
pub(crate) fn cloud_puff(cov: &mut Coverage, [x, y]: [f32; 2], r: f32) {
    cov.fill_circle([x - 0.4 * r, y], 0.6 * r);
    cov.fill_circle([x + 0.4 * r, y], 0.6 * r);
    cov.fill_circle([x, y - 0.2 * r], 0.5 * r);
}

fn wave_band(cov: &mut Coverage, [cx, cy]: [f32; 2], s: f32) {
    let half_w = 0.3 * s;
    let amp = 0.06 * s;
    let half_h = 0.06 * s;
    let period = 0.3 * s;
    let mid = move |x: f32| cy + amp * (2.0 * PI * (x - cx) / period).sin();
    cov.fill_band(
        cx - half_w,
        cx + half_w,
        move |x| mid(x) - half_h,
        move |x| mid(x) + half_h,
    );
}
