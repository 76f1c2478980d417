use super::coverage::Coverage;
use super::emblem::{cloud_puff, four_point_star};
use crate::color::Color;
use crate::image::RasterImage;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecorationKind {
    /// Eight four-point stars on a ring around the centre.
    StarRing,
    /// Layered sine silhouettes across the bottom band.
    Waves,
    /// Cloud clusters in the four corners.
    Clouds,
    /// Rotated leaf ellipses along the left and right thirds.
    OliveLeaves,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DecorationSpec {
    pub kind: DecorationKind,
    pub color: Color,
}

const STAR_COUNT: usize = 8;
const STAR_RING_RADIUS: f32 = 0.38;

// (x, y, cluster radius) as fractions of the side
const CLOUDS: [[f32; 3]; 4] = [
    [0.15, 0.18, 0.035],
    [0.85, 0.15, 0.029],
    [0.12, 0.82, 0.031],
    [0.88, 0.85, 0.027],
];

// (x, y, tilt in degrees) as fractions of the side
const LEAVES: [[f32; 3]; 8] = [
    [0.12, 0.35, -20.0],
    [0.14, 0.45, -15.0],
    [0.12, 0.55, -10.0],
    [0.14, 0.65, -5.0],
    [0.88, 0.35, 20.0],
    [0.86, 0.45, 15.0],
    [0.88, 0.55, 10.0],
    [0.86, 0.65, 5.0],
];

/// Paint a decorative motif. Motifs stay clear of the emblem area, and the
/// emblem is always drawn afterwards.
pub fn render_decoration(image: &mut RasterImage, spec: &DecorationSpec) {
    let (w, h) = (image.w, image.h);
    let side = w.min(h) as f32;
    let center = [w as f32 / 2.0, h as f32 / 2.0];
    match spec.kind {
        DecorationKind::StarRing => {
            let mut cov = Coverage::new(w, h);
            let ring = STAR_RING_RADIUS * side;
            for k in 0..STAR_COUNT {
                // first star straight above the centre
                let theta = -PI / 2.0 + k as f32 * 2.0 * PI / STAR_COUNT as f32;
                let p = [center[0] + ring * theta.cos(), center[1] + ring * theta.sin()];
                four_point_star(&mut cov, p, side / 35.0);
            }
            cov.composite(image, spec.color, 1.0);
        }
        DecorationKind::Waves => {
            for layer in 0..2 {
                let i = layer as f32;
                let base = h as f32 - 0.22 * side + i * 0.08 * side;
                let amp = 0.04 * side;
                let period = 0.12 * side;
                let mut cov = Coverage::new(w, h);
                cov.fill_below_curve(|x| base + amp * (x / period + i).sin());
                cov.composite(image, spec.color.scaled(0.85 + 0.1 * i), 0.85 - 0.25 * i);
            }
        }
        DecorationKind::Clouds => {
            let mut cov = Coverage::new(w, h);
            for [fx, fy, fr] in CLOUDS {
                cloud_puff(&mut cov, [fx * w as f32, fy * h as f32], fr * side);
            }
            cov.composite(image, spec.color, 1.0);
        }
        DecorationKind::OliveLeaves => {
            let mut cov = Coverage::new(w, h);
            let radii = [side * 12.0 / 512.0, side * 5.0 / 512.0];
            for [fx, fy, deg] in LEAVES {
                cov.fill_ellipse([fx * w as f32, fy * h as f32], radii, deg.to_radians());
            }
            cov.composite(image, spec.color, 1.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn changed(a: &RasterImage, b: &RasterImage, x: usize, y: usize) -> bool {
        a.get(x, y) != b.get(x, y)
    }

    #[test]
    fn star_ring_starts_at_top_and_spares_center() {
        let bg = RasterImage::filled(350, 350, Color::BLACK);
        let mut img = bg.clone();
        render_decoration(
            &mut img,
            &DecorationSpec {
                kind: DecorationKind::StarRing,
                color: Color::WHITE,
            },
        );
        // ring radius 133: top star centred at (175, 42)
        assert_eq!(img.get(175, 42), Color::WHITE);
        assert!(!changed(&bg, &img, 175, 175));
        assert!(!changed(&bg, &img, 175, 120));
    }

    #[test]
    fn waves_stay_in_bottom_band() {
        let bg = RasterImage::filled(200, 200, Color::WHITE);
        let mut img = bg.clone();
        render_decoration(
            &mut img,
            &DecorationSpec {
                kind: DecorationKind::Waves,
                color: Color::new(0, 0, 200),
            },
        );
        assert!((0..200).all(|x| !changed(&bg, &img, x, 140)));
        assert!((0..200).all(|x| changed(&bg, &img, x, 199)));
        // two layers: deeper band is more opaque
        assert_ne!(img.get(100, 199), img.get(100, 155));
    }

    #[test]
    fn clouds_only_in_corners() {
        let bg = RasterImage::filled(256, 256, Color::BLACK);
        let mut img = bg.clone();
        render_decoration(
            &mut img,
            &DecorationSpec {
                kind: DecorationKind::Clouds,
                color: Color::WHITE,
            },
        );
        for y in 64..192 {
            for x in 64..192 {
                assert!(!changed(&bg, &img, x, y));
            }
        }
        assert!(img.count_where(|c| c != Color::BLACK) > 0);
    }

    #[test]
    fn leaves_on_left_and_right_thirds() {
        let bg = RasterImage::filled(512, 512, Color::BLACK);
        let mut img = bg.clone();
        render_decoration(
            &mut img,
            &DecorationSpec {
                kind: DecorationKind::OliveLeaves,
                color: Color::WHITE,
            },
        );
        assert_eq!(img.get(61, 179), Color::WHITE);
        assert_eq!(img.get(450, 179), Color::WHITE);
        for y in 0..512 {
            for x in 171..341 {
                assert!(!changed(&bg, &img, x, y));
            }
        }
    }
}
