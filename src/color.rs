//! RGB colour value type and the single similarity metric used by every stage.
//!
//! All classification in the crate goes through [`color_distance`]: the plain
//! Euclidean distance over the R, G and B channels. Alpha never participates;
//! RGBA inputs are reduced to RGB at the buffer boundary.

use serde::{Deserialize, Serialize};

/// Immutable 8-bit RGB triple. Serialises as `[r, g, b]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);
    /// Last-resort fill when no real content colour can be located.
    pub const NEUTRAL_GRAY: Color = Color::new(128, 128, 128);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(v: u8) -> Self {
        Self::new(v, v, v)
    }

    /// Drop the alpha channel of an RGBA quadruple.
    pub const fn from_rgba(px: [u8; 4]) -> Self {
        Self::new(px[0], px[1], px[2])
    }

    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Squared Euclidean RGB distance. Exact integer arithmetic.
    #[inline]
    pub fn distance_sq(self, other: Color) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }

    #[inline]
    pub fn distance(self, other: Color) -> f32 {
        (self.distance_sq(other) as f32).sqrt()
    }

    /// Rec.601 luma in `[0, 1]`.
    pub fn luma(self) -> f32 {
        (self.r as f32 * 0.299 + self.g as f32 * 0.587 + self.b as f32 * 0.114) / 255.0
    }

    /// Linear interpolation `self → other` at `t ∈ [0, 1]`, rounded per channel.
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        Color::new(
            lerp_channel(self.r, other.r, t),
            lerp_channel(self.g, other.g, t),
            lerp_channel(self.b, other.b, t),
        )
    }

    /// Source-over composite of `src` with coverage `alpha` onto `self`.
    #[inline]
    pub fn over(self, src: Color, alpha: f32) -> Color {
        if alpha >= 1.0 {
            src
        } else if alpha <= 0.0 {
            self
        } else {
            self.lerp(src, alpha)
        }
    }

    /// Multiply every channel by `factor`, saturating at 255.
    pub fn scaled(self, factor: f32) -> Color {
        let f = |c: u8| (c as f32 * factor).round().clamp(0.0, 255.0) as u8;
        Color::new(f(self.r), f(self.g), f(self.b))
    }
}

#[inline]
fn lerp_channel(a: u8, b: u8, t: f32) -> u8 {
    let v = a as f32 + (b as f32 - a as f32) * t;
    v.round().clamp(0.0, 255.0) as u8
}

impl From<[u8; 3]> for Color {
    fn from(v: [u8; 3]) -> Self {
        Color::new(v[0], v[1], v[2])
    }
}

impl From<Color> for [u8; 3] {
    fn from(c: Color) -> Self {
        c.to_array()
    }
}

impl From<image::Rgb<u8>> for Color {
    fn from(px: image::Rgb<u8>) -> Self {
        Color::from(px.0)
    }
}

impl From<Color> for image::Rgb<u8> {
    fn from(c: Color) -> Self {
        image::Rgb(c.to_array())
    }
}

/// Euclidean distance over the RGB channels.
#[inline]
pub fn color_distance(a: Color, b: Color) -> f32 {
    a.distance(b)
}

/// Background test shared by the classifier and the residual pass.
///
/// A colour is background-like iff its distance to `reference` is strictly
/// below `threshold`. Non-positive or NaN thresholds classify nothing as
/// background.
#[derive(Clone, Copy, Debug)]
pub struct ColorClassifier {
    reference: Color,
    threshold_sq: f32,
}

impl ColorClassifier {
    pub fn new(reference: Color, threshold: f32) -> Self {
        let t = threshold.max(0.0);
        Self {
            reference,
            threshold_sq: t * t,
        }
    }

    pub fn reference(&self) -> Color {
        self.reference
    }

    #[inline]
    pub fn is_background(&self, c: Color) -> bool {
        (c.distance_sq(self.reference) as f32) < self.threshold_sq
    }
}
