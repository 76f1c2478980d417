use crate::color::Color;
use crate::error::SynthError;
use crate::image::RasterImage;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradientDirection {
    /// Top row is the first stop, bottom row the last.
    #[default]
    Vertical,
    /// Top-left corner is the first stop, bottom-right the last.
    Diagonal,
}

/// Ordered colour stops, spaced evenly, plus a direction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientSpec {
    pub stops: Vec<Color>,
    #[serde(default)]
    pub direction: GradientDirection,
}

impl GradientSpec {
    pub fn new(stops: Vec<Color>, direction: GradientDirection) -> Self {
        Self { stops, direction }
    }

    pub fn two_stop(from: Color, to: Color, direction: GradientDirection) -> Self {
        Self::new(vec![from, to], direction)
    }

    pub fn validate(&self) -> Result<(), SynthError> {
        if self.stops.len() < 2 {
            return Err(SynthError::InvalidGradientSpec {
                stops: self.stops.len(),
            });
        }
        Ok(())
    }

    /// Piecewise-linear colour at `t ∈ [0, 1]`. Requires a validated spec.
    pub fn color_at(&self, t: f32) -> Color {
        let n = self.stops.len();
        match n {
            0 => Color::BLACK,
            1 => self.stops[0],
            _ => {
                let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
                let pos = t * (n - 1) as f32;
                let i = (pos.floor() as usize).min(n - 2);
                self.stops[i].lerp(self.stops[i + 1], pos - i as f32)
            }
        }
    }
}

/// Render a `size × size` gradient background.
///
/// Vertical: `t = y / (size - 1)`. Diagonal: `t = (x + y) / (2 (size - 1))`.
/// Channels are interpolated linearly and rounded; no gamma handling.
pub fn render_gradient(size: usize, spec: &GradientSpec) -> Result<RasterImage, SynthError> {
    spec.validate()?;
    if size == 0 {
        return Err(SynthError::InvalidCanvasSize);
    }
    let span = (size - 1).max(1) as f32;
    let mut img = RasterImage::new(size, size);
    match spec.direction {
        GradientDirection::Vertical => {
            for y in 0..size {
                let c = spec.color_at(y as f32 / span);
                img.row_mut(y).fill(c);
            }
        }
        GradientDirection::Diagonal => {
            // colour depends on x + y only
            let lut: Vec<Color> = (0..2 * size - 1)
                .map(|s| spec.color_at(s as f32 / (2.0 * span)))
                .collect();
            for y in 0..size {
                for (x, px) in img.row_mut(y).iter_mut().enumerate() {
                    *px = lut[x + y];
                }
            }
        }
    }
    Ok(img)
}
