//! Parameter types for the canvas reconstruction stages.

use crate::color::Color;
use serde::{Deserialize, Serialize};

/// How edge colours are sampled just inside the inner region.
///
/// - `depth`: rows/columns sampled inward from each edge.
/// - `step`: spacing between sample points along the edge.
/// - `exclude_extremes`: ignore near-black and near-white samples (luma
///   outside `(0.05, 0.95)`) unless nothing else is left. Useful when the
///   artwork carries thin dark outlines or white highlights along its border.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeSampling {
    pub depth: usize,
    pub step: usize,
    pub exclude_extremes: bool,
}

impl Default for EdgeSampling {
    fn default() -> Self {
        Self {
            depth: 12,
            step: 5,
            exclude_extremes: false,
        }
    }
}

/// Colour rule for the four corner rectangles outside the inner region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CornerFill {
    /// Colour of the geometrically closer adjacent band; ties go to the
    /// top/bottom band.
    #[default]
    Nearest,
    /// Distance-weighted blend of the two adjacent edge colours.
    Blend,
    /// Always the top/bottom edge colour.
    Vertical,
}

/// Bounds on the residual-fill nearest-colour search.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResidualSearch {
    pub max_radius: usize,
    /// Used when no content pixel lies within `max_radius`.
    pub fallback_color: Color,
}

impl Default for ResidualSearch {
    fn default() -> Self {
        Self {
            max_radius: 50,
            fallback_color: Color::NEUTRAL_GRAY,
        }
    }
}

/// What the restorer does with the inner region once it is known.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReconstructMode {
    /// Keep the artwork in place and repaint everything outside it.
    #[default]
    FillMargins,
    /// Cut the inner region out and scale it up to cover the original
    /// canvas, centre-cropping the overflow.
    CropAndScale,
}
