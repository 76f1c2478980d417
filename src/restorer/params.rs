//! Parameter set configuring the restore pipeline.
//!
//! One parameterised pipeline covers every framing style seen in practice;
//! the presets below differ only in these knobs. Start tuning with
//! `background_threshold` (lower = stricter) and `margin_ratio` (larger steps
//! further inside the rounded corners).

use crate::classify::SamplingDensity;
use crate::reconstruct::{CornerFill, EdgeSampling, ReconstructMode, ResidualSearch};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestoreParams {
    /// Pixel trusted to show the frame colour (clamped into the image).
    pub reference_point: [usize; 2],
    /// RGB distance below which a pixel counts as frame.
    pub background_threshold: f32,
    /// Fraction of the bounds trimmed per side to reach the inner region.
    pub margin_ratio: f32,
    /// Scan density for bounds detection.
    pub bounds_density: SamplingDensity,
    /// Repaint margins around the artwork or enlarge the artwork instead.
    pub mode: ReconstructMode,
    pub edge_sampling: EdgeSampling,
    pub corner_fill: CornerFill,
    pub residual: ResidualSearch,
}

impl Default for RestoreParams {
    fn default() -> Self {
        Self {
            reference_point: [5, 5],
            background_threshold: 30.0,
            margin_ratio: 0.15,
            bounds_density: SamplingDensity::Exact,
            mode: ReconstructMode::FillMargins,
            edge_sampling: EdgeSampling::default(),
            corner_fill: CornerFill::Nearest,
            residual: ResidualSearch::default(),
        }
    }
}

impl RestoreParams {
    /// Frame and artwork colours are close (pale artwork on a light canvas).
    pub fn tight() -> Self {
        Self {
            background_threshold: 20.0,
            margin_ratio: 0.12,
            ..Default::default()
        }
    }

    /// Light-gray studio canvas around saturated artwork: reject the gray
    /// firmly, step well inside the corner radius, and blend the corners.
    pub fn studio_gray() -> Self {
        Self {
            background_threshold: 40.0,
            margin_ratio: 0.18,
            edge_sampling: EdgeSampling {
                exclude_extremes: true,
                ..Default::default()
            },
            corner_fill: CornerFill::Blend,
            ..Default::default()
        }
    }

    /// Cheaper bounds scan for large batches.
    pub fn with_bounds_density(mut self, density: SamplingDensity) -> Self {
        self.bounds_density = density;
        self
    }

    pub fn with_mode(mut self, mode: ReconstructMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Named presets selectable from configuration files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestorePreset {
    #[default]
    Balanced,
    Tight,
    StudioGray,
}

impl RestorePreset {
    pub fn params(self) -> RestoreParams {
        match self {
            RestorePreset::Balanced => RestoreParams::default(),
            RestorePreset::Tight => RestoreParams::tight(),
            RestorePreset::StudioGray => RestoreParams::studio_gray(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let p: RestoreParams = serde_json::from_str(
            r#"{ "background_threshold": 22.5, "corner_fill": "blend",
                 "edge_sampling": { "depth": 3 }, "bounds_density": { "stepped": 4 } }"#,
        )
        .unwrap();
        assert_eq!(p.background_threshold, 22.5);
        assert_eq!(p.corner_fill, CornerFill::Blend);
        assert_eq!(p.edge_sampling.depth, 3);
        assert_eq!(p.edge_sampling.step, EdgeSampling::default().step);
        assert_eq!(p.bounds_density, SamplingDensity::Stepped(4));
        assert_eq!(p.margin_ratio, RestoreParams::default().margin_ratio);
        assert_eq!(p.mode, ReconstructMode::FillMargins);

        let p: RestoreParams = serde_json::from_str(r#"{ "mode": "crop_and_scale" }"#).unwrap();
        assert_eq!(p.mode, ReconstructMode::CropAndScale);
    }

    #[test]
    fn presets_resolve() {
        assert_eq!(RestorePreset::Balanced.params(), RestoreParams::default());
        assert_eq!(RestorePreset::StudioGray.params().background_threshold, 40.0);
        let preset: RestorePreset = serde_json::from_str("\"studio_gray\"").unwrap();
        assert_eq!(preset, RestorePreset::StudioGray);
    }
}
