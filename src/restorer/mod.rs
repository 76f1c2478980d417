//! Restore pipeline: classifier followed by canvas reconstruction.
//!
//! `CanvasRestorer` owns a `RestoreParams` and processes images one at a
//! time. Each call takes ownership of the input and returns either the
//! reconstructed image or, when nothing can be reconstructed, the input
//! unchanged. The accompanying `RestoreReport` records what was detected and
//! any degradations met along the way.
//!
//! `RestoreParams::mode` picks the last stages. `FillMargins` samples edge
//! colours, fills the margins and clears residual frame pixels.
//! `CropAndScale` enlarges the inner region to cover the canvas.

mod batch;
mod params;

pub use batch::restore_batch;
pub use params::{RestoreParams, RestorePreset};

use crate::classify::{find_bounds, inner_region, sample_reference_color};
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{RestoreReport, RestoreStatus};
use crate::error::Degradation;
use crate::image::RasterImage;
use crate::reconstruct::{
    crop_and_scale, fill_margins, replace_residual_background, sample_edge_colors,
    ReconstructMode,
};
use log::{debug, warn};
use std::time::Instant;

/// Restored image plus the report describing how it was produced.
#[derive(Clone, Debug)]
pub struct RestoreResult {
    pub image: RasterImage,
    pub report: RestoreReport,
}

#[derive(Clone, Debug, Default)]
pub struct CanvasRestorer {
    params: RestoreParams,
}

impl CanvasRestorer {
    pub fn new(params: RestoreParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &RestoreParams {
        &self.params
    }

    /// Restore `image`, discarding diagnostics.
    pub fn process(&self, image: RasterImage) -> RasterImage {
        self.process_with_diagnostics(image).image
    }

    pub fn process_with_diagnostics(&self, mut image: RasterImage) -> RestoreResult {
        let t0 = Instant::now();
        let p = &self.params;
        let mut report = RestoreReport::new(image.w, image.h, p.mode);

        let Some(reference) = report
            .timings
            .time("reference", || sample_reference_color(&image, p.reference_point))
        else {
            debug!("CanvasRestorer::process empty input -> pass through");
            report.degradations.push(Degradation::EmptyForegroundDetected);
            return finish(image, report, t0);
        };
        report.reference_color = Some(reference);

        let bounds = report.timings.time("bounds", || {
            find_bounds(&image, reference, p.background_threshold, p.bounds_density)
        });
        let Some(bounds) = bounds else {
            let degradation = Degradation::EmptyForegroundDetected;
            warn!("CanvasRestorer::process {degradation}");
            report.degradations.push(degradation);
            return finish(image, report, t0);
        };
        report.bounds = Some(bounds);

        let inner = inner_region(&bounds, p.margin_ratio);
        if inner.clamped {
            let degradation = Degradation::DegenerateInnerRegion {
                bounds,
                margin_ratio: p.margin_ratio,
            };
            warn!("CanvasRestorer::process {degradation}");
            report.degradations.push(degradation);
        }
        report.inner = Some(inner);
        debug!(
            "CanvasRestorer::process reference={:?} bounds={:?} inner={:?}",
            reference.to_array(),
            <[usize; 4]>::from(bounds),
            <[usize; 4]>::from(inner.region)
        );

        if p.mode == ReconstructMode::CropAndScale {
            let scaled = report
                .timings
                .time("crop_and_scale", || crop_and_scale(&image, &inner.region));
            // inner lies within bounds, which lie within the image
            if let Some(scaled) = scaled {
                image = scaled;
                report.status = RestoreStatus::Reconstructed;
            }
            return finish(image, report, t0);
        }

        let edge_colors = report.timings.time("edge_colors", || {
            sample_edge_colors(&image, &inner.region, &p.edge_sampling)
        });
        report.edge_colors = Some(edge_colors);

        report.timings.time("fill_margins", || {
            fill_margins(&mut image, &inner.region, &edge_colors, p.corner_fill)
        });

        let residual = report.timings.time("residual", || {
            replace_residual_background(&mut image, reference, p.background_threshold, &p.residual)
        });
        if residual.unresolved > 0 {
            let degradation = Degradation::ReplacementNotFound {
                pixels: residual.unresolved,
            };
            warn!("CanvasRestorer::process {degradation}");
            report.degradations.push(degradation);
        }
        report.residual = Some(residual);
        report.status = RestoreStatus::Reconstructed;

        finish(image, report, t0)
    }
}

fn finish(image: RasterImage, mut report: RestoreReport, t0: Instant) -> RestoreResult {
    report.timings.total_ms = elapsed_ms(t0);
    RestoreResult { image, report }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::SamplingDensity;
    use crate::color::{color_distance, Color, ColorClassifier};
    use crate::reconstruct::{CornerFill, EdgeSampling, ResidualSearch};
    use crate::region::Region;

    const GRAY: Color = Color::new(226, 226, 231);
    const NAVY: Color = Color::new(20, 30, 80);
    const RED: Color = Color::new(200, 20, 20);

    #[test]
    fn solid_input_passes_through() {
        let img = RasterImage::filled(32, 32, GRAY);
        let result = CanvasRestorer::default().process_with_diagnostics(img.clone());
        assert!(result.report.is_pass_through());
        assert_eq!(result.image, img);
        assert_eq!(
            result.report.degradations,
            vec![Degradation::EmptyForegroundDetected]
        );
    }

    #[test]
    fn empty_input_passes_through() {
        let result = CanvasRestorer::default().process_with_diagnostics(RasterImage::new(0, 0));
        assert!(result.report.is_pass_through());
        assert!(result.image.is_empty());
    }

    #[test]
    fn framed_square_fills_edge_to_edge() {
        let mut img = RasterImage::filled(64, 64, GRAY);
        img.fill_region(&Region::new(12, 12, 51, 51).unwrap(), NAVY);
        let result = CanvasRestorer::default().process_with_diagnostics(img);
        assert_eq!(result.report.status, RestoreStatus::Reconstructed);
        assert_eq!(result.image.count_where(|c| c == NAVY), 64 * 64);
        assert!(result.report.degradations.is_empty());
        let labels: Vec<&str> = result
            .report
            .timings
            .stages
            .iter()
            .map(|s| s.label.as_str())
            .collect();
        assert_eq!(
            labels,
            ["reference", "bounds", "edge_colors", "fill_margins", "residual"]
        );
    }

    #[test]
    fn collapsed_margin_is_reported_not_fatal() {
        let mut img = RasterImage::filled(16, 16, GRAY);
        img.fill_region(&Region::new(6, 6, 9, 9).unwrap(), NAVY);
        let params = RestoreParams {
            margin_ratio: 0.9,
            ..Default::default()
        };
        let result = CanvasRestorer::new(params).process_with_diagnostics(img);
        assert!(matches!(
            result.report.degradations.as_slice(),
            [Degradation::DegenerateInnerRegion { .. }]
        ));
        assert_eq!(result.image.count_where(|c| c == NAVY), 256);
    }

    #[test]
    fn unreachable_hole_falls_back_and_is_reported() {
        // a frame-coloured hole far larger than the search radius
        let mut img = RasterImage::filled(120, 120, GRAY);
        img.fill_region(&Region::new(10, 10, 109, 109).unwrap(), NAVY);
        img.fill_region(&Region::new(30, 30, 89, 89).unwrap(), GRAY);
        let params = RestoreParams {
            edge_sampling: EdgeSampling {
                depth: 3,
                ..Default::default()
            },
            corner_fill: CornerFill::Blend,
            residual: ResidualSearch {
                max_radius: 5,
                ..Default::default()
            },
            ..Default::default()
        };
        let result = CanvasRestorer::new(params).process_with_diagnostics(img);
        let report = &result.report;
        assert_eq!(report.status, RestoreStatus::Reconstructed);
        assert_eq!(report.bounds, Region::new(10, 10, 109, 109));

        let residual = report.residual.unwrap();
        assert!(residual.unresolved > 0);
        assert!(residual.replaced > 0);
        assert_eq!(residual.replaced + residual.unresolved, residual.residual);
        assert_eq!(
            report.degradations,
            vec![Degradation::ReplacementNotFound {
                pixels: residual.unresolved
            }]
        );

        let frame = ColorClassifier::new(GRAY, 30.0);
        assert_eq!(result.image.count_where(|c| frame.is_background(c)), 0);
        assert_eq!(
            result.image.count_where(|c| c == Color::NEUTRAL_GRAY),
            residual.unresolved
        );
        assert_eq!(result.image.get(60, 60), Color::NEUTRAL_GRAY);
        assert_eq!(result.image.get(0, 0), NAVY);
    }

    #[test]
    fn blended_corners_mix_adjacent_edges() {
        let mut img = RasterImage::filled(64, 64, GRAY);
        img.fill_region(&Region::new(12, 12, 51, 51).unwrap(), NAVY);
        img.fill_region(&Region::new(12, 12, 51, 33).unwrap(), RED);
        let params = RestoreParams {
            corner_fill: CornerFill::Blend,
            ..Default::default()
        };
        let result = CanvasRestorer::new(params).process_with_diagnostics(img);
        let colors = result.report.edge_colors.unwrap();
        assert_eq!((colors.top, colors.bottom), (RED, NAVY));
        assert_eq!(colors.left, RED);

        // inner is (18, 18)-(45, 45): the bottom-left corner pixel sits 18 px
        // from both adjacent bands
        assert_eq!(result.image.get(0, 63), NAVY.lerp(RED, 0.5));
        assert_eq!(result.image.get(0, 0), RED);
        assert_eq!(result.image.get(32, 63), NAVY);
        assert!(result.report.degradations.is_empty());
    }

    #[test]
    fn stepped_bounds_still_fill_edge_to_edge() {
        let mut img = RasterImage::filled(64, 64, GRAY);
        img.fill_region(&Region::new(12, 12, 51, 51).unwrap(), NAVY);
        let params = RestoreParams::default().with_bounds_density(SamplingDensity::Stepped(4));
        let result = CanvasRestorer::new(params).process_with_diagnostics(img);
        let bounds = result.report.bounds.unwrap();
        assert!((12..=15).contains(&bounds.x0()) && (12..=15).contains(&bounds.y0()));
        assert!((48..=51).contains(&bounds.x1()) && (48..=51).contains(&bounds.y1()));
        assert_eq!(result.image.count_where(|c| c == NAVY), 64 * 64);
    }

    #[test]
    fn crop_and_scale_covers_input_dimensions() {
        let mut img = RasterImage::filled(64, 48, GRAY);
        img.fill_region(&Region::new(12, 8, 51, 39).unwrap(), NAVY);
        let params = RestoreParams::default().with_mode(ReconstructMode::CropAndScale);
        let result = CanvasRestorer::new(params).process_with_diagnostics(img);
        let report = &result.report;
        assert_eq!(report.status, RestoreStatus::Reconstructed);
        assert_eq!(report.mode, ReconstructMode::CropAndScale);
        assert_eq!((result.image.w, result.image.h), (64, 48));
        assert_eq!(
            result.image.count_where(|c| color_distance(c, NAVY) > 2.0),
            0
        );
        assert!(report.edge_colors.is_none() && report.residual.is_none());
        let labels: Vec<&str> = report.timings.stages.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["reference", "bounds", "crop_and_scale"]);
    }
}
