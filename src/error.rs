//! Error taxonomy.
//!
//! Only synthesis has fatal errors, and they are caller programming errors
//! caught before any pixel work. Restoration never fails: the conditions it
//! can hit are recorded as [`Degradation`]s on the report and the image is
//! either passed through or filled with documented fallbacks.

use crate::region::Region;
use serde::Serialize;
use thiserror::Error;

/// Fatal synthesis errors.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SynthError {
    #[error("gradient needs at least 2 colour stops, got {stops}")]
    InvalidGradientSpec { stops: usize },
    #[error("canvas size must be positive")]
    InvalidCanvasSize,
}

/// Non-fatal conditions met while restoring an image.
#[derive(Clone, Debug, PartialEq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Degradation {
    /// No pixel differs from the reference colour; the image was passed
    /// through unmodified.
    #[error("no foreground detected; image passed through")]
    EmptyForegroundDetected,
    /// Margin trimming collapsed the bounds; the inner region was clamped.
    #[error("margin ratio {margin_ratio} collapses bounds {bounds:?}; inner region clamped")]
    #[serde(rename_all = "camelCase")]
    DegenerateInnerRegion { bounds: Region, margin_ratio: f32 },
    /// The residual search found no content colour for some pixels; they were
    /// painted with the fallback colour.
    #[error("{pixels} residual pixels had no content within reach; fallback colour used")]
    ReplacementNotFound { pixels: usize },
}
