#![doc = include_str!("../README.md")]

// Public modules
pub mod classify;
pub mod color;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod reconstruct;
pub mod region;
pub mod restorer;
pub mod synth;

// --- High-level re-exports -------------------------------------------------

// Restore pipeline entry points.
pub use crate::restorer::{restore_batch, CanvasRestorer, RestoreParams, RestoreResult};

// Synthesis entry points.
pub use crate::synth::{synthesize, synthesize_batch, IconSpec};

// Value types shared by every stage.
pub use crate::color::Color;
pub use crate::error::{Degradation, SynthError};
pub use crate::image::RasterImage;
pub use crate::region::Region;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use icon_canvas::prelude::*;
///
/// let mut img = RasterImage::filled(64, 64, Color::new(226, 226, 231));
/// img.fill_region(&Region::new(12, 12, 51, 51).unwrap(), Color::new(26, 39, 68));
///
/// let result = CanvasRestorer::new(RestoreParams::default()).process_with_diagnostics(img);
/// assert!(result.report.degradations.is_empty());
/// assert_eq!(result.image.get(0, 0), Color::new(26, 39, 68));
/// ```
pub mod prelude {
    pub use crate::diagnostics::RestoreReport;
    pub use crate::{CanvasRestorer, Color, RasterImage, Region, RestoreParams};
    pub use crate::{IconSpec, SynthError};
}

// --- Stage-level API (for tools & advanced users) --------------------------

pub mod stages {
    // Classifier.
    pub use crate::classify::{
        find_bounds, inner_region, sample_reference_color, BackgroundMask, InnerRegion,
        SamplingDensity,
    };
    pub use crate::color::{color_distance, ColorClassifier};

    // Reconstructor.
    pub use crate::reconstruct::{
        crop_and_scale, fill_margins, replace_residual_background, sample_edge_color,
        sample_edge_colors, CornerFill, Edge, EdgeColors, EdgeSampling, ReconstructMode,
        ResidualOutcome, ResidualSearch,
    };

    // Synthesiser.
    pub use crate::synth::{
        render_decoration, render_emblem, render_gradient, DecorationKind, DecorationSpec,
        EmblemShape, EmblemSpec, GradientDirection, GradientSpec,
    };

    // Structured diagnostics.
    pub use crate::diagnostics::{InputDescriptor, RestoreStatus, StageTiming, TimingBreakdown};
}
