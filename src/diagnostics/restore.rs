use super::TimingBreakdown;
use crate::classify::InnerRegion;
use crate::color::Color;
use crate::error::Degradation;
use crate::reconstruct::{EdgeColors, ReconstructMode, ResidualOutcome};
use crate::region::Region;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RestoreStatus {
    /// Margins and residual frame pixels were rebuilt.
    Reconstructed,
    /// Nothing to reconstruct; the input was returned unmodified.
    PassThrough,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
}

/// Everything the restorer decided while processing one image.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestoreReport {
    pub input: InputDescriptor,
    pub status: RestoreStatus,
    pub mode: ReconstructMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Region>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inner: Option<InnerRegion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edge_colors: Option<EdgeColors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub residual: Option<ResidualOutcome>,
    pub degradations: Vec<Degradation>,
    pub timings: TimingBreakdown,
}

impl RestoreReport {
    pub(crate) fn new(width: usize, height: usize, mode: ReconstructMode) -> Self {
        Self {
            input: InputDescriptor { width, height },
            status: RestoreStatus::PassThrough,
            mode,
            reference_color: None,
            bounds: None,
            inner: None,
            edge_colors: None,
            residual: None,
            degradations: Vec::new(),
            timings: TimingBreakdown::default(),
        }
    }

    pub fn is_pass_through(&self) -> bool {
        self.status == RestoreStatus::PassThrough
    }

    /// One-line human readable summary for logs and the demo tools.
    pub fn summary(&self) -> String {
        let fmt_region = |r: &Option<Region>| {
            r.map(|r| format!("({}, {})-({}, {})", r.x0(), r.y0(), r.x1(), r.y1()))
                .unwrap_or_else(|| "-".to_string())
        };
        let residual = self
            .residual
            .map(|r| format!("{}/{}", r.replaced, r.residual))
            .unwrap_or_else(|| "-".to_string());
        format!(
            "{}x{} {:?} mode={:?} bounds={} inner={} residual={} degradations={} total_ms={:.3}",
            self.input.width,
            self.input.height,
            self.status,
            self.mode,
            fmt_region(&self.bounds),
            fmt_region(&self.inner.map(|i| i.region)),
            residual,
            self.degradations.len(),
            self.timings.total_ms
        )
    }
}
